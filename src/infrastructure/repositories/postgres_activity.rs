// src/infrastructure/repositories/postgres_activity.rs
use super::map_sqlx;
use crate::domain::activity::{
    Activity, ActivityId, ActivityName, ActivityReadRepository, ActivitySummary, Category,
    Coordinates,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ACTIVITY_COLUMNS: &str = "id, name, category, subcategory, address, phone, website, latitude, longitude, neighborhood, updated_at";

#[derive(Clone)]
pub struct PostgresActivityReadRepository {
    pool: PgPool,
}

impl PostgresActivityReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActivityRow {
    id: i64,
    name: String,
    category: String,
    subcategory: Option<String>,
    address: String,
    phone: Option<String>,
    website: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    neighborhood: Option<String>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ActivityRow> for Activity {
    type Error = DomainError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        let category: Category = row.category.parse().map_err(|_| {
            DomainError::Persistence(format!(
                "activity {} has unknown category {:?}",
                row.id, row.category
            ))
        })?;

        Ok(Self {
            id: ActivityId::new(row.id).map_err(|e| invalid_row(row.id, &e))?,
            name: ActivityName::new(row.name).map_err(|e| invalid_row(row.id, &e))?,
            category,
            subcategory: row.subcategory,
            address: row.address,
            phone: row.phone,
            website: row.website,
            coordinates: Coordinates::from_columns(row.latitude, row.longitude),
            neighborhood: row.neighborhood,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ActivitySummaryRow {
    id: i64,
    name: String,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ActivitySummaryRow> for ActivitySummary {
    type Error = DomainError;

    fn try_from(row: ActivitySummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ActivityId::new(row.id).map_err(|e| invalid_row(row.id, &e))?,
            name: ActivityName::new(row.name).map_err(|e| invalid_row(row.id, &e))?,
            updated_at: row.updated_at,
        })
    }
}

/// Stored rows that fail validation are a storage fault, not a bad request.
fn invalid_row(id: i64, err: &DomainError) -> DomainError {
    DomainError::Persistence(format!("activity {id} is invalid: {err}"))
}

fn into_activities(rows: Vec<ActivityRow>) -> DomainResult<Vec<Activity>> {
    rows.into_iter().map(Activity::try_from).collect()
}

#[async_trait]
impl ActivityReadRepository for PostgresActivityReadRepository {
    async fn list_by_category(&self, category: Category) -> DomainResult<Vec<Activity>> {
        let sql = format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities WHERE category = $1 ORDER BY name ASC"
        );
        let rows = sqlx::query_as::<_, ActivityRow>(&sql)
            .bind(category.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_activities(rows)
    }

    async fn list_by_neighborhood(&self, neighborhood: &str) -> DomainResult<Vec<Activity>> {
        let sql = format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities WHERE neighborhood = $1 ORDER BY name ASC"
        );
        let rows = sqlx::query_as::<_, ActivityRow>(&sql)
            .bind(neighborhood)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_activities(rows)
    }

    async fn list_summaries(&self) -> DomainResult<Vec<ActivitySummary>> {
        let rows = sqlx::query_as::<_, ActivitySummaryRow>(
            "SELECT id, name, updated_at FROM activities ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ActivitySummary::try_from).collect()
    }

    async fn find_by_id(&self, id: ActivityId) -> DomainResult<Option<Activity>> {
        let sql = format!("SELECT {ACTIVITY_COLUMNS} FROM activities WHERE id = $1");
        let row = sqlx::query_as::<_, ActivityRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Activity::try_from).transpose()
    }
}
