use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            tracing::error!(code = ?db_err.code(), error = %db_err, "database error");
            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::error!(error = %err, "record store unavailable");
            DomainError::Persistence(format!("record store unavailable: {err}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
