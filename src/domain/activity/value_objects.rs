use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityId(i64);

impl ActivityId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "activity id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ActivityId> for i64 {
    fn from(value: ActivityId) -> Self {
        value.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityName(String);

impl ActivityName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("activity name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-level activity family. Drives routing (`/sport`, `/intellectuel`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sport,
    Intellectual,
}

impl Category {
    pub const ALL: [Self; 2] = [Self::Sport, Self::Intellectual];

    /// Value stored in the `activities.category` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::Intellectual => "intellectual",
        }
    }

    /// Public path segment of the category listing page.
    pub const fn route_segment(self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::Intellectual => "intellectuel",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sport => "Sport",
            Self::Intellectual => "Intellectuel",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sport" => Ok(Self::Sport),
            "intellectual" => Ok(Self::Intellectual),
            other => Err(DomainError::Validation(format!(
                "unknown activity category: {other}"
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Both columns must be set; a half-filled pair is treated as unknown.
    pub fn from_columns(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}
