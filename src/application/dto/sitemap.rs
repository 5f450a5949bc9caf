use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    /// Within `0.0..=1.0`.
    pub priority: f32,
}

impl SitemapEntry {
    pub fn new(
        url: String,
        last_modified: DateTime<Utc>,
        change_frequency: ChangeFrequency,
        priority: f32,
    ) -> Self {
        Self {
            url,
            last_modified,
            change_frequency,
            priority: priority.clamp(0.0, 1.0),
        }
    }

    /// `lastmod` in W3C datetime form.
    pub fn lastmod(&self) -> String {
        self.last_modified
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }

    /// Priority with one decimal, as written in the XML document.
    pub fn priority_text(&self) -> String {
        format!("{:.1}", self.priority)
    }
}
