use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: String,
    pub content: String,
    pub s3_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ResumeRow {
    /// A resume only counts as on file if extraction left some text behind.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Insert parameters for a freshly uploaded resume.
pub struct NewResume<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: &'a str,
    pub content: &'a str,
    pub s3_key: Option<&'a str>,
}
