use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question: String,
    pub answer: String,
    pub critique: String,
    pub score: Option<i16>,
    pub created_at: DateTime<Utc>,
}

/// One question/answer/critique/score tuple to append.
pub struct NewInterviewLog<'a> {
    pub user_id: Uuid,
    pub question: &'a str,
    pub answer: &'a str,
    pub critique: &'a str,
    pub score: Option<u8>,
}
