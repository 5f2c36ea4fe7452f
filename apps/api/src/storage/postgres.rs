use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::Storage;
use crate::models::interview::{InterviewLogRow, NewInterviewLog};
use crate::models::resume::{NewResume, ResumeRow};

/// Columns read back into `ResumeRow`. Managed tables may hold NULL text,
/// which reads as empty and so counts as no resume on file.
const RESUME_COLUMNS: &str = "id, user_id, COALESCE(filename, '') AS filename, \
     COALESCE(content, '') AS content, s3_key, created_at";

const INTERVIEW_COLUMNS: &str =
    "id, user_id, question, answer, critique, score::SMALLINT AS score, created_at";

/// `Storage` backed by the `resumes` and `mock_interviews` tables.
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn insert_resume(&self, resume: NewResume<'_>) -> Result<ResumeRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO resumes (id, user_id, filename, content, s3_key) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {RESUME_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ResumeRow>(&query)
            .bind(resume.id)
            .bind(resume.user_id)
            .bind(resume.filename)
            .bind(resume.content)
            .bind(resume.s3_key)
            .fetch_one(&self.pool)
            .await?;

        info!("Inserted resume {} for user {}", row.id, row.user_id);
        Ok(row)
    }

    async fn latest_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
        let query = format!(
            "SELECT {RESUME_COLUMNS} FROM resumes \
             WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, ResumeRow>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn log_interview(
        &self,
        entry: NewInterviewLog<'_>,
    ) -> Result<InterviewLogRow, sqlx::Error> {
        // Append-only: INSERT, never UPDATE
        let query = format!(
            "INSERT INTO mock_interviews (id, user_id, question, answer, critique, score) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {INTERVIEW_COLUMNS}"
        );
        sqlx::query_as::<_, InterviewLogRow>(&query)
            .bind(Uuid::new_v4())
            .bind(entry.user_id)
            .bind(entry.question)
            .bind(entry.answer)
            .bind(entry.critique)
            .bind(entry.score.map(i16::from))
            .fetch_one(&self.pool)
            .await
    }
}
