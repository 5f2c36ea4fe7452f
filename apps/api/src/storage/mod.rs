//! Persistence for resumes and mock-interview logs.
//!
//! Handlers only see the `Storage` trait; `PgStorage` is the production
//! backend and an in-memory store backs the handler tests.

pub mod archive;
#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::interview::{InterviewLogRow, NewInterviewLog};
use crate::models::resume::{NewResume, ResumeRow};

pub use archive::ResumeArchive;
pub use postgres::PgStorage;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Appends a resume record. Earlier uploads are kept.
    async fn insert_resume(&self, resume: NewResume<'_>) -> Result<ResumeRow, sqlx::Error>;

    /// Most recently created resume for `user_id`, if any.
    async fn latest_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error>;

    /// Appends one interview log entry. There is no update or delete path.
    async fn log_interview(
        &self,
        entry: NewInterviewLog<'_>,
    ) -> Result<InterviewLogRow, sqlx::Error>;
}
