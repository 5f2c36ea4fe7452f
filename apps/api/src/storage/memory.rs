use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::Storage;
use crate::models::interview::{InterviewLogRow, NewInterviewLog};
use crate::models::resume::{NewResume, ResumeRow};

/// In-process `Storage` for handler tests.
#[derive(Default)]
pub struct MemoryStorage {
    resumes: Mutex<Vec<ResumeRow>>,
    interviews: Mutex<Vec<InterviewLogRow>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resumes(&self) -> Vec<ResumeRow> {
        self.resumes.lock().unwrap().clone()
    }

    pub fn interviews(&self) -> Vec<InterviewLogRow> {
        self.interviews.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn insert_resume(&self, resume: NewResume<'_>) -> Result<ResumeRow, sqlx::Error> {
        let row = ResumeRow {
            id: resume.id,
            user_id: resume.user_id,
            filename: resume.filename.to_string(),
            content: resume.content.to_string(),
            s3_key: resume.s3_key.map(str::to_string),
            created_at: Utc::now(),
        };
        self.resumes.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn latest_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
        // Later inserts win ties on created_at.
        Ok(self
            .resumes
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .enumerate()
            .max_by_key(|(i, r)| (r.created_at, *i))
            .map(|(_, r)| r.clone()))
    }

    async fn log_interview(
        &self,
        entry: NewInterviewLog<'_>,
    ) -> Result<InterviewLogRow, sqlx::Error> {
        let row = InterviewLogRow {
            id: Uuid::new_v4(),
            user_id: entry.user_id,
            question: entry.question.to_string(),
            answer: entry.answer.to_string(),
            critique: entry.critique.to_string(),
            score: entry.score.map(i16::from),
            created_at: Utc::now(),
        };
        self.interviews.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_resume<'a>(user_id: Uuid, filename: &'a str, content: &'a str) -> NewResume<'a> {
        NewResume {
            id: Uuid::new_v4(),
            user_id,
            filename,
            content,
            s3_key: None,
        }
    }

    #[tokio::test]
    async fn test_latest_resume_is_newest_for_user() {
        let store = MemoryStorage::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store
            .insert_resume(new_resume(alice, "old.pdf", "old content"))
            .await
            .unwrap();
        store
            .insert_resume(new_resume(bob, "bob.pdf", "bob content"))
            .await
            .unwrap();
        store
            .insert_resume(new_resume(alice, "new.pdf", "new content"))
            .await
            .unwrap();

        let latest = store.latest_resume(alice).await.unwrap().unwrap();
        assert_eq!(latest.filename, "new.pdf");
        assert_eq!(latest.content, "new content");
        assert_eq!(store.resumes().len(), 3);
    }

    #[tokio::test]
    async fn test_latest_resume_absent() {
        let store = MemoryStorage::new();
        assert!(store.latest_resume(Uuid::new_v4()).await.unwrap().is_none());
    }
}
