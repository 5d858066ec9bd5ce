//! Résumé storage: a trait seam plus the in-process implementation.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; handlers never touch the map directly.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeData};

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// All résumés, ordered by id.
    async fn list(&self) -> Result<Vec<Resume>, AppError>;

    async fn get(&self, id: u64) -> Result<Option<Resume>, AppError>;

    async fn create(&self, data: ResumeData, ats_score: u32) -> Result<Resume, AppError>;

    /// Replaces the stored data. Returns `None` when `id` is unknown.
    async fn update(
        &self,
        id: u64,
        data: ResumeData,
        ats_score: u32,
    ) -> Result<Option<Resume>, AppError>;

    /// Returns whether a résumé was removed.
    async fn delete(&self, id: u64) -> Result<bool, AppError>;
}

struct Inner {
    next_id: u64,
    resumes: BTreeMap<u64, Resume>,
}

/// Process-lifetime store. Ids start at 1 and are never reused.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                resumes: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResumeStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Resume>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.resumes.values().cloned().collect())
    }

    async fn get(&self, id: u64) -> Result<Option<Resume>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.resumes.get(&id).cloned())
    }

    async fn create(&self, data: ResumeData, ats_score: u32) -> Result<Resume, AppError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let resume = Resume {
            id,
            data,
            ats_score,
            created_at: now,
            updated_at: now,
        };
        inner.resumes.insert(id, resume.clone());
        Ok(resume)
    }

    async fn update(
        &self,
        id: u64,
        data: ResumeData,
        ats_score: u32,
    ) -> Result<Option<Resume>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(existing) = inner.resumes.get_mut(&id) else {
            return Ok(None);
        };

        existing.data = data;
        existing.ats_score = ats_score;
        existing.updated_at = Utc::now();
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: u64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.resumes.remove(&id).is_some())
    }
}
