//! In-Memory Repository
//!
//! Process-local college store. Used by the integration tests and for
//! running the API without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{College, CollegeRepository, NewCollege};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<i64, College>,
}

/// In-memory implementation of the CollegeRepository.
///
/// Ids start at 1 and are never reused. Iteration order is ascending id,
/// matching the PostgreSQL implementation.
#[derive(Debug, Default)]
pub struct InMemoryCollegeRepository {
    store: RwLock<Store>,
}

impl InMemoryCollegeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored colleges.
    pub fn len(&self) -> usize {
        self.store.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CollegeRepository for InMemoryCollegeRepository {
    async fn find_all(&self) -> Result<Vec<College>, AppError> {
        Ok(self.store.read().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<College>, AppError> {
        Ok(self.store.read().rows.get(&id).cloned())
    }

    async fn create(&self, college: &NewCollege) -> Result<College, AppError> {
        let mut store = self.store.write();
        store.next_id += 1;
        let created = college.clone().into_college(store.next_id);
        store.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, college: &College) -> Result<College, AppError> {
        let mut store = self.store.write();
        match store.rows.get_mut(&college.id) {
            Some(row) => {
                *row = college.clone();
                Ok(college.clone())
            }
            None => Err(AppError::not_found(format!(
                "College not found with id: {}",
                college.id
            ))),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.store
            .write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("College not found with id: {}", id)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
