//! College entity and repository trait.
//!
//! Maps to the `colleges` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A persisted college record.
///
/// Maps to the `colleges` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: TEXT NULL
/// - location: TEXT NULL
/// - established_year: INTEGER NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct College {
    /// Server-generated identifier, immutable once assigned
    pub id: i64,

    pub name: Option<String>,

    pub location: Option<String>,

    pub established_year: Option<i32>,
}

/// Input for inserting a college. The store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCollege {
    pub name: Option<String>,
    pub location: Option<String>,
    pub established_year: Option<i32>,
}

impl NewCollege {
    /// Attach an assigned identifier, producing the stored form.
    pub fn into_college(self, id: i64) -> College {
        College {
            id,
            name: self.name,
            location: self.location,
            established_year: self.established_year,
        }
    }
}

/// Repository trait for College data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollegeRepository: Send + Sync {
    /// Find every college, ordered by id.
    async fn find_all(&self) -> Result<Vec<College>, AppError>;

    /// Find a college by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<College>, AppError>;

    /// Insert a college and return it with its assigned id.
    async fn create(&self, college: &NewCollege) -> Result<College, AppError>;

    /// Overwrite all mutable fields of an existing college.
    ///
    /// Returns `AppError::NotFound` if no row has the college's id.
    async fn update(&self, college: &College) -> Result<College, AppError>;

    /// Delete a college by id.
    ///
    /// Returns `AppError::NotFound` if no row has the id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Check that the underlying store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
