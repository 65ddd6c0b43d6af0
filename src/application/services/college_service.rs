//! College Service
//!
//! Create, read, update and delete operations for colleges.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::CollegeDto;
use crate::domain::{College, CollegeRepository, NewCollege};
use crate::shared::error::AppError;

/// College service trait defining college operations.
#[async_trait]
pub trait CollegeService: Send + Sync {
    /// Create a new college.
    async fn create_college(&self, request: CollegeDto) -> Result<CreatedCollege, CollegeError>;

    /// Get every college in persistence order.
    async fn get_all_colleges(&self) -> Result<Vec<CollegeDto>, CollegeError>;

    /// Get a college by id.
    async fn get_college_by_id(&self, id: i64) -> Result<CollegeDto, CollegeError>;

    /// Overwrite name, location and established year of a college.
    async fn update_college(&self, id: i64, request: CollegeDto) -> Result<CollegeDto, CollegeError>;

    /// Delete a college by id.
    async fn delete_college(&self, id: i64) -> Result<(), CollegeError>;
}

/// Result of creating a college.
///
/// The DTO carries no identifier, so the assigned id travels alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedCollege {
    pub id: i64,
    pub college: CollegeDto,
}

/// College service errors.
#[derive(Debug, thiserror::Error)]
pub enum CollegeError {
    #[error("College not found with id: {0}")]
    NotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for CollegeError {
    fn from(err: AppError) -> Self {
        CollegeError::Internal(err.to_string())
    }
}

/// CollegeService implementation
pub struct CollegeServiceImpl<R>
where
    R: CollegeRepository,
{
    college_repo: Arc<R>,
}

impl<R> CollegeServiceImpl<R>
where
    R: CollegeRepository,
{
    pub fn new(college_repo: Arc<R>) -> Self {
        Self { college_repo }
    }

    async fn find_or_fail(&self, id: i64) -> Result<College, CollegeError> {
        self.college_repo
            .find_by_id(id)
            .await?
            .ok_or(CollegeError::NotFound(id))
    }
}

#[async_trait]
impl<R> CollegeService for CollegeServiceImpl<R>
where
    R: CollegeRepository + 'static,
{
    async fn create_college(&self, request: CollegeDto) -> Result<CreatedCollege, CollegeError> {
        tracing::info!(name = ?request.name, "Creating college");

        let new_college = NewCollege::from(request);
        let created = self.college_repo.create(&new_college).await?;

        Ok(CreatedCollege {
            id: created.id,
            college: CollegeDto::from(created),
        })
    }

    async fn get_all_colleges(&self) -> Result<Vec<CollegeDto>, CollegeError> {
        tracing::info!("Fetching all colleges");

        let colleges = self.college_repo.find_all().await?;

        Ok(colleges.into_iter().map(CollegeDto::from).collect())
    }

    async fn get_college_by_id(&self, id: i64) -> Result<CollegeDto, CollegeError> {
        tracing::info!(college_id = id, "Fetching college");

        let college = self.find_or_fail(id).await?;

        Ok(CollegeDto::from(college))
    }

    async fn update_college(&self, id: i64, request: CollegeDto) -> Result<CollegeDto, CollegeError> {
        tracing::info!(college_id = id, "Updating college");

        let mut college = self.find_or_fail(id).await?;
        college.name = request.name;
        college.location = request.location;
        college.established_year = request.established_year;

        // A concurrent delete between the lookup and the write surfaces here.
        let updated = self.college_repo.update(&college).await.map_err(|e| match e {
            AppError::NotFound { .. } => CollegeError::NotFound(id),
            other => CollegeError::from(other),
        })?;

        Ok(CollegeDto::from(updated))
    }

    async fn delete_college(&self, id: i64) -> Result<(), CollegeError> {
        tracing::info!(college_id = id, "Deleting college");

        let college = self.find_or_fail(id).await?;

        self.college_repo.delete(college.id).await.map_err(|e| match e {
            AppError::NotFound { .. } => CollegeError::NotFound(id),
            other => CollegeError::from(other),
        })
    }
}
