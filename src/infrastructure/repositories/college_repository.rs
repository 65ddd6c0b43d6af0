//! College Repository Implementation
//!
//! PostgreSQL implementation of college data access.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{College, CollegeRepository, NewCollege};
use crate::shared::error::AppError;

/// PostgreSQL implementation of the CollegeRepository.
pub struct PgCollegeRepository {
    pool: PgPool,
}

impl PgCollegeRepository {
    /// Creates a new PgCollegeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollegeRepository for PgCollegeRepository {
    async fn find_all(&self) -> Result<Vec<College>, AppError> {
        let colleges = sqlx::query_as::<_, College>(
            r#"
            SELECT id, name, location, established_year
            FROM colleges
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(colleges)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<College>, AppError> {
        let college = sqlx::query_as::<_, College>(
            r#"
            SELECT id, name, location, established_year
            FROM colleges
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(college)
    }

    async fn create(&self, college: &NewCollege) -> Result<College, AppError> {
        let created = sqlx::query_as::<_, College>(
            r#"
            INSERT INTO colleges (name, location, established_year)
            VALUES ($1, $2, $3)
            RETURNING id, name, location, established_year
            "#,
        )
        .bind(&college.name)
        .bind(&college.location)
        .bind(college.established_year)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, college: &College) -> Result<College, AppError> {
        let updated = sqlx::query_as::<_, College>(
            r#"
            UPDATE colleges
            SET name = $2, location = $3, established_year = $4
            WHERE id = $1
            RETURNING id, name, location, established_year
            "#,
        )
        .bind(college.id)
        .bind(&college.name)
        .bind(&college.location)
        .bind(college.established_year)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| AppError::not_found(format!("College not found with id: {}", college.id)))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM colleges WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("College not found with id: {}", id)));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
