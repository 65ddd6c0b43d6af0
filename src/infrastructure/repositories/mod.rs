//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgCollegeRepository** - PostgreSQL-backed college storage
//! - **InMemoryCollegeRepository** - process-local college storage
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use college_api::infrastructure::repositories::PgCollegeRepository;
//!
//! fn setup_repositories(pool: PgPool) {
//!     let college_repo = PgCollegeRepository::new(pool);
//! }
//! ```

pub mod college_repository;
pub mod in_memory;

pub use college_repository::PgCollegeRepository;
pub use in_memory::InMemoryCollegeRepository;
