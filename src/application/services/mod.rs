//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CollegeService**: College CRUD operations

pub mod college_service;

pub use college_service::{CollegeError, CollegeService, CollegeServiceImpl, CreatedCollege};
