//! # Domain Layer
//!
//! The domain layer holds the college entity and the repository contract.
//! It is independent of any web framework or storage engine.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts

pub mod entities;

pub use entities::*;
