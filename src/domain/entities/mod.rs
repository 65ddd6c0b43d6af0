//! # Domain Entities
//!
//! Core domain entities. Each entity maps directly to its database table and
//! has an associated repository trait, implemented in the infrastructure
//! layer.

mod college;

pub use college::{College, CollegeRepository, NewCollege};

#[cfg(test)]
pub use college::MockCollegeRepository;
