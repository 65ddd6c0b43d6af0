//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod college;
pub mod response;

pub use college::CollegeDto;
pub use response::{ApiResponse, ErrorDetail, ResponseStatus};
