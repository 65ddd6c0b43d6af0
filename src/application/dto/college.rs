//! College transfer shape.

use serde::{Deserialize, Serialize};

use crate::domain::{College, NewCollege};

/// Wire representation of a college, used for request and response bodies.
///
/// Mirrors the entity's visible fields; the identifier is not part of it.
/// Fields missing from a request body bind to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub established_year: Option<i32>,
}

impl From<College> for CollegeDto {
    fn from(college: College) -> Self {
        Self {
            name: college.name,
            location: college.location,
            established_year: college.established_year,
        }
    }
}

impl From<CollegeDto> for NewCollege {
    fn from(dto: CollegeDto) -> Self {
        Self {
            name: dto.name,
            location: dto.location,
            established_year: dto.established_year,
        }
    }
}
