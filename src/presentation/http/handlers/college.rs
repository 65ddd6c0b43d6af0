//! College Handlers
//!
//! HTTP handlers for `/api/v1/colleges`. Each handler binds one service call
//! and wraps its result in an [`ApiResponse`] envelope.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    Json,
};

use crate::application::dto::{ApiResponse, CollegeDto};
use crate::application::services::CollegeError;
use crate::presentation::http::extractors::{ApiJson, ApiPath};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Base path of the college collection, used for `Location` headers.
pub const COLLEGES_PATH: &str = "/api/v1/colleges";

/// Helper to convert CollegeError to AppError
fn map_college_error(e: CollegeError) -> AppError {
    match e {
        err @ CollegeError::NotFound(_) => AppError::not_found(err.to_string()).with_field("id"),
        CollegeError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Create a college
///
/// POST /api/v1/colleges
///
/// The body carries no id; the assigned id is returned in the `Location`
/// header.
pub async fn create_college(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CollegeDto>,
) -> Result<(HeaderMap, Json<ApiResponse<CollegeDto>>), AppError> {
    let created = state
        .colleges
        .create_college(body)
        .await
        .map_err(map_college_error)?;

    let mut headers = HeaderMap::new();
    let location = format!("{}/{}", COLLEGES_PATH, created.id);
    headers.insert(
        header::LOCATION,
        HeaderValue::from_str(&location).map_err(|e| AppError::Internal(e.to_string()))?,
    );

    let response = ApiResponse::success("College created successfully", created.college);
    Ok((headers, Json(response)))
}

/// List all colleges
///
/// GET /api/v1/colleges
pub async fn get_all_colleges(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CollegeDto>>>, AppError> {
    let colleges = state
        .colleges
        .get_all_colleges()
        .await
        .map_err(map_college_error)?;

    Ok(Json(ApiResponse::success("Colleges fetched successfully", colleges)))
}

/// Get a college by id
///
/// GET /api/v1/colleges/{id}
pub async fn get_college_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResponse<CollegeDto>>, AppError> {
    let college = state
        .colleges
        .get_college_by_id(id)
        .await
        .map_err(map_college_error)?;

    Ok(Json(ApiResponse::success("College fetched successfully", college)))
}

/// Update a college
///
/// PUT /api/v1/colleges/{id}
///
/// Overwrites name, location and established year. Fields missing from the
/// body are stored as null.
pub async fn update_college(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<CollegeDto>,
) -> Result<Json<ApiResponse<CollegeDto>>, AppError> {
    let college = state
        .colleges
        .update_college(id, body)
        .await
        .map_err(map_college_error)?;

    Ok(Json(ApiResponse::success("College updated successfully", college)))
}

/// Delete a college
///
/// DELETE /api/v1/colleges/{id}
pub async fn delete_college(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .colleges
        .delete_college(id)
        .await
        .map_err(map_college_error)?;

    Ok(Json(ApiResponse::empty("College deleted successfully")))
}
