//! REST API module.
//!
//! Thin handlers over the record store. Write requests name their acting
//! admin or teacher, which is resolved again on every call.

mod admin;
mod classes;
mod login;
mod students;
mod teachers;

pub use admin::*;
pub use classes::*;
pub use login::*;
pub use students::*;
pub use teachers::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{AdminProfile, TeacherRecord};
use crate::AppState;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Resolve the admin named in a write request.
async fn require_admin(state: &AppState, admin_id: &str) -> Result<AdminProfile, AppError> {
    state
        .resolver
        .resolve_admin(admin_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Admin ID incorrect".to_string()))
}

/// Resolve the teacher named in a write request.
async fn require_teacher(state: &AppState, teacher_id: &str) -> Result<TeacherRecord, AppError> {
    state
        .resolver
        .resolve_teacher(teacher_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized(format!("Teacher ID {} not found", teacher_id)))
}
