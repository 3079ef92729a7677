//! Teacher endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{require_admin, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateTeacherRequest, TeacherRecord};
use crate::store::CreateOutcome;
use crate::AppState;

/// POST /api/teachers - Hire a teacher with access to the selected classes.
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(request): Json<CreateTeacherRequest>,
) -> ApiResult<TeacherRecord> {
    require_admin(&state, &request.admin_id).await?;

    match state
        .mutator
        .create_teacher(&request.teacher, &request.selected_classes)
        .await?
    {
        CreateOutcome::Created(teacher) => success(teacher),
        CreateOutcome::AlreadyExists => Err(AppError::AlreadyExists(format!(
            "Teacher {} already exists",
            request.teacher.id
        ))),
    }
}

/// GET /api/teachers/{id}/classes - Existing classes the teacher may open.
pub async fn teacher_classes(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> ApiResult<Vec<String>> {
    let teacher = state
        .resolver
        .resolve_teacher(&teacher_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Teacher {} not found", teacher_id)))?;

    success(state.resolver.accessible_classes(&teacher).await?)
}
