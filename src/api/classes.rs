//! Class and roster endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{require_admin, require_teacher, success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    ClassRecord, CreateClassRequest, CreateStudentRequest, EvaluateRequest, MarkResult,
    StudentRecord, StudentSummary,
};
use crate::store::{CreateOutcome, MarkUpdate, StudentCreate};
use crate::AppState;

/// GET /api/classes - List class names.
pub async fn list_classes(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    success(state.resolver.list_classes().await?)
}

/// POST /api/classes - Create an empty class.
pub async fn create_class(
    State(state): State<AppState>,
    Json(request): Json<CreateClassRequest>,
) -> ApiResult<ClassRecord> {
    require_admin(&state, &request.admin_id).await?;

    match state.mutator.create_class(&request.class_name).await? {
        CreateOutcome::Created(class) => success(class),
        CreateOutcome::AlreadyExists => Err(AppError::AlreadyExists(format!(
            "Class {} already exists",
            request.class_name
        ))),
    }
}

/// GET /api/classes/{class}/students - Roster of one class.
pub async fn list_students(
    State(state): State<AppState>,
    Path(class_name): Path<String>,
) -> ApiResult<Vec<StudentSummary>> {
    match state.resolver.list_students(&class_name).await? {
        Some(students) => success(students),
        None => Err(class_not_found(&class_name)),
    }
}

/// POST /api/classes/{class}/students - Enrol a student.
pub async fn create_student(
    State(state): State<AppState>,
    Path(class_name): Path<String>,
    Json(request): Json<CreateStudentRequest>,
) -> ApiResult<StudentRecord> {
    require_admin(&state, &request.admin_id).await?;

    match state
        .mutator
        .create_student(&class_name, &request.student)
        .await?
    {
        StudentCreate::Created(student) => success(student),
        StudentCreate::ClassNotFound => Err(class_not_found(&class_name)),
    }
}

/// POST /api/classes/{class}/marks - Add to a student's mark in one subject.
pub async fn evaluate_student(
    State(state): State<AppState>,
    Path(class_name): Path<String>,
    Json(request): Json<EvaluateRequest>,
) -> ApiResult<MarkResult> {
    let teacher = require_teacher(&state, &request.teacher_id).await?;
    if !teacher.can_access(&class_name) {
        return Err(AppError::Forbidden(format!(
            "Teacher {} has no access to class {}",
            teacher.id, class_name
        )));
    }

    let delta = request
        .mark
        .as_int()
        .ok_or_else(|| AppError::Validation("Mark must be an integer".to_string()))?;

    match state
        .mutator
        .increment_mark(&class_name, &request.roll, &request.subject, delta)
        .await?
    {
        MarkUpdate::Updated { subject, score } => success(MarkResult {
            class_name,
            roll: request.roll,
            subject,
            score,
        }),
        MarkUpdate::ClassNotFound => Err(class_not_found(&class_name)),
        MarkUpdate::StudentNotFound => Err(AppError::NotFound(format!(
            "Roll: {} not found",
            request.roll
        ))),
        MarkUpdate::SubjectNotFound => Err(AppError::NotFound(format!(
            "{} not found. Subject names are case-sensitive",
            request.subject
        ))),
    }
}

fn class_not_found(class_name: &str) -> AppError {
    AppError::NotFound(format!("Class {} not found", class_name))
}
