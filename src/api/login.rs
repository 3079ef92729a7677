//! Login endpoints for the three roles.

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    AdminLoginRequest, ReportCard, Session, StudentLoginRequest, TeacherLoginRequest,
};
use crate::store::StudentLookup;
use crate::AppState;

/// POST /api/login/admin
pub async fn login_admin(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> ApiResult<Session> {
    match state.resolver.resolve_admin(&request.admin_id).await? {
        Some(profile) => {
            tracing::info!("Admin logged in");
            success(Session::Admin { profile })
        }
        None => Err(AppError::Unauthorized("Admin ID incorrect".to_string())),
    }
}

/// POST /api/login/teacher
pub async fn login_teacher(
    State(state): State<AppState>,
    Json(request): Json<TeacherLoginRequest>,
) -> ApiResult<Session> {
    let Some(teacher) = state.resolver.resolve_teacher(&request.teacher_id).await? else {
        return Err(AppError::Unauthorized(format!(
            "Teacher ID {} not found",
            request.teacher_id
        )));
    };

    let accessible_classes = state.resolver.accessible_classes(&teacher).await?;
    tracing::info!("Teacher {} logged in", teacher.id);
    success(Session::Teacher {
        teacher,
        accessible_classes,
    })
}

/// POST /api/login/student
pub async fn login_student(
    State(state): State<AppState>,
    Json(request): Json<StudentLoginRequest>,
) -> ApiResult<Session> {
    match state
        .resolver
        .resolve_student(&request.class_name, &request.student_id)
        .await?
    {
        StudentLookup::Found(student) => {
            tracing::info!(
                "Student {} of class {} logged in",
                student.id,
                request.class_name
            );
            let report_card = ReportCard::from_marks(&student.marks);
            success(Session::Student {
                class_name: request.class_name,
                student,
                report_card,
            })
        }
        StudentLookup::ClassNotFound => Err(AppError::NotFound(format!(
            "Class {} doesn't exist",
            request.class_name
        ))),
        StudentLookup::StudentNotFound => Err(AppError::Unauthorized(format!(
            "ID {} not found",
            request.student_id
        ))),
    }
}
