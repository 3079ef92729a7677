//! Student endpoints.

use axum::extract::{Path, State};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::ReportCard;
use crate::store::StudentLookup;
use crate::AppState;

/// GET /api/students/{class}/{id}/report
pub async fn report_card(
    State(state): State<AppState>,
    Path((class_name, student_id)): Path<(String, String)>,
) -> ApiResult<ReportCard> {
    match state
        .resolver
        .resolve_student(&class_name, &student_id)
        .await?
    {
        StudentLookup::Found(student) => success(ReportCard::from_marks(&student.marks)),
        StudentLookup::ClassNotFound => Err(AppError::NotFound(format!(
            "Class {} doesn't exist",
            class_name
        ))),
        StudentLookup::StudentNotFound => Err(AppError::NotFound(format!(
            "ID {} not found in class {}",
            student_id, class_name
        ))),
    }
}
