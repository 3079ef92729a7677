//! Login requests and the per-request session handed back to the UI.
//!
//! Nothing here is retained server-side: the client echoes the identity in
//! each write request and the handler resolves it again.

use serde::{Deserialize, Serialize};

use super::{AdminProfile, ReportCard, StudentRecord, TeacherRecord};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginRequest {
    pub admin_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherLoginRequest {
    pub teacher_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentLoginRequest {
    pub class_name: String,
    pub student_id: String,
}

/// Outcome of a successful login, tagged by role.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "camelCase")]
pub enum Session {
    Admin {
        profile: AdminProfile,
    },
    #[serde(rename_all = "camelCase")]
    Teacher {
        teacher: TeacherRecord,
        accessible_classes: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Student {
        class_name: String,
        student: StudentRecord,
        report_card: ReportCard,
    },
}
