//! Teacher roster models backing `teachers.json`.

use serde::{Deserialize, Serialize};

/// Root of `teachers.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeacherRoster {
    #[serde(default)]
    pub teachers: Vec<TeacherRecord>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TeacherRoster {
    /// First teacher whose id matches exactly.
    pub fn find(&self, teacher_id: &str) -> Option<&TeacherRecord> {
        self.teachers.iter().find(|t| t.id == teacher_id)
    }
}

/// A teacher and the classes they may open. `id` is the unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherRecord {
    #[serde(rename = "Name")]
    pub name: String,
    pub id: String,
    /// Kept as a JSON number so integer salaries round-trip unchanged.
    #[serde(rename = "Salary")]
    pub salary: serde_json::Number,
    /// May name classes that no longer exist.
    #[serde(rename = "accessed class", default)]
    pub accessed_class: Vec<String>,
    /// Keys not modelled here, written back unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TeacherRecord {
    pub fn can_access(&self, class_name: &str) -> bool {
        self.accessed_class.iter().any(|c| c == class_name)
    }
}

/// Fields for a new teacher record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherFields {
    pub name: String,
    pub id: String,
    pub salary: serde_json::Number,
}

/// Request body for hiring a teacher.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherRequest {
    pub admin_id: String,
    #[serde(flatten)]
    pub teacher: TeacherFields,
    /// Classes ticked in the hiring form; becomes `accessed class`.
    #[serde(default)]
    pub selected_classes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_teacher_file_shape() {
        let raw = json!({
            "Name": "Mr. Hasan",
            "id": "T1",
            "Salary": 25000,
            "accessed class": ["7", "8"]
        });
        let teacher: TeacherRecord = serde_json::from_value(raw.clone()).unwrap();
        assert!(teacher.can_access("8"));
        assert!(!teacher.can_access("9"));
        assert_eq!(serde_json::to_value(&teacher).unwrap(), raw);
    }

    #[test]
    fn test_fractional_salary_survives() {
        let raw = json!({ "Name": "A", "id": "T2", "Salary": 1234.5, "accessed class": [] });
        let teacher: TeacherRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&teacher).unwrap(), raw);
    }
}
