//! Class roster models backing `classes.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Subjects every student is graded in, in report-card order.
pub const STANDARD_SUBJECTS: [&str; 10] = [
    "Bangla",
    "English",
    "Math",
    "Science",
    "Life and Livelihood",
    "Digital Technology",
    "History and Social Science",
    "Religion",
    "Wellbeing",
    "Arts and Culture",
];

/// Root of `classes.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRoster {
    #[serde(default)]
    pub classes: Vec<ClassRecord>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ClassRoster {
    /// First class whose name matches exactly.
    pub fn find(&self, class_name: &str) -> Option<&ClassRecord> {
        self.classes.iter().find(|c| c.class == class_name)
    }

    pub fn find_mut(&mut self, class_name: &str) -> Option<&mut ClassRecord> {
        self.classes.iter_mut().find(|c| c.class == class_name)
    }
}

/// A class and its enrolled students. `class` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub class: String,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ClassRecord {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            students: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn student_by_id(&self, id: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn student_by_roll_mut(&mut self, roll: &str) -> Option<&mut StudentRecord> {
        self.students.iter_mut().find(|s| s.roll == roll)
    }
}

/// A student enrolled in exactly one class. `ID` is unique only within that class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Roll")]
    pub roll: String,
    #[serde(rename = "Marks", default)]
    pub marks: BTreeMap<String, i64>,
    #[serde(rename = "OtherInfo")]
    pub other_info: OtherInfo,
    /// Keys not modelled here, written back unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Personal details shown on the student account screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherInfo {
    #[serde(rename = "Age", default)]
    pub age: i64,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "Phone Number", default)]
    pub phone_number: String,
    #[serde(rename = "Guardian", default)]
    pub guardian: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Roster line shown when a teacher opens a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub name: String,
    pub roll: String,
    pub id: String,
}

impl From<&StudentRecord> for StudentSummary {
    fn from(student: &StudentRecord) -> Self {
        Self {
            name: student.name.clone(),
            roll: student.roll.clone(),
            id: student.id.clone(),
        }
    }
}

/// An integer supplied either as a JSON number or as text typed into a form field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Int(i64),
    Text(String),
}

impl LooseInt {
    /// Integer value, accepting surrounding whitespace in the text form.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            LooseInt::Int(v) => Some(*v),
            LooseInt::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Request body for creating a class.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    pub admin_id: String,
    pub class_name: String,
}

/// Fields for a new student record, before integer coercion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFields {
    pub name: String,
    pub id: String,
    pub roll: String,
    /// Omitted marks start every standard subject at zero.
    #[serde(default)]
    pub marks: Option<BTreeMap<String, LooseInt>>,
    pub age: LooseInt,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub guardian: String,
}

/// Request body for enrolling a student in a class.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub admin_id: String,
    #[serde(flatten)]
    pub student: StudentFields,
}

/// Request body for a teacher's evaluation of one subject.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub teacher_id: String,
    pub roll: String,
    pub subject: String,
    pub mark: LooseInt,
}

/// Mark after a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkResult {
    pub class_name: String,
    pub roll: String,
    pub subject: String,
    pub score: i64,
}
