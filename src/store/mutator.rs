//! Structural writes to the roster documents.
//!
//! Each operation is a single load, mutate, save cycle under the store's
//! write lock. Any outcome other than success leaves the file untouched.

use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::models::{
    AdminProfile, ClassRecord, OtherInfo, StudentFields, StudentRecord, TeacherFields,
    TeacherRecord, STANDARD_SUBJECTS,
};

use super::RecordStore;

/// Result of a create guarded by a uniqueness check.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome<T> {
    Created(T),
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentCreate {
    Created(StudentRecord),
    ClassNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkUpdate {
    Updated { subject: String, score: i64 },
    ClassNotFound,
    StudentNotFound,
    SubjectNotFound,
}

#[derive(Clone)]
pub struct RosterMutator {
    store: RecordStore,
}

impl RosterMutator {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub async fn create_class(&self, name: &str) -> Result<CreateOutcome<ClassRecord>, AppError> {
        require_present("Class name", name)?;

        let _guard = self.store.lock_writes().await;
        let mut roster = self.store.load_classes().await?;
        if roster.find(name).is_some() {
            tracing::debug!("Class {} already exists", name);
            return Ok(CreateOutcome::AlreadyExists);
        }

        let class = ClassRecord::new(name);
        roster.classes.push(class.clone());
        self.store.save_classes(&roster).await?;

        tracing::info!("Created class {}", name);
        Ok(CreateOutcome::Created(class))
    }

    /// Enrol a student. Student IDs are not checked for uniqueness.
    pub async fn create_student(
        &self,
        class_name: &str,
        fields: &StudentFields,
    ) -> Result<StudentCreate, AppError> {
        let student = build_student(fields)?;

        let _guard = self.store.lock_writes().await;
        let mut roster = self.store.load_classes().await?;
        let Some(class) = roster.find_mut(class_name) else {
            return Ok(StudentCreate::ClassNotFound);
        };

        if class.student_by_id(&student.id).is_some() {
            tracing::warn!(
                "Class {} already has a student with ID {}; adding another",
                class_name,
                student.id
            );
        }
        class.students.push(student.clone());
        self.store.save_classes(&roster).await?;

        tracing::info!("Enrolled student {} in class {}", student.id, class_name);
        Ok(StudentCreate::Created(student))
    }

    /// Hire a teacher with access to `selected_classes`. Class names are not
    /// checked against `classes.json`.
    pub async fn create_teacher(
        &self,
        fields: &TeacherFields,
        selected_classes: &[String],
    ) -> Result<CreateOutcome<TeacherRecord>, AppError> {
        require_present("Teacher name", &fields.name)?;
        require_present("Teacher ID", &fields.id)?;

        let _guard = self.store.lock_writes().await;
        let mut roster = self.store.load_teachers().await?;
        if roster.find(&fields.id).is_some() {
            tracing::debug!("Teacher {} already exists", fields.id);
            return Ok(CreateOutcome::AlreadyExists);
        }

        let mut accessed_class: Vec<String> = Vec::with_capacity(selected_classes.len());
        for class in selected_classes {
            if !accessed_class.contains(class) {
                accessed_class.push(class.clone());
            }
        }

        let teacher = TeacherRecord {
            name: fields.name.clone(),
            id: fields.id.clone(),
            salary: fields.salary.clone(),
            accessed_class,
            extra: serde_json::Map::new(),
        };
        roster.teachers.push(teacher.clone());
        self.store.save_teachers(&roster).await?;

        tracing::info!("Created teacher {}", teacher.id);
        Ok(CreateOutcome::Created(teacher))
    }

    /// Add `delta` to an existing subject mark. The student is located by
    /// roll number, and the subject is never created implicitly.
    pub async fn increment_mark(
        &self,
        class_name: &str,
        roll: &str,
        subject: &str,
        delta: i64,
    ) -> Result<MarkUpdate, AppError> {
        require_present("Subject", subject)?;

        let _guard = self.store.lock_writes().await;
        let mut roster = self.store.load_classes().await?;

        let Some(class) = roster.find_mut(class_name) else {
            return Ok(MarkUpdate::ClassNotFound);
        };
        let Some(student) = class.student_by_roll_mut(roll) else {
            return Ok(MarkUpdate::StudentNotFound);
        };
        let Some(mark) = student.marks.get_mut(subject) else {
            return Ok(MarkUpdate::SubjectNotFound);
        };

        *mark = mark.checked_add(delta).ok_or_else(|| {
            AppError::Validation(format!("Mark for {} is out of range", subject))
        })?;
        let score = *mark;
        self.store.save_classes(&roster).await?;

        tracing::info!(
            "Class {} roll {}: {} {:+} -> {}",
            class_name,
            roll,
            subject,
            delta,
            score
        );
        Ok(MarkUpdate::Updated {
            subject: subject.to_string(),
            score,
        })
    }

    /// Point the admin profile at a new picture. The image itself is not read.
    pub async fn update_admin_profile_pic(&self, path: &str) -> Result<AdminProfile, AppError> {
        require_present("Profile picture path", path)?;

        let _guard = self.store.lock_writes().await;
        let mut profile = self.store.load_admin().await?;
        profile.profile_pic = Some(path.to_string());
        self.store.save_admin(&profile).await?;

        tracing::info!("Updated admin profile picture");
        Ok(profile)
    }
}

fn require_present(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn build_student(fields: &StudentFields) -> Result<StudentRecord, AppError> {
    require_present("Name", &fields.name)?;
    require_present("ID", &fields.id)?;
    require_present("Roll", &fields.roll)?;

    let marks = match &fields.marks {
        Some(supplied) => supplied
            .iter()
            .map(|(subject, value)| {
                value
                    .as_int()
                    .map(|v| (subject.clone(), v))
                    .ok_or_else(|| {
                        AppError::Validation(format!("Mark for {} must be an integer", subject))
                    })
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?,
        None => STANDARD_SUBJECTS
            .iter()
            .map(|s| (s.to_string(), 0))
            .collect(),
    };

    let age = fields
        .age
        .as_int()
        .ok_or_else(|| AppError::Validation("Age must be an integer".to_string()))?;

    Ok(StudentRecord {
        name: fields.name.clone(),
        id: fields.id.clone(),
        roll: fields.roll.clone(),
        marks,
        other_info: OtherInfo {
            age,
            address: fields.address.clone(),
            phone_number: fields.phone_number.clone(),
            guardian: fields.guardian.clone(),
            extra: serde_json::Map::new(),
        },
        extra: serde_json::Map::new(),
    })
}
