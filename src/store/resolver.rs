//! Identity lookups for the three login flows.
//!
//! A miss is an ordinary outcome, not an error. Only storage failures are
//! returned as `Err`.

use crate::auth::constant_time_compare;
use crate::errors::AppError;
use crate::models::{AdminProfile, StudentRecord, StudentSummary, TeacherRecord};

use super::RecordStore;

/// Result of a class-scoped student lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentLookup {
    Found(StudentRecord),
    ClassNotFound,
    StudentNotFound,
}

#[derive(Clone)]
pub struct IdentityResolver {
    store: RecordStore,
}

impl IdentityResolver {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Match against the singleton admin profile.
    pub async fn resolve_admin(&self, id_candidate: &str) -> Result<Option<AdminProfile>, AppError> {
        let profile = self.store.load_admin().await?;
        if constant_time_compare(id_candidate, &profile.admin_id) {
            Ok(Some(profile))
        } else {
            tracing::debug!("Admin login rejected");
            Ok(None)
        }
    }

    pub async fn resolve_teacher(
        &self,
        id_candidate: &str,
    ) -> Result<Option<TeacherRecord>, AppError> {
        let roster = self.store.load_teachers().await?;
        Ok(roster.find(id_candidate).cloned())
    }

    /// Students are keyed by class first; the same ID may exist in another class.
    pub async fn resolve_student(
        &self,
        class_name: &str,
        id_candidate: &str,
    ) -> Result<StudentLookup, AppError> {
        let roster = self.store.load_classes().await?;
        let Some(class) = roster.find(class_name) else {
            return Ok(StudentLookup::ClassNotFound);
        };

        Ok(match class.student_by_id(id_candidate) {
            Some(student) => StudentLookup::Found(student.clone()),
            None => StudentLookup::StudentNotFound,
        })
    }

    /// All class names in document order.
    pub async fn list_classes(&self) -> Result<Vec<String>, AppError> {
        let roster = self.store.load_classes().await?;
        Ok(roster.classes.into_iter().map(|c| c.class).collect())
    }

    /// Roster lines for one class, or `None` if the class does not exist.
    pub async fn list_students(
        &self,
        class_name: &str,
    ) -> Result<Option<Vec<StudentSummary>>, AppError> {
        let roster = self.store.load_classes().await?;
        Ok(roster
            .find(class_name)
            .map(|class| class.students.iter().map(StudentSummary::from).collect()))
    }

    /// Existing classes the teacher may open. Stale names in the teacher's
    /// access list are skipped.
    pub async fn accessible_classes(&self, teacher: &TeacherRecord) -> Result<Vec<String>, AppError> {
        let roster = self.store.load_classes().await?;
        Ok(roster
            .classes
            .into_iter()
            .filter(|c| teacher.can_access(&c.class))
            .map(|c| c.class)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassRecord, ClassRoster, OtherInfo, TeacherRoster};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn student(id: &str, roll: &str) -> StudentRecord {
        StudentRecord {
            name: format!("Student {}", id),
            id: id.to_string(),
            roll: roll.to_string(),
            marks: BTreeMap::new(),
            other_info: OtherInfo::default(),
            extra: serde_json::Map::new(),
        }
    }

    fn teacher(id: &str, name: &str, classes: &[&str]) -> TeacherRecord {
        TeacherRecord {
            name: name.to_string(),
            id: id.to_string(),
            salary: 1000.into(),
            accessed_class: classes.iter().map(|c| c.to_string()).collect(),
            extra: serde_json::Map::new(),
        }
    }

    async fn fixture() -> (TempDir, IdentityResolver) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path());
        store
            .save_admin(&AdminProfile {
                admin_id: "ADM-1".to_string(),
                profile_pic: None,
                extra: serde_json::Map::new(),
            })
            .await
            .unwrap();
        store
            .save_classes(&ClassRoster {
                classes: vec![
                    ClassRecord {
                        class: "7".to_string(),
                        students: vec![student("S1", "1"), student("S2", "2")],
                        extra: serde_json::Map::new(),
                    },
                    ClassRecord {
                        class: "8".to_string(),
                        students: vec![student("S9", "1")],
                        extra: serde_json::Map::new(),
                    },
                ],
                extra: serde_json::Map::new(),
            })
            .await
            .unwrap();
        store
            .save_teachers(&TeacherRoster {
                teachers: vec![
                    teacher("T1", "First", &["8", "Gone", "7"]),
                    teacher("T1", "Duplicate", &[]),
                ],
                extra: serde_json::Map::new(),
            })
            .await
            .unwrap();
        (dir, IdentityResolver::new(store))
    }

    #[tokio::test]
    async fn test_resolve_admin_exact_match() {
        let (_dir, resolver) = fixture().await;

        assert!(resolver.resolve_admin("ADM-1").await.unwrap().is_some());
        assert!(resolver.resolve_admin("adm-1").await.unwrap().is_none());
        assert!(resolver.resolve_admin(" ADM-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_admin_without_profile_fails() {
        let dir = TempDir::new().unwrap();
        let resolver = IdentityResolver::new(RecordStore::new(dir.path()));

        let err = resolver.resolve_admin("ADM-1").await.unwrap_err();
        assert!(matches!(err, AppError::MissingFile(_)));
    }

    #[tokio::test]
    async fn test_resolve_teacher_first_match_wins() {
        let (_dir, resolver) = fixture().await;

        let found = resolver.resolve_teacher("T1").await.unwrap().unwrap();
        assert_eq!(found.name, "First");
        assert!(resolver.resolve_teacher("T2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_student_outcomes() {
        let (_dir, resolver) = fixture().await;

        match resolver.resolve_student("7", "S2").await.unwrap() {
            StudentLookup::Found(s) => assert_eq!(s.roll, "2"),
            other => panic!("expected Found, got {:?}", other),
        }
        assert_eq!(
            resolver.resolve_student("9", "S1").await.unwrap(),
            StudentLookup::ClassNotFound
        );
        assert_eq!(
            resolver.resolve_student("8", "S1").await.unwrap(),
            StudentLookup::StudentNotFound
        );
    }

    #[tokio::test]
    async fn test_list_students_and_classes() {
        let (_dir, resolver) = fixture().await;

        assert_eq!(resolver.list_classes().await.unwrap(), vec!["7", "8"]);

        let students = resolver.list_students("7").await.unwrap().unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].id, "S1");
        assert!(resolver.list_students("10").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_accessible_classes_skip_dangling_and_follow_document_order() {
        let (_dir, resolver) = fixture().await;
        let t1 = resolver.resolve_teacher("T1").await.unwrap().unwrap();

        assert_eq!(resolver.accessible_classes(&t1).await.unwrap(), vec!["7", "8"]);
    }
}
