//! Student report card derived from a student's marks.

use std::collections::BTreeMap;

use serde::Serialize;

use super::STANDARD_SUBJECTS;

/// One subject line. A missing score renders as "N/A".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectScore {
    pub subject: String,
    pub score: Option<i64>,
    /// Fill fraction for a progress bar, clamped to `[0, 1]`.
    pub progress: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCard {
    pub subjects: Vec<SubjectScore>,
}

impl ReportCard {
    /// Standard subjects first in their fixed order, then any extra subjects
    /// the student has marks for.
    pub fn from_marks(marks: &BTreeMap<String, i64>) -> Self {
        let mut names: Vec<&str> = STANDARD_SUBJECTS.to_vec();
        names.extend(
            marks
                .keys()
                .map(String::as_str)
                .filter(|k| !STANDARD_SUBJECTS.contains(k)),
        );

        let subjects = names
            .into_iter()
            .map(|subject| {
                let score = marks.get(subject).copied();
                SubjectScore {
                    subject: subject.to_string(),
                    score,
                    progress: score.map(progress_fraction),
                }
            })
            .collect();

        Self { subjects }
    }
}

fn progress_fraction(score: i64) -> f64 {
    (score as f64 / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_standard_subject_has_no_score() {
        let marks = BTreeMap::from([("Math".to_string(), 80)]);
        let card = ReportCard::from_marks(&marks);

        assert_eq!(card.subjects.len(), STANDARD_SUBJECTS.len());
        let bangla = &card.subjects[0];
        assert_eq!(bangla.subject, "Bangla");
        assert_eq!(bangla.score, None);
        assert_eq!(bangla.progress, None);

        let math = card.subjects.iter().find(|s| s.subject == "Math").unwrap();
        assert_eq!(math.score, Some(80));
        assert_eq!(math.progress, Some(0.8));
    }

    #[test]
    fn test_extra_subjects_follow_standard_ones() {
        let marks = BTreeMap::from([("Chemistry".to_string(), 150), ("Art".to_string(), -5)]);
        let card = ReportCard::from_marks(&marks);

        let tail: Vec<_> = card.subjects[STANDARD_SUBJECTS.len()..].iter().collect();
        assert_eq!(tail[0].subject, "Art");
        assert_eq!(tail[0].progress, Some(0.0));
        assert_eq!(tail[1].subject, "Chemistry");
        assert_eq!(tail[1].progress, Some(1.0));
    }
}
