//! Student model

use super::{Person, Role, TranscriptEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a student in the campus records system.
///
/// Holds a [`Person`] identity record by composition, the registration number
/// used as the store key, the ordered list of enrolled course codes, and the
/// academic transcript keyed by course code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Identity record
    pub person: Person,

    /// Unique enrollment identifier, distinct from the person id
    pub registration_number: String,

    /// Course codes the student is enrolled in, in enrollment order
    enrolled_courses: Vec<String>,

    /// Transcript entries keyed by course code; re-grading overwrites
    transcript: HashMap<String, TranscriptEntry>,
}

impl Student {
    /// Create a new student record
    #[must_use]
    pub fn new(person_id: String, registration_number: String, name: String, email: String) -> Self {
        Self {
            person: Person::new(person_id, name, email, Role::Student),
            registration_number,
            enrolled_courses: Vec::new(),
            transcript: HashMap::new(),
        }
    }

    /// Course codes the student is enrolled in, in enrollment order
    #[must_use]
    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }

    /// Returns whether the student is enrolled in the given course
    #[must_use]
    pub fn is_enrolled(&self, course_code: &str) -> bool {
        self.enrolled_courses.iter().any(|c| c == course_code)
    }

    /// Enroll the student in a course.
    ///
    /// # Returns
    /// `true` if the enrollment was newly created, `false` if the course code
    /// was already present (the list holds each code at most once)
    pub fn enroll(&mut self, course_code: String) -> bool {
        if self.enrolled_courses.contains(&course_code) {
            return false;
        }
        self.enrolled_courses.push(course_code);
        true
    }

    /// Unenroll the student from a course.
    ///
    /// The transcript entry, if one exists, is kept: grades already earned
    /// remain on record.
    ///
    /// # Returns
    /// `true` if an enrollment was removed
    pub fn unenroll(&mut self, course_code: &str) -> bool {
        let before = self.enrolled_courses.len();
        self.enrolled_courses.retain(|c| c != course_code);
        self.enrolled_courses.len() != before
    }

    /// Record a transcript entry, overwriting any previous entry for the course
    pub fn record_result(&mut self, entry: TranscriptEntry) {
        self.transcript.insert(entry.course_code.clone(), entry);
    }

    /// Look up the transcript entry for a course
    #[must_use]
    pub fn transcript_entry(&self, course_code: &str) -> Option<&TranscriptEntry> {
        self.transcript.get(course_code)
    }

    /// Transcript entries in enrollment order, then any entries for courses
    /// the student has since unenrolled from
    #[must_use]
    pub fn transcript(&self) -> Vec<&TranscriptEntry> {
        let mut entries: Vec<&TranscriptEntry> = self
            .enrolled_courses
            .iter()
            .filter_map(|code| self.transcript.get(code))
            .collect();
        let mut rest: Vec<&TranscriptEntry> = self
            .transcript
            .values()
            .filter(|e| !self.is_enrolled(&e.course_code))
            .collect();
        rest.sort_by(|a, b| a.course_code.cmp(&b.course_code));
        entries.append(&mut rest);
        entries
    }

    /// Number of transcript entries on record
    #[must_use]
    pub fn transcript_len(&self) -> usize {
        self.transcript.len()
    }

    /// A one-line profile summary for listings
    #[must_use]
    pub fn profile(&self) -> String {
        format!(
            "Student [{}, RegistrationNumber: {}, Enrolled Courses: {:?}]",
            self.person, self.registration_number, self.enrolled_courses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student() -> Student {
        Student::new(
            "P001".to_string(),
            "REG2026-001".to_string(),
            "Ada Lovelace".to_string(),
            "ada@example.edu".to_string(),
        )
    }

    #[test]
    fn test_enroll_once() {
        let mut student = sample_student();

        assert!(student.enroll("CS1800".to_string()));
        assert!(student.is_enrolled("CS1800"));
        assert_eq!(student.enrolled_courses(), ["CS1800".to_string()]);
    }

    #[test]
    fn test_enroll_duplicate_is_rejected() {
        let mut student = sample_student();

        assert!(student.enroll("CS1800".to_string()));
        assert!(!student.enroll("CS1800".to_string()));
        assert_eq!(student.enrolled_courses().len(), 1);
    }

    #[test]
    fn test_unenroll() {
        let mut student = sample_student();
        student.enroll("CS1800".to_string());
        student.enroll("MATH1341".to_string());

        assert!(student.unenroll("CS1800"));
        assert!(!student.is_enrolled("CS1800"));
        assert!(!student.unenroll("CS1800"));
        assert_eq!(student.enrolled_courses(), ["MATH1341".to_string()]);
    }

    #[test]
    fn test_record_result_overwrites() {
        let mut student = sample_student();
        student.enroll("CS1800".to_string());

        student.record_result(TranscriptEntry::new("CS1800".to_string(), 72));
        student.record_result(TranscriptEntry::new("CS1800".to_string(), 91));

        assert_eq!(student.transcript_len(), 1);
        assert_eq!(student.transcript_entry("CS1800").unwrap().marks, 91);
    }

    #[test]
    fn test_transcript_survives_unenroll() {
        let mut student = sample_student();
        student.enroll("CS1800".to_string());
        student.record_result(TranscriptEntry::new("CS1800".to_string(), 88));

        student.unenroll("CS1800");
        assert!(student.transcript_entry("CS1800").is_some());
        assert_eq!(student.transcript().len(), 1);
    }
}
