//! Marks, grades and GPA

use crate::core::error::{RecordsError, Result};
use crate::core::models::{Grade, Student, TranscriptEntry};

/// Assigns marks, derives grades and computes GPA from a student's
/// transcript.
#[derive(Debug, Default)]
pub struct GradingService;

impl GradingService {
    /// Create the service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Assign marks for a course, deriving the letter grade and
    /// overwriting/creating the student's transcript entry.
    ///
    /// # Errors
    /// - [`RecordsError::InvalidInput`] when marks exceed 100
    /// - [`RecordsError::NotEnrolled`] when the student has no enrollment for
    ///   the course; no transcript entry is created in that case
    pub fn assign_marks(
        &self,
        student: &mut Student,
        course_code: &str,
        marks: u32,
    ) -> Result<Grade> {
        if marks > 100 {
            return Err(RecordsError::InvalidInput {
                field: "marks",
                message: format!("{marks} is outside the 0-100 range"),
            });
        }
        if !student.is_enrolled(course_code) {
            return Err(RecordsError::NotEnrolled {
                registration: student.registration_number.clone(),
                course: course_code.to_string(),
            });
        }

        let entry = TranscriptEntry::new(course_code.to_string(), marks);
        let grade = entry.grade;
        student.record_result(entry);
        crate::info!(
            "assigned {marks} marks (grade {grade}) to '{}' for '{course_code}'",
            student.registration_number
        );
        Ok(grade)
    }

    /// Grade-point average across the student's transcript entries.
    ///
    /// The average is an unweighted simple mean of the grade-point values;
    /// course credits do not weight it. An empty transcript yields 0.0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute_gpa(&self, student: &Student) -> f64 {
        let entries = student.transcript();
        if entries.is_empty() {
            return 0.0;
        }
        let total: f64 = entries.iter().map(|e| e.grade.points()).sum();
        total / entries.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrolled_student() -> Student {
        let mut student = Student::new(
            "P001".to_string(),
            "REG-1".to_string(),
            "Ada Lovelace".to_string(),
            "ada@example.edu".to_string(),
        );
        student.enroll("CS1800".to_string());
        student.enroll("MATH1341".to_string());
        student
    }

    #[test]
    fn test_assign_marks_creates_entry() {
        let grading = GradingService::new();
        let mut student = enrolled_student();

        let grade = grading.assign_marks(&mut student, "CS1800", 85).unwrap();
        assert_eq!(grade, Grade::A);
        assert_eq!(student.transcript_entry("CS1800").unwrap().marks, 85);
    }

    #[test]
    fn test_assign_marks_overwrites_on_regrade() {
        let grading = GradingService::new();
        let mut student = enrolled_student();

        grading.assign_marks(&mut student, "CS1800", 45).unwrap();
        let grade = grading.assign_marks(&mut student, "CS1800", 92).unwrap();

        assert_eq!(grade, Grade::S);
        assert_eq!(student.transcript_len(), 1);
    }

    #[test]
    fn test_assign_marks_out_of_range() {
        let grading = GradingService::new();
        let mut student = enrolled_student();

        let err = grading.assign_marks(&mut student, "CS1800", 101).unwrap_err();
        assert!(matches!(err, RecordsError::InvalidInput { .. }));
        assert!(student.transcript_entry("CS1800").is_none());
    }

    #[test]
    fn test_assign_marks_requires_enrollment() {
        let grading = GradingService::new();
        let mut student = enrolled_student();

        let err = grading.assign_marks(&mut student, "PHYS2303", 70).unwrap_err();
        assert!(matches!(err, RecordsError::NotEnrolled { .. }));
        assert!(student.transcript_entry("PHYS2303").is_none());
    }

    #[test]
    fn test_gpa_empty_transcript_is_zero() {
        let grading = GradingService::new();
        let student = enrolled_student();

        assert!(grading.compute_gpa(&student).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gpa_is_unweighted_mean() {
        let grading = GradingService::new();
        let mut student = enrolled_student();

        grading.assign_marks(&mut student, "CS1800", 85).unwrap(); // A, 4.0
        grading.assign_marks(&mut student, "MATH1341", 72).unwrap(); // B, 3.0

        assert!((grading.compute_gpa(&student) - 3.5).abs() < f64::EPSILON);
    }
}
