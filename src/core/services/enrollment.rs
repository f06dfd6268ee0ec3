//! Enrollment rules

use crate::core::models::{Course, Student};

/// Links students to courses, enforcing enrollment-eligibility rules.
///
/// The current rule set is "always allowed unless already enrolled";
/// [`can_enroll`] is the extension point for future policies such as credit
/// limits or prerequisite checks.
///
/// [`can_enroll`]: EnrollmentService::can_enroll
#[derive(Debug, Default)]
pub struct EnrollmentService;

impl EnrollmentService {
    /// Create the service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns whether the student may enroll in the course under the current
    /// policy
    #[must_use]
    pub fn can_enroll(&self, student: &Student, course: &Course) -> bool {
        !student.is_enrolled(&course.code)
    }

    /// Enroll the student in the course.
    ///
    /// # Returns
    /// `true` if the enrollment was newly created, `false` when policy
    /// rejects it (currently only the already-enrolled case)
    pub fn enroll(&self, student: &mut Student, course: &Course) -> bool {
        if !self.can_enroll(student, course) {
            crate::info!(
                "student '{}' is already enrolled in '{}'",
                student.registration_number,
                course.code
            );
            return false;
        }
        student.enroll(course.code.clone())
    }
}
