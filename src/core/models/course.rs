//! Course model

use crate::core::error::RecordsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic term a course is offered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semester {
    /// Spring term
    Spring,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Wire form used in CSV files
        let as_str = match self {
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
        };
        write!(f, "{as_str}")
    }
}

impl FromStr for Semester {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPRING" => Ok(Self::Spring),
            "SUMMER" => Ok(Self::Summer),
            "FALL" => Ok(Self::Fall),
            other => Err(RecordsError::InvalidInput {
                field: "semester",
                message: format!("unknown semester '{other}' (expected SPRING, SUMMER or FALL)"),
            }),
        }
    }
}

/// Represents a course offered in the campus records system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, the unique store key (e.g. "CS1800")
    pub code: String,

    /// Course title
    pub title: String,

    /// Credit value (positive integer)
    pub credits: u32,

    /// Person id of the assigned instructor, if any
    pub instructor_id: Option<String>,

    /// Term the course is offered in
    pub semester: Semester,

    /// Owning department
    pub department: String,
}

impl Course {
    /// Create a new course
    #[must_use]
    pub const fn new(
        code: String,
        title: String,
        credits: u32,
        instructor_id: Option<String>,
        semester: Semester,
        department: String,
    ) -> Self {
        Self {
            code,
            title,
            credits,
            instructor_id,
            semester,
            department,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course [{}: {}, Credits: {}, Instructor: {}, Semester: {}, Dept: {}]",
            self.code,
            self.title,
            self.credits,
            self.instructor_id.as_deref().unwrap_or("-"),
            self.semester,
            self.department
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_parse_case_insensitive() {
        assert_eq!("FALL".parse::<Semester>().unwrap(), Semester::Fall);
        assert_eq!("fall".parse::<Semester>().unwrap(), Semester::Fall);
        assert_eq!(" Spring ".parse::<Semester>().unwrap(), Semester::Spring);
        assert_eq!("sUmMeR".parse::<Semester>().unwrap(), Semester::Summer);
    }

    #[test]
    fn test_semester_parse_invalid() {
        let err = "WINTER".parse::<Semester>().unwrap_err();
        assert!(err.to_string().contains("WINTER"));
    }

    #[test]
    fn test_semester_display_roundtrip() {
        for semester in [Semester::Spring, Semester::Summer, Semester::Fall] {
            let parsed = semester.to_string().parse::<Semester>().unwrap();
            assert_eq!(parsed, semester);
        }
    }

    #[test]
    fn test_course_display() {
        let course = Course::new(
            "CS1800".to_string(),
            "Discrete Structures".to_string(),
            4,
            None,
            Semester::Fall,
            "CS".to_string(),
        );

        assert_eq!(
            course.to_string(),
            "Course [CS1800: Discrete Structures, Credits: 4, Instructor: -, Semester: FALL, Dept: CS]"
        );
    }
}
