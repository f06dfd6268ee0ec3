//! Grade scale and transcript entries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade on a fixed marks scale.
///
/// Breakpoints: S 90-100, A 80-89, B 70-79, C 60-69, D 50-59, F below 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// Outstanding (90-100)
    S,
    /// Excellent (80-89)
    A,
    /// Good (70-79)
    B,
    /// Average (60-69)
    C,
    /// Pass (50-59)
    D,
    /// Fail (below 50)
    F,
}

impl Grade {
    /// Derive the letter grade for a marks value.
    ///
    /// Callers validate the 0-100 range; anything above 100 would classify as
    /// `S` here, so the range check belongs in the grading service.
    #[must_use]
    pub const fn from_marks(marks: u32) -> Self {
        match marks {
            90.. => Self::S,
            80..=89 => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            50..=59 => Self::D,
            _ => Self::F,
        }
    }

    /// Grade-point value used for GPA computation
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::S => 5.0,
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        write!(f, "{letter}")
    }
}

/// One course's recorded marks and derived letter grade for a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Code of the graded course
    pub course_code: String,

    /// Marks obtained (0-100)
    pub marks: u32,

    /// Letter grade derived from the marks
    pub grade: Grade,
}

impl TranscriptEntry {
    /// Create a transcript entry, deriving the grade from the marks
    #[must_use]
    pub fn new(course_code: String, marks: u32) -> Self {
        let grade = Grade::from_marks(marks);
        Self {
            course_code,
            marks,
            grade,
        }
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} marks, Grade {}",
            self.course_code, self.marks, self.grade
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_buckets() {
        assert_eq!(Grade::from_marks(100), Grade::S);
        assert_eq!(Grade::from_marks(85), Grade::A);
        assert_eq!(Grade::from_marks(75), Grade::B);
        assert_eq!(Grade::from_marks(65), Grade::C);
        assert_eq!(Grade::from_marks(55), Grade::D);
        assert_eq!(Grade::from_marks(20), Grade::F);
        assert_eq!(Grade::from_marks(0), Grade::F);
    }

    #[test]
    fn test_grade_boundaries_around_a() {
        // Exact bucket edges for the A band
        assert_eq!(Grade::from_marks(80), Grade::A);
        assert_eq!(Grade::from_marks(89), Grade::A);
        assert_eq!(Grade::from_marks(90), Grade::S);
        assert_eq!(Grade::from_marks(79), Grade::B);
    }

    #[test]
    fn test_grade_points() {
        assert!((Grade::A.points() - 4.0).abs() < f64::EPSILON);
        assert!((Grade::F.points()).abs() < f64::EPSILON);
        assert!(Grade::S.points() > Grade::A.points());
    }

    #[test]
    fn test_transcript_entry_derives_grade() {
        let entry = TranscriptEntry::new("CS1800".to_string(), 85);
        assert_eq!(entry.grade, Grade::A);
        assert_eq!(entry.to_string(), "CS1800: 85 marks, Grade A");
    }
}
