//! Person model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role tag distinguishing the kinds of people the system tracks.
///
/// A flat record with a role tag replaces a base-class hierarchy: the only
/// specialisation in the system is [`Student`](super::Student), which holds a
/// `Person` by composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// An enrolled student
    Student,
    /// A course instructor (referenced by `Course::instructor_id`)
    Instructor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "Student"),
            Self::Instructor => write!(f, "Instructor"),
        }
    }
}

/// Identity record shared by everyone in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique person id (distinct from any role-specific key)
    pub id: String,

    /// Full name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Soft-deletion flag; records are deactivated, never removed
    pub active: bool,

    /// Date the record was created
    pub created_on: NaiveDate,

    /// Role tag
    pub role: Role,
}

impl Person {
    /// Create a new active person record dated today
    #[must_use]
    pub fn new(id: String, name: String, email: String, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            active: true,
            created_on: chrono::Local::now().date_naive(),
            role,
        }
    }

    /// Flip the active flag off (soft deactivation)
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Email: {}, Active: {}, Since: {}",
            self.id, self.name, self.email, self.active, self.created_on
        )
    }
}
