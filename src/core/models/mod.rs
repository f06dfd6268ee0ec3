//! Domain models for the campus records manager

mod course;
mod grade;
mod person;
mod student;

pub use course::{Course, Semester};
pub use grade::{Grade, TranscriptEntry};
pub use person::{Person, Role};
pub use student::Student;
