//! In-memory services over the domain models.
//!
//! All services assume single-threaded, sequential use; none of them are
//! safe for concurrent mutation.

mod courses;
mod enrollment;
mod grading;
mod students;

pub use courses::CourseService;
pub use enrollment::EnrollmentService;
pub use grading::GradingService;
pub use students::StudentService;
