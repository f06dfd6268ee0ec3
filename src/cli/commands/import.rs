//! One-shot import command handler

use campus_records::core::services::{CourseService, StudentService};
use campus_records::core::transfer;
use campus_records::error;
use std::path::Path;

/// Import CSV files into a fresh in-memory store and print a summary.
///
/// With `verbose`, also prints the imported records so a file's contents can
/// be eyeballed before using it in the shell.
pub fn run(students_csv: Option<&Path>, courses_csv: Option<&Path>, verbose: bool) {
    if students_csv.is_none() && courses_csv.is_none() {
        eprintln!("✗ Nothing to import: provide --students and/or --courses.");
        return;
    }

    if let Some(path) = students_csv {
        let mut students = StudentService::new();
        match transfer::import_students(path, &mut students) {
            Ok(count) => {
                println!(
                    "✓ {}: {count} student rows parsed, {} stored.",
                    path.display(),
                    students.len()
                );
                if verbose {
                    for student in students.list() {
                        println!("  {}", student.profile());
                    }
                }
            }
            Err(e) => {
                error!("student import failed for {}: {e}", path.display());
                eprintln!("✗ Failed to import students from {}: {e}", path.display());
            }
        }
    }

    if let Some(path) = courses_csv {
        let mut courses = CourseService::new();
        match transfer::import_courses(path, &mut courses) {
            Ok(count) => {
                println!(
                    "✓ {}: {count} course rows parsed, {} stored.",
                    path.display(),
                    courses.len()
                );
                if verbose {
                    for course in courses.list() {
                        println!("  {course}");
                    }
                }
            }
            Err(e) => {
                error!("course import failed for {}: {e}", path.display());
                eprintln!("✗ Failed to import courses from {}: {e}", path.display());
            }
        }
    }
}
