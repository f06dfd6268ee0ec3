//! CSV import/export for the student and course stores.
//!
//! Line-oriented, comma-delimited, no quoting or escaping, no header row.
//! Formats:
//! - students: `personId,registrationNumber,fullName,email`
//! - courses: `courseCode,title,credits,instructorId,semester,department`

use crate::core::error::{RecordsError, Result};
use crate::core::models::{Course, Semester, Student};
use crate::core::services::{CourseService, StudentService};
use std::fs;
use std::path::Path;

/// Minimum field count for a student row
const STUDENT_FIELDS: usize = 4;
/// Minimum field count for a course row
const COURSE_FIELDS: usize = 6;

/// Import students from a CSV file into the store.
///
/// Rows with fewer than four fields are silently skipped (documented
/// policy). Duplicate registration numbers are absorbed by the store's
/// warning no-op and still count toward the returned total, so the count
/// reflects rows parsed, not necessarily rows stored.
///
/// # Errors
/// Returns [`RecordsError::Io`] if the file cannot be read; the whole import
/// is aborted in that case.
pub fn import_students<P: AsRef<Path>>(path: P, students: &mut StudentService) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    let mut imported = 0;
    for line in content.lines() {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < STUDENT_FIELDS {
            crate::debug!("skipping short student row: '{line}'");
            continue;
        }
        let student = Student::new(
            fields[0].to_string(),
            fields[1].to_string(),
            fields[2].to_string(),
            fields[3].to_string(),
        );
        students.add(student);
        imported += 1;
    }
    crate::info!("imported {imported} student rows");
    Ok(imported)
}

/// Export all students to a CSV file in listing (insertion) order,
/// overwriting any existing file at the path.
///
/// # Errors
/// Returns [`RecordsError::Io`] on write failure; a partially written file is
/// not rolled back.
pub fn export_students<P: AsRef<Path>>(path: P, students: &StudentService) -> Result<()> {
    let rows: Vec<String> = students
        .list()
        .iter()
        .map(|s| {
            format!(
                "{},{},{},{}",
                s.person.id, s.registration_number, s.person.name, s.person.email
            )
        })
        .collect();
    write_rows(path.as_ref(), &rows)?;
    crate::info!("exported {} students to {}", rows.len(), path.as_ref().display());
    Ok(())
}

/// Import courses from a CSV file into the store.
///
/// Rows with fewer than six fields are silently skipped. An empty instructor
/// field imports as `None`. Unlike short rows, malformed values on a complete
/// row are hard failures: a semester outside the fixed enum or non-positive
/// credits abort the whole import.
///
/// # Errors
/// - [`RecordsError::Io`] if the file cannot be read
/// - [`RecordsError::InvalidInput`] for malformed credits or semester values
pub fn import_courses<P: AsRef<Path>>(path: P, courses: &mut CourseService) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    let mut imported = 0;
    for line in content.lines() {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < COURSE_FIELDS {
            crate::debug!("skipping short course row: '{line}'");
            continue;
        }

        let credits: u32 = fields[2].parse().map_err(|_| RecordsError::InvalidInput {
            field: "credits",
            message: format!("'{}' is not a valid credit count", fields[2]),
        })?;
        if credits == 0 {
            return Err(RecordsError::InvalidInput {
                field: "credits",
                message: "credits must be a positive integer".to_string(),
            });
        }
        let semester: Semester = fields[4].parse()?;
        let instructor_id = if fields[3].is_empty() {
            None
        } else {
            Some(fields[3].to_string())
        };

        let course = Course::new(
            fields[0].to_string(),
            fields[1].to_string(),
            credits,
            instructor_id,
            semester,
            fields[5].to_string(),
        );
        courses.add(course);
        imported += 1;
    }
    crate::info!("imported {imported} course rows");
    Ok(imported)
}

/// Export all courses to a CSV file in listing (insertion) order,
/// overwriting any existing file at the path.
///
/// # Errors
/// Returns [`RecordsError::Io`] on write failure; a partially written file is
/// not rolled back.
pub fn export_courses<P: AsRef<Path>>(path: P, courses: &CourseService) -> Result<()> {
    let rows: Vec<String> = courses
        .list()
        .iter()
        .map(|c| {
            format!(
                "{},{},{},{},{},{}",
                c.code,
                c.title,
                c.credits,
                c.instructor_id.as_deref().unwrap_or(""),
                c.semester,
                c.department
            )
        })
        .collect();
    write_rows(path.as_ref(), &rows)?;
    crate::info!("exported {} courses to {}", rows.len(), path.as_ref().display());
    Ok(())
}

/// Write rows as newline-terminated lines, overwriting the file
fn write_rows(path: &Path, rows: &[String]) -> Result<()> {
    let mut content = rows.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}
