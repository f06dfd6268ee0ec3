//! Student store

use crate::core::models::Student;
use std::collections::HashMap;

/// In-memory student store keyed by registration number.
///
/// An insertion-order key list is kept beside the map so that [`list`]
/// returns students in the order they were added, which also fixes the
/// ordering of CSV exports.
///
/// [`list`]: StudentService::list
#[derive(Debug, Default)]
pub struct StudentService {
    students: HashMap<String, Student>,
    order: Vec<String>,
}

impl StudentService {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student to the store.
    ///
    /// A duplicate registration number is a warning no-op, never an error:
    /// the existing record is left unchanged.
    ///
    /// # Returns
    /// `true` if the student was added, `false` on a duplicate key
    pub fn add(&mut self, student: Student) -> bool {
        let key = student.registration_number.clone();
        if self.students.contains_key(&key) {
            crate::warn!("student with registration number '{key}' already exists; skipping");
            return false;
        }
        self.order.push(key.clone());
        self.students.insert(key, student);
        true
    }

    /// Look up a student by registration number
    #[must_use]
    pub fn get(&self, registration_number: &str) -> Option<&Student> {
        self.students.get(registration_number)
    }

    /// Look up a student by registration number for mutation
    pub fn get_mut(&mut self, registration_number: &str) -> Option<&mut Student> {
        self.students.get_mut(registration_number)
    }

    /// Snapshot of all students in insertion order
    #[must_use]
    pub fn list(&self) -> Vec<&Student> {
        self.order
            .iter()
            .filter_map(|key| self.students.get(key))
            .collect()
    }

    /// Deactivate a student's record (soft flag; the record is kept).
    ///
    /// A missing registration number is a warning no-op.
    ///
    /// # Returns
    /// `true` if a record was deactivated
    pub fn deactivate(&mut self, registration_number: &str) -> bool {
        if let Some(student) = self.students.get_mut(registration_number) {
            student.person.deactivate();
            true
        } else {
            crate::warn!(
                "no student with registration number '{registration_number}' to deactivate"
            );
            false
        }
    }

    /// Number of students in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Returns whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(reg: &str, name: &str) -> Student {
        Student::new(
            format!("P-{reg}"),
            reg.to_string(),
            name.to_string(),
            format!("{reg}@example.edu"),
        )
    }

    #[test]
    fn test_add_then_get() {
        let mut store = StudentService::new();
        assert!(store.add(student("REG-1", "Ada Lovelace")));

        let found = store.get("REG-1").unwrap();
        assert_eq!(found.person.name, "Ada Lovelace");
        assert_eq!(found.registration_number, "REG-1");
    }

    #[test]
    fn test_duplicate_add_keeps_first() {
        let mut store = StudentService::new();
        assert!(store.add(student("REG-1", "Ada Lovelace")));
        assert!(!store.add(student("REG-1", "Impostor")));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("REG-1").unwrap().person.name, "Ada Lovelace");
    }

    #[test]
    fn test_list_is_insertion_ordered() {
        let mut store = StudentService::new();
        store.add(student("REG-3", "Third"));
        store.add(student("REG-1", "First"));
        store.add(student("REG-2", "Second"));

        let names: Vec<&str> = store.list().iter().map(|s| s.person.name.as_str()).collect();
        assert_eq!(names, ["Third", "First", "Second"]);
    }

    #[test]
    fn test_deactivate() {
        let mut store = StudentService::new();
        store.add(student("REG-1", "Ada Lovelace"));

        assert!(store.deactivate("REG-1"));
        assert!(!store.get("REG-1").unwrap().person.active);

        // Missing key is a no-op
        assert!(!store.deactivate("REG-404"));
    }
}
