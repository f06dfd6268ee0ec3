//! Course store

use crate::core::models::Course;
use std::collections::HashMap;

/// In-memory course store keyed by course code, listing in insertion order
#[derive(Debug, Default)]
pub struct CourseService {
    courses: HashMap<String, Course>,
    order: Vec<String>,
}

impl CourseService {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course to the store.
    ///
    /// A duplicate course code is a warning no-op, never an error: the
    /// existing record is left unchanged.
    ///
    /// # Returns
    /// `true` if the course was added, `false` on a duplicate key
    pub fn add(&mut self, course: Course) -> bool {
        let key = course.code.clone();
        if self.courses.contains_key(&key) {
            crate::warn!("course with code '{key}' already exists; skipping");
            return false;
        }
        self.order.push(key.clone());
        self.courses.insert(key, course);
        true
    }

    /// Look up a course by code
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Look up a course by code for mutation
    pub fn get_mut(&mut self, code: &str) -> Option<&mut Course> {
        self.courses.get_mut(code)
    }

    /// Snapshot of all courses in insertion order
    #[must_use]
    pub fn list(&self) -> Vec<&Course> {
        self.order
            .iter()
            .filter_map(|key| self.courses.get(key))
            .collect()
    }

    /// Number of courses in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
