//! Record store
//!
//! Ordered, append-only collection of student records.
//!
//! ## Responsibilities
//! - Preserve insertion order (duplicate names allowed)
//! - Full clear on reload / close
//! - Restartable in-order traversal
//!
//! Iterators borrow the roster, so the borrow checker rules out mutation
//! while a traversal is in progress.

use std::slice;

use crate::record::Student;

/// In-memory roster of students
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end
    pub fn append(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.students.clear();
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Record at `index`, in insertion order
    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    /// Iterate records in insertion order
    ///
    /// Each call starts again from the first record.
    pub fn iter(&self) -> slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// Mutable iteration, used to overwrite derived fields
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Student> {
        self.students.iter_mut()
    }

    pub fn as_slice(&self) -> &[Student] {
        &self.students
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Student] {
        &mut self.students
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

impl Extend<Student> for Roster {
    fn extend<I: IntoIterator<Item = Student>>(&mut self, iter: I) {
        self.students.extend(iter);
    }
}
