//! Student Store Module
//!
//! The authoritative in-memory collection of student records and the id counter.

use crate::models::{Fields, Student};
use crate::store::parse_identifier;

// == Student Store ==
/// In-memory student collection with auto-incrementing ids.
///
/// Records are kept in insertion order. Ids start at 1 and are never reused,
/// even after the record that held one is deleted.
#[derive(Debug)]
pub struct StudentStore {
    /// Records in insertion order
    records: Vec<Student>,
    /// Id handed to the next created record
    next_id: u64,
}

impl StudentStore {
    // == Constructor ==
    /// Creates an empty store whose first record gets id 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    // == Create ==
    /// Appends a new record built from `fields` and returns it.
    ///
    /// The store assigns the id; a caller-supplied `id` field is overwritten.
    pub fn create(&mut self, fields: Fields) -> Student {
        let id = self.next_id;
        self.next_id += 1;

        let student = Student::new(id, fields);
        self.records.push(student.clone());
        student
    }

    // == List ==
    /// Returns a snapshot of all records in insertion order.
    pub fn list(&self) -> Vec<Student> {
        self.records.clone()
    }

    // == Find ==
    /// Looks up a record by raw path identifier.
    pub fn find(&self, raw_id: &str) -> Option<Student> {
        self.position(raw_id).map(|index| self.records[index].clone())
    }

    // == Update ==
    /// Replaces the whole record addressed by `raw_id` with `fields`.
    ///
    /// This is a full replace: fields of the old record missing from `fields`
    /// are dropped. The record keeps its original id and its position.
    pub fn update(&mut self, raw_id: &str, fields: Fields) -> Option<Student> {
        let index = self.position(raw_id)?;
        let replacement = Student::new(self.records[index].id, fields);

        self.records[index] = replacement.clone();
        Some(replacement)
    }

    // == Delete ==
    /// Removes every record addressed by `raw_id`.
    ///
    /// Returns the number of records removed; zero leaves the store unchanged.
    pub fn delete(&mut self, raw_id: &str) -> usize {
        let Some(id) = parse_identifier(raw_id) else {
            return 0;
        };

        let before = self.records.len();
        self.records.retain(|student| student.id != id);
        before - self.records.len()
    }

    // == Length ==
    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the first record matching the identifier.
    fn position(&self, raw_id: &str) -> Option<usize> {
        let id = parse_identifier(raw_id)?;
        self.records.iter().position(|student| student.id == id)
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}
