//! # Immutable Record
//!
//! A plain data carrier: the fields are fixed once the value is built and
//! are only reachable through accessors. Equality, hashing and the textual
//! form all derive from the field values.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonRecord {
    name: String,
    age: u32,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonRecord[name={}, age={}]", self.name, self.age)
    }
}
