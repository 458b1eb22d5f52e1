//! Academic records: named blocks of course grades.
//!
//! Unrelated to the social side of a [`User`](crate::user::User); a user
//! simply owns an ordered list of blocks.

use serde::{Deserialize, Serialize};

/// A score for a single course. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
  pub value:       i32,
  pub course_name: String,
}

/// A named group of grades, kept in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
  name:   String,
  grades: Vec<Grade>,
}

impl Block {
  /// Create an empty block.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name:   name.into(),
      grades: Vec::new(),
    }
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn grades(&self) -> &[Grade] { &self.grades }

  pub(crate) fn add_grade(
    &mut self,
    value: i32,
    course_name: impl Into<String>,
  ) {
    self.grades.push(Grade {
      value,
      course_name: course_name.into(),
    });
  }
}
