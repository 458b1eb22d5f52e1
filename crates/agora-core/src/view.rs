//! Read models returned by the [`Directory`](crate::directory::Directory)
//! display operations.
//!
//! Each view borrows from the directory and renders itself as console text
//! through [`Display`](std::fmt::Display), or as JSON through `serde`.

use std::fmt;

use serde::Serialize;

use crate::{academic::Block, post::Post};

/// A user's public posts.
#[derive(Debug, Serialize)]
pub struct Wall<'a> {
  pub user:  &'a str,
  pub posts: Vec<&'a Post>,
}

impl fmt::Display for Wall<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "---- Show {} wall ---", self.user)?;
    for post in &self.posts {
      writeln!(f, "{post}")?;
    }
    write!(f, "---")
  }
}

/// Public posts from the accounts a viewer follows, already capped.
#[derive(Debug, Serialize)]
pub struct Feed<'a> {
  pub viewer: &'a str,
  pub posts:  Vec<&'a Post>,
}

impl fmt::Display for Feed<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "-- Show {} feed ----", self.viewer)?;
    for post in &self.posts {
      writeln!(f, "{post}")?;
    }
    write!(f, "----")
  }
}

/// Users with a mutual follow relationship to `user`.
#[derive(Debug, Serialize)]
pub struct Matches<'a> {
  pub user:    &'a str,
  pub matches: Vec<&'a str>,
}

impl fmt::Display for Matches<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Potential matches for {}:", self.user)?;
    for name in &self.matches {
      write!(f, "\n- {name}")?;
    }
    Ok(())
  }
}

/// A user's academic blocks with their grades.
#[derive(Debug, Serialize)]
pub struct Transcript<'a> {
  pub user:   &'a str,
  pub blocks: &'a [Block],
}

impl fmt::Display for Transcript<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "-- Show Grades & Blocks for {} ----", self.user)?;
    for block in self.blocks {
      writeln!(f, "Block: {}", block.name())?;
      for grade in block.grades() {
        writeln!(
          f,
          "- Course: {}, Grade: {}",
          grade.course_name, grade.value
        )?;
      }
    }
    write!(f, "----")
  }
}
