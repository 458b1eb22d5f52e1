//! Posts — the unit of content a user publishes.
//!
//! A post is immutable once created. It belongs to exactly one user and
//! refers back to them by user name, which is also the key of that user in
//! the [`Directory`](crate::directory::Directory).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Enums ───────────────────────────────────────────────────────────────────

/// Who may see a post. Only public posts reach walls and feeds.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Visibility {
  Private,
  Public,
}

/// The gender a dating post is looking for.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Gender {
  Male,
  Female,
  Other,
}

// ─── PostKind ────────────────────────────────────────────────────────────────

/// The variant-specific part of a post. Rendering is chosen by matching on
/// this, so a new variant has to be handled everywhere it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PostKind {
  Text,
  Dating { seeking: Gender },
}

// ─── Post ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
  post_id:    Uuid,
  /// User name of the author.
  author:     String,
  content:    String,
  visibility: Visibility,
  /// Recorded for reference only; feeds never sort on it.
  created_at: DateTime<Utc>,
  kind:       PostKind,
}

impl Post {
  pub(crate) fn new(
    author: impl Into<String>,
    content: impl Into<String>,
    visibility: Visibility,
    kind: PostKind,
  ) -> Self {
    Self {
      post_id: Uuid::new_v4(),
      author: author.into(),
      content: content.into(),
      visibility,
      created_at: Utc::now(),
      kind,
    }
  }

  pub fn post_id(&self) -> Uuid { self.post_id }

  pub fn author(&self) -> &str { &self.author }

  pub fn content(&self) -> &str { &self.content }

  pub fn visibility(&self) -> Visibility { self.visibility }

  pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

  pub fn kind(&self) -> PostKind { self.kind }

  pub fn is_public(&self) -> bool { self.visibility == Visibility::Public }
}

impl fmt::Display for Post {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      PostKind::Text => {
        write!(f, "Text Post by {}: {}", self.author, self.content)
      }
      PostKind::Dating { seeking } => write!(
        f,
        "Dating Post by {}: {} (Seeking: {seeking})",
        self.author, self.content
      ),
    }
  }
}
