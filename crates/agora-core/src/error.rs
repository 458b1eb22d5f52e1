//! Error types for `agora-core`.
//!
//! Every variant is a recoverable condition: the operation that produced it
//! left the directory unchanged, and callers are expected to report it and
//! carry on.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Username {0} already registered")]
  DuplicateRegistration(String),

  #[error("Username {0} does not exist")]
  UnknownUser(String),

  #[error("{follower} has already followed {target}")]
  AlreadyFollowing { follower: String, target: String },

  #[error("{0} cannot follow themselves")]
  SelfFollow(String),

  #[error("Block not found.")]
  BlockNotFound { user: String, block: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
