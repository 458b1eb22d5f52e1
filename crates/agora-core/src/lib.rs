//! Core types and operations for the Agora social directory.
//!
//! Users, their posts and follow lists, feed assembly and mutual matching,
//! plus a small per-user academic record. Everything lives in memory inside
//! a [`Directory`] owned by the caller.

pub mod academic;
pub mod directory;
pub mod error;
pub mod post;
pub mod user;
pub mod view;

pub use directory::{Directory, FeedLimits};
pub use error::{Error, Result};
