//! [`Directory`] — the registry of users and the operations that span more
//! than one of them: feeds and mutual matches.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  post::{Gender, Visibility},
  user::User,
  view::{Feed, Matches, Transcript, Wall},
};

// ─── Feed limits ─────────────────────────────────────────────────────────────

pub const MAX_POST_PER_USER: usize = 2;
pub const MAX_POST_AMOUNT: usize = 10;

/// Caps applied while assembling a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedLimits {
  /// Most posts taken from any single followed user.
  pub per_user: usize,
  /// Most posts in the whole feed.
  pub total:    usize,
}

impl Default for FeedLimits {
  fn default() -> Self {
    Self {
      per_user: MAX_POST_PER_USER,
      total:    MAX_POST_AMOUNT,
    }
  }
}

// ─── Directory ───────────────────────────────────────────────────────────────

/// All registered users, keyed by user name and iterated in registration
/// order.
///
/// Every name-addressed operation returns [`Error::UnknownUser`] for a name
/// that was never registered; nothing here hands out a null user.
#[derive(Debug, Default)]
pub struct Directory {
  users:  Vec<User>,
  index:  HashMap<String, usize>,
  limits: FeedLimits,
}

impl Directory {
  pub fn new() -> Self { Self::default() }

  pub fn with_limits(limits: FeedLimits) -> Self {
    Self {
      limits,
      ..Self::default()
    }
  }

  pub fn limits(&self) -> FeedLimits { self.limits }

  // ── Registry ────────────────────────────────────────────────────────────

  /// Register a new user. An existing user of the same name is left as is.
  pub fn register_user(&mut self, user_name: &str) -> Result<&User> {
    if self.contains(user_name) {
      tracing::info!(user = user_name, "duplicate registration");
      return Err(Error::DuplicateRegistration(user_name.to_string()));
    }
    let slot = self.users.len();
    self.users.push(User::new(user_name));
    self.index.insert(user_name.to_string(), slot);
    tracing::debug!(user = user_name, "user registered");
    Ok(&self.users[slot])
  }

  pub fn get_user(&self, user_name: &str) -> Result<&User> {
    self
      .find_user(user_name)
      .ok_or_else(|| unknown_user(user_name))
  }

  pub fn get_user_mut(&mut self, user_name: &str) -> Result<&mut User> {
    match self.index.get(user_name) {
      Some(&slot) => Ok(&mut self.users[slot]),
      None => Err(unknown_user(user_name)),
    }
  }

  pub fn contains(&self, user_name: &str) -> bool {
    self.index.contains_key(user_name)
  }

  /// Registered users, oldest first.
  pub fn users(&self) -> impl Iterator<Item = &User> + '_ { self.users.iter() }

  pub fn len(&self) -> usize { self.users.len() }

  pub fn is_empty(&self) -> bool { self.users.is_empty() }

  fn find_user(&self, user_name: &str) -> Option<&User> {
    self.index.get(user_name).map(|&slot| &self.users[slot])
  }

  // ── Per-user mutations ──────────────────────────────────────────────────

  /// Make `follower` follow `target`. Both must be registered.
  pub fn follow_user(&mut self, follower: &str, target: &str) -> Result<()> {
    self.get_user(follower)?;
    self.get_user(target)?;
    self
      .get_user_mut(follower)?
      .follow_user(target)
      .inspect_err(|e| tracing::info!(error = %e, "follow rejected"))
  }

  pub fn add_text_post(
    &mut self,
    author: &str,
    content: &str,
    visibility: Visibility,
  ) -> Result<()> {
    self.get_user_mut(author)?.add_text_post(content, visibility);
    Ok(())
  }

  pub fn add_dating_post(
    &mut self,
    author: &str,
    content: &str,
    visibility: Visibility,
    seeking: Gender,
  ) -> Result<()> {
    self
      .get_user_mut(author)?
      .add_dating_post(content, visibility, seeking);
    Ok(())
  }

  pub fn add_block(&mut self, user_name: &str, block_name: &str) -> Result<()> {
    self.get_user_mut(user_name)?.add_block(block_name);
    Ok(())
  }

  pub fn add_grade_to_block(
    &mut self,
    user_name: &str,
    block_name: &str,
    value: i32,
    course_name: &str,
  ) -> Result<()> {
    self
      .get_user_mut(user_name)?
      .add_grade_to_block(block_name, value, course_name)
      .inspect_err(|e| tracing::info!(error = %e, "grade rejected"))
  }

  // ── Views ───────────────────────────────────────────────────────────────

  /// Every public post of `user_name`, in the order written.
  pub fn show_user_wall(&self, user_name: &str) -> Result<Wall<'_>> {
    let user = self.get_user(user_name)?;
    Ok(Wall {
      user:  user.user_name(),
      posts: user.fetch_public_posts().collect(),
    })
  }

  /// Public posts from the users `viewer` follows.
  ///
  /// Followees are visited in the order they were followed. At most
  /// `per_user` posts are taken from each, oldest first, and assembly stops
  /// as soon as the feed holds `total` posts. No other ranking is applied.
  pub fn show_user_feed(&self, viewer: &str) -> Result<Feed<'_>> {
    let viewer = self.get_user(viewer)?;
    let FeedLimits { per_user, total } = self.limits;

    let mut posts = Vec::new();
    for followee in viewer.following() {
      if posts.len() >= total {
        break;
      }
      // Users are never removed, so a followee is always registered.
      let Some(followee) = self.find_user(followee) else {
        continue;
      };
      for post in followee.fetch_public_posts().take(per_user) {
        if posts.len() >= total {
          break;
        }
        posts.push(post);
      }
    }

    tracing::debug!(
      viewer = viewer.user_name(),
      len = posts.len(),
      "feed assembled"
    );
    Ok(Feed {
      viewer: viewer.user_name(),
      posts,
    })
  }

  /// Users who follow `user_name` and are followed back, in registration
  /// order.
  pub fn match_users(&self, user_name: &str) -> Result<Matches<'_>> {
    let user = self.get_user(user_name)?;
    let matches = self
      .users
      .iter()
      .filter(|other| {
        other.user_name() != user.user_name()
          && other.follows(user.user_name())
          && user.follows(other.user_name())
      })
      .map(User::user_name)
      .collect();
    Ok(Matches {
      user: user.user_name(),
      matches,
    })
  }

  /// The academic blocks of `user_name` with their grades.
  pub fn show_user_blocks(&self, user_name: &str) -> Result<Transcript<'_>> {
    let user = self.get_user(user_name)?;
    Ok(Transcript {
      user:   user.user_name(),
      blocks: user.blocks(),
    })
  }
}

fn unknown_user(user_name: &str) -> Error {
  tracing::info!(user = user_name, "unknown user");
  Error::UnknownUser(user_name.to_string())
}
