//! [`User`] — posts, follows, and academic blocks for one account.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  academic::Block,
  post::{Gender, Post, PostKind, Visibility},
};

/// A registered account.
///
/// Follow relations are directed: following someone does not make them
/// follow back. Targets are stored by user name in the order they were
/// followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  user_name: String,
  posts:     Vec<Post>,
  following: Vec<String>,
  blocks:    Vec<Block>,
}

impl User {
  pub fn new(user_name: impl Into<String>) -> Self {
    Self {
      user_name: user_name.into(),
      posts:     Vec::new(),
      following: Vec::new(),
      blocks:    Vec::new(),
    }
  }

  pub fn user_name(&self) -> &str { &self.user_name }

  // ── Follows ─────────────────────────────────────────────────────────────

  /// Start following `target`.
  ///
  /// Returns [`Error::AlreadyFollowing`] if `target` is already followed and
  /// [`Error::SelfFollow`] if it names this user; the list is unchanged in
  /// both cases. Existence of `target` is the directory's concern.
  pub fn follow_user(&mut self, target: &str) -> Result<()> {
    if target == self.user_name {
      return Err(Error::SelfFollow(self.user_name.clone()));
    }
    if self.follows(target) {
      return Err(Error::AlreadyFollowing {
        follower: self.user_name.clone(),
        target:   target.to_string(),
      });
    }
    self.following.push(target.to_string());
    tracing::debug!(follower = %self.user_name, %target, "follow added");
    Ok(())
  }

  /// A snapshot of everyone this user follows, oldest first.
  pub fn follow_list(&self) -> Vec<String> { self.following.clone() }

  pub fn following(&self) -> impl Iterator<Item = &str> + '_ {
    self.following.iter().map(String::as_str)
  }

  pub fn follows(&self, user_name: &str) -> bool {
    self.following.iter().any(|f| f == user_name)
  }

  // ── Posts ───────────────────────────────────────────────────────────────

  pub fn add_text_post(
    &mut self,
    content: impl Into<String>,
    visibility: Visibility,
  ) -> &Post {
    self.push_post(content.into(), visibility, PostKind::Text)
  }

  pub fn add_dating_post(
    &mut self,
    content: impl Into<String>,
    visibility: Visibility,
    seeking: Gender,
  ) -> &Post {
    self.push_post(content.into(), visibility, PostKind::Dating { seeking })
  }

  fn push_post(
    &mut self,
    content: String,
    visibility: Visibility,
    kind: PostKind,
  ) -> &Post {
    let post = Post::new(self.user_name.clone(), content, visibility, kind);
    tracing::debug!(
      author = %self.user_name,
      post_id = %post.post_id(),
      %visibility,
      "post added"
    );
    self.posts.push(post);
    &self.posts[self.posts.len() - 1]
  }

  /// All posts, private ones included, in the order they were written.
  pub fn posts(&self) -> &[Post] { &self.posts }

  /// Public posts in the order they were written.
  pub fn fetch_public_posts(&self) -> impl Iterator<Item = &Post> + '_ {
    self.posts.iter().filter(|p| p.is_public())
  }

  // ── Blocks ──────────────────────────────────────────────────────────────

  pub fn blocks(&self) -> &[Block] { &self.blocks }

  pub fn add_block(&mut self, name: impl Into<String>) {
    let block = Block::new(name);
    tracing::debug!(
      user = %self.user_name,
      block = block.name(),
      "block added"
    );
    self.blocks.push(block);
  }

  /// Append a grade to the first block called `block_name`.
  pub fn add_grade_to_block(
    &mut self,
    block_name: &str,
    value: i32,
    course_name: impl Into<String>,
  ) -> Result<()> {
    let Some(block) = self.blocks.iter_mut().find(|b| b.name() == block_name)
    else {
      return Err(Error::BlockNotFound {
        user:  self.user_name.clone(),
        block: block_name.to_string(),
      });
    };
    block.add_grade(value, course_name);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn follow_is_idempotent() {
    let mut bob = User::new("Bob");
    bob.follow_user("Alice").unwrap();

    let err = bob.follow_user("Alice").unwrap_err();
    assert_eq!(
      err,
      Error::AlreadyFollowing {
        follower: "Bob".into(),
        target:   "Alice".into(),
      }
    );
    assert_eq!(bob.follow_list(), vec!["Alice".to_string()]);
  }

  #[test]
  fn follow_list_preserves_order() {
    let mut bob = User::new("Bob");
    bob.follow_user("Fragile").unwrap();
    bob.follow_user("Alice").unwrap();
    assert_eq!(bob.follow_list(), ["Fragile", "Alice"]);
    assert!(bob.follows("Alice"));
    assert!(!bob.follows("Carol"));
  }

  #[test]
  fn self_follow_is_rejected() {
    let mut bob = User::new("Bob");
    let err = bob.follow_user("Bob").unwrap_err();
    assert_eq!(err, Error::SelfFollow("Bob".into()));
    assert!(bob.follow_list().is_empty());
  }

  #[test]
  fn public_posts_exclude_private() {
    let mut bob = User::new("Bob");
    bob.add_text_post("first", Visibility::Public);
    bob.add_dating_post("hidden", Visibility::Private, Gender::Female);
    bob.add_dating_post("second", Visibility::Public, Gender::Other);

    let public: Vec<_> = bob.fetch_public_posts().map(Post::content).collect();
    assert_eq!(public, ["first", "second"]);
    assert_eq!(bob.posts().len(), 3);
  }

  #[test]
  fn posts_are_authored_by_owner() {
    let mut bob = User::new("Bob");
    let post = bob.add_text_post("hello", Visibility::Public);
    assert_eq!(post.author(), "Bob");
  }

  #[test]
  fn grade_goes_to_first_matching_block() {
    let mut bob = User::new("Bob");
    bob.add_block("Block A");
    bob.add_block("Block A");
    bob.add_grade_to_block("Block A", 85, "Math").unwrap();

    assert_eq!(bob.blocks()[0].grades().len(), 1);
    assert!(bob.blocks()[1].grades().is_empty());
  }

  #[test]
  fn grade_for_missing_block_changes_nothing() {
    let mut bob = User::new("Bob");
    bob.add_block("Block A");
    let before = bob.blocks().to_vec();

    let err = bob.add_grade_to_block("Block B", 90, "Art").unwrap_err();
    assert!(matches!(
      err,
      Error::BlockNotFound { ref block, .. } if block == "Block B"
    ));
    assert_eq!(bob.blocks(), before.as_slice());
  }
}
