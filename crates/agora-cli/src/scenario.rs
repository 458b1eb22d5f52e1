//! Scenarios — ordered lists of directory operations.
//!
//! The built-in demo is expressed as a [`Scenario`]; any other scenario can
//! be loaded from a TOML file with one `[[step]]` table per operation:
//!
//! ```toml
//! [[step]]
//! action = "register"
//! user   = "Bob"
//!
//! [[step]]
//! action     = "text_post"
//! user       = "Bob"
//! content    = "This is fine."
//! visibility = "public"
//! ```

use std::path::Path;

use agora_core::post::{Gender, Visibility};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// One operation against the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
  Register {
    user: String,
  },
  TextPost {
    user:       String,
    content:    String,
    visibility: Visibility,
  },
  DatingPost {
    user:       String,
    content:    String,
    visibility: Visibility,
    seeking:    Gender,
  },
  Follow {
    user:   String,
    target: String,
  },
  ShowWall {
    user: String,
  },
  ShowFeed {
    user: String,
  },
  Match {
    user: String,
  },
  AddBlock {
    user:  String,
    block: String,
  },
  AddGrade {
    user:   String,
    block:  String,
    value:  i32,
    course: String,
  },
  ShowBlocks {
    user: String,
  },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
  #[serde(rename = "step", default)]
  pub steps: Vec<Step>,
}

impl Scenario {
  /// Read and parse a TOML scenario file.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading scenario file {}", path.display()))?;
    toml::from_str(&raw)
      .with_context(|| format!("parsing scenario file {}", path.display()))
  }

  /// Three users, a few posts, two follows, a feed, a match query and one
  /// graded block.
  pub fn demo() -> Self {
    let user = |name: &str| name.to_string();
    let steps = vec![
      Step::Register { user: user("Bob") },
      Step::Register { user: user("Alice") },
      Step::Register {
        user: user("Fragile"),
      },
      Step::TextPost {
        user:       user("Bob"),
        content:    "This is fine.".into(),
        visibility: Visibility::Public,
      },
      Step::TextPost {
        user:       user("Fragile"),
        content:    "A cryptobiote a day keeps the Timefall away.".into(),
        visibility: Visibility::Public,
      },
      Step::DatingPost {
        user:       user("Bob"),
        content:    "Buy dog food".into(),
        visibility: Visibility::Private,
        seeking:    Gender::Female,
      },
      Step::ShowWall { user: user("Bob") },
      Step::ShowWall { user: user("Alice") },
      Step::Follow {
        user:   user("Bob"),
        target: user("Alice"),
      },
      Step::Follow {
        user:   user("Bob"),
        target: user("Fragile"),
      },
      Step::ShowFeed { user: user("Bob") },
      Step::Match { user: user("Bob") },
      Step::AddBlock {
        user:  user("Bob"),
        block: "Block A".into(),
      },
      Step::AddGrade {
        user:   user("Bob"),
        block:  "Block A".into(),
        value:  85,
        course: "Math".into(),
      },
      Step::ShowBlocks { user: user("Bob") },
    ];
    Self { steps }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_toml_steps() {
    let raw = r#"
      [[step]]
      action = "register"
      user = "Bob"

      [[step]]
      action = "dating_post"
      user = "Bob"
      content = "Buy dog food"
      visibility = "private"
      seeking = "female"

      [[step]]
      action = "add_grade"
      user = "Bob"
      block = "Block A"
      value = 85
      course = "Math"
    "#;
    let scenario: Scenario = toml::from_str(raw).unwrap();
    assert_eq!(scenario.steps.len(), 3);
    assert_eq!(
      scenario.steps[1],
      Step::DatingPost {
        user:       "Bob".into(),
        content:    "Buy dog food".into(),
        visibility: Visibility::Private,
        seeking:    Gender::Female,
      }
    );
    assert!(matches!(scenario.steps[2], Step::AddGrade { value: 85, .. }));
  }

  #[test]
  fn unknown_action_is_rejected() {
    let raw = r#"
      [[step]]
      action = "delete_user"
      user = "Bob"
    "#;
    assert!(toml::from_str::<Scenario>(raw).is_err());
  }

  #[test]
  fn empty_file_is_an_empty_scenario() {
    let scenario: Scenario = toml::from_str("").unwrap();
    assert!(scenario.steps.is_empty());
  }

  #[test]
  fn bundled_scenario_parses() {
    let raw = include_str!("../../../demos/scenario.toml");
    let scenario: Scenario = toml::from_str(raw).unwrap();
    assert_eq!(scenario.steps.len(), 12);
    assert_eq!(
      scenario.steps[4],
      Step::DatingPost {
        user:       "Lou".into(),
        content:    "Looking for a hiking partner".into(),
        visibility: Visibility::Public,
        seeking:    Gender::Other,
      }
    );
  }

  #[test]
  fn demo_starts_with_registrations() {
    let demo = Scenario::demo();
    assert_eq!(demo.steps.len(), 15);
    assert_eq!(demo.steps[0], Step::Register { user: "Bob".into() });
  }
}
