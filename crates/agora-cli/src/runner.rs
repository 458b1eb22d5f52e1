//! Applies scenario steps to a [`Directory`] and writes what happened.
//!
//! Directory errors never stop a run: each one is written as a notice and
//! the next step proceeds. Only output failures are fatal.

use std::{fmt, io::Write};

use agora_core::{
  Directory,
  view::{Feed, Matches, Transcript, Wall},
};
use clap::ValueEnum;
use serde::Serialize;

use crate::scenario::Step;

// ─── Output ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  /// Human-readable console lines.
  #[default]
  Text,
  /// One JSON object per line.
  Json,
}

/// Something worth reporting after a step.
#[derive(Debug, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Event<'a> {
  Registered { user: &'a str },
  Followed { follower: &'a str, target: &'a str },
  Wall(Wall<'a>),
  Feed(Feed<'a>),
  Matches(Matches<'a>),
  Transcript(Transcript<'a>),
  Notice { message: String },
}

impl fmt::Display for Event<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Registered { user } => write!(f, "Register user {user}"),
      Self::Followed { follower, target } => {
        write!(f, "{follower} follows {target}")
      }
      Self::Wall(wall) => fmt::Display::fmt(wall, f),
      Self::Feed(feed) => fmt::Display::fmt(feed, f),
      Self::Matches(matches) => fmt::Display::fmt(matches, f),
      Self::Transcript(transcript) => fmt::Display::fmt(transcript, f),
      Self::Notice { message } => f.write_str(message),
    }
  }
}

// ─── Runner ──────────────────────────────────────────────────────────────────

pub struct Runner<W> {
  directory: Directory,
  out:       W,
  format:    OutputFormat,
}

impl<W: Write> Runner<W> {
  pub fn new(directory: Directory, out: W, format: OutputFormat) -> Self {
    Self {
      directory,
      out,
      format,
    }
  }

  pub fn run(&mut self, steps: &[Step]) -> anyhow::Result<()> {
    for step in steps {
      self.run_step(step)?;
    }
    self.out.flush()?;
    Ok(())
  }

  pub fn run_step(&mut self, step: &Step) -> anyhow::Result<()> {
    tracing::debug!(?step, "applying step");
    let event = match apply(&mut self.directory, step) {
      Ok(Some(event)) => event,
      Ok(None) => return Ok(()),
      Err(e) => {
        tracing::debug!(error = %e, "step rejected");
        Event::Notice {
          message: e.to_string(),
        }
      }
    };
    write_event(&mut self.out, self.format, &event)
  }

  pub fn directory(&self) -> &Directory { &self.directory }
}

fn apply<'d>(
  directory: &'d mut Directory,
  step: &'d Step,
) -> agora_core::Result<Option<Event<'d>>> {
  let event = match step {
    Step::Register { user } => {
      directory.register_user(user)?;
      Event::Registered { user }
    }
    Step::TextPost {
      user,
      content,
      visibility,
    } => {
      directory.add_text_post(user, content, *visibility)?;
      return Ok(None);
    }
    Step::DatingPost {
      user,
      content,
      visibility,
      seeking,
    } => {
      directory.add_dating_post(user, content, *visibility, *seeking)?;
      return Ok(None);
    }
    Step::Follow { user, target } => {
      directory.follow_user(user, target)?;
      Event::Followed {
        follower: user,
        target,
      }
    }
    Step::ShowWall { user } => Event::Wall(directory.show_user_wall(user)?),
    Step::ShowFeed { user } => Event::Feed(directory.show_user_feed(user)?),
    Step::Match { user } => Event::Matches(directory.match_users(user)?),
    Step::AddBlock { user, block } => {
      directory.add_block(user, block)?;
      return Ok(None);
    }
    Step::AddGrade {
      user,
      block,
      value,
      course,
    } => {
      directory.add_grade_to_block(user, block, *value, course)?;
      return Ok(None);
    }
    Step::ShowBlocks { user } => {
      Event::Transcript(directory.show_user_blocks(user)?)
    }
  };
  Ok(Some(event))
}

fn write_event<W: Write>(
  out: &mut W,
  format: OutputFormat,
  event: &Event<'_>,
) -> anyhow::Result<()> {
  match format {
    OutputFormat::Text => writeln!(out, "{event}")?,
    OutputFormat::Json => {
      serde_json::to_writer(&mut *out, event)?;
      writeln!(out)?;
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use agora_core::FeedLimits;

  use super::*;
  use crate::scenario::Scenario;

  fn run(steps: &[Step], format: OutputFormat) -> String {
    let mut buf = Vec::new();
    Runner::new(Directory::new(), &mut buf, format)
      .run(steps)
      .unwrap();
    String::from_utf8(buf).unwrap()
  }

  #[test]
  fn demo_transcript() {
    let output = run(&Scenario::demo().steps, OutputFormat::Text);
    let expected = "\
Register user Bob
Register user Alice
Register user Fragile
---- Show Bob wall ---
Text Post by Bob: This is fine.
---
---- Show Alice wall ---
---
Bob follows Alice
Bob follows Fragile
-- Show Bob feed ----
Text Post by Fragile: A cryptobiote a day keeps the Timefall away.
----
Potential matches for Bob:
-- Show Grades & Blocks for Bob ----
Block: Block A
- Course: Math, Grade: 85
----
";
    assert_eq!(output, expected);
  }

  #[test]
  fn errors_become_notices_and_the_run_continues() {
    let steps = vec![
      Step::Register { user: "Bob".into() },
      Step::Register { user: "Bob".into() },
      Step::Follow {
        user:   "Bob".into(),
        target: "Ghost".into(),
      },
      Step::AddGrade {
        user:   "Bob".into(),
        block:  "Block A".into(),
        value:  85,
        course: "Math".into(),
      },
      Step::Register { user: "Alice".into() },
      Step::Follow {
        user:   "Bob".into(),
        target: "Alice".into(),
      },
      Step::Follow {
        user:   "Bob".into(),
        target: "Alice".into(),
      },
    ];
    let output = run(&steps, OutputFormat::Text);
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(
      lines,
      [
        "Register user Bob",
        "Username Bob already registered",
        "Username Ghost does not exist",
        "Block not found.",
        "Register user Alice",
        "Bob follows Alice",
        "Bob has already followed Alice",
      ]
    );
  }

  #[test]
  fn json_output_is_one_object_per_event() {
    let steps = vec![
      Step::Register { user: "Bob".into() },
      Step::TextPost {
        user:       "Bob".into(),
        content:    "hi".into(),
        visibility: agora_core::post::Visibility::Public,
      },
      Step::ShowWall { user: "Bob".into() },
      Step::ShowWall { user: "Nobody".into() },
    ];
    let output = run(&steps, OutputFormat::Json);
    let events: Vec<serde_json::Value> = output
      .lines()
      .map(|l| serde_json::from_str(l).unwrap())
      .collect();

    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["event"], "registered");
    assert_eq!(events[0]["data"]["user"], "Bob");
    assert_eq!(events[1]["event"], "wall");
    assert_eq!(events[1]["data"]["posts"][0]["content"], "hi");
    assert_eq!(events[1]["data"]["posts"][0]["kind"]["type"], "text");
    assert_eq!(events[2]["event"], "notice");
    assert_eq!(events[2]["data"]["message"], "Username Nobody does not exist");
  }

  #[test]
  fn feed_respects_directory_limits() {
    let limits = FeedLimits {
      per_user: 1,
      total:    10,
    };
    let mut steps = vec![
      Step::Register { user: "Viewer".into() },
      Step::Register { user: "A".into() },
    ];
    for content in ["first", "second"] {
      steps.push(Step::TextPost {
        user:       "A".into(),
        content:    content.into(),
        visibility: agora_core::post::Visibility::Public,
      });
    }
    steps.push(Step::Follow {
      user:   "Viewer".into(),
      target: "A".into(),
    });
    steps.push(Step::ShowFeed {
      user: "Viewer".into(),
    });

    let mut buf = Vec::new();
    let mut runner =
      Runner::new(Directory::with_limits(limits), &mut buf, OutputFormat::Text);
    runner.run(&steps).unwrap();
    assert_eq!(runner.directory().limits(), limits);
    drop(runner);

    let output = String::from_utf8(buf).unwrap();
    assert!(output.ends_with(
      "-- Show Viewer feed ----\nText Post by A: first\n----\n"
    ));
  }
}
