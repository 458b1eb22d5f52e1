//! Runtime settings, layered from an optional TOML file and `AGORA_*`
//! environment variables.
//!
//! ```toml
//! [feed]
//! per_user = 2
//! total    = 10
//! ```
//!
//! The same values can be set with `AGORA_FEED__PER_USER` and
//! `AGORA_FEED__TOTAL`.

use std::path::Path;

use agora_core::FeedLimits;
use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub feed: FeedLimits,
}

impl Settings {
  /// Load settings from `path` (if it exists) and the environment. Missing
  /// keys fall back to the defaults.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("AGORA")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise Settings")
  }
}
