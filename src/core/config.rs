//! Simulation configuration
//!
//! Run-loop tunables collected in one place, loadable from TOML. A config is
//! a plain value: callers hand it to `AutoEngine::apply_config`, which turns
//! it into an installed run condition. There is no global config instance.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{ParticulateError, Result};

/// Configuration for the automatic engine's run loop
///
/// All limits are optional; the default config runs forever, matching the
/// engine's default always-true continuation predicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Maximum number of frames to run before stopping
    ///
    /// `None` means unbounded. The frame loop has do-while semantics, so the
    /// smallest meaningful budget is 1; a budget of 0 is rejected by
    /// `validate`.
    pub max_frames: Option<u64>,

    /// Stop the run once the scene contains no particles
    ///
    /// Checked at the frame boundary, after the `before_next` hook, so a hook
    /// that drains the scene still sees its own frame complete.
    pub stop_when_empty: bool,

    /// Capacity hint for scene construction
    ///
    /// Passed to `Scene::with_capacity` by scene builders. Purely an
    /// allocation hint; scenes grow past it freely.
    pub initial_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_frames: None,
            stop_when_empty: false,
            initial_capacity: 64,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_frames == Some(0) {
            return Err("max_frames must be at least 1 (the frame loop always runs once)".into());
        }
        Ok(())
    }

    /// Parse a config from a TOML string and validate it
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate().map_err(ParticulateError::InvalidConfig)?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
