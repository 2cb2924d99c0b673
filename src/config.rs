// SPDX-License-Identifier: MPL-2.0
//! Indicator configuration and its centralized default constants.
//!
//! The config is a plain serializable struct so hosts can persist
//! indicator settings alongside their own preferences. Loading and saving
//! are path-based; the host chooses where the file lives.
//!
//! # Examples
//!
//! ```no_run
//! use iced_paging::config::{self, StripConfig};
//! use std::path::Path;
//!
//! let mut config = StripConfig::default();
//! config.use_swipe_gesture = Some(true);
//!
//! config::save_to_path(&config, Path::new("indicator.toml")).expect("failed to save config");
//! let loaded = config::load_from_path(Path::new("indicator.toml")).expect("failed to load config");
//! assert_eq!(loaded.use_swipe_gesture, Some(true));
//! ```

use crate::error::Result;
use crate::state::Orientation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Default reveal threshold: half of the hidden title must be visible.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.5;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default spacing between adjacent titles, in points.
pub const DEFAULT_TITLE_SPACING: f32 = 16.0;

/// Default height of a title created from a bare width, in points.
pub const DEFAULT_TITLE_HEIGHT: f32 = 24.0;

/// Settings for a paging indicator instance.
///
/// Absent fields fall back to the crate defaults, so a partially written
/// config file stays loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripConfig {
    /// `true` selects pan-drag direct manipulation; `false` (the default)
    /// selects tap-based delegated navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_swipe_gesture: Option<bool>,
    /// Reveal cutoff: values up to 1.0 are a fraction of the title width,
    /// larger values are points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal_threshold: Option<f32>,
    /// Gap between adjacent titles, in points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,
    /// Axis along which titles are arranged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            use_swipe_gesture: Some(false),
            reveal_threshold: Some(DEFAULT_REVEAL_THRESHOLD),
            spacing: Some(DEFAULT_TITLE_SPACING),
            orientation: Some(Orientation::Horizontal),
        }
    }
}

impl StripConfig {
    /// Gesture mode with the default applied.
    #[must_use]
    pub fn swipe_gesture(&self) -> bool {
        self.use_swipe_gesture.unwrap_or(false)
    }

    /// Reveal threshold with the default applied.
    #[must_use]
    pub fn reveal(&self) -> f32 {
        self.reveal_threshold.unwrap_or(DEFAULT_REVEAL_THRESHOLD)
    }

    /// Title spacing with the default applied.
    #[must_use]
    pub fn title_spacing(&self) -> f32 {
        self.spacing.unwrap_or(DEFAULT_TITLE_SPACING)
    }

    /// Layout axis with the default applied.
    #[must_use]
    pub fn axis(&self) -> Orientation {
        self.orientation.unwrap_or_default()
    }
}

/// Loads a configuration from the given TOML file.
pub fn load_from_path(path: &Path) -> Result<StripConfig> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves a configuration to the given TOML file.
pub fn save_to_path(config: &StripConfig, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_config_is_tap_mode() {
        let config = StripConfig::default();
        assert!(!config.swipe_gesture());
        assert_abs_diff_eq!(config.reveal(), DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.axis(), Orientation::Horizontal);
    }

    #[test]
    fn absent_fields_resolve_to_defaults() {
        let config: StripConfig = toml::from_str("").expect("empty config should parse");
        assert!(config.use_swipe_gesture.is_none());
        assert!(!config.swipe_gesture());
        assert_abs_diff_eq!(config.title_spacing(), DEFAULT_TITLE_SPACING);
    }

    #[test]
    fn orientation_parses_from_lowercase() {
        let config: StripConfig =
            toml::from_str("orientation = \"vertical\"").expect("config should parse");
        assert_eq!(config.axis(), Orientation::Vertical);
    }

    #[test]
    fn toml_round_trip_preserves_fields() {
        let config = StripConfig {
            use_swipe_gesture: Some(true),
            reveal_threshold: Some(1.5),
            spacing: Some(8.0),
            orientation: Some(Orientation::Vertical),
        };

        let serialized = toml::to_string_pretty(&config).expect("config should serialize");
        let restored: StripConfig = toml::from_str(&serialized).expect("config should parse");
        assert_eq!(restored, config);
    }
}
