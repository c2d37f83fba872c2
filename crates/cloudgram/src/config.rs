//! Configuration types for Cloudgram diagram rendering.
//!
//! This module provides configuration structures that control where diagrams
//! are written and how they are styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining output and style settings.
//! - [`OutputConfig`] - Output directory and the interactive display flag.
//! - [`StyleConfig`] - Layout direction and background color.
//!
//! # Example
//!
//! ```
//! # use cloudgram::config::{AppConfig, Direction};
//! let config = AppConfig::default();
//! assert_eq!(config.style().direction(), Direction::LeftToRight);
//! assert!(!config.output().show());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use cloudgram_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified output and style configurations.
    pub fn new(output: OutputConfig, style: StyleConfig) -> Self {
        Self { output, style }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the output configuration for modification.
    pub fn output_mut(&mut self) -> &mut OutputConfig {
        &mut self.output
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Where rendered diagrams go.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving diagram files. Defaults to the working directory.
    #[serde(default)]
    directory: Option<PathBuf>,

    /// Request interactive display of finished diagrams.
    #[serde(default)]
    show: bool,
}

impl OutputConfig {
    pub fn new(directory: Option<PathBuf>, show: bool) -> Self {
        Self { directory, show }
    }

    /// Returns the output directory, `.` if none is configured.
    pub fn directory(&self) -> &Path {
        self.directory.as_deref().unwrap_or_else(|| Path::new("."))
    }

    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) {
        self.directory = Some(directory.into());
    }

    pub fn show(&self) -> bool {
        self.show
    }

    pub fn set_show(&mut self, show: bool) {
        self.show = show;
    }
}

/// Direction in which elements are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Direction {
    /// Left to right.
    #[default]
    #[serde(rename = "LR")]
    LeftToRight,
    /// Right to left.
    #[serde(rename = "RL")]
    RightToLeft,
    /// Top to bottom.
    #[serde(rename = "TB")]
    TopToBottom,
    /// Bottom to top.
    #[serde(rename = "BT")]
    BottomToTop,
}

impl Direction {
    /// Returns `true` for the left-to-right and right-to-left directions.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::LeftToRight | Self::RightToLeft)
    }

    /// Returns `true` when elements are placed against the axis.
    pub fn is_reversed(&self) -> bool {
        matches!(self, Self::RightToLeft | Self::BottomToTop)
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    direction: Direction,

    /// Background color, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn new(direction: Direction, background_color: Option<String>) -> Self {
        Self {
            direction,
            background_color,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}
