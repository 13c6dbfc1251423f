use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::Tab;
use crate::search::StatusFilter;
use crate::Result;

/// Widest occupancy bar a config file may ask for.
pub const MAX_BAR_WIDTH: usize = 200;

/// When to emit ANSI colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Dashboard configuration, read from an optional YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub color: ColorMode,
    /// Width of the occupancy bar in characters, capped at [`MAX_BAR_WIDTH`]
    pub bar_width: usize,
    /// Console prompt, only printed for interactive input
    pub prompt: String,
    /// Status filter selected at startup
    pub filter: StatusFilter,
    /// Tab selected at startup
    pub tab: Tab,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            bar_width: 20,
            prompt: "railboard> ".to_string(),
            filter: StatusFilter::All,
            tab: Tab::Schedule,
        }
    }
}

impl DashboardConfig {
    /// Load a config file. An empty file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml::from_str(raw)?;
        config.bar_width = config.bar_width.min(MAX_BAR_WIDTH);
        Ok(config)
    }

    /// Decide whether to colour output. `--no-color` always wins.
    pub fn use_color(&self, no_color: bool) -> bool {
        if no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
        }
    }
}
