//! Ballloop configuration file handling

use anyhow::{bail, Context, Result};
use ballloop_animation::LoaderConfig;
use ballloop_core::{Color, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name
pub const CONFIG_FILE: &str = "ballloop.toml";

/// Top-level configuration (ballloop.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BallloopConfig {
    #[serde(default)]
    pub loader: LoaderSection,
    #[serde(default)]
    pub viewport: ViewportSection,
}

/// Animation settings
#[derive(Debug, Deserialize, Serialize)]
pub struct LoaderSection {
    /// Seconds per loop
    #[serde(default = "default_duration")]
    pub duration: f32,
    /// `#RRGGBB` or `#RRGGBBAA`
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default)]
    pub bounce: bool,
}

fn default_duration() -> f32 {
    15.0
}

fn default_primary_color() -> String {
    "#1E88E5".to_string()
}

fn default_secondary_color() -> String {
    "#FB8C00".to_string()
}

impl Default for LoaderSection {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            bounce: false,
        }
    }
}

/// Logical viewport the loader is laid out in
#[derive(Debug, Deserialize, Serialize)]
pub struct ViewportSection {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    200.0
}

fn default_height() -> f32 {
    300.0
}

impl Default for ViewportSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl BallloopConfig {
    /// Load configuration from a file, or from `ballloop.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            bail!(
                "No config found at {}. Run `ballloop init` to create one.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Engine configuration, with colors parsed
    pub fn loader_config(&self) -> Result<LoaderConfig> {
        let primary = parse_hex_color(&self.loader.primary_color)
            .context("Invalid loader.primary_color")?;
        let secondary = parse_hex_color(&self.loader.secondary_color)
            .context("Invalid loader.secondary_color")?;

        Ok(LoaderConfig::default()
            .with_duration(self.loader.duration)
            .with_colors(primary, secondary)
            .with_bounce(self.loader.bounce))
    }

    pub fn viewport(&self) -> Size {
        Size::new(self.viewport.width, self.viewport.height)
    }
}

/// Parse `#RRGGBB` / `#RRGGBBAA` (the leading `#` is optional)
pub fn parse_hex_color(input: &str) -> Result<Color> {
    let digits = input.trim().trim_start_matches('#');
    if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("expected #RRGGBB or #RRGGBBAA, got {input:?}");
    }

    let value = u32::from_str_radix(digits, 16)?;
    let color = if digits.len() == 8 {
        Color::from_rgba_hex(value)
    } else {
        Color::from_hex(value)
    };
    Ok(color)
}
