//! Menu configuration
//!
//! Label style, layout and selection-indicator animations are read from a
//! JSON file. Every field has a default, so a missing file (or a partial one)
//! still yields a usable menu.
//!
//! ```json
//! {
//!   "label": { "scale": 3, "color": [200, 180, 140] },
//!   "layout": { "row_stride": "per_item", "indicator_margin": 100 }
//! }
//! ```

use crate::animation::SpriteAnimationConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the spinning selection indicator animation
pub const SELECTION_ANIMATION: &str = "pent_spin";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read menu config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse menu config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How far each row moves down from the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStride {
    /// Each row advances by its own label height
    #[default]
    PerItem,
    /// Every row advances by the first label's height
    FirstItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuLayout {
    pub row_stride: RowStride,

    /// Horizontal distance of the indicators from the surface edges
    pub indicator_margin: i32,
}

impl Default for MenuLayout {
    fn default() -> Self {
        MenuLayout {
            row_stride: RowStride::PerItem,
            indicator_margin: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Bitmap font scale (1 = 5x7 pixel glyphs)
    pub scale: u32,

    /// RGB text color
    pub color: [u8; 3],
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle {
            scale: 3,
            color: [200, 180, 140],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub label: LabelStyle,
    pub layout: MenuLayout,
    pub animations: HashMap<String, SpriteAnimationConfig>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let mut animations = HashMap::new();
        animations.insert(
            SELECTION_ANIMATION.to_string(),
            SpriteAnimationConfig::strip("assets/menu/pent_spin.png", 48, 48, 8, 60),
        );

        MenuConfig {
            label: LabelStyle::default(),
            layout: MenuLayout::default(),
            animations,
        }
    }
}

impl MenuConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: MenuConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads the config at `path`, falling back to defaults if it doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No menu config at {}, using defaults", path.display());
            return Ok(MenuConfig::default());
        }

        let config = Self::load_from_file(path)?;
        log::info!("Loaded menu config from {}", path.display());
        Ok(config)
    }

    /// `<config dir>/ingame_menu/menu.json`, or `./menu.json` without a config dir
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("ingame_menu/menu.json"))
            .unwrap_or_else(|| PathBuf::from("./menu.json"))
    }
}
