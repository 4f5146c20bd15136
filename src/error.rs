//! Error types for menu loading
//!
//! Every failure the menu can hit happens while it is being built. Once
//! `IngameMenu::load` succeeds, navigation and animation can no longer fail.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while loading or driving the menu
#[derive(Debug, Error)]
pub enum MenuError {
    /// A sprite sheet, texture or animation could not be loaded
    #[error("failed to load asset '{asset}': {reason}")]
    AssetLoadFailed { asset: String, reason: String },

    /// A screen built an empty item list
    #[error("screen '{0}' has no items")]
    EmptyScreen(&'static str),

    /// An item links to a screen index that was never registered
    #[error("item '{item}' on screen '{screen}' links to unregistered screen {target}")]
    UnknownScreen {
        screen: &'static str,
        item: String,
        target: usize,
    },

    /// The controller was built without any screens
    #[error("menu has no screens")]
    NoScreens,

    /// The menu was driven before `load` succeeded
    #[error("menu used before it was loaded")]
    NotLoaded,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MenuError {
    /// Shorthand for building an `AssetLoadFailed`
    pub fn asset(asset: impl Into<String>, reason: impl Into<String>) -> Self {
        MenuError::AssetLoadFailed {
            asset: asset.into(),
            reason: reason.into(),
        }
    }
}

impl From<MenuError> for String {
    fn from(error: MenuError) -> Self {
        error.to_string()
    }
}
