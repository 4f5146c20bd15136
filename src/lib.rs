//! In-game overlay menu
//!
//! A small screen/selection state machine for a game overlay menu: move a
//! highlight up and down a vertical list, drill into sub-screens, and report
//! terminal actions back to the host game. Rendering and assets go through the
//! collaborator traits in [`backend`], with an SDL2 implementation included.

pub mod animation;
pub mod backend;
pub mod config;
pub mod error;
pub mod gui;
pub mod input_system;
pub mod text;

pub use config::MenuConfig;
pub use error::MenuError;
pub use gui::{IngameMenu, MenuAction};
