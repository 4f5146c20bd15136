//! Screen-Space GUI: the in-game overlay menu
//!
//! # Architecture
//!
//! - [`MenuPage`] - shared list state (items, selection, activation, layout)
//! - [`Screen`] - one page of the menu; variants only choose their items
//! - [`IngameMenu`] - owns the screens, tracks open/closed and the active
//!   screen, and is the single entry point for the host game
//!
//! # Available Screens
//!
//! - [`RootScreen`] - options / save and exit / return to game
//! - [`OptionsScreen`] - sound, video, automap, controls, previous menu
//!
//! Items link to other screens by [`ScreenId`] (an index into the
//! controller's screen list) rather than by reference.

pub mod ingame_menu;
pub mod menu;
pub mod options_screen;
pub mod root_screen;
pub mod screen;

pub use ingame_menu::{IngameMenu, MenuState, OPTIONS_SCREEN};
pub use menu::{ItemTarget, MenuAction, MenuItem, MenuPage};
pub use options_screen::OptionsScreen;
pub use root_screen::RootScreen;
pub use screen::{Confirmation, Screen, ScreenId};
