//! Rendering and asset collaborators
//!
//! The menu core never draws anything itself. It talks to three small
//! capabilities supplied by the host:
//!
//! - [`Surface`] - the render target, only queried for its size
//! - [`Label`] - a positioned line of text that knows its own size
//! - [`AnimatedSprite`] - a positioned, time-advanced sprite animation
//!
//! A [`MenuBackend`] ties them together and creates labels/sprites during
//! `load`. The SDL2 implementation lives in [`sdl`].

pub mod sdl;

#[cfg(test)]
pub mod testing;

use crate::config::MenuLayout;
use crate::error::MenuError;

/// A render target
pub trait Surface {
    /// Width and height in pixels
    fn size(&self) -> (u32, u32);
}

/// A line of text drawn at an explicit position
pub trait Label<S: Surface> {
    fn set_text(&mut self, text: &str);

    fn text(&self) -> &str;

    /// Rendered width and height in pixels
    fn size(&self) -> (u32, u32);

    fn set_position(&mut self, x: i32, y: i32);

    fn render(&self, surface: &mut S) -> Result<(), String>;
}

/// A looping sprite animation drawn at an explicit position
pub trait AnimatedSprite<S: Surface> {
    fn play_forward(&mut self);

    /// Additive blending on/off
    fn set_blend(&mut self, blend: bool);

    /// Advances the animation by `elapsed` seconds
    fn advance(&mut self, elapsed: f64);

    fn current_frame_size(&self) -> (u32, u32);

    fn set_position(&mut self, x: i32, y: i32);

    fn render(&self, surface: &mut S) -> Result<(), String>;
}

/// Factory for the collaborators a menu screen needs
pub trait MenuBackend {
    type Surface: Surface;
    type Label: Label<Self::Surface>;
    type Sprite: AnimatedSprite<Self::Surface>;

    fn create_label(&mut self) -> Self::Label;

    /// Loads the named sprite animation
    fn load_sprite(&mut self, animation: &str) -> Result<Self::Sprite, MenuError>;

    fn layout(&self) -> MenuLayout {
        MenuLayout::default()
    }
}
