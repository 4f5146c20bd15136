//! Recording backend for unit tests
//!
//! Labels and sprites draw into a [`TestSurface`] draw list instead of a
//! window, so layout and forwarding can be asserted without SDL.

use super::{AnimatedSprite, Label, MenuBackend, Surface};
use crate::config::MenuLayout;
use crate::error::MenuError;
use std::collections::HashMap;

pub const LABEL_HEIGHT: u32 = 20;
pub const CHAR_WIDTH: u32 = 10;
pub const SPRITE_SIZE: (u32, u32) = (16, 24);

#[derive(Debug, Clone, PartialEq)]
pub enum Drawn {
    Label { text: String, x: i32, y: i32 },
    Sprite { x: i32, y: i32 },
}

#[derive(Debug, Default)]
pub struct TestSurface {
    pub width: u32,
    pub height: u32,
    pub drawn: Vec<Drawn>,
}

impl TestSurface {
    pub fn new(width: u32, height: u32) -> Self {
        TestSurface {
            width,
            height,
            drawn: Vec::new(),
        }
    }

    pub fn labels(&self) -> Vec<(String, i32, i32)> {
        self.drawn
            .iter()
            .filter_map(|d| match d {
                Drawn::Label { text, x, y } => Some((text.clone(), *x, *y)),
                Drawn::Sprite { .. } => None,
            })
            .collect()
    }

    pub fn sprites(&self) -> Vec<(i32, i32)> {
        self.drawn
            .iter()
            .filter_map(|d| match d {
                Drawn::Sprite { x, y } => Some((*x, *y)),
                Drawn::Label { .. } => None,
            })
            .collect()
    }
}

impl Surface for TestSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[derive(Debug, Clone)]
pub struct TestLabel {
    text: String,
    position: (i32, i32),
    heights: HashMap<String, u32>,
}

impl Label<TestSurface> for TestLabel {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn size(&self) -> (u32, u32) {
        let height = self.heights.get(&self.text).copied().unwrap_or(LABEL_HEIGHT);
        (self.text.chars().count() as u32 * CHAR_WIDTH, height)
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.position = (x, y);
    }

    fn render(&self, surface: &mut TestSurface) -> Result<(), String> {
        surface.drawn.push(Drawn::Label {
            text: self.text.clone(),
            x: self.position.0,
            y: self.position.1,
        });
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestSprite {
    pub playing: bool,
    pub blend: bool,
    pub elapsed: f64,
    pub position: (i32, i32),
}

impl AnimatedSprite<TestSurface> for TestSprite {
    fn play_forward(&mut self) {
        self.playing = true;
    }

    fn set_blend(&mut self, blend: bool) {
        self.blend = blend;
    }

    fn advance(&mut self, elapsed: f64) {
        self.elapsed += elapsed;
    }

    fn current_frame_size(&self) -> (u32, u32) {
        SPRITE_SIZE
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.position = (x, y);
    }

    fn render(&self, surface: &mut TestSurface) -> Result<(), String> {
        surface.drawn.push(Drawn::Sprite {
            x: self.position.0,
            y: self.position.1,
        });
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TestBackend {
    /// Per-text label heights; other labels are `LABEL_HEIGHT` tall
    pub label_heights: HashMap<String, u32>,
    /// Makes every sprite load fail
    pub missing_sprites: bool,
    /// Makes sprite loads fail once this many have succeeded
    pub sprite_limit: Option<usize>,
    pub layout: MenuLayout,
    pub sprites_loaded: usize,
}

impl TestBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label_height(mut self, text: &str, height: u32) -> Self {
        self.label_heights.insert(text.to_string(), height);
        self
    }
}

impl MenuBackend for TestBackend {
    type Surface = TestSurface;
    type Label = TestLabel;
    type Sprite = TestSprite;

    fn create_label(&mut self) -> TestLabel {
        TestLabel {
            text: String::new(),
            position: (0, 0),
            heights: self.label_heights.clone(),
        }
    }

    fn load_sprite(&mut self, animation: &str) -> Result<TestSprite, MenuError> {
        let over_limit = self.sprite_limit.is_some_and(|limit| self.sprites_loaded >= limit);
        if self.missing_sprites || over_limit {
            return Err(MenuError::asset(animation, "file not found"));
        }
        self.sprites_loaded += 1;
        Ok(TestSprite::default())
    }

    fn layout(&self) -> MenuLayout {
        self.layout
    }
}
