//! SDL2 menu backend
//!
//! Labels are drawn with the procedural bitmap font from [`crate::text`];
//! selection indicators come from PNG sprite sheets described in
//! [`MenuConfig::animations`].

use super::{AnimatedSprite, Label, MenuBackend, Surface};
use crate::animation::FrameAnimation;
use crate::config::{MenuConfig, MenuLayout};
use crate::error::MenuError;
use crate::text::{draw_simple_text, text_size};
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

impl Surface for Canvas<Window> {
    /// Logical size when one is set, otherwise the output size
    fn size(&self) -> (u32, u32) {
        match self.logical_size() {
            (0, 0) => self.output_size().unwrap_or((0, 0)),
            size => size,
        }
    }
}

/// A menu label rendered with the 5x7 bitmap font
#[derive(Debug, Clone)]
pub struct BitmapLabel {
    text: String,
    scale: u32,
    color: Color,
    position: (i32, i32),
}

impl BitmapLabel {
    pub fn new(scale: u32, color: Color) -> Self {
        BitmapLabel {
            text: String::new(),
            scale,
            color,
            position: (0, 0),
        }
    }
}

impl Label<Canvas<Window>> for BitmapLabel {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn size(&self) -> (u32, u32) {
        text_size(&self.text, self.scale)
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.position = (x, y);
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let (x, y) = self.position;
        draw_simple_text(canvas, &self.text, x, y, self.color, self.scale)
    }
}

/// A sprite sheet animation; the position is its bottom-left corner
pub struct SdlSprite<'a> {
    texture: Rc<RefCell<Texture<'a>>>,
    animation: FrameAnimation,
    blend: bool,
    position: (i32, i32),
}

impl<'a> AnimatedSprite<Canvas<Window>> for SdlSprite<'a> {
    fn play_forward(&mut self) {
        self.animation.play_forward();
    }

    fn set_blend(&mut self, blend: bool) {
        self.blend = blend;
    }

    fn advance(&mut self, elapsed: f64) {
        self.animation.advance(elapsed);
    }

    fn current_frame_size(&self) -> (u32, u32) {
        self.animation.current_frame_size()
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.position = (x, y);
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let Some(frame) = self.animation.current_frame() else {
            return Err("No frames to render".to_string());
        };

        let (x, y) = self.position;
        let src_rect = Rect::new(frame.x, frame.y, frame.width, frame.height);
        let dest_rect = Rect::new(x, y - frame.height as i32, frame.width, frame.height);

        // The texture is shared between sprites, so blend is applied per draw
        let mut texture = self.texture.borrow_mut();
        texture.set_blend_mode(if self.blend {
            BlendMode::Add
        } else {
            BlendMode::Blend
        });
        canvas.copy(&*texture, Some(src_rect), Some(dest_rect))
    }
}

/// Creates bitmap labels and sprite-sheet indicators for the menu
pub struct SdlBackend<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
    config: MenuConfig,
    textures: HashMap<String, Rc<RefCell<Texture<'a>>>>,
}

impl<'a> SdlBackend<'a> {
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>, config: MenuConfig) -> Self {
        SdlBackend {
            texture_creator,
            config,
            textures: HashMap::new(),
        }
    }

    /// Loads a texture once per path and shares it afterwards
    fn texture(&mut self, path: &str) -> Result<Rc<RefCell<Texture<'a>>>, MenuError> {
        if let Some(texture) = self.textures.get(path) {
            return Ok(Rc::clone(texture));
        }

        let creator: &'a TextureCreator<WindowContext> = self.texture_creator;
        let texture = creator
            .load_texture(path)
            .map_err(|e| MenuError::asset(path, e))?;
        let texture = Rc::new(RefCell::new(texture));
        self.textures.insert(path.to_string(), Rc::clone(&texture));

        log::debug!("Loaded menu texture {}", path);
        Ok(texture)
    }
}

impl<'a> MenuBackend for SdlBackend<'a> {
    type Surface = Canvas<Window>;
    type Label = BitmapLabel;
    type Sprite = SdlSprite<'a>;

    fn create_label(&mut self) -> BitmapLabel {
        let [r, g, b] = self.config.label.color;
        BitmapLabel::new(self.config.label.scale, Color::RGB(r, g, b))
    }

    fn load_sprite(&mut self, animation: &str) -> Result<SdlSprite<'a>, MenuError> {
        let anim = self
            .config
            .animations
            .get(animation)
            .cloned()
            .ok_or_else(|| MenuError::asset(animation, "no such animation in menu config"))?;

        let frames = anim.create_frames();
        if frames.is_empty() {
            return Err(MenuError::asset(animation, "animation has no frames"));
        }

        let texture = self.texture(&anim.texture)?;

        Ok(SdlSprite {
            texture,
            animation: FrameAnimation::new(frames),
            blend: false,
            position: (0, 0),
        })
    }

    fn layout(&self) -> MenuLayout {
        self.config.layout
    }
}
