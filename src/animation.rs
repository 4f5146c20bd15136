//! Elapsed-time frame animation
//!
//! Sprite sheets are described by JSON frame data (source rectangle and
//! per-frame duration) and played by a [`FrameAnimation`] that the host
//! advances by the seconds elapsed since the previous frame.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub duration: Duration,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: u32, height: u32, duration_ms: u64) -> Self {
        Frame {
            x,
            y,
            width,
            height,
            duration: Duration::from_millis(duration_ms),
        }
    }
}

/// Sprite sheet description for one named animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteAnimationConfig {
    /// Path of the PNG sprite sheet
    pub texture: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frames: Vec<FrameData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameData {
    pub x: i32,
    pub y: i32,
    pub duration_ms: u64,
}

impl FrameData {
    pub fn to_frame(&self, width: u32, height: u32) -> Frame {
        Frame::new(self.x, self.y, width, height, self.duration_ms)
    }
}

impl SpriteAnimationConfig {
    /// A horizontal strip of `count` equally sized frames
    pub fn strip(texture: &str, frame_width: u32, frame_height: u32, count: u32, duration_ms: u64) -> Self {
        let frames = (0..count)
            .map(|i| FrameData {
                x: (i * frame_width) as i32,
                y: 0,
                duration_ms,
            })
            .collect();

        SpriteAnimationConfig {
            texture: texture.to_string(),
            frame_width,
            frame_height,
            frames,
        }
    }

    pub fn create_frames(&self) -> Vec<Frame> {
        self.frames
            .iter()
            .map(|frame_data| frame_data.to_frame(self.frame_width, self.frame_height))
            .collect()
    }
}

/// A looping frame sequence driven by elapsed time
#[derive(Debug, Clone)]
pub struct FrameAnimation {
    frames: Vec<Frame>,
    current_frame: usize,
    frame_elapsed: Duration,
    is_playing: bool,
}

impl FrameAnimation {
    /// Creates a stopped animation positioned on the first frame
    pub fn new(frames: Vec<Frame>) -> Self {
        FrameAnimation {
            frames,
            current_frame: 0,
            frame_elapsed: Duration::ZERO,
            is_playing: false,
        }
    }

    pub fn play_forward(&mut self) {
        self.is_playing = true;
    }

    /// Advances the animation by `elapsed` seconds
    ///
    /// Negative, NaN and out-of-range values are ignored.
    pub fn advance(&mut self, elapsed: f64) {
        if !self.is_playing || self.frames.is_empty() {
            return;
        }
        let Ok(mut step) = Duration::try_from_secs_f64(elapsed) else {
            return;
        };

        // Skip whole loops so huge steps stay cheap
        let cycle: Duration = self.frames.iter().map(|f| f.duration).sum();
        if !cycle.is_zero() && step > cycle {
            step = Duration::from_secs_f64(step.as_secs_f64() % cycle.as_secs_f64());
        }

        self.frame_elapsed += step;

        loop {
            let duration = self.frames[self.current_frame].duration;
            if duration.is_zero() {
                // Zero-length frames advance once per call
                self.next_frame();
                self.frame_elapsed = Duration::ZERO;
                break;
            }
            if self.frame_elapsed < duration {
                break;
            }
            self.frame_elapsed -= duration;
            self.next_frame();
        }
    }

    fn next_frame(&mut self) {
        self.current_frame = (self.current_frame + 1) % self.frames.len();
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.get(self.current_frame)
    }

    /// Size of the frame currently shown, (0, 0) for an empty animation
    pub fn current_frame_size(&self) -> (u32, u32) {
        self.current_frame()
            .map(|frame| (frame.width, frame.height))
            .unwrap_or((0, 0))
    }
}
