use std::ops::Range;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use log::{debug, trace};

use crate::bitmap::Bitmap;
use crate::decoder::DigitScale;
use crate::display::{DisplaySink, PixelGrid, HEIGHT, WIDTH};
use crate::mapper::ScrollDirection;

pub const DEFAULT_GAP_MS: u64 = 200;
pub const MIN_GAP_MS: u64 = 20;

const SLIDE_FRAMES: i32 = 5;

/// Whether the frame window reads each row forwards or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputDirection {
    #[default]
    FirstToLast,
    LastToFirst,
}

impl InputDirection {
    fn column(self, frame_index: i32, x: i32, row_len: usize) -> i32 {
        match self {
            InputDirection::FirstToLast => frame_index + x,
            InputDirection::LastToFirst => (row_len as i32 - (frame_index + x)) - 1,
        }
    }
}

impl FromStr for InputDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "firsttolast" => Ok(InputDirection::FirstToLast),
            "lasttofirst" => Ok(InputDirection::LastToFirst),
            _ => Err(format!("unknown input direction: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationStyle {
    #[default]
    None,
    SlideIn,
    SlideInAndOut,
    SlideOut,
}

impl AnimationStyle {
    /// Frame indices to draw for a bitmap with `frame_count` natural windows.
    pub fn frame_range(self, frame_count: usize) -> Range<i32> {
        let end = frame_count as i32;
        match self {
            AnimationStyle::None => 0..end,
            AnimationStyle::SlideIn => -SLIDE_FRAMES..end,
            AnimationStyle::SlideOut => 0..end + SLIDE_FRAMES,
            AnimationStyle::SlideInAndOut => -SLIDE_FRAMES..end + SLIDE_FRAMES,
        }
    }
}

impl FromStr for AnimationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "none" => Ok(AnimationStyle::None),
            "slidein" => Ok(AnimationStyle::SlideIn),
            "slideinandout" => Ok(AnimationStyle::SlideInAndOut),
            "slideout" => Ok(AnimationStyle::SlideOut),
            _ => Err(format!("unknown animation style: {}", s)),
        }
    }
}

/// Blocks the caller between animation frames.
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}

pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

pub struct Animator<S, P> {
    grid: PixelGrid<S>,
    pause: P,
    scale: DigitScale,
}

impl<S: DisplaySink, P: Pause> Animator<S, P> {
    pub fn new(grid: PixelGrid<S>, pause: P) -> Self {
        Self {
            grid,
            pause,
            scale: DigitScale::default(),
        }
    }

    pub fn with_scale(mut self, scale: DigitScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn get_grid(&self) -> &PixelGrid<S> {
        &self.grid
    }

    pub fn get_grid_mut(&mut self) -> &mut PixelGrid<S> {
        &mut self.grid
    }

    pub fn get_pause(&self) -> &P {
        &self.pause
    }

    /// Renders the window starting at `frame_index` with a single commit.
    pub fn draw_frame(
        &mut self,
        frame_index: i32,
        bitmap: &Bitmap,
        scroll: ScrollDirection,
        input: InputDirection,
    ) {
        if bitmap.is_empty() {
            return;
        }

        let scale = self.scale;
        let mut batch = self.grid.batch();
        for y in 0..HEIGHT as i32 {
            let row = y as usize;
            let row_len = bitmap.row_len(row);
            for x in 0..WIDTH as i32 {
                let column = input.column(frame_index, x, row_len);
                let level = scale.decode(bitmap.cell(row, column), frame_index);
                let (target_x, target_y) = scroll.map(x, y);
                batch.set_level(target_x, target_y, level as i32);
            }
        }
        trace!("frame {} committed", frame_index);
    }

    /// Plays `bitmap` through every frame `style` asks for, pausing `gap_ms`
    /// (at least `MIN_GAP_MS`) between frames. Returns the number of frames
    /// drawn.
    pub fn animate_frames(
        &mut self,
        bitmap: &Bitmap,
        scroll: ScrollDirection,
        input: InputDirection,
        style: AnimationStyle,
        gap_ms: u64,
    ) -> usize {
        if bitmap.is_empty() {
            debug!("empty bitmap, nothing to animate");
            return 0;
        }

        let gap = Duration::from_millis(gap_ms.max(MIN_GAP_MS));
        let frames = style.frame_range(bitmap.frame_count());
        debug!(
            "animating frames {:?} ({:?}, {:?}, {:?}) every {:?}",
            frames, scroll, input, style, gap
        );

        let mut drawn = 0;
        for frame_index in frames {
            if drawn > 0 {
                self.pause.pause(gap);
            }
            self.draw_frame(frame_index, bitmap, scroll, input);
            drawn += 1;
        }
        drawn
    }
}
