//! Frame decoding and animation for a 5x5 brightness LED grid.
//!
//! A [`Bitmap`] is a list of text rows. [`Animator`] slides a 5-wide window
//! along it, decodes each character into a brightness, remaps the cell for the
//! chosen [`ScrollDirection`] and writes it into a [`PixelGrid`], which hands
//! one complete buffer per frame to its [`DisplaySink`].

pub mod animation;
pub mod bitmap;
pub mod decoder;
pub mod display;
pub mod mapper;
pub mod renderer;

pub use animation::{
    AnimationStyle, Animator, InputDirection, Pause, ThreadPause, DEFAULT_GAP_MS, MIN_GAP_MS,
};
pub use bitmap::{count_frames, Bitmap};
pub use decoder::{decode, DigitScale};
pub use display::{Batch, Cells, DisplaySink, PixelGrid};
pub use mapper::{map, ScrollDirection};
pub use renderer::GridRenderer;
