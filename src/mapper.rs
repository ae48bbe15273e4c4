use std::str::FromStr;

use crate::display::{HEIGHT, WIDTH};

const LAST_X: i32 = WIDTH as i32 - 1;
const LAST_Y: i32 = HEIGHT as i32 - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    LeftToRight,
    #[default]
    RightToLeft,
    BottomToTop,
    TopToBottom,
}

impl ScrollDirection {
    /// Physical cell lit by window cell `(x, y)`.
    pub fn map(self, x: i32, y: i32) -> (i32, i32) {
        match self {
            ScrollDirection::RightToLeft => (x, y),
            ScrollDirection::LeftToRight => (LAST_X - x, y),
            ScrollDirection::TopToBottom => (y, LAST_Y - x),
            ScrollDirection::BottomToTop => (LAST_Y - y, x),
        }
    }
}

impl FromStr for ScrollDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "lefttoright" => Ok(ScrollDirection::LeftToRight),
            "righttoleft" => Ok(ScrollDirection::RightToLeft),
            "bottomtotop" => Ok(ScrollDirection::BottomToTop),
            "toptobottom" => Ok(ScrollDirection::TopToBottom),
            _ => Err(format!("unknown scroll direction: {}", s)),
        }
    }
}

pub fn map(x: i32, y: i32, direction: ScrollDirection) -> (i32, i32) {
    direction.map(x, y)
}
