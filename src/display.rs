use std::ops::{Deref, DerefMut};

pub const WIDTH: usize = 5;
pub const HEIGHT: usize = 5;

pub type Cells = [[u8; WIDTH]; HEIGHT];

/// Receives the full brightness buffer whenever the grid commits.
pub trait DisplaySink {
    fn commit(&mut self, cells: &Cells);
}

/// The 5x5 brightness grid.
///
/// Every write lands in `pixels`; while the grid is suspended the sink is not
/// told about it until the next `resume` or `refresh`.
pub struct PixelGrid<S> {
    pixels: Cells,
    suspended: bool,
    sink: S,
}

impl<S: DisplaySink> PixelGrid<S> {
    pub fn new(sink: S) -> Self {
        Self {
            pixels: [[0; WIDTH]; HEIGHT],
            suspended: false,
            sink,
        }
    }

    pub fn set_level(&mut self, x: i32, y: i32, level: i32) {
        let x = x.clamp(0, WIDTH as i32 - 1) as usize;
        let y = y.clamp(0, HEIGHT as i32 - 1) as usize;
        self.pixels[y][x] = level.clamp(0, 255) as u8;
        if !self.suspended {
            self.refresh();
        }
    }

    pub fn set(&mut self, x: i32, y: i32) {
        self.set_level(x, y, 255);
    }

    pub fn unset(&mut self, x: i32, y: i32) {
        self.set_level(x, y, 0);
    }

    pub fn get_level(&self, x: i32, y: i32) -> u8 {
        let x = x.clamp(0, WIDTH as i32 - 1) as usize;
        let y = y.clamp(0, HEIGHT as i32 - 1) as usize;
        self.pixels[y][x]
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.get_level(x, y) > 0
    }

    pub fn clear(&mut self) {
        let mut batch = self.batch();
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                batch.unset(x, y);
            }
        }
    }

    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    pub fn resume(&mut self) {
        self.suspended = false;
        self.refresh();
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn refresh(&mut self) {
        self.sink.commit(&self.pixels);
    }

    /// Suspends the grid until the returned guard is dropped, which resumes
    /// it and commits once.
    pub fn batch(&mut self) -> Batch<'_, S> {
        self.suspend();
        Batch { grid: self }
    }

    pub fn pixels(&self) -> &Cells {
        &self.pixels
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

pub struct Batch<'a, S: DisplaySink> {
    grid: &'a mut PixelGrid<S>,
}

impl<S: DisplaySink> Deref for Batch<'_, S> {
    type Target = PixelGrid<S>;

    fn deref(&self) -> &Self::Target {
        self.grid
    }
}

impl<S: DisplaySink> DerefMut for Batch<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.grid
    }
}

impl<S: DisplaySink> Drop for Batch<'_, S> {
    fn drop(&mut self) {
        self.grid.resume();
    }
}
