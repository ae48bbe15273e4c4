use crate::display::{Cells, WIDTH};

const LED: [u8; 3] = [0xFF, 0x20, 0x10];

pub struct GridRenderer;

impl GridRenderer {
    /// Paints a committed brightness buffer into a `WIDTH x HEIGHT` RGBA frame.
    pub fn draw(&self, cells: &Cells, output_frame: &mut [u8]) {
        for (i, pixel) in output_frame.chunks_exact_mut(4).enumerate() {
            let x = i % WIDTH;
            let y = i / WIDTH;
            let level = cells.get(y).map_or(0, |row| row[x]) as u16;
            let color = [
                (LED[0] as u16 * level / 255) as u8,
                (LED[1] as u16 * level / 255) as u8,
                (LED[2] as u16 * level / 255) as u8,
                0xFF,
            ];
            pixel.copy_from_slice(&color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::HEIGHT;

    #[test_log::test]
    fn scales_led_color_by_brightness() {
        let mut cells = [[0; WIDTH]; HEIGHT];
        cells[0][0] = 255;
        cells[4][4] = 128;
        let mut frame = vec![0x55; WIDTH * HEIGHT * 4];
        GridRenderer.draw(&cells, &mut frame);

        assert_eq!(frame[0..4], [0xFF, 0x20, 0x10, 0xFF]);
        assert_eq!(frame[4..8], [0, 0, 0, 0xFF]);
        let last = (WIDTH * HEIGHT - 1) * 4;
        assert_eq!(frame[last..last + 4], [128, 16, 8, 0xFF]);
    }
}
