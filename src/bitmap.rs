use std::convert::Infallible;
use std::str::FromStr;

use crate::display::WIDTH;

/// Textual image: one string per row, one character per cell.
///
/// Rows may differ in length and anything outside a row reads as `.`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    rows: Vec<Vec<char>>,
}

impl Bitmap {
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of 5-wide windows along the first row.
    pub fn frame_count(&self) -> usize {
        self.rows
            .first()
            .map_or(0, |row| row.len().saturating_sub(WIDTH - 1))
    }

    /// Character at `column` of `row`, where the column may fall outside it.
    pub fn cell(&self, row: usize, column: i32) -> char {
        self.rows
            .get(row)
            .and_then(|chars| usize::try_from(column).ok().and_then(|c| chars.get(c)))
            .copied()
            .unwrap_or('.')
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }
}

impl FromStr for Bitmap {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<&str> = s.lines().collect();
        while rows.last().map_or(false, |row| row.trim().is_empty()) {
            rows.pop();
        }
        Ok(Self::from_rows(rows))
    }
}

pub fn count_frames(bitmap: &Bitmap) -> usize {
    bitmap.frame_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn counts_windows_along_first_row() {
        assert_eq!(count_frames(&Bitmap::from_rows(["12345"])), 1);
        assert_eq!(count_frames(&Bitmap::from_rows(["1234567"])), 3);
        assert_eq!(count_frames(&Bitmap::from_rows(["123"])), 0);
        assert_eq!(count_frames(&Bitmap::from_rows(["12345", "1234567890"])), 1);
    }

    #[test_log::test]
    fn empty_bitmap_has_no_frames() {
        let empty: [&str; 0] = [];
        assert_eq!(count_frames(&Bitmap::from_rows(empty)), 0);
        assert_eq!(count_frames(&Bitmap::default()), 0);
        assert!(Bitmap::default().is_empty());
    }

    #[test_log::test]
    fn cells_outside_rows_are_off() {
        let bitmap = Bitmap::from_rows(["ab", "c"]);
        assert_eq!(bitmap.cell(0, 1), 'b');
        assert_eq!(bitmap.cell(0, 2), '.');
        assert_eq!(bitmap.cell(0, -1), '.');
        assert_eq!(bitmap.cell(1, 1), '.');
        assert_eq!(bitmap.cell(4, 0), '.');
    }

    #[test_log::test]
    fn parses_text_rows() {
        let bitmap: Bitmap = "#...#\r\n.#.#.\n..#..\n\n".parse().unwrap();
        assert_eq!(bitmap.rows(), 3);
        assert_eq!(bitmap.row_len(0), 5);
        assert_eq!(bitmap.cell(2, 2), '#');
        assert_eq!(bitmap.frame_count(), 1);
    }
}
