use std::str::FromStr;

pub const FULL: u8 = 255;
pub const OFF: u8 = 0;

const LEGACY_LEVELS: [u8; 10] = [0, 28, 56, 84, 112, 140, 168, 196, 224, 255];

/// How the digits `1`-`9` map onto brightness.
///
/// `Linear` is `round(255 / 9 * digit)`. `Legacy` is the older fixed table,
/// which disagrees with `Linear` for most digits (5 is 140 instead of 142).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitScale {
    #[default]
    Linear,
    Legacy,
}

impl DigitScale {
    pub fn level(self, digit: u32) -> u8 {
        let level = match self {
            DigitScale::Linear => (255.0 / 9.0 * digit as f64).round() as u8,
            DigitScale::Legacy => LEGACY_LEVELS[digit.min(9) as usize],
        };
        // A lit digit must never collide with "off".
        if level == OFF {
            FULL
        } else {
            level
        }
    }

    pub fn decode(self, ch: char, frame_index: i32) -> u8 {
        let even = frame_index.rem_euclid(2) == 0;
        match ch {
            '1'..='9' => self.level(ch.to_digit(10).unwrap_or(9)),
            '|' | '#' | '$' => FULL,
            'F' if even => OFF,
            'F' => FULL,
            'f' if even => FULL,
            'f' => OFF,
            _ => OFF,
        }
    }
}

impl FromStr for DigitScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(DigitScale::Linear),
            "legacy" | "table" => Ok(DigitScale::Legacy),
            other => Err(format!("unknown digit scale: {}", other)),
        }
    }
}

/// Brightness of one bitmap character, using the linear digit scale.
pub fn decode(ch: char, frame_index: i32) -> u8 {
    DigitScale::Linear.decode(ch, frame_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn off_characters() {
        for ch in ['.', ' ', '0', 'x', 'Z', '?'] {
            for frame in -2..3 {
                assert_eq!(decode(ch, frame), 0, "{:?} at frame {}", ch, frame);
            }
        }
    }

    #[test_log::test]
    fn digits_scale_linearly() {
        let expected = [28, 57, 85, 113, 142, 170, 198, 227, 255];
        for (digit, &level) in ('1'..='9').zip(expected.iter()) {
            assert_eq!(decode(digit, 0), level);
            assert_eq!(decode(digit, 7), level);
        }
    }

    #[test_log::test]
    fn legacy_table_differs_from_linear() {
        assert_eq!(DigitScale::Legacy.decode('5', 0), 140);
        assert_eq!(DigitScale::Linear.decode('5', 0), 142);
        assert_eq!(DigitScale::Legacy.decode('9', 0), 255);
        assert_eq!(DigitScale::Legacy.decode('1', 0), 28);
    }

    #[test_log::test]
    fn zero_level_is_promoted_to_full() {
        assert_eq!(DigitScale::Linear.level(0), FULL);
        assert_eq!(DigitScale::Legacy.level(0), FULL);
    }

    #[test_log::test]
    fn full_brightness_aliases() {
        for ch in ['|', '#', '$'] {
            assert_eq!(decode(ch, 0), 255);
            assert_eq!(decode(ch, 1), 255);
        }
    }

    #[test_log::test]
    fn flashing_cells_alternate_in_opposite_phase() {
        assert_eq!(decode('F', 0), 0);
        assert_eq!(decode('F', 1), 255);
        assert_eq!(decode('f', 0), 255);
        assert_eq!(decode('f', 1), 0);
    }

    #[test_log::test]
    fn flash_parity_for_negative_frames() {
        assert_eq!(decode('F', -1), 255);
        assert_eq!(decode('F', -2), 0);
        assert_eq!(decode('f', -5), 0);
    }

    #[test_log::test]
    fn parses_scale_names() {
        assert_eq!("linear".parse(), Ok(DigitScale::Linear));
        assert_eq!("Legacy".parse(), Ok(DigitScale::Legacy));
        assert!("cubic".parse::<DigitScale>().is_err());
    }
}
