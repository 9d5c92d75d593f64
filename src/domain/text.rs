use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Separator placed between logos on the marquee track
pub const MARQUEE_SEPARATOR: &str = "   •   ";

/// Build one period of the marquee track
pub fn marquee_track(logos: &[String]) -> String {
    if logos.is_empty() {
        return String::new();
    }

    let mut track = logos.join(MARQUEE_SEPARATOR);
    track.push_str(MARQUEE_SEPARATOR);
    track
}

/// Visible slice of an endlessly repeating track.
///
/// `offset` is measured in columns and wraps at the track width. Wide
/// characters that would straddle the left edge are replaced by spaces so the
/// result is always exactly `width` columns.
pub fn marquee_window(track: &str, offset: usize, width: usize) -> String {
    let track_width = track.width();
    if track_width == 0 || width == 0 {
        return String::new();
    }

    let mut skip = offset % track_width;
    let mut result = String::with_capacity(width);
    let mut filled = 0;

    for c in track.chars().cycle() {
        let char_width = c.width().unwrap_or(0);
        if skip > 0 {
            if char_width > skip {
                // Only the right part of a wide char is visible
                for _ in 0..(char_width - skip).min(width - filled) {
                    result.push(' ');
                    filled += 1;
                }
                skip = 0;
            } else {
                skip -= char_width;
            }
            continue;
        }

        if filled + char_width > width {
            break;
        }
        result.push(c);
        filled += char_width;
        if filled == width {
            break;
        }
    }

    while filled < width {
        result.push(' ');
        filled += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_marquee_track() {
        let logos = vec!["Ford".to_string(), "Kia".to_string()];
        assert_eq!(marquee_track(&logos), "Ford   •   Kia   •   ");
        assert_eq!(marquee_track(&[]), "");
    }

    #[test]
    fn test_marquee_window_wraps() {
        assert_eq!(marquee_window("abc", 0, 5), "abcab");
        assert_eq!(marquee_window("abc", 1, 5), "bcabc");
        assert_eq!(marquee_window("abc", 4, 2), "bc");
    }

    #[test]
    fn test_marquee_window_wide_chars() {
        // "あ" is two columns wide
        assert_eq!(marquee_window("あb", 0, 3), "あb");
        assert_eq!(marquee_window("あb", 1, 3), " b ");
        assert_eq!(marquee_window("あb", 1, 3).width(), 3);
    }

    #[test]
    fn test_marquee_window_empty() {
        assert_eq!(marquee_window("", 3, 10), "");
        assert_eq!(marquee_window("abc", 3, 0), "");
    }
}
