//! Display width helpers for terminal text.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut a window of `width` columns out of `s`, starting `skip` columns in,
/// and pad the result with spaces to exactly `width` columns.
///
/// A wide character straddling either edge of the window is replaced by
/// spaces so the output never exceeds `width` columns.
pub fn clip_columns(s: &str, skip: usize, width: usize) -> String {
    let mut result = String::new();
    let mut column = 0;
    let mut used = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        let start = column;
        column += ch_width;

        if column <= skip {
            continue;
        }
        if start < skip {
            // Left half scrolled away
            let visible = (column - skip).min(width - used);
            result.extend(std::iter::repeat_n(' ', visible));
            used += visible;
            continue;
        }
        if used + ch_width > width {
            break;
        }
        result.push(ch);
        used += ch_width;
    }

    if used < width {
        result.extend(std::iter::repeat_n(' ', width - used));
    }
    result
}
