//! Unicode-aware width helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `s` in terminal columns.
///
/// CJK and other wide characters count as two columns.
///
/// ```rust
/// use tabsort_render::display_width;
///
/// assert_eq!(display_width("abc"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads `s` with spaces on the right up to `width` columns.
///
/// Strings already at least `width` wide are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width - current));
    out
}

/// Truncates `s` to at most `max_width` columns, ending with `marker`
/// when anything was cut.
///
/// ```rust
/// use tabsort_render::truncate_end;
///
/// assert_eq!(truncate_end("Hello", 10, "…"), "Hello");
/// assert_eq!(truncate_end("Hello World", 6, "…"), "Hello…");
/// ```
pub fn truncate_end(s: &str, max_width: usize, marker: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let marker_width = display_width(marker);
    if max_width < marker_width {
        return String::new();
    }
    let limit = max_width - marker_width;

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push_str(marker);
    result
}
