// SPDX-License-Identifier: MIT OR Apache-2.0

//! Column layout for log fields.
//!
//! Log lines are easier to scan when their fields start at the same offsets.
//! [`pad`] appends spaces to a field so that the printed width lands on a
//! tab stop, which keeps consecutive lines aligned even when their field
//! lengths differ.

/// Minimum number of spaces between a field and the next one.
pub const GUTTER: usize = 2;

/// Pads `text` with trailing spaces.
///
/// Short fields (fewer than `min_width` characters) are widened to exactly
/// `min_width + GUTTER`. Longer fields are widened to the next multiple of
/// `column_width` past `len + GUTTER`.
///
/// When `len + GUTTER` is already a multiple of `column_width` a whole extra
/// column is added. Existing log output depends on that, so it stays.
///
/// Length is counted in `char`s. A `column_width` of zero behaves like one.
///
/// ```
/// assert_eq!(logx::pad("ab", 8, 6).len(), 10);
/// assert_eq!(logx::pad(&"a".repeat(60), 56, 4).len(), 64);
/// ```
pub fn pad(text: &str, min_width: usize, column_width: usize) -> String {
    let n = text.chars().count();
    let padding = if n < min_width {
        min_width + GUTTER - n
    } else {
        let column_width = column_width.max(1);
        let columns = (n + GUTTER) / column_width + 1;
        columns * column_width - n
    };
    let mut padded = String::with_capacity(text.len() + padding);
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', padding));
    padded
}
