//! Character-based measurement and slicing helpers.
//!
//! Column widths and chunk boundaries throughout this crate are measured in
//! Unicode scalar values, never bytes. Blocks land in log files rather than
//! on a terminal, so display-column math (CJK double width, ANSI escapes)
//! deliberately does not apply here; a character is a character.

/// Returns the number of Unicode scalar values in `s`.
///
/// # Example
///
/// ```rust
/// use reqdump_render::char_len;
///
/// assert_eq!(char_len("hello"), 5);
/// assert_eq!(char_len("héllo"), 5);
/// ```
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Slices `s` by character positions `[start, end)`.
///
/// Both bounds saturate at the end of the string, so over-long ranges return
/// the available tail instead of panicking. Never splits a `char`.
///
/// # Example
///
/// ```rust
/// use reqdump_render::char_slice;
///
/// assert_eq!(char_slice("héllo", 1, 3), "él");
/// assert_eq!(char_slice("hi", 0, 10), "hi");
/// ```
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    &s[char_boundary(s, start)..char_boundary(s, end)]
}

/// Appends `n` copies of `ch` to `out`.
pub(crate) fn push_repeat(out: &mut String, ch: char, n: usize) {
    out.extend(std::iter::repeat_n(ch, n));
}

/// Byte index of the `n`th character boundary, saturating at the end.
fn char_boundary(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}
