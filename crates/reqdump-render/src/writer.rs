//! Box writing: streams a resolved table into a text sink.
//!
//! One pass, no internal state. The whole entry set is consumed by width
//! resolution before the first line is emitted, then each row is written in
//! order: name cell, then the value wrapped into chunk-limit sized pieces on
//! continuation lines. Every line ends with `\n` so blocks can be appended
//! back to back in one log record.

use crate::resolve::{ObjectWidths, StringWidths};
use crate::table::{Entry, ObjectEntry, ObjectTable, StringTable};
use crate::util::{char_len, char_slice, push_repeat};

impl StringTable {
    /// Renders the bordered block into a fresh string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_to(&mut out);
        out
    }

    /// Appends the bordered block to `out`.
    pub fn render_to(&self, out: &mut String) {
        let widths = self.resolve_widths();
        rule(out, widths.total);
        title_line(out, self.title(), widths.total);
        if self.entries().is_empty() {
            rule(out, widths.total);
            return;
        }
        split_rule(out, widths.name, widths.value);
        for entry in self.entries() {
            self.entry_rows(out, entry, widths);
        }
        split_rule(out, widths.name, widths.value);
    }

    fn entry_rows(&self, out: &mut String, entry: &Entry, widths: StringWidths) {
        let limit = self.chunk_limit();
        out.push('|');
        out.push_str(entry.name());
        push_repeat(out, ' ', widths.name.saturating_sub(char_len(entry.name())));
        out.push('|');

        let text = entry.value();
        let len = char_len(text);
        let lines = len.div_ceil(limit);
        if lines == 0 {
            push_repeat(out, ' ', widths.value);
            out.push('|');
            out.push('\n');
        }
        for i in 0..lines {
            if i < lines - 1 {
                out.push_str(char_slice(text, i * limit, (i + 1) * limit));
                out.push('|');
                out.push('\n');
                // Continuation lines re-open with a blank name cell.
                out.push('|');
                push_repeat(out, ' ', widths.name);
                out.push('|');
            } else if lines > 1 {
                out.push_str(char_slice(text, i * limit, len));
                push_repeat(out, ' ', ((i + 1) * limit).saturating_sub(len));
                out.push('|');
                out.push('\n');
            } else {
                out.push_str(text);
                push_repeat(out, ' ', widths.value.saturating_sub(len));
                out.push('|');
                out.push('\n');
            }
        }
    }
}

impl ObjectTable {
    /// Renders the bordered block into a fresh string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_to(&mut out);
        out
    }

    /// Appends the bordered block to `out`.
    ///
    /// Rows are two-part: a name/type-label line, then one or more value
    /// lines spanning the full content width.
    pub fn render_to(&self, out: &mut String) {
        let widths = self.resolve_widths();
        rule(out, widths.total);
        title_line(out, self.title(), widths.total);
        if self.entries().is_empty() {
            rule(out, widths.total);
            return;
        }
        split_rule(out, widths.name, widths.class);
        for entry in self.entries() {
            self.entry_rows(out, entry, widths);
        }
        rule(out, widths.total);
    }

    fn entry_rows(&self, out: &mut String, entry: &ObjectEntry, widths: ObjectWidths) {
        let limit = self.chunk_limit();
        out.push('|');
        out.push_str(entry.name());
        push_repeat(out, ' ', widths.name.saturating_sub(char_len(entry.name())));
        out.push('|');
        out.push_str(entry.value().type_label());
        push_repeat(
            out,
            ' ',
            widths.class.saturating_sub(char_len(entry.value().type_label())),
        );
        out.push('|');
        out.push('\n');

        let text = entry.value().display_text();
        let len = char_len(text);
        let lines = len.div_ceil(limit);
        if lines == 0 {
            push_repeat(out, ' ', widths.total);
            out.push('|');
            out.push('\n');
        }
        for i in 0..lines {
            out.push('|');
            if i < lines - 1 {
                out.push_str(char_slice(text, i * limit, (i + 1) * limit));
            } else if lines > 1 {
                out.push_str(char_slice(text, i * limit, len));
                push_repeat(out, ' ', ((i + 1) * limit).saturating_sub(len));
            } else {
                out.push_str(text);
                push_repeat(out, ' ', widths.total.saturating_sub(len));
            }
            out.push('|');
            out.push('\n');
        }
    }
}

/// `+`, `width` dashes, `+`.
fn rule(out: &mut String, width: usize) {
    out.push('+');
    push_repeat(out, '-', width);
    out.push('+');
    out.push('\n');
}

/// `|`, title right-padded to `width`, `|`.
fn title_line(out: &mut String, title: &str, width: usize) {
    out.push('|');
    out.push_str(title);
    push_repeat(out, ' ', width.saturating_sub(char_len(title)));
    out.push('|');
    out.push('\n');
}

/// `+`, `left` dashes, `+`, `right` dashes, `+`.
fn split_rule(out: &mut String, left: usize, right: usize) {
    out.push('+');
    push_repeat(out, '-', left);
    out.push('+');
    push_repeat(out, '-', right);
    out.push('+');
    out.push('\n');
}
