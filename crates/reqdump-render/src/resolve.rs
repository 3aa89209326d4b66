//! Width resolution for table columns.
//!
//! Widths are computed from every entry before the first line is emitted:
//! the block must be as narrow as possible while still fitting the title and
//! the (possibly wrapped) widest value. All figures are character counts.
//!
//! The value-column tracking is order-sensitive: a value longer than the
//! chunk limit sets the column to exactly the chunk limit, overriding any
//! wider in-limit value seen earlier. Consumers parse the resulting layout,
//! so the scan below must not be replaced with a plain clamped maximum.

use crate::table::{ObjectTable, StringTable};
use crate::util::char_len;

/// Resolved column widths for a [`StringTable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StringWidths {
    /// Width of the name column.
    pub name: usize,
    /// Width of the value column.
    pub value: usize,
    /// Total content width; every border line spans exactly this many dashes.
    pub total: usize,
}

/// Resolved column widths for an [`ObjectTable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjectWidths {
    /// Width of the name column.
    pub name: usize,
    /// Width of the type-label column.
    pub class: usize,
    /// Total content width; doubles as the width of the value lines.
    pub total: usize,
}

impl StringTable {
    /// Computes name/value column widths and the block's total width.
    ///
    /// An empty table degrades to zero-width columns with the title alone
    /// determining the total; this never fails.
    pub fn resolve_widths(&self) -> StringWidths {
        let mut name = 0;
        let mut value = 0;
        let mut total = char_len(self.title());
        if !self.entries().is_empty() {
            for entry in self.entries() {
                name = name.max(char_len(entry.name()));
                let len = char_len(entry.value());
                if len <= self.chunk_limit() && len > value {
                    value = len;
                } else if len > self.chunk_limit() {
                    value = self.chunk_limit();
                }
            }
            if name + value + 1 > total {
                total = name + value + 1;
            } else {
                // Title drives the width; stretch the value column so the
                // two columns exactly fill the title bar.
                value = total - (name + 1);
            }
        }
        StringWidths { name, value, total }
    }
}

impl ObjectTable {
    /// Computes name/class column widths and the block's total width.
    ///
    /// The total is seeded with the title length and tracked against each
    /// value's display text, then reconciled against the name and class
    /// columns; the value lines span the full total width.
    pub fn resolve_widths(&self) -> ObjectWidths {
        let mut name = 0;
        let mut class = 0;
        let mut total = char_len(self.title());
        if !self.entries().is_empty() {
            for entry in self.entries() {
                name = name.max(char_len(entry.name()));
                class = class.max(char_len(entry.value().type_label()));
                let len = char_len(entry.value().display_text());
                if len <= self.chunk_limit() && len > total {
                    total = len;
                } else if len > self.chunk_limit() {
                    total = self.chunk_limit();
                }
            }
            if name + class + 1 > total {
                total = name + class + 1;
            } else {
                class = total - (name + 1);
            }
        }
        ObjectWidths { name, class, total }
    }
}
