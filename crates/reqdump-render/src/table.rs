//! Table data model: titles, chunk limits, and ordered rows.
//!
//! A table is materialized immediately before rendering and consumed
//! synchronously; nothing here survives across render calls. Entry order is
//! significant and preserved — callers sort before insertion if they want
//! sorted output.

use serde::Serialize;
use serde_json::Value;

use crate::error::TableError;
use crate::value::{DescribedValue, NULL_TEXT};

/// Default number of characters of a value shown per physical line.
pub const DEFAULT_CHUNK_LIMIT: usize = 100;

/// One name/value row of a [`StringTable`].
///
/// Missing values are normalized to `"(null)"` at construction so width
/// resolution and rendering only ever see concrete text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    name: String,
    value: String,
}

impl Entry {
    /// Creates an entry with a present value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates an entry from an optional value, normalizing `None` to the
    /// `"(null)"` placeholder.
    pub fn opt(name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Entry {
            name: name.into(),
            value: value.map(Into::into).unwrap_or_else(|| NULL_TEXT.to_string()),
        }
    }

    /// Row name; never empty in practice but not validated here.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized row value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One name/value row of an [`ObjectTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectEntry {
    name: String,
    value: DescribedValue,
}

impl ObjectEntry {
    /// Creates an entry by describing a dynamic value.
    pub fn new(name: impl Into<String>, raw: &Value) -> Self {
        ObjectEntry {
            name: name.into(),
            value: DescribedValue::describe(raw),
        }
    }

    /// Row name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The described value for this row.
    pub fn value(&self) -> &DescribedValue {
        &self.value
    }
}

/// An ordered name → string-value table with a title bar.
///
/// See the [crate docs](crate) for the rendered shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringTable {
    title: String,
    chunk_limit: usize,
    entries: Vec<Entry>,
}

impl StringTable {
    /// Creates an empty table.
    ///
    /// Fails if `chunk_limit` is zero; wrapping needs at least one
    /// character per line.
    pub fn new(title: impl Into<String>, chunk_limit: usize) -> Result<Self, TableError> {
        if chunk_limit == 0 {
            return Err(TableError::InvalidChunkLimit(chunk_limit));
        }
        Ok(StringTable {
            title: title.into(),
            chunk_limit,
            entries: Vec::new(),
        })
    }

    /// Appends a row, preserving insertion order.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Chainable form of [`push`](Self::push) for present values.
    pub fn entry(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(Entry::new(name, value));
        self
    }

    /// Chainable form of [`push`](Self::push) for optional values.
    pub fn entry_opt(mut self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.push(Entry::opt(name, value));
        self
    }

    /// Table title, shown in the bar under the top border.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Maximum characters of a value per physical line.
    pub fn chunk_limit(&self) -> usize {
        self.chunk_limit
    }

    /// Rows in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// An ordered name → dynamic-value table with a title bar.
///
/// Each row shows the value's runtime type label next to its name, with the
/// textual form on the following line(s).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectTable {
    title: String,
    chunk_limit: usize,
    entries: Vec<ObjectEntry>,
}

impl ObjectTable {
    /// Creates an empty table.
    ///
    /// Fails if `chunk_limit` is zero.
    pub fn new(title: impl Into<String>, chunk_limit: usize) -> Result<Self, TableError> {
        if chunk_limit == 0 {
            return Err(TableError::InvalidChunkLimit(chunk_limit));
        }
        Ok(ObjectTable {
            title: title.into(),
            chunk_limit,
            entries: Vec::new(),
        })
    }

    /// Appends a row, preserving insertion order.
    pub fn push(&mut self, name: impl Into<String>, raw: &Value) {
        self.entries.push(ObjectEntry::new(name, raw));
    }

    /// Appends a row from any serializable value by converting it to its
    /// dynamic form first.
    pub fn push_serialize<T: Serialize>(
        &mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<(), TableError> {
        let name = name.into();
        let raw = serde_json::to_value(value).map_err(|source| TableError::Describe {
            name: name.clone(),
            source,
        })?;
        self.entries.push(ObjectEntry::new(name, &raw));
        Ok(())
    }

    /// Chainable form of [`push`](Self::push).
    pub fn entry(mut self, name: impl Into<String>, raw: &Value) -> Self {
        self.push(name, raw);
        self
    }

    /// Table title, shown in the bar under the top border.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Maximum characters of a value per physical line.
    pub fn chunk_limit(&self) -> usize {
        self.chunk_limit
    }

    /// Rows in insertion order.
    pub fn entries(&self) -> &[ObjectEntry] {
        &self.entries
    }
}
