//! # Reqdump Render - Bordered Diagnostic Tables
//!
//! `reqdump-render` formats ordered name/value snapshots into fixed-width,
//! bordered text blocks suitable for a log stream. It is the rendering
//! foundation for the `reqdump` request-dump crate, but can be used
//! independently for any diagnostic output that wants aligned boxes.
//!
//! ## Core Concepts
//!
//! - [`StringTable`]: an ordered mapping of name → string value
//! - [`ObjectTable`]: an ordered mapping of name → dynamic value, rendered
//!   alongside the label of the value's runtime type
//! - [`Entry`] / [`DescribedValue`]: one row's worth of data, with missing
//!   values normalized to the `"(null)"` / `"(n/a)"` placeholders
//! - Chunk limit: values longer than the limit wrap across continuation
//!   lines instead of being truncated
//!
//! Row order is insertion order; the renderer imposes no sort of its own.
//! Width resolution is order-sensitive in one deliberate way: a value longer
//! than the chunk limit forces the value column down to the chunk limit even
//! when a wider in-limit value was already seen. Existing consumers of these
//! blocks parse that exact layout, so it is part of the output contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use reqdump_render::StringTable;
//!
//! let table = StringTable::new("Request Headers", 100)
//!     .unwrap()
//!     .entry("Accept", "*/*")
//!     .entry("Host", "example.com");
//!
//! let expected = "\
//! +------------------+
//! |Request Headers   |
//! +------+-----------+
//! |Accept|*/*        |
//! |Host  |example.com|
//! +------+-----------+
//! ";
//! assert_eq!(table.render(), expected);
//! ```
//!
//! ## Wrapping
//!
//! Values longer than the chunk limit continue on following physical lines,
//! aligned under the value column:
//!
//! ```rust
//! use reqdump_render::StringTable;
//!
//! let table = StringTable::new("X", 3).unwrap().entry("a", "hello");
//!
//! let expected = "\
//! +-----+
//! |X    |
//! +-+---+
//! |a|hel|
//! | |lo |
//! +-+---+
//! ";
//! assert_eq!(table.render(), expected);
//! ```
//!
//! ## Dynamic Values
//!
//! [`ObjectTable`] takes `serde_json::Value` cells and shows each value's
//! type label next to its name, with the textual form on the lines below:
//!
//! ```rust
//! use reqdump_render::ObjectTable;
//! use serde_json::json;
//!
//! let table = ObjectTable::new("Request Attributes", 100)
//!     .unwrap()
//!     .entry("ids", &json!([1, 2, 3]));
//!
//! let text = table.render();
//! assert!(text.contains("|ids|Array"));
//! assert!(text.contains("|[1, 2, 3]"));
//! ```

mod error;
mod resolve;
mod table;
mod util;
mod value;
mod writer;

pub use error::TableError;
pub use resolve::{ObjectWidths, StringWidths};
pub use table::{Entry, ObjectEntry, ObjectTable, StringTable, DEFAULT_CHUNK_LIMIT};
pub use util::{char_len, char_slice};
pub use value::{DescribedValue, NA_TEXT, NULL_TEXT};
