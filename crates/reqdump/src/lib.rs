//! # Reqdump - Request Dump Blocks for Log Streams
//!
//! `reqdump` turns an in-memory snapshot of one HTTP exchange into a single
//! human-readable text block: bordered tables for request properties,
//! headers, parameters, cookies, multipart parts, and attributes, then
//! response and session state, framed by begin/end banner lines. The block
//! is handed to the log stream in one record so concurrent requests never
//! interleave.
//!
//! This crate owns no transport integration: callers gather whatever their
//! HTTP layer exposes into an [`ExchangeSnapshot`] and decide sorting
//! before handing it over. Rendering itself lives in [`reqdump_render`].
//!
//! ## Quick Start
//!
//! ```rust
//! use reqdump::{DumpConfig, ExchangeSnapshot, RequestSnapshot, ResponseSnapshot, render_dump};
//!
//! let mut request = RequestSnapshot::new("GET /login HTTP/1.1");
//! request.property("Method", Some("GET"));
//! request.property("QueryString", None::<&str>);
//! request.header("Host", Some("example.com"));
//!
//! let mut response = ResponseSnapshot::new("200 OK");
//! response.property("Status", Some("200"));
//!
//! let snapshot = ExchangeSnapshot {
//!     request,
//!     response,
//!     session: None,
//! };
//!
//! let config = DumpConfig {
//!     enabled: true,
//!     ..DumpConfig::default()
//! };
//! let block = render_dump(&snapshot, &config).unwrap();
//! assert!(block.contains("Request: GET /login HTTP/1.1"));
//! assert!(block.contains("|QueryString|(null)"));
//! assert!(block.contains("Session: (none)"));
//! ```
//!
//! ## Configuration
//!
//! [`DumpConfig`] carries the master switch, the per-section toggles, the
//! wrap width, and the frame literals (overridable for localized text).
//! It deserializes from YAML with every field optional:
//!
//! ```rust
//! use reqdump::DumpConfig;
//!
//! let config = DumpConfig::from_yaml("enabled: true\nchunk_limit: 60\n").unwrap();
//! assert!(config.enabled && config.session);
//! assert_eq!(config.chunk_limit, 60);
//! ```

mod config;
mod dump;
mod error;
mod snapshot;

pub use config::DumpConfig;
pub use dump::{log_dump, render_dump, BEGIN_BANNER, END_BANNER, NO_SESSION};
pub use error::DumpError;
pub use snapshot::{
    CookieSnapshot, ExchangeSnapshot, PartSnapshot, RequestSnapshot, ResponseSnapshot,
    SessionSnapshot,
};
