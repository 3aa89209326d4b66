//! Dump configuration: master switch, section toggles, wrap width,
//! frame literals.
//!
//! Configuration is immutable once built and passed by reference into the
//! assembly step; there is no process-wide state. Every field is optional in
//! the serialized form and falls back to the documented default, so a config
//! file can flip just the master switch.

use reqdump_render::DEFAULT_CHUNK_LIMIT;
use serde::{Deserialize, Serialize};

use crate::dump::{BEGIN_BANNER, END_BANNER, NO_SESSION};
use crate::error::DumpError;

/// Controls which sections of a dump are rendered, how wide values wrap,
/// and the literals framing the block.
///
/// Cookies and multipart parts belong to the request side and follow the
/// `request` toggle. The frame literals exist so callers can substitute
/// localized text; rendering passes them through verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DumpConfig {
    /// Master switch; nothing is rendered or logged while false.
    pub enabled: bool,
    /// Include the request boxes: properties, headers, parameters,
    /// cookies, parts, attributes.
    pub request: bool,
    /// Include the response properties and headers boxes.
    pub response: bool,
    /// Include the session boxes (or the line marking its absence).
    pub session: bool,
    /// Characters of a value shown per physical line before wrapping.
    pub chunk_limit: usize,
    /// Line marking the start of the block.
    pub begin_banner: String,
    /// Line marking the end of the block.
    pub end_banner: String,
    /// Text shown after `Session: ` when no session exists.
    pub no_session: String,
}

impl Default for DumpConfig {
    fn default() -> Self {
        DumpConfig {
            enabled: false,
            request: true,
            response: true,
            session: true,
            chunk_limit: DEFAULT_CHUNK_LIMIT,
            begin_banner: BEGIN_BANNER.into(),
            end_banner: END_BANNER.into(),
            no_session: NO_SESSION.into(),
        }
    }
}

impl DumpConfig {
    /// Parses a configuration from YAML text, filling defaults for any
    /// omitted field and rejecting unknown keys.
    pub fn from_yaml(text: &str) -> Result<Self, DumpError> {
        Ok(serde_yaml::from_str(text)?)
    }
}
