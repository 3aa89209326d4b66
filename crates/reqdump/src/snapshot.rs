//! Owned snapshots of one HTTP exchange.
//!
//! The caller gathers these from its transport layer before invoking the
//! dump; nothing here touches a socket or a framework type. All sequences
//! preserve insertion order — use the `sort` method on each snapshot to
//! get the conventional name-sorted output for headers, parameters, and
//! attributes.

use serde_json::Value;

/// In-memory picture of one HTTP exchange.
#[derive(Clone, Debug, Default)]
pub struct ExchangeSnapshot {
    /// The request side of the exchange, cookies and parts included.
    pub request: RequestSnapshot,
    /// The response side of the exchange.
    pub response: ResponseSnapshot,
    /// The session bound to the request, if one exists.
    pub session: Option<SessionSnapshot>,
}

/// Request-side data: properties, headers, parameters, cookies,
/// multipart parts, attributes.
#[derive(Clone, Debug, Default)]
pub struct RequestSnapshot {
    /// Display form of the request, appended to the properties box title.
    pub summary: String,
    /// Transport-level properties (method, URI, addresses, ...), in
    /// gathering order. `None` values render as `"(null)"`.
    pub properties: Vec<(String, Option<String>)>,
    /// Request headers. Multi-valued headers arrive pre-joined by the
    /// caller, matching what its transport exposes.
    pub headers: Vec<(String, Option<String>)>,
    /// Request parameters; a single value renders bare, several render as
    /// a bracketed list.
    pub parameters: Vec<(String, Vec<String>)>,
    /// Cookies sent with the request, one dump box each.
    pub cookies: Vec<CookieSnapshot>,
    /// Multipart parts, two dump boxes each.
    pub parts: Vec<PartSnapshot>,
    /// Request attributes as dynamic values.
    pub attributes: Vec<(String, Value)>,
}

impl RequestSnapshot {
    /// Creates a snapshot with the given display summary.
    pub fn new(summary: impl Into<String>) -> Self {
        RequestSnapshot {
            summary: summary.into(),
            ..RequestSnapshot::default()
        }
    }

    /// Appends a transport-level property.
    pub fn property(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        self.properties.push((name.into(), value.map(Into::into)));
    }

    /// Appends a header.
    pub fn header(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        self.headers.push((name.into(), value.map(Into::into)));
    }

    /// Appends a parameter with all of its values.
    pub fn parameter(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.parameters.push((name.into(), values));
    }

    /// Appends an attribute.
    pub fn attribute(&mut self, name: impl Into<String>, value: Value) {
        self.attributes.push((name.into(), value));
    }

    /// Sorts headers, parameters, and attributes by name. Properties,
    /// cookies, and parts keep gathering order; their order carries
    /// meaning.
    pub fn sort(&mut self) {
        self.headers.sort_by(|a, b| a.0.cmp(&b.0));
        self.parameters.sort_by(|a, b| a.0.cmp(&b.0));
        self.attributes.sort_by(|a, b| a.0.cmp(&b.0));
        for part in &mut self.parts {
            part.sort();
        }
    }
}

/// One cookie's worth of dump data.
#[derive(Clone, Debug, Default)]
pub struct CookieSnapshot {
    /// Display form of the cookie, appended to the box title.
    pub summary: String,
    /// Cookie name.
    pub name: String,
    /// Cookie value.
    pub value: String,
    /// Domain attribute, if set.
    pub domain: Option<String>,
    /// Path attribute, if set.
    pub path: Option<String>,
    /// Max-Age in seconds, if set.
    pub max_age: Option<i64>,
    /// Whether the Secure attribute is set.
    pub secure: bool,
    /// Whether the HttpOnly attribute is set.
    pub http_only: bool,
    /// Comment attribute, if set.
    pub comment: Option<String>,
}

/// One multipart part: its properties box plus its headers box.
#[derive(Clone, Debug, Default)]
pub struct PartSnapshot {
    /// Display form of the part, appended to the properties box title.
    pub summary: String,
    /// Part properties (name, content type, submitted file name, size),
    /// in gathering order.
    pub properties: Vec<(String, Option<String>)>,
    /// Part headers, pre-joined by the caller like request headers.
    pub headers: Vec<(String, Option<String>)>,
}

impl PartSnapshot {
    /// Creates a snapshot with the given display summary.
    pub fn new(summary: impl Into<String>) -> Self {
        PartSnapshot {
            summary: summary.into(),
            ..PartSnapshot::default()
        }
    }

    /// Appends a property.
    pub fn property(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        self.properties.push((name.into(), value.map(Into::into)));
    }

    /// Appends a header.
    pub fn header(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        self.headers.push((name.into(), value.map(Into::into)));
    }

    /// Sorts headers by name.
    pub fn sort(&mut self) {
        self.headers.sort_by(|a, b| a.0.cmp(&b.0));
    }
}

/// Response-side data: properties and headers.
#[derive(Clone, Debug, Default)]
pub struct ResponseSnapshot {
    /// Display form of the response, appended to the properties box title.
    pub summary: String,
    /// Response-level properties (status, content type, locale, ...), in
    /// gathering order.
    pub properties: Vec<(String, Option<String>)>,
    /// Response headers, pre-joined by the caller like request headers.
    pub headers: Vec<(String, Option<String>)>,
}

impl ResponseSnapshot {
    /// Creates a snapshot with the given display summary.
    pub fn new(summary: impl Into<String>) -> Self {
        ResponseSnapshot {
            summary: summary.into(),
            ..ResponseSnapshot::default()
        }
    }

    /// Appends a property.
    pub fn property(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        self.properties.push((name.into(), value.map(Into::into)));
    }

    /// Appends a header.
    pub fn header(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        self.headers.push((name.into(), value.map(Into::into)));
    }

    /// Sorts headers by name.
    pub fn sort(&mut self) {
        self.headers.sort_by(|a, b| a.0.cmp(&b.0));
    }
}

/// Session identity, properties, and attributes.
#[derive(Clone, Debug, Default)]
pub struct SessionSnapshot {
    /// Display form of the session (typically its id).
    pub summary: String,
    /// Session properties (creation time, id, last access, ...), in
    /// gathering order.
    pub properties: Vec<(String, Option<String>)>,
    /// Session attributes as dynamic values, in gathering order.
    pub attributes: Vec<(String, Value)>,
}

impl SessionSnapshot {
    /// Creates a snapshot with the given display summary.
    pub fn new(summary: impl Into<String>) -> Self {
        SessionSnapshot {
            summary: summary.into(),
            ..SessionSnapshot::default()
        }
    }

    /// Appends a property.
    pub fn property(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        self.properties.push((name.into(), value.map(Into::into)));
    }

    /// Appends an attribute.
    pub fn attribute(&mut self, name: impl Into<String>, value: Value) {
        self.attributes.push((name.into(), value));
    }

    /// Sorts attributes by name. Properties keep gathering order.
    pub fn sort(&mut self) {
        self.attributes.sort_by(|a, b| a.0.cmp(&b.0));
    }
}
