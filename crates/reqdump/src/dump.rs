//! Dump assembly: one text block per exchange, framed by banner lines.
//!
//! Section order is fixed: request boxes (cookies and multipart parts
//! ride along), response boxes, then session. The whole block is built
//! before anything is logged, then emitted as a single log record so
//! dumps from concurrent requests never interleave.

use reqdump_render::{Entry, ObjectTable, StringTable};

use crate::config::DumpConfig;
use crate::error::DumpError;
use crate::snapshot::{
    CookieSnapshot, ExchangeSnapshot, PartSnapshot, RequestSnapshot, ResponseSnapshot,
    SessionSnapshot,
};

/// Default line marking the start of a dump block.
pub const BEGIN_BANNER: &str =
    "============================== request dump begin ==============================";

/// Default line marking the end of a dump block.
pub const END_BANNER: &str =
    "============================== request dump end ================================";

/// Default text after `Session: ` when no session exists.
pub const NO_SESSION: &str = "(none)";

/// Builds the complete dump block for one exchange.
///
/// Returns an empty string when the config's master switch is off. The
/// block starts with a blank line so it stands apart from whatever log
/// prefix precedes it, and every line is newline-terminated.
pub fn render_dump(snapshot: &ExchangeSnapshot, config: &DumpConfig) -> Result<String, DumpError> {
    if !config.enabled {
        return Ok(String::new());
    }
    let mut out = String::new();
    out.push('\n');
    out.push_str(&config.begin_banner);
    out.push('\n');
    if config.request {
        render_request(&mut out, &snapshot.request, config)?;
    }
    if config.response {
        render_response(&mut out, &snapshot.response, config)?;
    }
    if config.session {
        render_session(&mut out, snapshot.session.as_ref(), config)?;
    }
    out.push_str(&config.end_banner);
    out.push('\n');
    Ok(out)
}

/// Renders the dump and emits it as one `info` log record.
///
/// A disabled config logs nothing and still succeeds.
pub fn log_dump(snapshot: &ExchangeSnapshot, config: &DumpConfig) -> Result<(), DumpError> {
    let block = render_dump(snapshot, config)?;
    if !block.is_empty() {
        tracing::info!("{block}");
    }
    Ok(())
}

fn render_request(
    out: &mut String,
    request: &RequestSnapshot,
    config: &DumpConfig,
) -> Result<(), DumpError> {
    let mut properties = StringTable::new(
        format!("Request: {}", request.summary),
        config.chunk_limit,
    )?;
    for (name, value) in &request.properties {
        properties.push(Entry::opt(name, value.as_deref()));
    }
    properties.render_to(out);

    render_string_map(out, "Request Headers", &request.headers, config)?;

    let mut parameters = StringTable::new("Request Parameters", config.chunk_limit)?;
    for (name, values) in &request.parameters {
        parameters.push(Entry::new(name, fold_values(values)));
    }
    parameters.render_to(out);

    for cookie in &request.cookies {
        render_cookie(out, cookie, config)?;
    }

    for part in &request.parts {
        render_part(out, part, config)?;
    }

    let mut attributes = ObjectTable::new("Request Attributes", config.chunk_limit)?;
    for (name, value) in &request.attributes {
        attributes.push(name, value);
    }
    attributes.render_to(out);
    Ok(())
}

fn render_cookie(
    out: &mut String,
    cookie: &CookieSnapshot,
    config: &DumpConfig,
) -> Result<(), DumpError> {
    let mut table = StringTable::new(format!("Cookie: {}", cookie.summary), config.chunk_limit)?
        .entry("Name", cookie.name.as_str())
        .entry("Value", cookie.value.as_str())
        .entry_opt("Domain", cookie.domain.as_deref())
        .entry_opt("Path", cookie.path.as_deref())
        .entry_opt("MaxAge", cookie.max_age.map(|age| age.to_string()))
        .entry("Secure", cookie.secure.to_string())
        .entry("HttpOnly", cookie.http_only.to_string());
    table.push(Entry::opt("Comment", cookie.comment.as_deref()));
    table.render_to(out);
    Ok(())
}

fn render_part(out: &mut String, part: &PartSnapshot, config: &DumpConfig) -> Result<(), DumpError> {
    let mut properties =
        StringTable::new(format!("Part: {}", part.summary), config.chunk_limit)?;
    for (name, value) in &part.properties {
        properties.push(Entry::opt(name, value.as_deref()));
    }
    properties.render_to(out);

    render_string_map(out, "Part Headers", &part.headers, config)
}

fn render_response(
    out: &mut String,
    response: &ResponseSnapshot,
    config: &DumpConfig,
) -> Result<(), DumpError> {
    let mut properties = StringTable::new(
        format!("Response: {}", response.summary),
        config.chunk_limit,
    )?;
    for (name, value) in &response.properties {
        properties.push(Entry::opt(name, value.as_deref()));
    }
    properties.render_to(out);

    render_string_map(out, "Response Headers", &response.headers, config)
}

fn render_session(
    out: &mut String,
    session: Option<&SessionSnapshot>,
    config: &DumpConfig,
) -> Result<(), DumpError> {
    let Some(session) = session else {
        out.push_str("Session: ");
        out.push_str(&config.no_session);
        out.push('\n');
        return Ok(());
    };

    let mut properties = StringTable::new(
        format!("Session: {}", session.summary),
        config.chunk_limit,
    )?;
    for (name, value) in &session.properties {
        properties.push(Entry::opt(name, value.as_deref()));
    }
    properties.render_to(out);

    let mut attributes = ObjectTable::new("Session Attributes", config.chunk_limit)?;
    for (name, value) in &session.attributes {
        attributes.push(name, value);
    }
    attributes.render_to(out);
    Ok(())
}

fn render_string_map(
    out: &mut String,
    title: &str,
    entries: &[(String, Option<String>)],
    config: &DumpConfig,
) -> Result<(), DumpError> {
    let mut table = StringTable::new(title, config.chunk_limit)?;
    for (name, value) in entries {
        table.push(Entry::opt(name, value.as_deref()));
    }
    table.render_to(out);
    Ok(())
}

/// A single value renders bare; several fold into a bracketed list.
fn fold_values(values: &[String]) -> String {
    if values.len() == 1 {
        values[0].clone()
    } else {
        format!("[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enabled_config() -> DumpConfig {
        DumpConfig {
            enabled: true,
            ..DumpConfig::default()
        }
    }

    fn sample_snapshot() -> ExchangeSnapshot {
        let mut request = RequestSnapshot::new("GET /login HTTP/1.1");
        request.property("Local", Some("127.0.0.1:8080"));
        request.property("Remote", Some("10.0.0.9:55112"));
        request.property("PathInfo", None::<&str>);
        request.header("host", Some("example.com"));
        request.parameter("user", vec!["alice".into()]);
        request.parameter("roles", vec!["admin".into(), "ops".into()]);
        request.cookies.push(CookieSnapshot {
            summary: "JSESSIONID=9F2C".into(),
            name: "JSESSIONID".into(),
            value: "9F2C".into(),
            secure: true,
            ..CookieSnapshot::default()
        });
        request.attribute("trace", json!({"id": 7}));

        let mut response = ResponseSnapshot::new("200 OK");
        response.property("Status", Some("200"));
        response.header("content-type", Some("text/html"));

        let mut session = SessionSnapshot::new("id=9F2C");
        session.property("Id", Some("9F2C"));
        session.attribute("cart", json!([1, 2, 3]));

        ExchangeSnapshot {
            request,
            response,
            session: Some(session),
        }
    }

    #[test]
    fn disabled_config_renders_nothing() {
        let block = render_dump(&sample_snapshot(), &DumpConfig::default()).unwrap();
        assert!(block.is_empty());
    }

    #[test]
    fn block_is_framed_by_banners() {
        let block = render_dump(&sample_snapshot(), &enabled_config()).unwrap();
        assert!(block.starts_with(&format!("\n{BEGIN_BANNER}\n")));
        assert!(block.ends_with(&format!("{END_BANNER}\n")));
    }

    #[test]
    fn banner_and_session_literals_come_from_config() {
        let config = DumpConfig {
            enabled: true,
            begin_banner: "=== debut ===".into(),
            end_banner: "=== fin ===".into(),
            no_session: "(aucune)".into(),
            ..DumpConfig::default()
        };
        let mut snapshot = sample_snapshot();
        snapshot.session = None;
        let block = render_dump(&snapshot, &config).unwrap();
        assert!(block.starts_with("\n=== debut ===\n"));
        assert!(block.ends_with("=== fin ===\n"));
        assert!(block.contains("Session: (aucune)\n"));
        assert!(!block.contains(BEGIN_BANNER));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let block = render_dump(&sample_snapshot(), &enabled_config()).unwrap();
        let request = block.find("Request: GET /login").unwrap();
        let headers = block.find("Request Headers").unwrap();
        let parameters = block.find("Request Parameters").unwrap();
        let cookie = block.find("Cookie: JSESSIONID=9F2C").unwrap();
        let attributes = block.find("Request Attributes").unwrap();
        let response = block.find("Response: 200 OK").unwrap();
        let session = block.find("Session: id=9F2C").unwrap();
        assert!(request < headers);
        assert!(headers < parameters);
        assert!(parameters < cookie);
        assert!(cookie < attributes);
        assert!(attributes < response);
        assert!(response < session);
    }

    #[test]
    fn response_renders_properties_and_headers_boxes() {
        let mut snapshot = sample_snapshot();
        snapshot.response = ResponseSnapshot::new("200 OK");
        snapshot.response.property("ContentType", Some("text/html"));
        snapshot.response.property("Status", Some("200"));
        snapshot.response.header("content-type", Some("text/html"));
        let block = render_dump(&snapshot, &enabled_config()).unwrap();

        let expected = "\
+---------------------+
|Response: 200 OK     |
+-----------+---------+
|ContentType|text/html|
|Status     |200      |
+-----------+---------+
+----------------------+
|Response Headers      |
+------------+---------+
|content-type|text/html|
+------------+---------+
";
        assert!(block.contains(expected));
    }

    #[test]
    fn part_renders_properties_and_headers_boxes() {
        let mut part = PartSnapshot::new("file1");
        part.property("ContentType", Some("text/plain"));
        part.property("Name", Some("file1"));
        part.property("SubmittedFileName", Some("notes.txt"));
        part.property("Size", Some("742"));
        part.header("content-type", Some("text/plain"));
        let mut snapshot = sample_snapshot();
        snapshot.request.parts.push(part);
        let block = render_dump(&snapshot, &enabled_config()).unwrap();

        let expected = "\
+----------------------------+
|Part: file1                 |
+-----------------+----------+
|ContentType      |text/plain|
|Name             |file1     |
|SubmittedFileName|notes.txt |
|Size             |742       |
+-----------------+----------+
+-----------------------+
|Part Headers           |
+------------+----------+
|content-type|text/plain|
+------------+----------+
";
        assert!(block.contains(expected));
        // Parts sit between cookies and the attributes box.
        let cookie = block.find("Cookie:").unwrap();
        let part = block.find("Part: file1").unwrap();
        let attributes = block.find("Request Attributes").unwrap();
        assert!(cookie < part);
        assert!(part < attributes);
    }

    #[test]
    fn present_session_renders_properties_and_attributes_boxes() {
        let block = render_dump(&sample_snapshot(), &enabled_config()).unwrap();
        assert!(block.contains("|Session: id=9F2C|"));
        assert!(block.contains("|Id|9F2C"));
        assert!(block.contains("Session Attributes"));
    }

    #[test]
    fn multi_valued_parameters_fold_into_brackets() {
        let block = render_dump(&sample_snapshot(), &enabled_config()).unwrap();
        assert!(block.contains("|user |alice"));
        assert!(block.contains("|roles|[admin, ops]"));
    }

    #[test]
    fn missing_values_use_placeholder() {
        let block = render_dump(&sample_snapshot(), &enabled_config()).unwrap();
        assert!(block.contains("|PathInfo|(null)"));
        assert!(block.contains("|Domain  |(null)"));
    }

    #[test]
    fn absent_session_renders_single_line() {
        let mut snapshot = sample_snapshot();
        snapshot.session = None;
        let block = render_dump(&snapshot, &enabled_config()).unwrap();
        assert!(block.contains("Session: (none)\n"));
        assert!(!block.contains("Session Attributes"));
    }

    #[test]
    fn section_toggles_remove_sections() {
        let config = DumpConfig {
            enabled: true,
            response: false,
            ..DumpConfig::default()
        };
        let block = render_dump(&sample_snapshot(), &config).unwrap();
        assert!(!block.contains("Response:"));
        assert!(!block.contains("Response Headers"));
        assert!(block.contains("Request Headers"));
        assert!(block.contains("Cookie: JSESSIONID=9F2C"));
        assert!(block.contains("Session: id=9F2C"));
    }

    #[test]
    fn request_toggle_covers_cookies_and_parts() {
        let mut snapshot = sample_snapshot();
        snapshot.request.parts.push(PartSnapshot::new("file1"));
        let config = DumpConfig {
            enabled: true,
            request: false,
            ..DumpConfig::default()
        };
        let block = render_dump(&snapshot, &config).unwrap();
        assert!(!block.contains("Cookie:"));
        assert!(!block.contains("Part:"));
        assert!(block.contains("Response: 200 OK"));
    }

    #[test]
    fn session_attributes_show_types() {
        let block = render_dump(&sample_snapshot(), &enabled_config()).unwrap();
        assert!(block.contains("|cart|Array"));
        assert!(block.contains("|[1, 2, 3]"));
    }

    #[test]
    fn fold_values_edge_cases() {
        assert_eq!(fold_values(&[]), "[]");
        assert_eq!(fold_values(&["a".into()]), "a");
        assert_eq!(fold_values(&["a".into(), "b".into()]), "[a, b]");
    }

    #[test]
    fn log_dump_is_silent_when_disabled() {
        assert!(log_dump(&sample_snapshot(), &DumpConfig::default()).is_ok());
    }
}
