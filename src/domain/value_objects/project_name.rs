//! Project name rules.
//!
//! Names end up in comment commands (`atlantis plan -p <name>`) and URLs, so
//! they must survive path-segment escaping unchanged. `/` is allowed as a
//! separator.

/// Characters a path segment may carry without percent-encoding.
///
/// `,` and `;` are reserved inside a segment and must be escaped.
fn is_segment_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '-' | '_' | '.' | '~' | '$' | '&' | '+' | ':' | '=' | '@')
}

/// Returns true if `name` contains only URL-safe characters once `/` is
/// treated as a separator.
pub fn is_url_safe_name(name: &str) -> bool {
    name.chars().all(|c| c == '/' || is_segment_safe(c))
}
