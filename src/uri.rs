//! Shared URI heuristics for the bookmark, URLTO and generic URI grammars.

/// Loose plausibility test for a URI: no whitespace breaks, and either an
/// explicit scheme separator or a dot positioned where a host would have
/// one. Deliberately permissive; the dispatcher runs this grammar last
/// before the plain-text fallback.
pub(crate) fn is_basically_valid(uri: &str) -> bool {
    if uri.is_empty() || uri.contains(' ') || uri.contains('\n') {
        return false;
    }
    match uri.find('.') {
        Some(period) => period + 2 < uri.len(),
        None => uri.contains(':'),
    }
}

/// Normalizes a bare URI for display. When there is no scheme (no colon at
/// all, or a colon that introduces a digits-only port), `http://` is
/// prepended; an existing scheme is preserved byte-for-byte, case included.
pub(crate) fn massage(uri: &str) -> String {
    let uri = uri.trim();
    let needs_scheme = match uri.find(':') {
        None => true,
        Some(colon) => colon_starts_port(uri, colon),
    };
    if needs_scheme {
        format!("http://{uri}")
    } else {
        uri.to_string()
    }
}

fn colon_starts_port(uri: &str, colon: usize) -> bool {
    let rest = &uri[colon + 1..];
    let port = match rest.find('/') {
        Some(slash) => &rest[..slash],
        None => rest,
    };
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}
