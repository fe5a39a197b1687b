use crate::case::equals_ignore_case;

/// Reads an `Origin` header value, mapping the literal `null` to an empty
/// string.
///
/// Browsers send `null` for opaque origins (sandboxed frames, `file://`
/// pages and the like); callers treat the empty string as "no origin", so
/// those requests never match any pattern.
pub fn extract_origin(value: &str) -> &str {
    if equals_ignore_case(value, "null") {
        ""
    } else {
        value
    }
}

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;
