use crate::constants::{ANY_ORIGIN, WILDCARD};
use crate::origin::{Origin, OriginError};
use crate::pattern::{Pattern, PatternError};
use thiserror::Error;

/// Ways a single origin/pattern check can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("pattern cannot be an empty string")]
    EmptyPattern,
    #[error(transparent)]
    InvalidOrigin(#[from] OriginError),
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),
}

/// Returns true if the scheme, hostname and port of `origin` match the ones
/// in `pattern`.
///
/// Both sides must be formatted as `scheme://host[:port]`. The pattern may
/// use the wildcard token for its scheme, its port or individual hostname
/// labels, so `https://*.example.com:*` accepts any subdomain of
/// `example.com` on any port as long as the scheme is HTTPS. The port may be
/// omitted on either side when the scheme has a known default, which makes
/// `https://example.com` and `https://example.com:443` interchangeable.
///
/// The bare pattern `*` is equivalent to `*://*:*`; both match any valid
/// origin without parsing the pattern further.
pub fn matches(origin: &str, pattern: &str) -> Result<bool, MatchError> {
    let origin = Origin::parse(origin)?;

    if pattern.is_empty() {
        return Err(MatchError::EmptyPattern);
    }
    if pattern == WILDCARD || pattern == ANY_ORIGIN {
        return Ok(true);
    }

    let pattern = Pattern::parse(pattern)?;

    Ok(pattern.matches(&origin))
}

/// Returns true if any pattern in the list matches `origin`.
///
/// An empty origin never matches and short-circuits before any parsing. The
/// patterns are tried in order and the first hit wins; the first pattern
/// that fails to parse aborts the whole check instead of being skipped.
pub fn match_any<I, S>(origin: &str, patterns: I) -> Result<bool, MatchError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if origin.is_empty() {
        return Ok(false);
    }

    for pattern in patterns {
        if matches(origin, pattern.as_ref())? {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;
