/// Wildcard token accepted for a scheme, a port, or a single hostname label.
pub const WILDCARD: &str = "*";

/// Fully-expanded form of the universal wildcard pattern `*`.
///
/// Both spellings match any valid non-empty origin.
pub const ANY_ORIGIN: &str = "*://*:*";

/// Separator between the scheme and the host portion of a pattern.
pub(crate) const SCHEME_SEPARATOR: &str = "://";
