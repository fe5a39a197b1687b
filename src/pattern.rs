use crate::case::equals_ignore_case;
use crate::constants::{SCHEME_SEPARATOR, WILDCARD};
use crate::host_port::{split_host_port, HostPortError};
use crate::hostname;
use crate::known_ports::default_port;
use crate::origin::Origin;
use thiserror::Error;

/// Errors produced while parsing a raw pattern string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern is neither the bare wildcard nor `scheme://...`.
    #[error("invalid pattern: missing scheme separator")]
    MissingSeparator,
    /// The `host:port` portion is malformed.
    #[error("invalid pattern: {0}")]
    HostPort(#[from] HostPortError),
    /// No explicit port and the scheme has no known default. A wildcard
    /// scheme never resolves a default, so it always needs an explicit port.
    #[error("invalid pattern: missing port for scheme {scheme:?}")]
    MissingPort { scheme: String },
}

/// A scheme or port slot of a pattern: the wildcard token or a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternComponent {
    Any,
    Literal(String),
}

impl PatternComponent {
    /// Matches a concrete origin component. An empty value never matches,
    /// not even against the wildcard; literals compare case-insensitively.
    pub(crate) fn matches(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }

        match self {
            PatternComponent::Any => true,
            PatternComponent::Literal(literal) => equals_ignore_case(literal, value),
        }
    }
}

impl From<&str> for PatternComponent {
    fn from(value: &str) -> Self {
        if value == WILDCARD {
            PatternComponent::Any
        } else {
            PatternComponent::Literal(value.to_owned())
        }
    }
}

/// A parsed trust pattern of the shape `scheme://host[:port]`.
///
/// The scheme and port slots may be wildcards, and the host may contain
/// wildcard labels. The host keeps its raw spelling here; normalization
/// happens during matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    scheme: PatternComponent,
    host: String,
    port: PatternComponent,
}

impl Pattern {
    /// Parses a raw pattern string.
    ///
    /// The bare wildcard expands to `*://*:*`. Otherwise the `://` separator
    /// is required, and an omitted port is resolved through the known-port
    /// table keyed by the literal scheme.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw == WILDCARD {
            return Ok(Self {
                scheme: PatternComponent::Any,
                host: WILDCARD.to_owned(),
                port: PatternComponent::Any,
            });
        }

        let (scheme, rest) = raw
            .split_once(SCHEME_SEPARATOR)
            .ok_or(PatternError::MissingSeparator)?;

        let (host, port) = if rest.contains(':') {
            let (host, port) = split_host_port(rest)?;
            (host.to_owned(), PatternComponent::from(port))
        } else {
            let port = default_port(scheme).ok_or_else(|| PatternError::MissingPort {
                scheme: scheme.to_owned(),
            })?;
            (rest.to_owned(), PatternComponent::Literal(port.to_owned()))
        };

        Ok(Self {
            scheme: PatternComponent::from(scheme),
            host,
            port,
        })
    }

    /// Matches a parsed origin against this pattern. The scheme, hostname
    /// and port must all agree.
    pub fn matches(&self, origin: &Origin) -> bool {
        self.scheme.matches(origin.scheme())
            && hostname::matches(origin.host(), &self.host)
            && self.port.matches(origin.port())
    }

    pub fn scheme(&self) -> &PatternComponent {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &PatternComponent {
        &self.port
    }
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;
