use crate::constants::SCHEME_SEPARATOR;
use crate::host_port::{split_host_port, HostPortError};
use crate::known_ports::default_port;
use std::fmt;
use thiserror::Error;
use url::Url;

/// Errors produced while parsing a raw origin string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OriginError {
    /// The raw value does not parse as an absolute URL.
    #[error("invalid origin: {0}")]
    Parse(#[from] url::ParseError),
    /// The value parses as a URL but never spells the `://` separator.
    #[error("invalid origin: missing scheme separator")]
    MissingSeparator,
    /// The `host:port` portion of the authority is malformed.
    #[error("invalid origin: {0}")]
    HostPort(#[from] HostPortError),
    /// No explicit port and the scheme has no known default.
    #[error("invalid origin: missing port for scheme {scheme:?}")]
    MissingPort { scheme: String },
}

/// A validated origin triple, as sent in an `Origin` request header.
///
/// Every component is concrete: wildcards never appear here. The port is
/// either the explicit one from the raw string or the scheme's known default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    scheme: String,
    host: String,
    port: String,
}

impl Origin {
    /// Splits a raw origin string into its scheme, host and port.
    ///
    /// The value must parse as an absolute URL, which rejects scheme-less
    /// input and malformed hosts or ports. The host and explicit port are
    /// then read back verbatim from the raw authority text, so explicit
    /// default ports, unicode hostnames and uncompressed IPv6 addresses
    /// stay exactly as written. When no port is spelled out it is resolved
    /// through the known-port table; origins with an unknown scheme must
    /// therefore carry an explicit port.
    pub fn parse(raw: &str) -> Result<Self, OriginError> {
        // The URL parser trims surrounding whitespace before validating.
        let raw = raw.trim_matches(|c: char| c <= ' ');
        let url = Url::parse(raw)?;
        let scheme = url.scheme();

        // The parser also forgives missing or doubled slashes after the
        // scheme; verbatim extraction requires the literal separator.
        let rest = raw
            .get(..scheme.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
            .and_then(|_| raw[scheme.len()..].strip_prefix(SCHEME_SEPARATOR))
            .ok_or(OriginError::MissingSeparator)?;

        let authority_end = rest.find(['/', '\\', '?', '#']).unwrap_or(rest.len());
        let authority = match rest[..authority_end].rsplit_once('@') {
            Some((_, host_port)) => host_port,
            None => &rest[..authority_end],
        };

        let (host, explicit_port) = match bracketed_host(authority) {
            Some(host) => (host, ""),
            None if authority.contains(':') => split_host_port(authority)?,
            None => (authority, ""),
        };

        // A bare trailing colon counts the same as an omitted port.
        let port = if explicit_port.is_empty() {
            default_port(scheme)
                .ok_or_else(|| OriginError::MissingPort {
                    scheme: scheme.to_owned(),
                })?
                .to_owned()
        } else {
            explicit_port.to_owned()
        };

        Ok(Self {
            scheme: scheme.to_owned(),
            host: host.to_owned(),
            port,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }
}

/// A port-less bracketed IPv6 authority, with the brackets stripped.
fn bracketed_host(authority: &str) -> Option<&str> {
    authority.strip_prefix('[')?.strip_suffix(']')
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // IPv6 hosts are stored without brackets and need them back to stay
        // parseable as `scheme://host:port`.
        if self.host.contains(':') {
            write!(f, "{}://[{}]:{}", self.scheme, self.host, self.port)
        } else {
            write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
