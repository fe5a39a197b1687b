use thiserror::Error;

/// Ways a `host[:port]` portion of a pattern can be malformed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HostPortError {
    #[error("missing port")]
    MissingPort,
    #[error("too many colons")]
    TooManyColons,
    #[error("missing ']'")]
    MissingCloseBracket,
    #[error("unexpected '['")]
    UnexpectedOpenBracket,
    #[error("unexpected ']'")]
    UnexpectedCloseBracket,
}

/// Splits `host:port`, where an IPv6 host must be bracketed as `[host]:port`.
/// The brackets are not part of the returned host, and the port is returned
/// verbatim without validation.
pub(crate) fn split_host_port(hostport: &str) -> Result<(&str, &str), HostPortError> {
    let bytes = hostport.as_bytes();
    let separator = hostport.rfind(':').ok_or(HostPortError::MissingPort)?;

    let (host, open_from, close_from) = if bytes.first() == Some(&b'[') {
        let end = hostport.find(']').ok_or(HostPortError::MissingCloseBracket)?;
        if end + 1 == hostport.len() {
            return Err(HostPortError::MissingPort);
        }
        if end + 1 != separator {
            // Either a second port separator or junk between ']' and ':'.
            return Err(if bytes[end + 1] == b':' {
                HostPortError::TooManyColons
            } else {
                HostPortError::MissingPort
            });
        }
        (&hostport[1..end], 1, end + 1)
    } else {
        let host = &hostport[..separator];
        if host.contains(':') {
            return Err(HostPortError::TooManyColons);
        }
        (host, 0, 0)
    };

    if hostport[open_from..].contains('[') {
        return Err(HostPortError::UnexpectedOpenBracket);
    }
    if hostport[close_from..].contains(']') {
        return Err(HostPortError::UnexpectedCloseBracket);
    }

    Ok((host, &hostport[separator + 1..]))
}

#[cfg(test)]
#[path = "host_port_test.rs"]
mod host_port_test;
