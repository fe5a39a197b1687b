use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Standard ports for common web protocols. Lookup is keyed by the literal
/// scheme name, so case matters and a wildcard scheme never resolves here.
static KNOWN_PORTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("https", "443"),
        ("wss", "443"),
        ("http", "80"),
        ("ws", "80"),
        ("ftp", "23"),
        ("gopher", "70"),
    ])
});

pub(crate) fn default_port(scheme: &str) -> Option<&'static str> {
    KNOWN_PORTS.get(scheme).copied()
}

#[cfg(test)]
#[path = "known_ports_test.rs"]
mod known_ports_test;
