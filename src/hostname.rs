use crate::case::normalize;
use crate::constants::WILDCARD;

/// Matches an origin hostname against a pattern hostname, label by label.
///
/// Both sides are normalized, split on `.` and compared from the rightmost
/// label leftward. A wildcard label on either side accepts any value at that
/// depth. A pattern with more labels than the hostname can never match;
/// extra labels on the hostname's left side are unconstrained, so
/// `*.example.com` accepts `a.example.com` as well as `a.b.example.com`.
pub(crate) fn matches(host: &str, pattern: &str) -> bool {
    let host = normalize(host);
    let pattern = normalize(pattern);

    let host_labels: Vec<&str> = host.split('.').collect();
    let pattern_labels: Vec<&str> = pattern.split('.').collect();

    if pattern_labels.len() > host_labels.len() {
        return false;
    }

    pattern_labels
        .iter()
        .rev()
        .zip(host_labels.iter().rev())
        .all(|(pattern_label, host_label)| {
            *pattern_label == WILDCARD
                || *host_label == WILDCARD
                || pattern_label == host_label
        })
}

#[cfg(test)]
#[path = "hostname_test.rs"]
mod hostname_test;
