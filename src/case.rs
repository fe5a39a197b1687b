/// Readies a hostname for comparison: surrounding whitespace is dropped and
/// the remainder is lowercased.
pub(crate) fn normalize(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_ascii() {
        trimmed.to_ascii_lowercase()
    } else {
        trimmed.to_lowercase()
    }
}

pub(crate) fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;
