//! Natural ("human") ordering of path strings.
//!
//! A string is split on runs of ASCII digits into alternating text and
//! number parts, always starting with a (possibly empty) text part. Text
//! parts compare case-insensitively, number parts compare by integer value
//! with no width limit. Keys that are a prefix of another sort first.
//!
//! Keys ignore leading zeros and letter case, so distinct strings can share
//! a key (`run02` and `run2`). Callers that need a total order break such
//! ties on the original string, see [`natural_cmp`].

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static DIGIT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// One run of a natural sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPart {
    /// Lowercased non-digit text.
    Text(String),
    /// Digits with leading zeros removed ("0" for an all-zero run).
    Number(String),
}

impl Ord for KeyPart {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (KeyPart::Number(a), KeyPart::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (KeyPart::Text(a), KeyPart::Text(b)) => a.cmp(b),
            // Parts alternate from a shared text start, so mixed pairs only
            // show up if that invariant is broken. Digits sort first, as in
            // plain byte order.
            (KeyPart::Number(_), KeyPart::Text(_)) => Ordering::Less,
            (KeyPart::Text(_), KeyPart::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for KeyPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Natural sort key for one string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<KeyPart>);

impl NaturalKey {
    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }
}

/// Build the natural sort key of `value`.
pub fn natural_key(value: &str) -> NaturalKey {
    let mut parts = Vec::new();
    let mut last = 0;

    for digits in DIGIT_RUNS.find_iter(value) {
        parts.push(KeyPart::Text(value[last..digits.start()].to_lowercase()));
        parts.push(KeyPart::Number(normalize_digits(digits.as_str())));
        last = digits.end();
    }
    parts.push(KeyPart::Text(value[last..].to_lowercase()));

    NaturalKey(parts)
}

/// Total natural ordering: key first, then the original string.
///
/// Equal keys fall back to the raw string, so the order never depends on
/// the order the inputs arrived in.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b)).then_with(|| a.cmp(b))
}

fn normalize_digits(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<&str>) -> Vec<&str> {
        values.sort_by(|a, b| natural_cmp(a, b));
        values
    }

    #[test]
    fn test_key_alternates_text_and_numbers() {
        let key = natural_key("Script10.sh");
        assert_eq!(
            key.parts(),
            &[
                KeyPart::Text("script".to_string()),
                KeyPart::Number("10".to_string()),
                KeyPart::Text(".sh".to_string()),
            ]
        );
    }

    #[test]
    fn test_key_starts_with_empty_text_for_leading_digits() {
        let key = natural_key("01-setup");
        assert_eq!(
            key.parts(),
            &[
                KeyPart::Text(String::new()),
                KeyPart::Number("1".to_string()),
                KeyPart::Text("-setup".to_string()),
            ]
        );
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(
            sorted(vec!["script10.sh", "script2.sh", "script20.sh", "script1.sh"]),
            vec!["script1.sh", "script2.sh", "script10.sh", "script20.sh"]
        );
    }

    #[test]
    fn test_text_compares_case_insensitively() {
        assert_eq!(
            sorted(vec!["c1.sh", "B1.sh", "a1.sh"]),
            vec!["a1.sh", "B1.sh", "c1.sh"]
        );
    }

    #[test]
    fn test_leading_zeros_tie_then_break_on_string() {
        assert_eq!(natural_key("script02"), natural_key("script2"));
        assert_eq!(
            sorted(vec!["script3", "script2", "script02"]),
            vec!["script02", "script2", "script3"]
        );
    }

    #[test]
    fn test_case_only_difference_breaks_on_string() {
        assert_eq!(natural_cmp("A.sh", "a.sh"), Ordering::Less);
        assert_eq!(natural_cmp("a.sh", "A.sh"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(
            sorted(vec!["run1b", "run1", "run"]),
            vec!["run", "run1", "run1b"]
        );
    }

    #[test]
    fn test_numbers_wider_than_u64() {
        assert_eq!(
            sorted(vec!["x100000000000000000000000", "x99999999999999999999999"]),
            vec!["x99999999999999999999999", "x100000000000000000000000"]
        );
    }

    #[test]
    fn test_non_numeric_names() {
        assert_eq!(
            sorted(vec!["deploy.sh", "Build.sh", "clean.sh"]),
            vec!["Build.sh", "clean.sh", "deploy.sh"]
        );
    }

    #[test]
    fn test_multiple_number_runs() {
        assert_eq!(
            sorted(vec!["v1.10.sh", "v1.9.sh", "v1.2.sh", "v0.20.sh"]),
            vec!["v0.20.sh", "v1.2.sh", "v1.9.sh", "v1.10.sh"]
        );
    }
}
