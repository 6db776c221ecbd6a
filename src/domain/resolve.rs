//! Fuzzy job-id resolution.
//!
//! Job links get truncated or lose their hyphens when pasted around, so
//! lookup tolerates both. Precedence is strict — exact match, then
//! hyphen-stripped equality, then suffix, then substring — because on
//! ambiguous short inputs the suffix pass and the substring pass can
//! pick different records.

/// Strip every hyphen from an id, yielding its "compact" form.
fn compact(id: &str) -> String {
    id.chars().filter(|c| *c != '-').collect()
}

/// Resolve a possibly-mistyped id against stored ids.
///
/// Returns the index of the first match in precedence order:
/// 1. exact equality,
/// 2. compact equality,
/// 3. compact stored id ends with compact input,
/// 4. compact stored id contains compact input.
///
/// Empty (or all-hyphen) input never matches.
pub fn resolve_id(input: &str, ids: &[&str]) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(index) = ids.iter().position(|id| *id == input) {
        return Some(index);
    }

    let needle = compact(input);
    if needle.is_empty() {
        return None;
    }

    let predicates: [fn(&str, &str) -> bool; 3] = [
        |haystack, needle| haystack == needle,
        |haystack, needle| haystack.ends_with(needle),
        |haystack, needle| haystack.contains(needle),
    ];
    for predicate in predicates {
        if let Some(index) = ids
            .iter()
            .position(|id| predicate(&compact(id), &needle))
        {
            return Some(index);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: &[&str] = &["a1b2-c3d4-e5f6", "ffff-0000-e5f6"];

    fn resolve(input: &str) -> Option<usize> {
        resolve_id(input, IDS)
    }

    #[test]
    fn test_exact_match_wins() {
        assert_eq!(resolve("a1b2-c3d4-e5f6"), Some(0));
        assert_eq!(resolve("ffff-0000-e5f6"), Some(1));
    }

    #[test]
    fn test_compact_equality() {
        assert_eq!(resolve("a1b2c3d4e5f6"), Some(0));
    }

    #[test]
    fn test_suffix_match() {
        assert_eq!(resolve("d4e5f6"), Some(0));
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(resolve("b2c3"), Some(0));
    }

    #[test]
    fn test_suffix_pass_runs_before_substring_pass() {
        // "e5f6" is a suffix of both ids and a substring of both; the
        // suffix pass must answer before the substring pass is reached,
        // scanning in stored order.
        assert_eq!(resolve("e5f6"), Some(0));
        // "0000" is interior-only, so only the substring pass finds it.
        assert_eq!(resolve("0000"), Some(1));
    }

    #[test]
    fn test_no_match_and_empty_input() {
        assert_eq!(resolve("zzzz"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
        assert_eq!(resolve("---"), None);
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(resolve("  a1b2-c3d4-e5f6  "), Some(0));
    }
}
