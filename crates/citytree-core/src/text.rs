// crates/citytree-core/src/text.rs
use std::cmp::Ordering;

/// Case-folds a name for comparison.
///
/// Uses full Unicode lowercasing, so `"ZÜRICH"` and `"zürich"` fold to the same
/// key. No transliteration is applied: `"Zürich"` and `"Zurich"` stay distinct.
///
/// # Examples
///
/// ```rust
/// use citytree_core::text::fold_case;
///
/// assert_eq!(fold_case("New York"), "new york");
/// assert_eq!(fold_case("ZÜRICH"), "zürich");
/// ```
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality on folded form.
#[inline]
pub fn equals_folded(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || fold_case(a) == fold_case(b)
}

/// Case-insensitive lexicographic ordering of two names.
#[inline]
pub fn cmp_folded(a: &str, b: &str) -> Ordering {
    fold_case(a).cmp(&fold_case(b))
}

/// Case-insensitive prefix test. An empty `prefix` matches everything.
#[inline]
pub fn starts_with_folded(s: &str, prefix: &str) -> bool {
    prefix.is_empty() || fold_case(s).starts_with(&fold_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_case() {
        assert!(equals_folded("Boston", "BOSTON"));
        assert!(equals_folded("münchen", "MÜNCHEN"));
        assert!(!equals_folded("Boston", "Bostonia"));
    }

    #[test]
    fn ordering_ignores_case() {
        assert_eq!(cmp_folded("apollo", "Boston"), Ordering::Less);
        assert_eq!(cmp_folded("CHICAGO", "boston"), Ordering::Greater);
        assert_eq!(cmp_folded("Paris", "pArIs"), Ordering::Equal);
    }

    #[test]
    fn prefix() {
        assert!(starts_with_folded("Portland", "port"));
        assert!(starts_with_folded("Portland", ""));
        assert!(!starts_with_folded("Port", "Portland"));
    }
}
