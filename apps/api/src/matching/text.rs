//! Case-insensitive substring matching shared by the course, school, and
//! scholarship matchers. Normalization is trim + lowercase only — punctuation
//! and inner whitespace are compared as-is.

/// Normalizes a string for comparison.
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// True if `needle` occurs anywhere in `haystack`, ignoring case.
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// Bidirectional containment: either string may be the substring of the other.
pub fn overlaps_fold(a: &str, b: &str) -> bool {
    let a = fold(a);
    let b = fold(b);
    a.contains(&b) || b.contains(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_trims_and_lowercases() {
        assert_eq!(fold("  Computer Science "), "computer science");
    }

    #[test]
    fn test_contains_fold_ignores_case() {
        assert!(contains_fold("Bachelor of Science in Computer Science", "computer SCIENCE"));
        assert!(!contains_fold("Culinary Arts", "computer"));
    }

    #[test]
    fn test_contains_fold_is_directional() {
        assert!(contains_fold("web development", "web"));
        assert!(!contains_fold("web", "web development"));
    }

    #[test]
    fn test_overlaps_fold_both_directions() {
        assert!(overlaps_fold("programming", "Computer Programming"));
        assert!(overlaps_fold("Computer Programming", "programming"));
        assert!(!overlaps_fold("cooking", "design"));
    }

    #[test]
    fn test_punctuation_is_not_normalized() {
        assert!(!contains_fold("arts and design", "arts & design"));
    }
}
