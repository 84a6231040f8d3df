//! Cache key normalization.
//!
//! Service titles and project categories are matched case-insensitively
//! everywhere in the system. Every lookup and every cache entry goes
//! through [`normalize`] so that `"web design"`, `"WEB DESIGN"` and
//! `"WeB DeSiGn"` all resolve to the same key.

/// Normalizes a title or category into its canonical cache-key form.
///
/// Trims surrounding whitespace and uppercases the string. Two inputs are
/// the same key if and only if their normalized forms are equal.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Returns true if two titles/categories are the same key.
pub fn eq_key(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases() {
        assert_eq!(normalize("web design"), "WEB DESIGN");
        assert_eq!(normalize("WeB DeSiGn"), "WEB DESIGN");
        assert_eq!(normalize("WEB DESIGN"), "WEB DESIGN");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("  branding "), "BRANDING");
    }

    #[test]
    fn test_eq_key() {
        assert!(eq_key("Branding", "BRANDING"));
        assert!(eq_key(" branding", "Branding "));
        assert!(!eq_key("Branding", "Motion"));
    }
}
