//! Domain name rule (RFC 1123 host names).
//!
//! - Total length: 1..=253 characters (excluding optional trailing dot)
//! - Split by `.` into labels
//! - Each label: 1..=63 characters, `[a-zA-Z0-9-]` only
//! - Labels must not start or end with a hyphen
//! - Trailing dot optional (FQDN)
//!
//! Empty text passes; pair with [`NotEmpty`](super::NotEmpty) to require a
//! value.

const MAX_NAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Returns `true` if `input` is a syntactically valid host name.
pub(crate) fn is_domain_name(input: &str) -> bool {
    // Strip optional trailing dot (FQDN notation)
    let name = input.strip_suffix('.').unwrap_or(input);
    !name.is_empty() && name.len() <= MAX_NAME_LENGTH && name.split('.').all(is_valid_label)
}

// ============================================================================
// DOMAIN NAME
// ============================================================================

crate::rule! {
    /// Passes iff the text is empty or a valid domain name.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::validators::domain_name;
    /// use formcheck_validator::foundation::Validate;
    ///
    /// let rule = domain_name("invalid domain").unwrap();
    /// assert!(rule.validate("example.com").is_ok());
    /// assert!(rule.validate("example.com.").is_ok()); // trailing dot FQDN
    /// assert!(rule.validate("").is_ok());
    /// assert!(rule.validate("-bad.com").is_err());
    /// ```
    pub DomainName for str;
    rule(input) { input.is_empty() || is_domain_name(input) }
    fn domain_name();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    fn rule() -> DomainName {
        domain_name("invalid domain").unwrap()
    }

    // --- Valid names ---

    #[test]
    fn valid_simple_domain() {
        assert!(rule().evaluate("example.com"));
    }

    #[test]
    fn valid_subdomain() {
        assert!(rule().evaluate("api.example.com"));
    }

    #[test]
    fn valid_localhost() {
        assert!(rule().evaluate("localhost"));
    }

    #[test]
    fn valid_uppercase_and_hyphen() {
        assert!(rule().evaluate("MY-HOST.EXAMPLE.COM"));
    }

    #[test]
    fn valid_trailing_dot_fqdn() {
        assert!(rule().evaluate("example.com."));
    }

    #[test]
    fn valid_max_label_length() {
        assert!(rule().evaluate(&"a".repeat(63)));
    }

    #[test]
    fn empty_passes() {
        assert!(rule().evaluate(""));
    }

    // --- Invalid names ---

    #[test]
    fn invalid_only_dot() {
        assert!(!rule().evaluate("."));
    }

    #[test]
    fn invalid_label_too_long() {
        assert!(!rule().evaluate(&format!("{}.com", "a".repeat(64))));
    }

    #[test]
    fn invalid_total_too_long() {
        let name = ["a".repeat(63), "b".repeat(63), "c".repeat(63), "d".repeat(63)].join(".");
        assert_eq!(name.len(), 255);
        assert!(!rule().evaluate(&name));
    }

    #[test]
    fn invalid_hyphen_edges() {
        assert!(!rule().evaluate("-bad.com"));
        assert!(!rule().evaluate("bad-.com"));
    }

    #[test]
    fn invalid_empty_label() {
        assert!(!rule().evaluate("example..com"));
    }

    #[test]
    fn invalid_characters() {
        assert!(!rule().evaluate("exa_mple.com"));
        assert!(!rule().evaluate("exa mple.com"));
    }
}
