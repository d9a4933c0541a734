//! Regex and text-format rules
//!
//! The format rules (`Email`, `Iri`, `PhoneNumber`) pass on empty text.
//! `MatchesRegex` does not special-case emptiness: it passes on `""` only if
//! the pattern matches `""`.

use std::sync::LazyLock;

use crate::foundation::InvalidArgument;

static EMAIL_REGEX: LazyLock<::regex::Regex> = LazyLock::new(|| {
    ::regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// Optional `+<country>` prefix, optional `(<area>)`, then at least one
// digit; separators (`-`, `.`, space) only between digits.
static PHONE_REGEX: LazyLock<::regex::Regex> = LazyLock::new(|| {
    ::regex::Regex::new(r"^(?:\+[0-9]+[\- .]*)?(?:\([0-9]+\)[\- .]*)?[0-9](?:[0-9\- .]*[0-9])?$")
        .unwrap()
});

// ============================================================================
// REGEX
// ============================================================================

crate::rule! {
    /// Passes iff the whole text matches the pattern.
    ///
    /// The pattern is anchored at both ends, so `\d+` rejects `"12a"`.
    pub MatchesRegex { source: String, pattern: ::regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    new(meta, pattern: &str) {
        let anchored = ::regex::Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|e| InvalidArgument::from((pattern, e)))?;
        Ok(Self { meta, source: pattern.to_owned(), pattern: anchored })
    }
    fn regex(pattern: &str);
}

impl MatchesRegex {
    /// Returns the pattern as given to the constructor.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.source
    }
}

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Passes iff the text is empty or a plausible email address.
    pub Email for str;
    rule(input) { input.is_empty() || EMAIL_REGEX.is_match(input) }
    fn email();
}

// ============================================================================
// IRI
// ============================================================================

crate::rule! {
    /// Passes iff the text is empty or an absolute IRI (scheme required,
    /// non-ASCII characters allowed).
    pub Iri for str;
    rule(input) {
        input.is_empty()
            || (!input.chars().any(char::is_whitespace) && url::Url::parse(input).is_ok())
    }
    fn iri();
}

// ============================================================================
// PHONE NUMBER
// ============================================================================

crate::rule! {
    /// Passes iff the text is empty or looks like a phone number.
    ///
    /// No minimum digit count is enforced: short extensions such as `12`
    /// pass, and the subscriber part must start and end on a digit.
    pub PhoneNumber for str;
    rule(input) { input.is_empty() || PHONE_REGEX.is_match(input) }
    fn phone_number();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_regex_full_match() {
        let rule = regex("digits", r"\d{3}-\d{4}").unwrap();
        assert!(rule.evaluate("123-4567"));
        assert!(!rule.evaluate("x123-4567"));
        assert!(!rule.evaluate("123-45678"));
        assert_eq!(rule.pattern(), r"\d{3}-\d{4}");
    }

    #[test]
    fn test_regex_alternation_is_anchored_as_a_whole() {
        let rule = regex("ab", "a|b").unwrap();
        assert!(rule.evaluate("a"));
        assert!(!rule.evaluate("ab"));
    }

    #[test]
    fn test_regex_empty_text_depends_on_pattern() {
        assert!(regex("opt", "a*").unwrap().evaluate(""));
        assert!(!regex("req", "a+").unwrap().evaluate(""));
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let err = regex("broken", "(").unwrap_err();
        assert_eq!(err.code(), "RULE_INVALID_PATTERN");
    }

    #[test]
    fn test_email() {
        let rule = email("invalid email").unwrap();
        assert!(rule.evaluate(""));
        assert!(rule.evaluate("user@example.com"));
        assert!(!rule.evaluate("invalid"));
        assert!(!rule.evaluate("@example.com"));
        assert!(!rule.evaluate("user@"));
    }

    #[test]
    fn test_iri() {
        let rule = iri("invalid iri").unwrap();
        assert!(rule.evaluate(""));
        assert!(rule.evaluate("https://example.com/path?q=1"));
        assert!(rule.evaluate("https://b\u{fc}cher.example/\u{1f600}"));
        assert!(rule.evaluate("mailto:user@example.com"));
        assert!(!rule.evaluate("not an iri"));
        assert!(!rule.evaluate("example.com"));
    }

    #[test]
    fn test_phone_number() {
        let rule = phone_number("invalid phone").unwrap();
        assert!(rule.evaluate(""));
        assert!(rule.evaluate("+1 (415) 555-1234"));
        assert!(rule.evaluate("0711 123.456"));
        assert!(rule.evaluate("4155551234"));
        assert!(!rule.evaluate("phone"));
        assert!(!rule.evaluate("555-"));
    }

    #[test]
    fn test_phone_number_short_entries() {
        let rule = phone_number("invalid phone").unwrap();
        assert!(rule.evaluate("12"));
        assert!(rule.evaluate("7"));
        assert!(rule.evaluate("+1 (415) 55"));
        assert!(rule.evaluate("+44 20"));
        assert!(!rule.evaluate("+1"));
        assert!(!rule.evaluate("-12"));
        assert!(!rule.evaluate("1 -"));
    }
}
