//! Character-class rules
//!
//! Shape rules: every rule in this module passes on empty text.

// ============================================================================
// CASE
// ============================================================================

/// Which letter cases a character-class rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Case {
    /// Only `A-Z`.
    Uppercase,
    /// Only `a-z`.
    Lowercase,
    /// Both `A-Z` and `a-z`.
    #[default]
    CaseInsensitive,
}

impl Case {
    #[inline]
    fn accepts(self, c: char) -> bool {
        match self {
            Self::Uppercase => c.is_ascii_uppercase(),
            Self::Lowercase => c.is_ascii_lowercase(),
            Self::CaseInsensitive => c.is_ascii_alphabetic(),
        }
    }
}

/// Strips the allowed extras (and whitespace, if allowed) and checks what is
/// left against the letter class, optionally widened with ASCII digits.
fn matches_class(
    input: &str,
    case: Case,
    allow_spaces: bool,
    allowed: &[char],
    digits: bool,
) -> bool {
    input
        .chars()
        .filter(|c| !allowed.contains(c) && !(allow_spaces && c.is_whitespace()))
        .all(|c| case.accepts(c) || (digits && c.is_ascii_digit()))
}

// ============================================================================
// NO WHITESPACE
// ============================================================================

crate::rule! {
    /// Passes iff the text contains no whitespace.
    ///
    /// Every Unicode whitespace character is rejected, not only the space:
    /// tabs and line breaks fail too.
    pub NoWhitespace for str;
    rule(input) { !input.chars().any(char::is_whitespace) }
    fn no_whitespace();
}

// ============================================================================
// NUMBER
// ============================================================================

crate::rule! {
    /// Passes iff every character is a decimal digit (`0-9`).
    pub Number for str;
    rule(input) { input.chars().all(|c| c.is_ascii_digit()) }
    fn number();
}

// ============================================================================
// LETTER / LETTER OR NUMBER
// ============================================================================

crate::rule! {
    /// Passes iff the text consists of letters of the given case, ignoring
    /// the allowed extra characters and, if enabled, whitespace.
    pub Letter { case: Case, allow_spaces: bool, allowed: Vec<char> } for str;
    rule(self, input) {
        matches_class(input, self.case, self.allow_spaces, &self.allowed, false)
    }
    new(meta, case: Case, allow_spaces: bool, allowed: &[char]) {
        Ok(Self { meta, case, allow_spaces, allowed: allowed.to_vec() })
    }
    fn letter(case: Case, allow_spaces: bool, allowed: &[char]);
}

crate::rule! {
    /// Like [`Letter`], but ASCII digits are accepted too.
    pub LetterOrNumber { case: Case, allow_spaces: bool, allowed: Vec<char> } for str;
    rule(self, input) {
        matches_class(input, self.case, self.allow_spaces, &self.allowed, true)
    }
    new(meta, case: Case, allow_spaces: bool, allowed: &[char]) {
        Ok(Self { meta, case, allow_spaces, allowed: allowed.to_vec() })
    }
    fn letter_or_number(case: Case, allow_spaces: bool, allowed: &[char]);
}

macro_rules! char_class_accessors {
    ($($name:ident),+) => {
        $(
            impl $name {
                /// Accepted letter case.
                #[must_use]
                pub fn case(&self) -> Case {
                    self.case
                }

                /// Whether whitespace is ignored.
                #[must_use]
                pub fn allows_spaces(&self) -> bool {
                    self.allow_spaces
                }

                /// Extra characters that are ignored.
                #[must_use]
                pub fn allowed_characters(&self) -> &[char] {
                    &self.allowed
                }

                /// Changes the accepted letter case.
                pub fn set_case(&mut self, case: Case) {
                    self.case = case;
                }

                /// Replaces the extra characters that are ignored.
                pub fn set_allowed_characters(&mut self, allowed: &[char]) {
                    self.allowed = allowed.to_vec();
                }
            }
        )+
    };
}

char_class_accessors!(Letter, LetterOrNumber);

// ============================================================================
// BEGINS WITH UPPERCASE LETTER
// ============================================================================

/// Titlecase letters (general category Lt). `char::is_uppercase` only
/// covers Lu.
fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

crate::rule! {
    /// Passes iff the text is empty or starts with an uppercase or titlecase
    /// letter (any script).
    pub BeginsWithUppercaseLetter for str;
    rule(input) {
        input.chars().next().is_none_or(|c| c.is_uppercase() || is_titlecase(c))
    }
    fn begins_with_uppercase_letter();
}
