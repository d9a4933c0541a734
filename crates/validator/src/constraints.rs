//! Scoring constraints for password strength
//!
//! Character classes are ASCII: a letter is `A-Za-z`, a number `0-9`, and a
//! symbol anything that is neither ASCII alphanumeric nor whitespace.
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! assert!(ContainsSymbol.is_satisfied("pa$$word"));
//! assert!(!ContainsUppercaseLetter.is_satisfied("password"));
//! ```

use crate::foundation::{Constraint, InvalidArgument};
use crate::validators::MIN_LENGTH_BOUND;

/// Declares a unit constraint that holds if any character matches.
macro_rules! any_char_constraint {
    ($(#[$attr:meta])* $name:ident, $pred:expr) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl Constraint for $name {
            type Input = str;

            fn is_satisfied(&self, input: &str) -> bool {
                input.chars().any($pred)
            }
        }
    };
}

any_char_constraint!(
    /// Satisfied iff the text contains an ASCII letter.
    ContainsLetter,
    |c: char| c.is_ascii_alphabetic()
);

any_char_constraint!(
    /// Satisfied iff the text contains an ASCII digit.
    ContainsNumber,
    |c: char| c.is_ascii_digit()
);

any_char_constraint!(
    /// Satisfied iff the text contains a character that is neither ASCII
    /// alphanumeric nor whitespace.
    ContainsSymbol,
    |c: char| !c.is_ascii_alphanumeric() && !c.is_whitespace()
);

any_char_constraint!(
    /// Satisfied iff the text contains an ASCII uppercase letter.
    ContainsUppercaseLetter,
    |c: char| c.is_ascii_uppercase()
);

any_char_constraint!(
    /// Satisfied iff the text contains an ASCII lowercase letter.
    ContainsLowercaseLetter,
    |c: char| c.is_ascii_lowercase()
);

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Satisfied iff the text has at least `min` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinLengthConstraint {
    min: usize,
}

impl MinLengthConstraint {
    /// Creates the constraint. Rejects bounds below 1.
    pub fn new(min: usize) -> Result<Self, InvalidArgument> {
        InvalidArgument::check_minimum("min", MIN_LENGTH_BOUND, min)?;
        Ok(Self { min })
    }

    /// Returns the minimum length.
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Changes the minimum length. Rejects bounds below 1.
    pub fn set_min(&mut self, min: usize) -> Result<(), InvalidArgument> {
        InvalidArgument::check_minimum("min", MIN_LENGTH_BOUND, min)?;
        self.min = min;
        Ok(())
    }
}

impl Constraint for MinLengthConstraint {
    type Input = str;

    fn is_satisfied(&self, input: &str) -> bool {
        input.chars().count() >= self.min
    }
}

// ============================================================================
// REGEX
// ============================================================================

/// Satisfied iff the whole text matches the pattern.
#[derive(Debug, Clone)]
pub struct RegexConstraint {
    source: String,
    pattern: regex::Regex,
}

impl RegexConstraint {
    /// Compiles the constraint. Fails on an invalid pattern.
    pub fn new(pattern: &str) -> Result<Self, InvalidArgument> {
        let anchored = regex::Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|e| InvalidArgument::from((pattern, e)))?;
        Ok(Self {
            source: pattern.to_owned(),
            pattern: anchored,
        })
    }

    /// Returns the pattern as given to the constructor.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.source
    }
}

impl Constraint for RegexConstraint {
    type Input = str;

    fn is_satisfied(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}
