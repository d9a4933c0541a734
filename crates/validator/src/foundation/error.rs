//! Error types for rule construction and validation failures
//!
//! Two kinds of "error" live here and they never mix:
//!
//! - [`InvalidArgument`] is a real error. It is raised synchronously when a
//!   rule, constraint or combinator is built (or mutated) with arguments that
//!   break its invariants. Once construction succeeds, evaluation can no
//!   longer fail.
//! - [`ValidationError`] is *data*: the message and icon of the rule that
//!   rejected a value. It is returned from `validate` and shown to the user.

use std::fmt;

use super::message::Icon;

// ============================================================================
// INVALID ARGUMENT
// ============================================================================

/// Raised when a rule or constraint is constructed or mutated with arguments
/// that violate its invariants.
///
/// # Examples
///
/// ```rust
/// use formcheck_validator::foundation::InvalidArgument;
/// use formcheck_validator::validators::MinLength;
///
/// let err = MinLength::new("too short", 0).unwrap_err();
/// assert!(matches!(err, InvalidArgument::BelowMinimum { name: "min", .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidArgument {
    /// The failure message was empty.
    #[error("message must not be empty")]
    EmptyMessage,

    /// A message key could not be resolved by the message source.
    #[error("no message registered for key `{key}`")]
    UnresolvedMessage {
        /// The key that was looked up.
        key: String,
    },

    /// A numeric bound is below its documented minimum.
    #[error("`{name}` must be at least {min}, got {actual}")]
    BelowMinimum {
        /// Name of the offending argument.
        name: &'static str,
        /// Smallest accepted value.
        min: usize,
        /// Value that was passed.
        actual: usize,
    },

    /// A conjunction or disjunction was given no children.
    #[error("{combinator} requires at least one child")]
    NoChildren {
        /// Name of the combinator being built.
        combinator: &'static str,
    },

    /// A regular expression did not compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern as passed by the caller.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },
}

impl InvalidArgument {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "RULE_EMPTY_MESSAGE",
            Self::UnresolvedMessage { .. } => "RULE_UNRESOLVED_MESSAGE",
            Self::BelowMinimum { .. } => "RULE_BELOW_MINIMUM",
            Self::NoChildren { .. } => "RULE_NO_CHILDREN",
            Self::InvalidPattern { .. } => "RULE_INVALID_PATTERN",
        }
    }

    /// Checks that `actual >= min`, naming the argument on failure.
    pub(crate) fn check_minimum(
        name: &'static str,
        min: usize,
        actual: usize,
    ) -> Result<(), Self> {
        if actual < min {
            return Err(Self::BelowMinimum { name, min, actual });
        }
        Ok(())
    }

    /// Checks that a combinator's child list is non-empty.
    pub(crate) fn check_children<T>(
        combinator: &'static str,
        children: &[T],
    ) -> Result<(), Self> {
        if children.is_empty() {
            return Err(Self::NoChildren { combinator });
        }
        Ok(())
    }
}

impl From<(&str, regex::Error)> for InvalidArgument {
    fn from((pattern, error): (&str, regex::Error)) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: error.to_string(),
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The displayable outcome of a failed rule: its message and optional icon.
///
/// This is not raised as an error past the rule boundary; it is the modeled
/// result of a value not passing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Message of the rule that rejected the value.
    pub message: String,
    /// Icon of the rule that rejected the value, if any.
    pub icon: Option<Icon>,
}

impl ValidationError {
    /// Creates a validation error with a message and no icon.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            icon: None,
        }
    }

    /// Attaches an icon.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}
