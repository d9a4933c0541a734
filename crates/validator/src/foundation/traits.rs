//! Core traits for the validation system
//!
//! This module defines the two predicate families:
//!
//! - [`Validate`]: a rule. Evaluates a value and carries the message shown
//!   when the value does not pass.
//! - [`Constraint`]: a bare predicate used for scoring. No message.

use std::sync::Arc;

use super::error::{InvalidArgument, ValidationError};
use super::message::{Icon, IntoMessage, RuleMeta};
use crate::combinators::{Negate, NegateConstraint};

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The core trait that all rules implement.
///
/// `evaluate` is pure: no side effects, same answer for the same value.
/// Rules are shared between subjects as [`SharedRule`], so they must be
/// `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use formcheck_validator::foundation::{RuleMeta, Validate};
///
/// struct Even {
///     meta: RuleMeta,
/// }
///
/// impl Validate for Even {
///     type Input = u32;
///
///     fn evaluate(&self, input: &u32) -> bool {
///         input % 2 == 0
///     }
///
///     fn meta(&self) -> &RuleMeta {
///         &self.meta
///     }
/// }
///
/// let rule = Even { meta: RuleMeta::new("Must be even").unwrap() };
/// assert!(rule.validate(&4).is_ok());
/// assert_eq!(rule.validate(&3).unwrap_err().message, "Must be even");
/// ```
pub trait Validate: Send + Sync {
    /// The type of value being validated (`?Sized` so `str` works).
    type Input: ?Sized;

    /// Returns `true` if the value passes.
    fn evaluate(&self, input: &Self::Input) -> bool;

    /// Message and icon of this rule.
    fn meta(&self) -> &RuleMeta;

    /// The message shown when a value does not pass.
    fn message(&self) -> &str {
        self.meta().message()
    }

    /// The icon shown next to the message, if any.
    fn icon(&self) -> Option<&Icon> {
        self.meta().icon()
    }

    /// The displayable failure of this rule.
    fn failure(&self) -> ValidationError {
        ValidationError {
            message: self.message().to_owned(),
            icon: self.icon().cloned(),
        }
    }

    /// Evaluates the value and turns a rejection into this rule's failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.evaluate(input) {
            Ok(())
        } else {
            Err(self.failure())
        }
    }
}

impl<T> Validate for Arc<T>
where
    T: Validate + ?Sized,
{
    type Input = T::Input;

    fn evaluate(&self, input: &Self::Input) -> bool {
        (**self).evaluate(input)
    }

    fn meta(&self) -> &RuleMeta {
        (**self).meta()
    }
}

/// A rule shared by reference. Identity is the allocation, not the message.
pub type SharedRule<V> = Arc<dyn Validate<Input = V>>;

// ============================================================================
// CONSTRAINT TRAIT
// ============================================================================

/// A predicate used for strength scoring.
///
/// Unlike [`Validate`], a constraint has no message: it only contributes
/// to a score.
pub trait Constraint: Send + Sync {
    /// The type of value being checked.
    type Input: ?Sized;

    /// Returns `true` if the value satisfies the constraint.
    fn is_satisfied(&self, input: &Self::Input) -> bool;
}

impl<T> Constraint for Arc<T>
where
    T: Constraint + ?Sized,
{
    type Input = T::Input;

    fn is_satisfied(&self, input: &Self::Input) -> bool {
        (**self).is_satisfied(input)
    }
}

/// A constraint shared by reference.
pub type SharedConstraint<V> = Arc<dyn Constraint<Input = V>>;

// ============================================================================
// MUTABLE METADATA
// ============================================================================

/// Access to a rule's message and icon after construction.
///
/// The message stays non-empty: `set_message` rejects empty text and keeps
/// the previous message.
pub trait Annotated {
    /// Mutable access to the rule's metadata.
    fn meta_mut(&mut self) -> &mut RuleMeta;

    /// Replaces the failure message.
    fn set_message(&mut self, message: impl IntoMessage) -> Result<(), InvalidArgument>
    where
        Self: Sized,
    {
        self.meta_mut().set_message(message)
    }

    /// Replaces or removes the icon.
    fn set_icon(&mut self, icon: Option<Icon>) {
        self.meta_mut().set_icon(icon);
    }

    /// Builder form of [`set_icon`](Self::set_icon).
    #[must_use = "builder methods must be chained or built"]
    fn with_icon(mut self, icon: impl Into<Icon>) -> Self
    where
        Self: Sized,
    {
        self.meta_mut().set_icon(Some(icon.into()));
        self
    }
}

// ============================================================================
// EXTENSION TRAITS
// ============================================================================

/// Extension methods available on every rule.
pub trait ValidateExt: Validate + Sized + 'static {
    /// Wraps the rule in a negation with its own message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formcheck_validator::prelude::*;
    ///
    /// let no_digits = number("digits only").unwrap().negate("must not be numeric").unwrap();
    /// assert!(no_digits.evaluate("abc"));
    /// assert!(!no_digits.evaluate("123"));
    /// ```
    fn negate(self, message: impl IntoMessage) -> Result<Negate<Self>, InvalidArgument> {
        Negate::new(message, self)
    }

    /// Moves the rule behind an `Arc` so it can be added to rule sets and
    /// combinators.
    fn shared(self) -> SharedRule<Self::Input> {
        Arc::new(self)
    }
}

impl<T> ValidateExt for T where T: Validate + 'static {}

/// Extension methods available on every constraint.
pub trait ConstraintExt: Constraint + Sized + 'static {
    /// Inverts the constraint.
    fn negate(self) -> NegateConstraint<Self> {
        NegateConstraint::new(self)
    }

    /// Moves the constraint behind an `Arc`.
    fn shared(self) -> SharedConstraint<Self::Input> {
        Arc::new(self)
    }
}

impl<T> ConstraintExt for T where T: Constraint + 'static {}

// ============================================================================
// TESTS
// ============================================================================
