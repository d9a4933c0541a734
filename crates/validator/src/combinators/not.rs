//! NOT combinators: logical negation of rules and constraints
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! // Rule that forbids an all-digit value
//! let rule = negate("must contain a non-digit", number("digits only").unwrap()).unwrap();
//! assert!(rule.validate("abc123").is_ok());
//! assert!(rule.validate("123").is_err());
//! ```

use crate::foundation::{
    Annotated, Constraint, IntoMessage, InvalidArgument, RuleMeta, Validate,
};

// ============================================================================
// NEGATE (RULE)
// ============================================================================

/// Inverts a rule with logical NOT.
///
/// - If the child passes, `Negate` fails with its own message
/// - If the child fails, `Negate` passes
///
/// The child's message is never shown.
#[derive(Debug, Clone)]
pub struct Negate<R> {
    meta: RuleMeta,
    child: R,
}

impl<R> Negate<R>
where
    R: Validate,
{
    /// Creates a new `Negate` combinator.
    pub fn new(message: impl IntoMessage, child: R) -> Result<Self, InvalidArgument> {
        Ok(Self {
            meta: RuleMeta::new(message)?,
            child,
        })
    }

    /// Returns a reference to the negated rule.
    pub fn child(&self) -> &R {
        &self.child
    }

    /// Replaces the negated rule.
    pub fn set_child(&mut self, child: R) {
        self.child = child;
    }

    /// Extracts the negated rule.
    pub fn into_inner(self) -> R {
        self.child
    }
}

impl<R> Validate for Negate<R>
where
    R: Validate,
{
    type Input = R::Input;

    fn evaluate(&self, input: &Self::Input) -> bool {
        !self.child.evaluate(input)
    }

    fn meta(&self) -> &RuleMeta {
        &self.meta
    }
}

impl<R> Annotated for Negate<R> {
    fn meta_mut(&mut self) -> &mut RuleMeta {
        &mut self.meta
    }
}

/// Creates a [`Negate`] combinator.
pub fn negate<R>(message: impl IntoMessage, child: R) -> Result<Negate<R>, InvalidArgument>
where
    R: Validate,
{
    Negate::new(message, child)
}

// ============================================================================
// NEGATE (CONSTRAINT)
// ============================================================================

/// Inverts a constraint with logical NOT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegateConstraint<C> {
    child: C,
}

impl<C> NegateConstraint<C> {
    /// Creates a new `NegateConstraint`.
    pub fn new(child: C) -> Self {
        Self { child }
    }

    /// Returns a reference to the negated constraint.
    pub fn child(&self) -> &C {
        &self.child
    }

    /// Extracts the negated constraint.
    pub fn into_inner(self) -> C {
        self.child
    }
}

impl<C> Constraint for NegateConstraint<C>
where
    C: Constraint,
{
    type Input = C::Input;

    fn is_satisfied(&self, input: &Self::Input) -> bool {
        !self.child.is_satisfied(input)
    }
}

/// Creates a [`NegateConstraint`].
pub fn negate_constraint<C>(child: C) -> NegateConstraint<C>
where
    C: Constraint,
{
    NegateConstraint::new(child)
}
