//! AND combinators: logical conjunction over a list of rules or constraints
//!
//! Children are shared handles, so the same rule can sit in several
//! conjunctions and in a rule set at once.
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let rule = conjunctive(
//!     "5 to 20 characters",
//!     vec![
//!         min_length("too short", 5).unwrap().shared(),
//!         max_length("too long", 20).unwrap().shared(),
//!     ],
//! )
//! .unwrap();
//! assert!(rule.validate("hello").is_ok());
//! assert_eq!(rule.validate("hi").unwrap_err().message, "5 to 20 characters");
//! ```

use std::fmt;

use crate::foundation::{
    Annotated, Constraint, IntoMessage, InvalidArgument, RuleMeta, SharedConstraint, SharedRule,
    Validate,
};

// ============================================================================
// CONJUNCTION (RULE)
// ============================================================================

/// Passes iff every child passes. Fails with its own message.
///
/// The child list is never empty.
pub struct Conjunction<V: ?Sized> {
    meta: RuleMeta,
    children: Vec<SharedRule<V>>,
}

impl<V: ?Sized> Conjunction<V> {
    /// Creates a conjunction. Fails if `children` is empty.
    pub fn new(
        message: impl IntoMessage,
        children: Vec<SharedRule<V>>,
    ) -> Result<Self, InvalidArgument> {
        let meta = RuleMeta::new(message)?;
        InvalidArgument::check_children("conjunction", &children)?;
        Ok(Self { meta, children })
    }

    /// Returns the children in evaluation order.
    pub fn children(&self) -> &[SharedRule<V>] {
        &self.children
    }

    /// Replaces the children. The old list stays in place on error.
    pub fn set_children(&mut self, children: Vec<SharedRule<V>>) -> Result<(), InvalidArgument> {
        InvalidArgument::check_children("conjunction", &children)?;
        self.children = children;
        Ok(())
    }
}

impl<V: ?Sized> Clone for Conjunction<V> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            children: self.children.clone(),
        }
    }
}

impl<V: ?Sized> fmt::Debug for Conjunction<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conjunction")
            .field("meta", &self.meta)
            .field("children", &self.children.len())
            .finish()
    }
}

impl<V: ?Sized> Validate for Conjunction<V> {
    type Input = V;

    fn evaluate(&self, input: &V) -> bool {
        self.children.iter().all(|child| child.evaluate(input))
    }

    fn meta(&self) -> &RuleMeta {
        &self.meta
    }
}

impl<V: ?Sized> Annotated for Conjunction<V> {
    fn meta_mut(&mut self) -> &mut RuleMeta {
        &mut self.meta
    }
}

/// Creates a [`Conjunction`].
pub fn conjunctive<V: ?Sized>(
    message: impl IntoMessage,
    children: Vec<SharedRule<V>>,
) -> Result<Conjunction<V>, InvalidArgument> {
    Conjunction::new(message, children)
}

// ============================================================================
// CONJUNCTIVE CONSTRAINT
// ============================================================================

/// Satisfied iff every child is satisfied. The child list is never empty.
pub struct ConjunctiveConstraint<V: ?Sized> {
    children: Vec<SharedConstraint<V>>,
}

impl<V: ?Sized> ConjunctiveConstraint<V> {
    /// Creates the constraint. Fails if `children` is empty.
    pub fn new(children: Vec<SharedConstraint<V>>) -> Result<Self, InvalidArgument> {
        InvalidArgument::check_children("conjunctive constraint", &children)?;
        Ok(Self { children })
    }

    /// Returns the children.
    pub fn children(&self) -> &[SharedConstraint<V>] {
        &self.children
    }

    /// Replaces the children. The old list stays in place on error.
    pub fn set_children(
        &mut self,
        children: Vec<SharedConstraint<V>>,
    ) -> Result<(), InvalidArgument> {
        InvalidArgument::check_children("conjunctive constraint", &children)?;
        self.children = children;
        Ok(())
    }
}

impl<V: ?Sized> Clone for ConjunctiveConstraint<V> {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
        }
    }
}

impl<V: ?Sized> fmt::Debug for ConjunctiveConstraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConjunctiveConstraint")
            .field("children", &self.children.len())
            .finish()
    }
}

impl<V: ?Sized> Constraint for ConjunctiveConstraint<V> {
    type Input = V;

    fn is_satisfied(&self, input: &V) -> bool {
        self.children.iter().all(|child| child.is_satisfied(input))
    }
}
