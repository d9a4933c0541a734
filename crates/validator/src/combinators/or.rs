//! OR combinators: logical disjunction over a list of rules or constraints
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let rule = disjunctive(
//!     "enter an IPv4 or IPv6 address",
//!     vec![
//!         ipv4_address("ipv4").unwrap().shared(),
//!         ipv6_address("ipv6").unwrap().shared(),
//!     ],
//! )
//! .unwrap();
//! assert!(rule.evaluate("10.0.0.1"));
//! assert!(rule.evaluate("::1"));
//! assert!(!rule.evaluate("localhost"));
//! ```

use std::fmt;

use crate::foundation::{
    Annotated, Constraint, IntoMessage, InvalidArgument, RuleMeta, SharedConstraint, SharedRule,
    Validate,
};

// ============================================================================
// DISJUNCTION (RULE)
// ============================================================================

/// Passes iff at least one child passes. Fails with its own message.
///
/// The child list is never empty.
pub struct Disjunction<V: ?Sized> {
    meta: RuleMeta,
    children: Vec<SharedRule<V>>,
}

impl<V: ?Sized> Disjunction<V> {
    /// Creates a disjunction. Fails if `children` is empty.
    pub fn new(
        message: impl IntoMessage,
        children: Vec<SharedRule<V>>,
    ) -> Result<Self, InvalidArgument> {
        let meta = RuleMeta::new(message)?;
        InvalidArgument::check_children("disjunction", &children)?;
        Ok(Self { meta, children })
    }

    /// Returns the children in evaluation order.
    pub fn children(&self) -> &[SharedRule<V>] {
        &self.children
    }

    /// Replaces the children. The old list stays in place on error.
    pub fn set_children(&mut self, children: Vec<SharedRule<V>>) -> Result<(), InvalidArgument> {
        InvalidArgument::check_children("disjunction", &children)?;
        self.children = children;
        Ok(())
    }
}

impl<V: ?Sized> Clone for Disjunction<V> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            children: self.children.clone(),
        }
    }
}

impl<V: ?Sized> fmt::Debug for Disjunction<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disjunction")
            .field("meta", &self.meta)
            .field("children", &self.children.len())
            .finish()
    }
}

impl<V: ?Sized> Validate for Disjunction<V> {
    type Input = V;

    fn evaluate(&self, input: &V) -> bool {
        self.children.iter().any(|child| child.evaluate(input))
    }

    fn meta(&self) -> &RuleMeta {
        &self.meta
    }
}

impl<V: ?Sized> Annotated for Disjunction<V> {
    fn meta_mut(&mut self) -> &mut RuleMeta {
        &mut self.meta
    }
}

/// Creates a [`Disjunction`].
pub fn disjunctive<V: ?Sized>(
    message: impl IntoMessage,
    children: Vec<SharedRule<V>>,
) -> Result<Disjunction<V>, InvalidArgument> {
    Disjunction::new(message, children)
}

// ============================================================================
// DISJUNCTIVE CONSTRAINT
// ============================================================================

/// Satisfied iff at least one child is satisfied. The child list is never
/// empty.
pub struct DisjunctiveConstraint<V: ?Sized> {
    children: Vec<SharedConstraint<V>>,
}

impl<V: ?Sized> DisjunctiveConstraint<V> {
    /// Creates the constraint. Fails if `children` is empty.
    pub fn new(children: Vec<SharedConstraint<V>>) -> Result<Self, InvalidArgument> {
        InvalidArgument::check_children("disjunctive constraint", &children)?;
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
        InvalidArgument::check_children("disjunctive constraint", &children)?;
        self.children = children;
        Ok(())
    }
}

impl<V: ?Sized> Clone for DisjunctiveConstraint<V> {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
        }
    }
}

impl<V: ?Sized> fmt::Debug for DisjunctiveConstraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisjunctiveConstraint")
            .field("children", &self.children.len())
            .finish()
    }
}

impl<V: ?Sized> Constraint for DisjunctiveConstraint<V> {
    type Input = V;

    fn is_satisfied(&self, input: &V) -> bool {
        self.children.iter().any(|child| child.is_satisfied(input))
    }
}
