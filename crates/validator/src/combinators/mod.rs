//! Rule and constraint combinators
//!
//! - [`Negate`] / [`NegateConstraint`]: logical NOT
//! - [`Conjunction`] / [`ConjunctiveConstraint`]: logical AND over a
//!   non-empty list
//! - [`Disjunction`] / [`DisjunctiveConstraint`]: logical OR over a
//!   non-empty list
//!
//! Rule combinators carry their own message; the children's messages are
//! never surfaced through them.

pub mod and;
pub mod not;
pub mod or;

pub use and::{Conjunction, ConjunctiveConstraint, conjunctive};
pub use not::{Negate, NegateConstraint, negate, negate_constraint};
pub use or::{Disjunction, DisjunctiveConstraint, disjunctive};
