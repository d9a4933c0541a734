//! Prelude module for convenient imports.
//!
//! Provides a single `use formcheck_validator::prelude::*;` import that brings
//! in the traits, rules, combinators and hosts most callers need.
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let mut rules = RuleSet::new();
//! rules.add_rule(min_length("too short", 3).unwrap().shared());
//! rules.add_rule(no_whitespace("no spaces").unwrap().shared());
//! assert_eq!(rules.validate("a b").unwrap_err().message, "no spaces");
//! assert_eq!(rules.validate("ab").unwrap_err().message, "too short");
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, messages
// ============================================================================

pub use crate::foundation::{
    Annotated, Constraint, ConstraintExt, Icon, IntoMessage, InvalidArgument, Message,
    MessageSource, RuleMeta, SharedConstraint, SharedRule, Validate, ValidateExt,
    ValidationError,
};

// ============================================================================
// RULES & CONSTRAINTS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::constraints::{
    ContainsLetter, ContainsLowercaseLetter, ContainsNumber, ContainsSymbol,
    ContainsUppercaseLetter, MinLengthConstraint, RegexConstraint,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{
    Conjunction, ConjunctiveConstraint, Disjunction, DisjunctiveConstraint, Negate,
    NegateConstraint, conjunctive, disjunctive, negate, negate_constraint,
};

// ============================================================================
// RULE SETS, SUBJECTS & STRENGTH
// ============================================================================

pub use crate::rule_set::{Evaluation, RuleSet};
pub use crate::strength::{
    Color, PasswordStrength, Score, StrengthConfig, StrengthHint, select_tier,
};
pub use crate::subject::{
    Channel, FieldValue, SelectionField, SelectionState, SharedListener, Subject, SubjectState,
    TextField, Validatable, ValidationListener, ValidationPolicy, Validity,
};
