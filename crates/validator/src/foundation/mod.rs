//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the rule engine:
//!
//! - **Traits**: [`Validate`] (rules), [`Constraint`] (scoring predicates),
//!   [`Annotated`], [`ValidateExt`], [`ConstraintExt`]
//! - **Messages**: [`Message`], [`RuleMeta`], [`Icon`], [`MessageSource`]
//! - **Errors**: [`InvalidArgument`], [`ValidationError`]
//!
//! # Architecture
//!
//! ## 1. Construction fails fast, evaluation never fails
//!
//! Every rule constructor returns `Result<_, InvalidArgument>`. A rule that
//! exists is well-formed, so `evaluate` is a total `bool` function:
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! assert!(min_length("too short", 0).is_err());
//!
//! let rule = min_length("too short", 3).unwrap();
//! assert!(!rule.evaluate("hi"));
//! ```
//!
//! ## 2. Sharing by identity
//!
//! Rules are shared as [`SharedRule`] (`Arc<dyn Validate>`). Rule sets and
//! listener lists compare entries by allocation, never by message, so two
//! rules with the same text are still two rules.
//!
//! ## 3. Shape rules let empty text through
//!
//! Character-class and format rules pass on empty text; emptiness is the job
//! of [`NotEmpty`](crate::validators::NotEmpty). Length rules are the
//! exception: they measure, and empty text has length zero.

pub mod error;
pub mod message;
pub mod traits;

pub use error::{InvalidArgument, ValidationError};
pub use message::{Icon, IntoMessage, Message, MessageSource, RuleMeta};
pub use traits::{
    Annotated, Constraint, ConstraintExt, SharedConstraint, SharedRule, Validate, ValidateExt,
};
