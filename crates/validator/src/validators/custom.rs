//! Closure-backed rules
//!
//! For one-off checks that do not deserve their own type.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Annotated, IntoMessage, InvalidArgument, RuleMeta, Validate};

/// A rule whose predicate is a closure.
///
/// # Examples
///
/// ```rust
/// use formcheck_validator::prelude::*;
///
/// let even = custom("must be even", |n: &u32| n % 2 == 0).unwrap();
/// assert!(even.evaluate(&4));
/// assert!(!even.evaluate(&3));
/// ```
pub struct Custom<V: ?Sized, F> {
    meta: RuleMeta,
    predicate: F,
    _input: PhantomData<fn(&V)>,
}

impl<V, F> Custom<V, F>
where
    V: ?Sized,
    F: Fn(&V) -> bool + Send + Sync,
{
    /// Creates the rule with the given failure message.
    pub fn new(message: impl IntoMessage, predicate: F) -> Result<Self, InvalidArgument> {
        Ok(Self {
            meta: RuleMeta::new(message)?,
            predicate,
            _input: PhantomData,
        })
    }
}

impl<V: ?Sized, F> fmt::Debug for Custom<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

impl<V, F> Validate for Custom<V, F>
where
    V: ?Sized,
    F: Fn(&V) -> bool + Send + Sync,
{
    type Input = V;

    fn evaluate(&self, input: &V) -> bool {
        (self.predicate)(input)
    }

    fn meta(&self) -> &RuleMeta {
        &self.meta
    }
}

impl<V: ?Sized, F> Annotated for Custom<V, F> {
    fn meta_mut(&mut self) -> &mut RuleMeta {
        &mut self.meta
    }
}

/// Creates a [`Custom`] rule from a closure.
pub fn custom<V, F>(message: impl IntoMessage, predicate: F) -> Result<Custom<V, F>, InvalidArgument>
where
    V: ?Sized,
    F: Fn(&V) -> bool + Send + Sync,
{
    Custom::new(message, predicate)
}
