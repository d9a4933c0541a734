//! Presence rule for optional values
//!
//! Selection controls validate an `Option<T>` (the selected item, or `None`
//! when nothing is selected).
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let rule = not_null::<String>("pick one").unwrap();
//! assert!(rule.validate(&Some("red".to_string())).is_ok());
//! assert_eq!(rule.validate(&None).unwrap_err().message, "pick one");
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Annotated, IntoMessage, InvalidArgument, RuleMeta, Validate};

/// Passes iff the value is `Some`.
pub struct NotNull<T> {
    meta: RuleMeta,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> NotNull<T> {
    /// Creates the rule with the given failure message.
    pub fn new(message: impl IntoMessage) -> Result<Self, InvalidArgument> {
        Ok(Self {
            meta: RuleMeta::new(message)?,
            _phantom: PhantomData,
        })
    }
}

// Manual impls: deriving would bound `T: Debug + Clone`.
impl<T> fmt::Debug for NotNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotNull").field("meta", &self.meta).finish()
    }
}

impl<T> Clone for NotNull<T> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> Validate for NotNull<T> {
    type Input = Option<T>;

    fn evaluate(&self, input: &Self::Input) -> bool {
        input.is_some()
    }

    fn meta(&self) -> &RuleMeta {
        &self.meta
    }
}

impl<T> Annotated for NotNull<T> {
    fn meta_mut(&mut self) -> &mut RuleMeta {
        &mut self.meta
    }
}

/// Creates a [`NotNull`] rule.
pub fn not_null<T>(message: impl IntoMessage) -> Result<NotNull<T>, InvalidArgument> {
    NotNull::new(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_null_some() {
        let rule = not_null::<i32>("required").unwrap();
        assert!(rule.evaluate(&Some(42)));
        assert!(rule.validate(&Some(0)).is_ok());
    }

    #[test]
    fn test_not_null_none() {
        let rule = not_null::<String>("required").unwrap();
        assert!(!rule.evaluate(&None));
        assert_eq!(rule.validate(&None).unwrap_err().message, "required");
    }

    #[test]
    fn test_not_null_without_debug_inner() {
        struct Opaque;
        let rule = not_null::<Opaque>("required").unwrap();
        let cloned = rule.clone();
        assert!(cloned.evaluate(&Some(Opaque)));
        assert!(format!("{rule:?}").starts_with("NotNull"));
    }
}
