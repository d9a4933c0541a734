//! Ordered, identity-deduplicated rule sets
//!
//! A [`RuleSet`] keeps rules in insertion order and never holds the same
//! rule (the same `Arc` allocation) twice. Evaluation runs every rule, even
//! after the first failure, so observers can be told about each one; only
//! the first failure is reported as the error.
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let required = not_empty("required").unwrap().shared();
//! let digits = number("digits only").unwrap().shared();
//!
//! let mut rules = RuleSet::new();
//! assert!(rules.add_rule(required.clone()));
//! assert!(rules.add_rule(digits));
//! assert!(!rules.add_rule(required)); // already present
//!
//! assert_eq!(rules.validate("").unwrap_err().message, "required");
//! assert_eq!(rules.validate("abc").unwrap_err().message, "digits only");
//! assert!(rules.validate("123").is_ok());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::foundation::{SharedRule, ValidationError};

// ============================================================================
// IDENTITY
// ============================================================================

/// Position of `item` in `items`, compared by allocation.
pub(crate) fn position_of<T: ?Sized>(items: &[Arc<T>], item: &Arc<T>) -> Option<usize> {
    items.iter().position(|existing| Arc::ptr_eq(existing, item))
}

/// Appends `item` unless the same allocation is already present.
pub(crate) fn insert_unique<T: ?Sized>(items: &mut Vec<Arc<T>>, item: Arc<T>) -> bool {
    if position_of(items, &item).is_some() {
        return false;
    }
    items.push(item);
    true
}

/// Removes `item` by allocation. Absent items are a no-op.
pub(crate) fn remove_by_identity<T: ?Sized>(items: &mut Vec<Arc<T>>, item: &Arc<T>) -> bool {
    match position_of(items, item) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Outcome of evaluating a value against a [`RuleSet`].
///
/// Holds every failing rule, in insertion order.
pub struct Evaluation<V: ?Sized> {
    failures: Vec<SharedRule<V>>,
}

impl<V: ?Sized> Evaluation<V> {
    /// `true` if no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Every failing rule, in insertion order.
    #[must_use]
    pub fn failures(&self) -> &[SharedRule<V>] {
        &self.failures
    }

    /// The reported failure: the first failing rule in insertion order.
    #[must_use]
    pub fn first_failure(&self) -> Option<&SharedRule<V>> {
        self.failures.first()
    }

    /// The first failure as a displayable error.
    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        self.first_failure().map(|rule| rule.failure())
    }

    /// Converts into `Ok(())` or the first failure.
    pub fn into_result(self) -> Result<(), ValidationError> {
        self.error().map_or(Ok(()), Err)
    }
}

impl<V: ?Sized> fmt::Debug for Evaluation<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.failures.iter().map(|rule| rule.message()).collect();
        f.debug_struct("Evaluation")
            .field("failures", &messages)
            .finish()
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered set of shared rules, deduplicated by identity.
pub struct RuleSet<V: ?Sized> {
    rules: Vec<SharedRule<V>>,
}

impl<V: ?Sized> RuleSet<V> {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule at the end. Returns `false` (and changes nothing) if the
    /// same rule is already present.
    pub fn add_rule(&mut self, rule: SharedRule<V>) -> bool {
        insert_unique(&mut self.rules, rule)
    }

    /// Adds each rule in order, skipping duplicates. Returns how many were
    /// added.
    pub fn add_all_rules<I>(&mut self, rules: I) -> usize
    where
        I: IntoIterator<Item = SharedRule<V>>,
    {
        let mut added = 0;
        for rule in rules {
            if insert_unique(&mut self.rules, rule) {
                added += 1;
            }
        }
        added
    }

    /// Removes a rule by identity. Returns `false` if it was not present.
    pub fn remove_rule(&mut self, rule: &SharedRule<V>) -> bool {
        remove_by_identity(&mut self.rules, rule)
    }

    /// Removes each given rule by identity. Returns how many were removed.
    pub fn remove_all_rules<'a, I>(&mut self, rules: I) -> usize
    where
        I: IntoIterator<Item = &'a SharedRule<V>>,
        V: 'a,
    {
        rules
            .into_iter()
            .filter(|rule| remove_by_identity(&mut self.rules, *rule))
            .count()
    }

    /// Removes every rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// The rules in insertion order.
    #[must_use]
    pub fn rules(&self) -> &[SharedRule<V>] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// `true` if this exact rule is in the set.
    #[must_use]
    pub fn contains(&self, rule: &SharedRule<V>) -> bool {
        position_of(&self.rules, rule).is_some()
    }

    /// Evaluates every rule against `value`, in insertion order.
    pub fn evaluate(&self, value: &V) -> Evaluation<V> {
        let failures = self
            .rules
            .iter()
            .filter(|rule| !rule.evaluate(value))
            .cloned()
            .collect();
        Evaluation { failures }
    }

    /// Evaluates every rule and reports the first failure.
    pub fn validate(&self, value: &V) -> Result<(), ValidationError> {
        self.evaluate(value).into_result()
    }
}

impl<V: ?Sized> Default for RuleSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized> Clone for RuleSet<V> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<V: ?Sized> fmt::Debug for RuleSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.rules.iter().map(|rule| rule.message()).collect();
        f.debug_struct("RuleSet").field("rules", &messages).finish()
    }
}

impl<V: ?Sized> FromIterator<SharedRule<V>> for RuleSet<V> {
    fn from_iter<I: IntoIterator<Item = SharedRule<V>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add_all_rules(iter);
        set
    }
}

// ============================================================================
// TESTS
// ============================================================================
