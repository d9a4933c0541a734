//! Validatable subjects and their hosts
//!
//! A [`Subject`] is the toolkit-independent part of a form field: a name,
//! two independently evaluated rule channels, listeners, policy flags and
//! the displayed validity. Hosts ([`TextField`], [`SelectionField`]) supply
//! the current value and implement [`Validatable`].
//!
//! ```text
//! Unvalidated ──validate()──▶ Valid ◀──validate()──▶ Invalid
//!      ▲                        │                       │
//!      └──────clear_error()─────┴───────────────────────┘
//! ```

pub mod field;
pub mod listener;
pub mod selection;
pub mod state;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use field::{FieldValue, TextField};
pub use listener::{Channel, ListenerRegistry, SharedListener, ValidationListener};
pub use selection::SelectionField;
pub use state::{SelectionState, StateError, SubjectState};

use crate::foundation::{SharedRule, ValidationError};
use crate::rule_set::{Evaluation, RuleSet};

// ============================================================================
// POLICY & VALIDITY
// ============================================================================

/// When the host should validate on its own.
///
/// The subject never acts on these flags; hosts consult them when the value
/// changes or focus leaves the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Validate whenever the value changes.
    pub validate_on_value_change: bool,
    /// Validate when the field loses focus.
    pub validate_on_focus_lost: bool,
}

/// Displayed validity of a subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Validity {
    /// Not validated since creation or the last `clear_error`.
    #[default]
    Unvalidated,
    /// Last validation passed on both channels.
    Valid,
    /// Last validation failed on at least one channel.
    Invalid,
}

// ============================================================================
// SUBJECT
// ============================================================================

/// A named validatable subject with a left (user) and right (host) channel.
pub struct Subject<V: ?Sized> {
    name: String,
    left: RuleSet<V>,
    right: RuleSet<V>,
    listeners: ListenerRegistry<V>,
    policy: ValidationPolicy,
    validity: Validity,
    left_error: Option<ValidationError>,
    right_error: Option<ValidationError>,
}

impl<V: ?Sized> Subject<V> {
    /// Creates an unvalidated subject with no rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: RuleSet::new(),
            right: RuleSet::new(),
            listeners: ListenerRegistry::new(),
            policy: ValidationPolicy::default(),
            validity: Validity::Unvalidated,
            left_error: None,
            right_error: None,
        }
    }

    /// Name passed to listeners.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // ── rules ────────────────────────────────────────────────────────────

    /// The user rules (left channel).
    #[must_use]
    pub fn rules(&self) -> &RuleSet<V> {
        &self.left
    }

    /// Mutable access to the user rules.
    pub fn rules_mut(&mut self) -> &mut RuleSet<V> {
        &mut self.left
    }

    /// The host-internal rules (right channel).
    #[must_use]
    pub fn right_rules(&self) -> &RuleSet<V> {
        &self.right
    }

    /// Mutable access to the host-internal rules.
    pub fn right_rules_mut(&mut self) -> &mut RuleSet<V> {
        &mut self.right
    }

    /// Adds a user rule. Returns `false` if it is already present.
    pub fn add_rule(&mut self, rule: SharedRule<V>) -> bool {
        self.left.add_rule(rule)
    }

    /// Removes a user rule by identity.
    pub fn remove_rule(&mut self, rule: &SharedRule<V>) -> bool {
        self.left.remove_rule(rule)
    }

    // ── listeners ────────────────────────────────────────────────────────

    /// The listener registry. Registration only needs `&self`.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry<V> {
        &self.listeners
    }

    /// Registers a listener. Returns `false` if already registered.
    pub fn add_listener(&self, listener: SharedListener<V>) -> bool {
        self.listeners.add(listener)
    }

    /// Unregisters a listener by identity.
    pub fn remove_listener(&self, listener: &SharedListener<V>) -> bool {
        self.listeners.remove(listener)
    }

    // ── policy ───────────────────────────────────────────────────────────

    /// Current policy flags.
    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Replaces the policy flags.
    pub fn set_policy(&mut self, policy: ValidationPolicy) {
        self.policy = policy;
    }

    /// Whether the host validates on every value change.
    #[must_use]
    pub fn is_validated_on_value_change(&self) -> bool {
        self.policy.validate_on_value_change
    }

    /// Sets whether the host validates on every value change.
    pub fn set_validate_on_value_change(&mut self, enabled: bool) {
        self.policy.validate_on_value_change = enabled;
    }

    /// Whether the host validates when focus is lost.
    #[must_use]
    pub fn is_validated_on_focus_lost(&self) -> bool {
        self.policy.validate_on_focus_lost
    }

    /// Sets whether the host validates when focus is lost.
    pub fn set_validate_on_focus_lost(&mut self, enabled: bool) {
        self.policy.validate_on_focus_lost = enabled;
    }

    // ── validation ───────────────────────────────────────────────────────

    /// Displayed validity.
    #[must_use]
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// `true` once `validate` ran and no `clear_error` followed.
    #[must_use]
    pub fn is_validated(&self) -> bool {
        self.validity != Validity::Unvalidated
    }

    /// Error shown in the left slot.
    #[must_use]
    pub fn left_error(&self) -> Option<&ValidationError> {
        self.left_error.as_ref()
    }

    /// Error shown in the right slot.
    #[must_use]
    pub fn right_error(&self) -> Option<&ValidationError> {
        self.right_error.as_ref()
    }

    /// Evaluates both channels against `value`.
    ///
    /// Every failing rule is reported to the listeners, left channel first;
    /// the first failure of each channel becomes that slot's error. Success
    /// is reported once, and only if both channels pass.
    pub fn validate(&mut self, value: &V) -> bool {
        let left = self.left.evaluate(value);
        let right = self.right.evaluate(value);

        self.report(Channel::Left, &left);
        self.report(Channel::Right, &right);

        self.left_error = left.error();
        self.right_error = right.error();

        let valid = left.is_valid() && right.is_valid();
        self.validity = if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        };

        tracing::debug!(
            subject = %self.name,
            valid,
            left_failures = left.failures().len(),
            right_failures = right.failures().len(),
            "subject validated"
        );

        if valid {
            self.listeners.notify_success(&self.name);
        }
        valid
    }

    fn report(&self, channel: Channel, evaluation: &Evaluation<V>) {
        for rule in evaluation.failures() {
            tracing::trace!(
                subject = %self.name,
                ?channel,
                message = rule.message(),
                "rule failed"
            );
            self.listeners.notify_failure(&self.name, channel, rule);
        }
    }

    /// Hides both errors and returns to [`Validity::Unvalidated`] without
    /// running any rule.
    pub fn clear_error(&mut self) {
        self.left_error = None;
        self.right_error = None;
        self.validity = Validity::Unvalidated;
    }
}

impl<V: ?Sized> fmt::Debug for Subject<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("name", &self.name)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("listeners", &self.listeners)
            .field("policy", &self.policy)
            .field("validity", &self.validity)
            .field("left_error", &self.left_error)
            .field("right_error", &self.right_error)
            .finish()
    }
}

// ============================================================================
// HOST TRAIT
// ============================================================================

/// A host that owns a [`Subject`] and knows how to read its current value.
pub trait Validatable {
    /// Type of the value being validated.
    type Value: ?Sized;

    /// The hosted subject.
    fn subject(&self) -> &Subject<Self::Value>;

    /// Mutable access to the hosted subject.
    fn subject_mut(&mut self) -> &mut Subject<Self::Value>;

    /// Validates the current value.
    fn validate(&mut self) -> bool;

    /// Adds a user rule.
    fn add_rule(&mut self, rule: SharedRule<Self::Value>) -> bool {
        self.subject_mut().add_rule(rule)
    }

    /// Removes a user rule by identity.
    fn remove_rule(&mut self, rule: &SharedRule<Self::Value>) -> bool {
        self.subject_mut().remove_rule(rule)
    }

    /// Registers a listener.
    fn add_listener(&self, listener: SharedListener<Self::Value>) -> bool {
        self.subject().add_listener(listener)
    }

    /// Unregisters a listener by identity.
    fn remove_listener(&self, listener: &SharedListener<Self::Value>) -> bool {
        self.subject().remove_listener(listener)
    }

    /// Hides any shown error without running rules.
    fn clear_error(&mut self) {
        self.subject_mut().clear_error();
    }

    /// Error shown in the left slot.
    fn error(&self) -> Option<&ValidationError> {
        self.subject().left_error()
    }

    /// Policy and validated flag, for saving.
    fn save_subject_state(&self) -> SubjectState {
        SubjectState::capture(self.subject())
    }

    /// Restores the policy flags and, if the field had been validated,
    /// validates again so the same value shows the same outcome.
    fn restore_subject_state(&mut self, state: &SubjectState) {
        self.subject_mut().set_policy(state.policy());
        if state.validated {
            tracing::debug!(subject = %self.subject().name(), "re-validating restored subject");
            self.validate();
        } else {
            self.clear_error();
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{custom, max_length, not_empty};

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl ValidationListener<str> for Recorder {
        fn on_success(&self, subject: &str) {
            self.events.lock().unwrap().push(format!("{subject}: ok"));
        }

        fn on_failure(&self, subject: &str, channel: Channel, rule: &SharedRule<str>) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{subject}: {channel:?} {}", rule.message()));
        }
    }

    fn subject_with_recorder() -> (Subject<str>, std::sync::Arc<Recorder>) {
        let mut subject = Subject::new("email");
        subject.add_rule(not_empty("required").unwrap().shared());
        subject.add_rule(custom("needs @", |s: &str| s.contains('@')).unwrap().shared());
        subject
            .right_rules_mut()
            .add_rule(max_length("too long", 5).unwrap().shared());
        let recorder = std::sync::Arc::new(Recorder::default());
        subject.add_listener(recorder.clone());
        (subject, recorder)
    }

    #[test]
    fn starts_unvalidated() {
        let subject: Subject<str> = Subject::new("x");
        assert_eq!(subject.validity(), Validity::Unvalidated);
        assert!(!subject.is_validated());
        assert!(subject.left_error().is_none());
    }

    #[test]
    fn every_failure_is_reported_and_first_is_shown() {
        let (mut subject, recorder) = subject_with_recorder();
        assert!(!subject.validate(""));
        assert_eq!(subject.validity(), Validity::Invalid);
        assert_eq!(subject.left_error().unwrap().message, "required");
        assert!(subject.right_error().is_none());
        assert_eq!(
            *recorder.events.lock().unwrap(),
            vec!["email: Left required", "email: Left needs @"]
        );
    }

    #[test]
    fn channels_are_independent() {
        let (mut subject, recorder) = subject_with_recorder();
        assert!(!subject.validate("a@bcdef"));
        assert!(subject.left_error().is_none());
        assert_eq!(subject.right_error().unwrap().message, "too long");
        assert_eq!(
            *recorder.events.lock().unwrap(),
            vec!["email: Right too long"]
        );
    }

    #[test]
    fn success_fires_once() {
        let (mut subject, recorder) = subject_with_recorder();
        assert!(subject.validate("a@b"));
        assert_eq!(subject.validity(), Validity::Valid);
        assert_eq!(*recorder.events.lock().unwrap(), vec!["email: ok"]);
    }

    #[test]
    fn clear_error_does_not_run_rules() {
        let (mut subject, recorder) = subject_with_recorder();
        subject.validate("");
        recorder.events.lock().unwrap().clear();

        subject.clear_error();
        assert_eq!(subject.validity(), Validity::Unvalidated);
        assert!(subject.left_error().is_none());
        assert!(recorder.events.lock().unwrap().is_empty());
    }

    #[test]
    fn policy_flags() {
        let mut subject: Subject<str> = Subject::new("x");
        assert_eq!(subject.policy(), ValidationPolicy::default());
        subject.set_validate_on_focus_lost(true);
        assert!(subject.is_validated_on_focus_lost());
        assert!(!subject.is_validated_on_value_change());

        let policy: ValidationPolicy =
            serde_json::from_str(r#"{"validate_on_value_change":true}"#).unwrap();
        subject.set_policy(policy);
        assert!(subject.is_validated_on_value_change());
        assert!(!subject.is_validated_on_focus_lost());
    }
}
