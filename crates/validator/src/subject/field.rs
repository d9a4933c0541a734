//! Text fields
//!
//! [`FieldValue`] is the shared text cell of a field: cloning it yields
//! another handle to the same text, which is how [`Equal`] rules on one
//! field read the live value of another.
//!
//! [`TextField`] hosts a `Subject<str>` over a `FieldValue`, plus the
//! optional character limit (right channel) and password strength helper.
//!
//! [`Equal`]: crate::validators::Equal

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{Subject, Validatable};
use crate::foundation::{IntoMessage, InvalidArgument, SharedRule, ValidateExt};
use crate::strength::{Color, PasswordStrength, StrengthHint};
use crate::validators::MaxLength;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// Shared, mutable text of a field.
#[derive(Clone, Default)]
pub struct FieldValue(Arc<RwLock<String>>);

impl FieldValue {
    /// Creates a cell holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self(Arc::new(RwLock::new(text.into())))
    }

    /// A copy of the current text.
    #[must_use]
    pub fn get(&self) -> String {
        self.0.read().clone()
    }

    /// Replaces the text.
    pub fn set(&self, text: impl Into<String>) {
        *self.0.write() = text.into();
    }

    /// Runs `f` on the current text without copying it.
    pub fn with<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(&self.0.read())
    }

    /// `true` if both handles point at the same cell.
    #[must_use]
    pub fn same_cell(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldValue").field(&*self.0.read()).finish()
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

// ============================================================================
// TEXT FIELD
// ============================================================================

/// A text or password entry field.
pub struct TextField {
    value: FieldValue,
    subject: Subject<str>,
    enabled: bool,
    max_characters: Option<(usize, SharedRule<str>)>,
    strength: Option<PasswordStrength>,
    strength_hint: StrengthHint,
    helper_text: Option<String>,
    helper_color: Option<Color>,
}

impl TextField {
    /// Creates an enabled, empty field.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_value(name, FieldValue::default())
    }

    /// Creates a field over an existing text cell.
    pub fn with_value(name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            value,
            subject: Subject::new(name),
            enabled: true,
            max_characters: None,
            strength: None,
            strength_hint: StrengthHint::Regular,
            helper_text: None,
            helper_color: None,
        }
    }

    // ── value ────────────────────────────────────────────────────────────

    /// Handle to this field's text, for [`Equal`](crate::validators::Equal)
    /// rules on other fields.
    #[must_use]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// A copy of the current text.
    #[must_use]
    pub fn text(&self) -> String {
        self.value.get()
    }

    /// Replaces the text, refreshes the strength helper and validates if the
    /// policy asks for it. Returns the validation outcome when it ran.
    pub fn set_text(&mut self, text: impl Into<String>) -> Option<bool> {
        self.value.set(text);
        self.refresh_strength();
        self.subject
            .is_validated_on_value_change()
            .then(|| self.validate())
    }

    /// Signals that focus left the field. Validates if the policy asks for
    /// it and returns the outcome when it ran.
    pub fn focus_lost(&mut self) -> Option<bool> {
        self.subject
            .is_validated_on_focus_lost()
            .then(|| self.validate())
    }

    // ── enabled ──────────────────────────────────────────────────────────

    /// Whether the field accepts input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the field. Disabled fields show the regular
    /// helper instead of a strength tier.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.refresh_strength();
    }

    // ── character limit (right channel) ──────────────────────────────────

    /// Limits the text to `max` characters, reported on the right channel.
    pub fn set_max_characters(
        &mut self,
        max: usize,
        message: impl IntoMessage,
    ) -> Result<(), InvalidArgument> {
        let rule = MaxLength::new(message, max)?.shared();
        self.clear_max_characters();
        self.subject.right_rules_mut().add_rule(rule.clone());
        self.max_characters = Some((max, rule));
        Ok(())
    }

    /// Removes the character limit.
    pub fn clear_max_characters(&mut self) {
        if let Some((_, rule)) = self.max_characters.take() {
            self.subject.right_rules_mut().remove_rule(&rule);
        }
    }

    /// The character limit, if any.
    #[must_use]
    pub fn max_characters(&self) -> Option<usize> {
        self.max_characters.as_ref().map(|(max, _)| *max)
    }

    /// Counter text such as `"3/10"`, if a limit is set.
    #[must_use]
    pub fn character_counter(&self) -> Option<String> {
        let max = self.max_characters()?;
        let count = self.value.with(|text| text.chars().count());
        Some(format!("{count}/{max}"))
    }

    // ── helper & strength ────────────────────────────────────────────────

    /// Sets the helper text shown when no strength tier applies.
    pub fn set_helper_text(&mut self, text: Option<String>) {
        self.helper_text = text;
    }

    /// Sets the helper color shown when no strength tier applies.
    pub fn set_helper_color(&mut self, color: Option<Color>) {
        self.helper_color = color;
    }

    /// Installs or removes the password strength scorer.
    pub fn set_password_strength(&mut self, strength: Option<PasswordStrength>) {
        self.strength = strength;
        self.refresh_strength();
    }

    /// The password strength scorer, if any.
    #[must_use]
    pub fn password_strength(&self) -> Option<&PasswordStrength> {
        self.strength.as_ref()
    }

    /// Changes the scorer in place and refreshes the hint.
    pub fn update_password_strength<R>(
        &mut self,
        f: impl FnOnce(&mut PasswordStrength) -> R,
    ) -> Option<R> {
        let result = self.strength.as_mut().map(f);
        self.refresh_strength();
        result
    }

    /// The current strength hint.
    #[must_use]
    pub fn strength_hint(&self) -> &StrengthHint {
        &self.strength_hint
    }

    /// Helper text to display: the strength tier when scored, otherwise the
    /// regular helper text.
    #[must_use]
    pub fn helper_text(&self) -> Option<&str> {
        match &self.strength_hint {
            StrengthHint::Scored {
                text: Some(text), ..
            } => Some(text),
            _ => self.helper_text.as_deref(),
        }
    }

    /// Helper color to display: the strength tier when scored, otherwise the
    /// regular helper color.
    #[must_use]
    pub fn helper_color(&self) -> Option<Color> {
        match &self.strength_hint {
            StrengthHint::Scored {
                color: Some(color),
                ..
            } => Some(*color),
            _ => self.helper_color,
        }
    }

    fn refresh_strength(&mut self) {
        self.strength_hint = match &self.strength {
            Some(strength) => self
                .value
                .with(|text| strength.hint(text, self.enabled)),
            None => StrengthHint::Regular,
        };
    }
}

impl Validatable for TextField {
    type Value = str;

    fn subject(&self) -> &Subject<str> {
        &self.subject
    }

    fn subject_mut(&mut self) -> &mut Subject<str> {
        &mut self.subject
    }

    fn validate(&mut self) -> bool {
        // Copy out so rules reading other fields (or this one) never
        // evaluate under this cell's lock.
        let text = self.value.get();
        self.subject.validate(&text)
    }
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("value", &self.value)
            .field("subject", &self.subject)
            .field("enabled", &self.enabled)
            .field("max_characters", &self.max_characters())
            .field("strength", &self.strength)
            .field("strength_hint", &self.strength_hint)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{ContainsNumber, MinLengthConstraint};
    use crate::foundation::ConstraintExt;
    use crate::strength::StrengthConfig;
    use crate::subject::ValidationPolicy;
    use crate::validators::{equal, not_empty};

    #[test]
    fn field_value_is_shared() {
        let a = FieldValue::new("x");
        let b = a.clone();
        b.set("y");
        assert_eq!(a.get(), "y");
        assert!(a.same_cell(&b));
        assert!(!a.same_cell(&FieldValue::new("y")));
    }

    #[test]
    fn set_text_validates_only_when_asked() {
        let mut field = TextField::new("name");
        field.add_rule(not_empty("required").unwrap().shared());
        assert_eq!(field.set_text(""), None);
        assert!(!field.subject().is_validated());

        field.subject_mut().set_validate_on_value_change(true);
        assert_eq!(field.set_text(""), Some(false));
        assert_eq!(field.error().unwrap().message, "required");
        assert_eq!(field.set_text("Ada"), Some(true));
        assert!(field.error().is_none());
    }

    #[test]
    fn focus_lost_follows_policy() {
        let mut field = TextField::new("name");
        field.add_rule(not_empty("required").unwrap().shared());
        assert_eq!(field.focus_lost(), None);
        field.subject_mut().set_policy(ValidationPolicy {
            validate_on_value_change: false,
            validate_on_focus_lost: true,
        });
        assert_eq!(field.focus_lost(), Some(false));
    }

    #[test]
    fn max_characters_uses_right_channel() {
        let mut field = TextField::new("bio");
        field.add_rule(not_empty("required").unwrap().shared());
        field.set_max_characters(3, "too long").unwrap();
        field.set_text("abcd");

        assert!(!field.validate());
        assert!(field.subject().left_error().is_none());
        assert_eq!(field.subject().right_error().unwrap().message, "too long");
        assert_eq!(field.character_counter().as_deref(), Some("4/3"));

        field.set_max_characters(5, "too long").unwrap();
        assert_eq!(field.subject().right_rules().len(), 1);
        assert!(field.validate());

        field.clear_max_characters();
        assert!(field.subject().right_rules().is_empty());
        assert_eq!(field.character_counter(), None);
    }

    #[test]
    fn invalid_max_characters_keeps_old_limit() {
        let mut field = TextField::new("bio");
        field.set_max_characters(3, "too long").unwrap();
        assert!(field.set_max_characters(0, "too long").is_err());
        assert_eq!(field.max_characters(), Some(3));
    }

    #[test]
    fn confirm_password_reads_live_value() {
        let mut password = TextField::new("password");
        let mut confirm = TextField::new("confirm");
        confirm.add_rule(equal("passwords differ", password.value()).unwrap().shared());

        password.set_text("secret1");
        confirm.set_text("secret1");
        assert!(confirm.validate());

        password.set_text("secret2");
        assert!(!confirm.validate());
        assert_eq!(confirm.error().unwrap().message, "passwords differ");
    }

    #[test]
    fn strength_hint_tracks_text() {
        let mut strength = PasswordStrength::from_config(StrengthConfig {
            helper_texts: vec!["weak".into(), "strong".into()],
            helper_colors: vec![Color::from_rgb(255, 0, 0), Color::from_rgb(0, 255, 0)],
            prefix: None,
        });
        strength.add_constraint(MinLengthConstraint::new(6).unwrap().shared());
        strength.add_constraint(ContainsNumber.shared());

        let mut field = TextField::new("password");
        field.set_helper_text(Some("choose a password".into()));
        field.set_password_strength(Some(strength));

        assert_eq!(field.helper_text(), Some("choose a password"));
        field.set_text("abc");
        assert_eq!(field.helper_text(), Some("weak"));
        field.set_text("abcdef1");
        assert_eq!(field.helper_text(), Some("strong"));
        assert_eq!(field.helper_color(), Some(Color::from_rgb(0, 255, 0)));

        field.set_enabled(false);
        assert_eq!(field.strength_hint(), &StrengthHint::Regular);
        assert_eq!(field.helper_text(), Some("choose a password"));
    }

    #[test]
    fn updating_strength_refreshes_hint() {
        let mut field = TextField::new("password");
        field.set_password_strength(Some(PasswordStrength::new()));
        field.set_text("abc");
        assert_eq!(field.strength_hint(), &StrengthHint::Regular);

        field.update_password_strength(|s| s.add_constraint(ContainsNumber.shared()));
        assert!(matches!(
            field.strength_hint(),
            StrengthHint::Scored { score, .. } if *score == 0.0
        ));
    }
}
