//! Password strength scoring
//!
//! A [`PasswordStrength`] scores text as the fraction of its constraints that
//! hold, then maps that fraction to a helper-text tier and, independently, a
//! helper-color tier.
//!
//! # Tier selection
//!
//! With `n` tiers, `interval = 1 / n` and
//! `index = floor(score / interval) - 1`, clamped to `[0, n - 1]`. The
//! `- 1` means the top tier is only reached at a perfect score and the
//! bottom tier covers everything below `2 / n`.
//!
//! The index is computed from the satisfied and total constraint counts,
//! as `floor(satisfied * n / total) - 1`, so a score sitting exactly on a
//! tier boundary (7 of 10 with 10 tiers) selects that tier even though
//! `0.7` has no exact binary representation:
//!
//! | satisfied / total (2 tiers) | index |
//! |---|---|
//! | 0 / 4 | 0 |
//! | 3 / 4 | 0 |
//! | 4 / 4 | 1 |
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let mut strength = PasswordStrength::new();
//! strength.add_all_constraints([
//!     MinLengthConstraint::new(8).unwrap().shared(),
//!     ContainsNumber.shared(),
//!     ContainsSymbol.shared(),
//! ]);
//! strength.set_helper_texts(vec!["weak".into(), "fair".into(), "strong".into()]);
//!
//! assert_eq!(strength.compute_score("abc"), Some(0.0));
//! assert_eq!(strength.text_for("abc"), Some("weak"));
//! assert_eq!(strength.text_for("abcdefg1!"), Some("strong"));
//! ```

pub mod color;

use serde::{Deserialize, Serialize};

pub use color::{Color, ColorParseError};

use crate::foundation::SharedConstraint;
use crate::rule_set::{insert_unique, position_of, remove_by_identity};

// ============================================================================
// TIER SELECTION
// ============================================================================

/// Maps `satisfied` of `total` constraints to a tier index for
/// `tier_count` tiers.
///
/// Returns `None` when there are no tiers or no constraints. A `satisfied`
/// count above `total` is treated as a perfect score.
///
/// # Examples
///
/// ```rust
/// use formcheck_validator::strength::select_tier;
///
/// assert_eq!(select_tier(3, 4, 2), Some(0));
/// assert_eq!(select_tier(4, 4, 2), Some(1));
/// assert_eq!(select_tier(7, 10, 10), Some(6));
/// assert_eq!(select_tier(1, 2, 0), None);
/// ```
#[must_use]
pub fn select_tier(satisfied: usize, total: usize, tier_count: usize) -> Option<usize> {
    if tier_count == 0 || total == 0 {
        return None;
    }
    let reached = satisfied.min(total) as u128 * tier_count as u128 / total as u128;
    Some((reached as usize).saturating_sub(1).min(tier_count - 1))
}

// ============================================================================
// SCORE
// ============================================================================

/// How many of a scorer's constraints a text satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    satisfied: usize,
    total: usize,
}

impl Score {
    /// Creates a score. Returns `None` when `total` is zero or `satisfied`
    /// exceeds it.
    #[must_use]
    pub fn new(satisfied: usize, total: usize) -> Option<Self> {
        (total > 0 && satisfied <= total).then_some(Self { satisfied, total })
    }

    /// Number of satisfied constraints.
    #[must_use]
    pub fn satisfied(&self) -> usize {
        self.satisfied
    }

    /// Number of constraints evaluated.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Satisfied fraction, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.satisfied as f32 / self.total as f32
    }

    /// Tier index for `tier_count` tiers. See [`select_tier`].
    #[must_use]
    pub fn tier(&self, tier_count: usize) -> Option<usize> {
        select_tier(self.satisfied, self.total, tier_count)
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Serializable tier configuration for a [`PasswordStrength`].
///
/// Constraints are code, not data, and are added separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthConfig {
    /// Helper text per tier, weakest first.
    pub helper_texts: Vec<String>,
    /// Helper color per tier, weakest first.
    pub helper_colors: Vec<Color>,
    /// Optional label shown before the tier text, as `"{prefix}: {text}"`.
    pub prefix: Option<String>,
}

// ============================================================================
// HINT
// ============================================================================

/// What a password field should show under the text.
#[derive(Debug, Clone, PartialEq)]
pub enum StrengthHint {
    /// Show the field's regular helper text and color.
    Regular,
    /// Show the tier selected for the current score.
    Scored {
        /// Fraction of satisfied constraints.
        score: f32,
        /// Tier text (prefixed if configured), `None` if no texts are set.
        text: Option<String>,
        /// Tier color, `None` if no colors are set.
        color: Option<Color>,
    },
}

// ============================================================================
// PASSWORD STRENGTH
// ============================================================================

/// Scores text against a list of constraints and selects helper tiers.
#[derive(Clone, Default)]
pub struct PasswordStrength {
    constraints: Vec<SharedConstraint<str>>,
    helper_texts: Vec<String>,
    helper_colors: Vec<Color>,
    prefix: Option<String>,
}

impl PasswordStrength {
    /// Creates a scorer with no constraints and no tiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scorer with the tiers from `config` and no constraints.
    #[must_use]
    pub fn from_config(config: StrengthConfig) -> Self {
        Self {
            constraints: Vec::new(),
            helper_texts: config.helper_texts,
            helper_colors: config.helper_colors,
            prefix: config.prefix,
        }
    }

    /// The tier configuration, without constraints.
    #[must_use]
    pub fn config(&self) -> StrengthConfig {
        StrengthConfig {
            helper_texts: self.helper_texts.clone(),
            helper_colors: self.helper_colors.clone(),
            prefix: self.prefix.clone(),
        }
    }

    // ── constraints ──────────────────────────────────────────────────────

    /// Adds a constraint. Returns `false` if it is already present.
    pub fn add_constraint(&mut self, constraint: SharedConstraint<str>) -> bool {
        insert_unique(&mut self.constraints, constraint)
    }

    /// Adds each constraint, skipping duplicates. Returns how many were
    /// added.
    pub fn add_all_constraints<I>(&mut self, constraints: I) -> usize
    where
        I: IntoIterator<Item = SharedConstraint<str>>,
    {
        let mut added = 0;
        for constraint in constraints {
            if insert_unique(&mut self.constraints, constraint) {
                added += 1;
            }
        }
        added
    }

    /// Removes a constraint by identity. Returns `false` if absent.
    pub fn remove_constraint(&mut self, constraint: &SharedConstraint<str>) -> bool {
        remove_by_identity(&mut self.constraints, constraint)
    }

    /// Removes each given constraint by identity. Returns how many were
    /// removed.
    pub fn remove_all_constraints<'a, I>(&mut self, constraints: I) -> usize
    where
        I: IntoIterator<Item = &'a SharedConstraint<str>>,
    {
        constraints
            .into_iter()
            .filter(|constraint| remove_by_identity(&mut self.constraints, *constraint))
            .count()
    }

    /// Removes every constraint.
    pub fn clear_constraints(&mut self) {
        self.constraints.clear();
    }

    /// The constraints in insertion order.
    #[must_use]
    pub fn constraints(&self) -> &[SharedConstraint<str>] {
        &self.constraints
    }

    /// `true` if this exact constraint is registered.
    #[must_use]
    pub fn contains_constraint(&self, constraint: &SharedConstraint<str>) -> bool {
        position_of(&self.constraints, constraint).is_some()
    }

    // ── tiers ────────────────────────────────────────────────────────────

    /// Helper texts, weakest first.
    #[must_use]
    pub fn helper_texts(&self) -> &[String] {
        &self.helper_texts
    }

    /// Replaces the helper texts.
    pub fn set_helper_texts(&mut self, texts: Vec<String>) {
        self.helper_texts = texts;
    }

    /// Helper colors, weakest first.
    #[must_use]
    pub fn helper_colors(&self) -> &[Color] {
        &self.helper_colors
    }

    /// Replaces the helper colors.
    pub fn set_helper_colors(&mut self, colors: Vec<Color>) {
        self.helper_colors = colors;
    }

    /// Label shown before the tier text.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Sets or removes the label shown before the tier text.
    pub fn set_prefix(&mut self, prefix: Option<String>) {
        self.prefix = prefix;
    }

    // ── scoring ──────────────────────────────────────────────────────────

    /// Counts the constraints satisfied by `text`.
    ///
    /// Returns `None` when no constraint is registered.
    #[must_use]
    pub fn score(&self, text: &str) -> Option<Score> {
        let satisfied = self
            .constraints
            .iter()
            .filter(|constraint| constraint.is_satisfied(text))
            .count();
        Score::new(satisfied, self.constraints.len())
    }

    /// Fraction of constraints satisfied by `text`, in `[0, 1]`.
    ///
    /// Returns `None` when no constraint is registered.
    #[must_use]
    pub fn compute_score(&self, text: &str) -> Option<f32> {
        self.score(text).map(|score| score.fraction())
    }

    /// The helper text for a score, without the prefix.
    #[must_use]
    pub fn text_tier(&self, score: Score) -> Option<&str> {
        score
            .tier(self.helper_texts.len())
            .and_then(|index| self.helper_texts.get(index))
            .map(String::as_str)
    }

    /// The helper color for a score.
    #[must_use]
    pub fn color_tier(&self, score: Score) -> Option<Color> {
        score
            .tier(self.helper_colors.len())
            .and_then(|index| self.helper_colors.get(index))
            .copied()
    }

    /// Scores `text` and returns its tier text, without the prefix.
    #[must_use]
    pub fn text_for(&self, text: &str) -> Option<&str> {
        self.score(text).and_then(|score| self.text_tier(score))
    }

    /// Scores `text` and returns its tier color.
    #[must_use]
    pub fn color_for(&self, text: &str) -> Option<Color> {
        self.score(text).and_then(|score| self.color_tier(score))
    }

    /// What to show under a field holding `text`.
    ///
    /// Disabled fields, empty text and scorers without constraints fall back
    /// to the regular helper.
    #[must_use]
    pub fn hint(&self, text: &str, enabled: bool) -> StrengthHint {
        if !enabled || text.is_empty() {
            return StrengthHint::Regular;
        }
        let Some(score) = self.score(text) else {
            return StrengthHint::Regular;
        };

        let text = self.text_tier(score).map(|tier| match &self.prefix {
            Some(prefix) => format!("{prefix}: {tier}"),
            None => tier.to_owned(),
        });
        let color = self.color_tier(score);

        tracing::debug!(
            satisfied = score.satisfied(),
            constraints = score.total(),
            text = text.as_deref().unwrap_or(""),
            color = ?color,
            "password strength tier selected"
        );

        StrengthHint::Scored {
            score: score.fraction(),
            text,
            color,
        }
    }
}

impl std::fmt::Debug for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordStrength")
            .field("constraints", &self.constraints.len())
            .field("helper_texts", &self.helper_texts)
            .field("helper_colors", &self.helper_colors)
            .field("prefix", &self.prefix)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{ContainsNumber, ContainsSymbol, ContainsUppercaseLetter};
    use crate::foundation::ConstraintExt;

    fn two_tier() -> PasswordStrength {
        let mut strength = PasswordStrength::from_config(StrengthConfig {
            helper_texts: vec!["weak".into(), "strong".into()],
            helper_colors: vec![Color::from_rgb(0xF4, 0x43, 0x36), Color::from_rgb(0x4C, 0xAF, 0x50)],
            prefix: None,
        });
        strength.add_constraint(ContainsNumber.shared());
        strength.add_constraint(ContainsSymbol.shared());
        strength
    }

    #[test]
    fn select_tier_examples() {
        assert_eq!(select_tier(51, 100, 2), Some(0));
        assert_eq!(select_tier(1, 1, 2), Some(1));
        assert_eq!(select_tier(0, 3, 3), Some(0));
        assert_eq!(select_tier(3, 3, 3), Some(2));
        assert_eq!(select_tier(2, 3, 3), Some(1));
        assert_eq!(select_tier(1, 1, 1), Some(0));
        assert_eq!(select_tier(1, 1, 0), None);
        assert_eq!(select_tier(0, 0, 3), None);
    }

    #[test]
    fn select_tier_is_exact_on_boundaries() {
        assert_eq!(select_tier(7, 10, 10), Some(6));
        assert_eq!(select_tier(9, 10, 10), Some(8));
        assert_eq!(select_tier(6, 7, 7), Some(5));
        assert_eq!(select_tier(7, 7, 7), Some(6));
    }

    #[test]
    fn score_rejects_impossible_counts() {
        assert_eq!(Score::new(1, 0), None);
        assert_eq!(Score::new(3, 2), None);
        let score = Score::new(1, 4).unwrap();
        assert_eq!(score.fraction(), 0.25);
        assert_eq!(score.tier(4), Some(0));
    }

    #[test]
    fn no_constraints_has_no_score() {
        let strength = PasswordStrength::new();
        assert_eq!(strength.compute_score("anything"), None);
        assert_eq!(strength.hint("anything", true), StrengthHint::Regular);
    }

    #[test]
    fn score_is_fraction_satisfied() {
        let strength = two_tier();
        assert_eq!(strength.compute_score("abc"), Some(0.0));
        assert_eq!(strength.compute_score("abc1"), Some(0.5));
        assert_eq!(strength.compute_score("abc1!"), Some(1.0));
    }

    #[test]
    fn text_and_color_tiers_are_independent() {
        let mut strength = two_tier();
        strength.set_helper_colors(vec![Color::BLACK]);
        let full = strength.score("abc1!").unwrap();
        assert_eq!(strength.text_tier(full), Some("strong"));
        assert_eq!(strength.color_tier(full), Some(Color::BLACK));
    }

    #[test]
    fn hint_falls_back_to_regular() {
        let strength = two_tier();
        assert_eq!(strength.hint("", true), StrengthHint::Regular);
        assert_eq!(strength.hint("abc1!", false), StrengthHint::Regular);
    }

    #[test]
    fn hint_with_prefix() {
        let mut strength = two_tier();
        strength.set_prefix(Some("Strength".into()));
        match strength.hint("abc1!", true) {
            StrengthHint::Scored { score, text, color } => {
                assert_eq!(score, 1.0);
                assert_eq!(text.as_deref(), Some("Strength: strong"));
                assert_eq!(color, Some(Color::from_rgb(0x4C, 0xAF, 0x50)));
            }
            StrengthHint::Regular => panic!("expected a scored hint"),
        }
    }

    #[test]
    fn hint_without_tiers_is_scored_but_blank() {
        let mut strength = PasswordStrength::new();
        strength.add_constraint(ContainsUppercaseLetter.shared());
        assert_eq!(
            strength.hint("A", true),
            StrengthHint::Scored {
                score: 1.0,
                text: None,
                color: None
            }
        );
    }

    #[test]
    fn constraints_dedup_by_identity() {
        let number = ContainsNumber.shared();
        let mut strength = PasswordStrength::new();
        assert!(strength.add_constraint(number.clone()));
        assert!(!strength.add_constraint(number.clone()));
        assert!(strength.add_constraint(ContainsNumber.shared()));
        assert_eq!(strength.constraints().len(), 2);

        assert!(strength.contains_constraint(&number));
        assert_eq!(strength.remove_all_constraints([&number, &number]), 1);
        assert!(!strength.remove_constraint(&number));
        strength.clear_constraints();
        assert!(strength.constraints().is_empty());
    }

    #[test]
    fn config_round_trip() {
        let config: StrengthConfig = serde_json::from_str(
            r##"{"helper_texts":["weak","ok"],"helper_colors":["#FF0000"],"prefix":"Strength"}"##,
        )
        .unwrap();
        let strength = PasswordStrength::from_config(config.clone());
        assert_eq!(strength.config(), config);
        assert_eq!(strength.prefix(), Some("Strength"));

        let empty: StrengthConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, StrengthConfig::default());
    }
}
