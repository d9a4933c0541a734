//! Saved field state
//!
//! Plain records of what a host needs to put a field back the way it was:
//! the validated flag, the policy flags and, for selection fields, the
//! selection and hint. Encoded as JSON.
//!
//! Restoring does not replay the old outcome; it re-runs validation, so the
//! same value and rules give the same result and message.

use serde::{Deserialize, Serialize};

use super::{Subject, ValidationPolicy};
use crate::strength::Color;

// ============================================================================
// ERRORS
// ============================================================================

/// Raised when saved state cannot be decoded or applied.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StateError {
    /// The encoded text is not a valid state record.
    #[error("malformed field state: {0}")]
    Json(#[from] serde_json::Error),

    /// The saved selection does not exist in the current item list.
    #[error("saved selection {index} is out of range for {len} items")]
    SelectionOutOfRange {
        /// Saved index.
        index: usize,
        /// Current number of items.
        len: usize,
    },
}

impl StateError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Json(_) => "STATE_MALFORMED",
            Self::SelectionOutOfRange { .. } => "STATE_SELECTION_OUT_OF_RANGE",
        }
    }
}

// ============================================================================
// SUBJECT STATE
// ============================================================================

/// Saved state common to every field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectState {
    /// Whether the field had been validated.
    pub validated: bool,
    /// Saved [`ValidationPolicy::validate_on_value_change`].
    pub validate_on_value_change: bool,
    /// Saved [`ValidationPolicy::validate_on_focus_lost`].
    pub validate_on_focus_lost: bool,
}

impl SubjectState {
    /// Captures the state of a subject.
    #[must_use]
    pub fn capture<V: ?Sized>(subject: &Subject<V>) -> Self {
        let policy = subject.policy();
        Self {
            validated: subject.is_validated(),
            validate_on_value_change: policy.validate_on_value_change,
            validate_on_focus_lost: policy.validate_on_focus_lost,
        }
    }

    /// The saved policy flags.
    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            validate_on_value_change: self.validate_on_value_change,
            validate_on_focus_lost: self.validate_on_focus_lost,
        }
    }

    /// Encodes as JSON.
    pub fn encode(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes from JSON.
    pub fn decode(text: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(text)?)
    }
}

// ============================================================================
// SELECTION STATE
// ============================================================================

/// Saved state of a [`SelectionField`](super::SelectionField).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionState {
    /// Common field state.
    pub subject: SubjectState,
    /// Selected index.
    pub selected: Option<usize>,
    /// Placeholder text.
    pub hint: Option<String>,
    /// Placeholder color.
    pub hint_color: Option<Color>,
}

impl SelectionState {
    /// Encodes as JSON.
    pub fn encode(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes from JSON.
    pub fn decode(text: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(text)?)
    }
}
