//! Cross-field equality
//!
//! `Equal` holds a handle to another field's text and compares against it
//! when evaluated, so edits to the other field are seen without rebuilding
//! the rule.

use crate::subject::FieldValue;

crate::rule! {
    /// Passes iff the text equals the current text of another field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formcheck_validator::prelude::*;
    ///
    /// let password = FieldValue::new("hunter2");
    /// let confirm = equal("passwords differ", &password).unwrap();
    /// assert!(confirm.evaluate("hunter2"));
    ///
    /// password.set("correct horse");
    /// assert!(!confirm.evaluate("hunter2"));
    /// ```
    pub Equal { other: FieldValue } for str;
    rule(self, input) { self.other.with(|text| text == input) }
    new(meta, other: &FieldValue) {
        Ok(Self { meta, other: other.clone() })
    }
    fn equal(other: &FieldValue);
}

impl Equal {
    /// The field this rule compares against.
    #[must_use]
    pub fn other(&self) -> &FieldValue {
        &self.other
    }
}
