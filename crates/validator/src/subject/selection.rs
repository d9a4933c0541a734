//! Dropdown selection fields
//!
//! The validated value is the selected item, or `None` when nothing is
//! selected, so [`NotNull`](crate::validators::NotNull) expresses "a choice
//! is required".

use std::fmt;

use super::state::{SelectionState, StateError};
use super::{Subject, Validatable};
use crate::strength::Color;

/// A dropdown with a list of items and at most one selection.
pub struct SelectionField {
    subject: Subject<Option<String>>,
    items: Vec<String>,
    selected: Option<usize>,
    hint: Option<String>,
    hint_color: Option<Color>,
}

impl SelectionField {
    /// Creates a field with the given items and nothing selected.
    pub fn new(name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            subject: Subject::new(name),
            items,
            selected: None,
            hint: None,
            hint_color: None,
        }
    }

    /// The selectable items.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replaces the items. A selection that no longer exists is dropped.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        if self.selected.is_some_and(|index| index >= self.items.len()) {
            self.selected = None;
        }
    }

    /// Index of the selected item.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected item.
    #[must_use]
    pub fn selected_item(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    /// Selects an item (or clears the selection with `None`) and validates
    /// if the policy asks for it.
    ///
    /// Returns `false` and changes nothing if the index is out of range.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        if index.is_some_and(|index| index >= self.items.len()) {
            return false;
        }
        self.selected = index;
        if self.subject.is_validated_on_value_change() {
            self.validate();
        }
        true
    }

    /// Placeholder shown while nothing is selected.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Sets the placeholder shown while nothing is selected.
    pub fn set_hint(&mut self, hint: Option<String>) {
        self.hint = hint;
    }

    /// Color of the placeholder.
    #[must_use]
    pub fn hint_color(&self) -> Option<Color> {
        self.hint_color
    }

    /// Sets the color of the placeholder.
    pub fn set_hint_color(&mut self, color: Option<Color>) {
        self.hint_color = color;
    }

    /// Captures the selection, hint and subject state.
    #[must_use]
    pub fn save_state(&self) -> SelectionState {
        SelectionState {
            subject: self.save_subject_state(),
            selected: self.selected,
            hint: self.hint.clone(),
            hint_color: self.hint_color,
        }
    }

    /// Restores a saved state, re-validating if the field had been
    /// validated.
    pub fn restore_state(&mut self, state: &SelectionState) -> Result<(), StateError> {
        if let Some(index) = state.selected
            && index >= self.items.len()
        {
            return Err(StateError::SelectionOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.selected = state.selected;
        self.hint.clone_from(&state.hint);
        self.hint_color = state.hint_color;
        self.restore_subject_state(&state.subject);
        Ok(())
    }
}

impl Validatable for SelectionField {
    type Value = Option<String>;

    fn subject(&self) -> &Subject<Option<String>> {
        &self.subject
    }

    fn subject_mut(&mut self) -> &mut Subject<Option<String>> {
        &mut self.subject
    }

    fn validate(&mut self) -> bool {
        let value = self.selected_item().map(str::to_owned);
        self.subject.validate(&value)
    }
}

impl fmt::Debug for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionField")
            .field("subject", &self.subject)
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("hint", &self.hint)
            .field("hint_color", &self.hint_color)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::not_null;

    fn colors() -> SelectionField {
        let mut field = SelectionField::new(
            "color",
            vec!["red".to_owned(), "green".to_owned(), "blue".to_owned()],
        );
        field.add_rule(not_null::<String>("pick a color").unwrap().shared());
        field
    }

    #[test]
    fn nothing_selected_fails_not_null() {
        let mut field = colors();
        assert!(!field.validate());
        assert_eq!(field.error().unwrap().message, "pick a color");
    }

    #[test]
    fn select_validates_when_asked() {
        let mut field = colors();
        field.subject_mut().set_validate_on_value_change(true);
        assert!(field.select(Some(1)));
        assert_eq!(field.selected_item(), Some("green"));
        assert!(field.subject().is_validated());
        assert!(field.error().is_none());

        assert!(field.select(None));
        assert_eq!(field.error().unwrap().message, "pick a color");
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut field = colors();
        field.select(Some(0));
        assert!(!field.select(Some(3)));
        assert_eq!(field.selected(), Some(0));
    }

    #[test]
    fn shrinking_items_drops_stale_selection() {
        let mut field = colors();
        field.select(Some(2));
        field.set_items(vec!["red".to_owned()]);
        assert_eq!(field.selected(), None);
    }

    #[test]
    fn hint_accessors() {
        let mut field = colors();
        field.set_hint(Some("Color".into()));
        field.set_hint_color(Some(Color::from_rgb(0x75, 0x75, 0x75)));
        assert_eq!(field.hint(), Some("Color"));
        assert_eq!(field.hint_color(), Some(Color::from_rgb(0x75, 0x75, 0x75)));
    }
}
