//! Failure messages, icons and message resolution
//!
//! Every rule carries a [`RuleMeta`]: a [`Message`] that can never be empty
//! and an optional [`Icon`]. Messages are either literal text or resolved up
//! front from a [`MessageSource`].

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use super::error::InvalidArgument;

// ============================================================================
// ICON
// ============================================================================

/// Opaque icon reference passed through to whatever renders the error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon(Arc<str>);

impl Icon {
    /// Creates an icon reference from an identifier.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Icon {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Icon {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

// ============================================================================
// MESSAGE
// ============================================================================

/// A failure message. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    /// Creates a message, rejecting empty text.
    pub fn new(text: impl Into<String>) -> Result<Self, InvalidArgument> {
        let text = text.into();
        if text.is_empty() {
            return Err(InvalidArgument::EmptyMessage);
        }
        Ok(Self(text))
    }

    /// Resolves a message by key.
    ///
    /// Resolution happens once, here; the rule keeps the resolved text.
    pub fn from_source<S>(source: &S, key: &str) -> Result<Self, InvalidArgument>
    where
        S: MessageSource + ?Sized,
    {
        let text = source
            .resolve(key)
            .ok_or_else(|| InvalidArgument::UnresolvedMessage {
                key: key.to_owned(),
            })?;
        Self::new(text)
    }

    /// Returns the message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Message {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Conversion into a [`Message`], failing on empty text.
///
/// Implemented for string types and for `Message` itself so every rule
/// constructor accepts either literal text or a pre-resolved message.
pub trait IntoMessage {
    /// Performs the conversion.
    fn into_message(self) -> Result<Message, InvalidArgument>;
}

impl IntoMessage for Message {
    fn into_message(self) -> Result<Message, InvalidArgument> {
        Ok(self)
    }
}

impl IntoMessage for &str {
    fn into_message(self) -> Result<Message, InvalidArgument> {
        Message::new(self)
    }
}

impl IntoMessage for String {
    fn into_message(self) -> Result<Message, InvalidArgument> {
        Message::new(self)
    }
}

impl IntoMessage for &String {
    fn into_message(self) -> Result<Message, InvalidArgument> {
        Message::new(self.as_str())
    }
}

// ============================================================================
// MESSAGE SOURCE
// ============================================================================

/// Resolves message keys to display text.
///
/// Loading and localizing the underlying resources is the host's business;
/// rules only ever see the resolved text.
pub trait MessageSource {
    /// Returns the text registered for `key`, if any.
    fn resolve(&self, key: &str) -> Option<String>;
}

impl MessageSource for HashMap<String, String> {
    fn resolve(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

// ============================================================================
// RULE META
// ============================================================================

/// Message and icon attached to a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMeta {
    message: Message,
    icon: Option<Icon>,
}

impl RuleMeta {
    /// Creates rule metadata with no icon.
    pub fn new(message: impl IntoMessage) -> Result<Self, InvalidArgument> {
        Ok(Self {
            message: message.into_message()?,
            icon: None,
        })
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Returns the icon, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Replaces the message. The old message stays in place on error.
    pub fn set_message(&mut self, message: impl IntoMessage) -> Result<(), InvalidArgument> {
        self.message = message.into_message()?;
        Ok(())
    }

    /// Replaces or removes the icon.
    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_rejected() {
        assert_eq!(Message::new(""), Err(InvalidArgument::EmptyMessage));
        assert_eq!("".into_message(), Err(InvalidArgument::EmptyMessage));
    }

    #[test]
    fn resolves_from_map() {
        let mut messages = HashMap::new();
        messages.insert("required".to_owned(), "This field is required".to_owned());

        let message = Message::from_source(&messages, "required").unwrap();
        assert_eq!(message.as_str(), "This field is required");
    }

    #[test]
    fn unknown_key_is_invalid_argument() {
        let messages: HashMap<String, String> = HashMap::new();
        let err = Message::from_source(&messages, "missing").unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::UnresolvedMessage {
                key: "missing".into()
            }
        );
    }

    #[test]
    fn key_resolving_to_empty_text_is_rejected() {
        struct Blank;

        impl MessageSource for Blank {
            fn resolve(&self, _key: &str) -> Option<String> {
                Some(String::new())
            }
        }

        let source = Blank;
        assert_eq!(
            Message::from_source(&source, "blank"),
            Err(InvalidArgument::EmptyMessage)
        );
    }

    #[test]
    fn set_message_keeps_old_value_on_error() {
        let mut meta = RuleMeta::new("first").unwrap();
        assert!(meta.set_message("").is_err());
        assert_eq!(meta.message(), "first");

        meta.set_message("second").unwrap();
        assert_eq!(meta.message(), "second");
    }

    #[test]
    fn icon_round_trip() {
        let mut meta = RuleMeta::new("msg").unwrap();
        assert!(meta.icon().is_none());
        meta.set_icon(Some("ic_warning".into()));
        assert_eq!(meta.icon().map(Icon::as_str), Some("ic_warning"));
    }
}
