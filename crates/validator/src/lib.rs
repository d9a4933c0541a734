//! # formcheck-validator
//!
//! Validation core for form-field controls: composable rules with failure
//! messages, scoring constraints, ordered rule sets with first-failure
//! reporting and listeners, and a password strength scorer with tiered
//! helper text and colors.
//!
//! Nothing here draws or loads anything. Hosts pass in the current value,
//! read back pass/fail and the message to show, and ask the strength scorer
//! which tier applies.
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let mut email_field = TextField::new("email");
//! email_field.add_rule(not_empty("Required").unwrap().shared());
//! email_field.add_rule(email("Not an email address").unwrap().shared());
//!
//! email_field.set_text("ada@");
//! assert!(!email_field.validate());
//! assert_eq!(email_field.error().unwrap().message, "Not an email address");
//!
//! email_field.set_text("ada@example.com");
//! assert!(email_field.validate());
//! ```
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for message-only rules, [`custom`](validators::custom)
//! for closures, or implement [`Validate`](foundation::Validate) manually.
//!
//! ## Built-in Rules
//!
//! - **Length**: [`NotEmpty`](validators::NotEmpty), [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength)
//! - **Character classes**: [`Number`](validators::Number), [`Letter`](validators::Letter),
//!   [`LetterOrNumber`](validators::LetterOrNumber), [`NoWhitespace`](validators::NoWhitespace),
//!   [`BeginsWithUppercaseLetter`](validators::BeginsWithUppercaseLetter)
//! - **Formats**: [`MatchesRegex`](validators::MatchesRegex), [`Email`](validators::Email),
//!   [`Iri`](validators::Iri), [`PhoneNumber`](validators::PhoneNumber),
//!   [`Ipv4Address`](validators::Ipv4Address), [`Ipv6Address`](validators::Ipv6Address),
//!   [`DomainName`](validators::DomainName)
//! - **Cross-field**: [`Equal`](validators::Equal)
//! - **Selection**: [`NotNull`](validators::NotNull)

pub mod combinators;
pub mod constraints;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rule_set;
pub mod strength;
pub mod subject;
pub mod validators;
