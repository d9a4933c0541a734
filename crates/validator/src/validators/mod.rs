//! Built-in rules
//!
//! # Categories
//!
//! - **Length**: [`NotEmpty`], [`MinLength`], [`MaxLength`]
//! - **Character classes**: [`NoWhitespace`], [`Number`], [`Letter`],
//!   [`LetterOrNumber`], [`BeginsWithUppercaseLetter`]
//! - **Formats**: [`MatchesRegex`], [`Email`], [`Iri`], [`PhoneNumber`]
//! - **Network**: [`Ipv4Address`], [`Ipv6Address`], [`DomainName`]
//! - **Cross-field**: [`Equal`]
//! - **Presence**: [`NotNull`]
//! - **Ad hoc**: [`Custom`]
//!
//! Every rule has a fallible `new(message, ..)` and a factory function of
//! the same name in snake case.
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let username = conjunctive(
//!     "3 to 20 letters or digits",
//!     vec![
//!         min_length("too short", 3).unwrap().shared(),
//!         max_length("too long", 20).unwrap().shared(),
//!         letter_or_number("letters or digits", Case::CaseInsensitive, false, &[])
//!             .unwrap()
//!             .shared(),
//!     ],
//! )
//! .unwrap();
//!
//! assert!(username.evaluate("alice42"));
//! assert!(!username.evaluate("al"));
//! ```

pub mod content;
pub mod custom;
pub mod equal;
pub mod hostname;
pub mod ip_address;
pub mod length;
pub mod nullable;
pub mod pattern;

pub use content::{Email, Iri, MatchesRegex, PhoneNumber, email, iri, phone_number, regex};
pub use custom::{Custom, custom};
pub use equal::{Equal, equal};
pub use hostname::{DomainName, domain_name};
pub use ip_address::{Ipv4Address, Ipv6Address, ipv4_address, ipv6_address};
pub use length::{MIN_LENGTH_BOUND, MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
pub use nullable::{NotNull, not_null};
pub use pattern::{
    BeginsWithUppercaseLetter, Case, Letter, LetterOrNumber, NoWhitespace, Number,
    begins_with_uppercase_letter, letter, letter_or_number, no_whitespace, number,
};
