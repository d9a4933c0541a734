//! Macros for creating rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: creates a complete rule (struct + `Validate` + `Annotated`
//!   impls + fallible constructor + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck_validator::rule;
//!
//! // Message-only rule
//! rule! {
//!     pub NotEmpty for str;
//!     rule(input) { !input.is_empty() }
//!     fn not_empty();
//! }
//!
//! // Rule with fields and a checked constructor
//! rule! {
//!     pub MinLength { min: usize } for str;
//!     rule(self, input) { input.chars().count() >= self.min }
//!     new(meta, min: usize) {
//!         InvalidArgument::check_minimum("min", 1, min)?;
//!         Ok(Self { meta, min })
//!     }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, `Validate` and `Annotated`
/// implementations, fallible `new`, and a factory function.
///
/// Every generated constructor takes the failure message first
/// (`impl IntoMessage`) and fails with `InvalidArgument::EmptyMessage` if it
/// is empty. `#[derive(Debug, Clone)]` is always applied.
///
/// # Variants
///
/// **Message-only rule**:
/// ```rust,ignore
/// rule! {
///     pub NotEmpty for str;
///     rule(input) { !input.is_empty() }
///     fn not_empty();
/// }
/// ```
///
/// **Rule with fields**: the `new` body receives the already-validated
/// `RuleMeta` under the name given as its first argument and must return
/// `Result<Self, InvalidArgument>`:
/// ```rust,ignore
/// rule! {
///     pub MaxLength { max: usize } for str;
///     rule(self, input) { input.chars().count() <= self.max }
///     new(meta, max: usize) {
///         InvalidArgument::check_minimum("max", 1, max)?;
///         Ok(Self { meta, max })
///     }
///     fn max_length(max: usize);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1: Message-only rule + factory fn ────────────────────────
    (
        $(#[$attr:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            meta: $crate::foundation::RuleMeta,
        }

        impl $name {
            /// Creates the rule with the given failure message.
            pub fn new(
                message: impl $crate::foundation::IntoMessage,
            ) -> ::std::result::Result<Self, $crate::foundation::InvalidArgument> {
                Ok(Self {
                    meta: $crate::foundation::RuleMeta::new(message)?,
                })
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn evaluate(&self, $inp: &Self::Input) -> bool $rule

            fn meta(&self) -> &$crate::foundation::RuleMeta {
                &self.meta
            }
        }

        impl $crate::foundation::Annotated for $name {
            fn meta_mut(&mut self) -> &mut $crate::foundation::RuleMeta {
                &mut self.meta
            }
        }

        $vis fn $factory(
            message: impl $crate::foundation::IntoMessage,
        ) -> ::std::result::Result<$name, $crate::foundation::InvalidArgument> {
            $name::new(message)
        }
    };

    // ── Variant 2: Rule with fields + checked new + factory fn ───────────
    (
        $(#[$attr:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        new($meta:ident $(, $narg:ident: $naty:ty)* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            meta: $crate::foundation::RuleMeta,
            $($field: $fty,)+
        }

        impl $name {
            /// Creates the rule with the given failure message.
            pub fn new(
                message: impl $crate::foundation::IntoMessage,
                $($narg: $naty),*
            ) -> ::std::result::Result<Self, $crate::foundation::InvalidArgument> {
                let $meta = $crate::foundation::RuleMeta::new(message)?;
                $new_body
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn evaluate(&$self_, $inp: &Self::Input) -> bool $rule

            fn meta(&self) -> &$crate::foundation::RuleMeta {
                &self.meta
            }
        }

        impl $crate::foundation::Annotated for $name {
            fn meta_mut(&mut self) -> &mut $crate::foundation::RuleMeta {
                &mut self.meta
            }
        }

        $vis fn $factory(
            message: impl $crate::foundation::IntoMessage,
            $($farg: $faty),*
        ) -> ::std::result::Result<$name, $crate::foundation::InvalidArgument> {
            $name::new(message, $($farg),*)
        }
    };
}
