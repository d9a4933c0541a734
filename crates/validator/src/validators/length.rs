//! String length rules
//!
//! Length is measured in Unicode scalar values (chars). Unlike the shape
//! rules, length rules apply to empty text too: `MinLength(n)` rejects `""`.

use crate::foundation::InvalidArgument;

/// Smallest bound accepted by [`MinLength`] and [`MaxLength`].
pub const MIN_LENGTH_BOUND: usize = 1;

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::rule! {
    /// Passes iff the text has at least one character.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Passes iff the text has at least `min` characters.
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    new(meta, min: usize) {
        InvalidArgument::check_minimum("min", MIN_LENGTH_BOUND, min)?;
        Ok(Self { meta, min })
    }
    fn min_length(min: usize);
}

impl MinLength {
    /// Returns the minimum length.
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Changes the minimum length. Rejects bounds below 1.
    pub fn set_min(&mut self, min: usize) -> Result<(), InvalidArgument> {
        InvalidArgument::check_minimum("min", MIN_LENGTH_BOUND, min)?;
        self.min = min;
        Ok(())
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Passes iff the text has at most `max` characters.
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    new(meta, max: usize) {
        InvalidArgument::check_minimum("max", MIN_LENGTH_BOUND, max)?;
        Ok(Self { meta, max })
    }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Returns the maximum length.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Changes the maximum length. Rejects bounds below 1.
    pub fn set_max(&mut self, max: usize) -> Result<(), InvalidArgument> {
        InvalidArgument::check_minimum("max", MIN_LENGTH_BOUND, max)?;
        self.max = max;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
