use crate::error::{Error, Result};
use crate::range::NumeralRange;
use crate::table::in_range;
use std::hash::{Hash, Hasher};

/// RomanNumeral is a validated integer ready to be written
/// in Roman notation.
/// It can only be obtained through validation, so every
/// instance is convertible and never changes afterwards.
#[derive(Debug, Clone, Copy)]
pub struct RomanNumeral {
    pub(crate) number: i64,
    // Bounds the number was validated against.
    pub(crate) min: i64,
    pub(crate) max: i64,
}

impl RomanNumeral {
    /// validates number against default range 1..=3999.
    #[inline]
    pub fn new(number: i64) -> Result<RomanNumeral> {
        Self::with_range(number, NumeralRange::default())
    }

    /// validates number against given range.
    /// The range replaces the default one, so it can be wider
    /// as well as narrower than 1..=3999.
    /// Numbers below 1 have no Roman form and are always rejected,
    /// and so is anything above `UPPER_LIMIT`.
    pub fn with_range(number: i64, range: NumeralRange) -> Result<RomanNumeral> {
        validate_range(number, range)?;
        log::trace!("validated roman numeral input {}", number);
        Ok(RomanNumeral {
            number,
            min: range.min,
            max: range.max,
        })
    }

    #[inline]
    pub fn number(&self) -> i64 {
        self.number
    }

    #[inline]
    pub fn min_bound(&self) -> i64 {
        self.min
    }

    #[inline]
    pub fn max_bound(&self) -> i64 {
        self.max
    }

    #[inline]
    pub fn range(&self) -> NumeralRange {
        NumeralRange::new(self.min, self.max)
    }
}

fn validate_range(number: i64, range: NumeralRange) -> Result<()> {
    let (min, max) = (range.effective_min(), range.effective_max());
    if in_range(number, min, max) {
        return Ok(());
    }
    Err(out_of_range(number.to_string(), range))
}

/// builds the range error with the bounds actually enforced.
pub(crate) fn out_of_range(value: String, range: NumeralRange) -> Error {
    let (min, max) = (range.effective_min(), range.effective_max());
    log::debug!(
        "rejected roman numeral input {}: out of range [{}, {}]",
        value,
        min,
        max
    );
    Error::OutOfRange { value, min, max }
}

/// Hash only covers the number, bounds are not part of the value.
impl Hash for RomanNumeral {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.number)
    }
}
