mod converter;
mod cmp;
mod format;
mod dynamic;
mod error;
mod range;
mod table;

pub use error::{Result, Error};
pub use converter::RomanNumeral;
pub use range::NumeralRange;
pub use table::{in_range, MAX, MIN, ROMAN_TABLE, UPPER_LIMIT};
