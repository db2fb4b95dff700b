/// Smallest number converted when no range is given.
pub const MIN: i64 = 1;
/// Largest number written without a symbol repeated more than three times.
pub const MAX: i64 = 3999;
/// Largest number any range admits, wider ranges are cut down to it.
/// Its numeral is a hundred `M`s.
pub const UPPER_LIMIT: i64 = 100_000;
/// Length of the longest numeral in the default range ("MMMDCCCLXXXVIII").
pub const MAX_ROMAN_LEN: usize = 15;

/// Denominations ordered from largest to smallest value,
/// including the six subtractive pairs.
pub const ROMAN_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// inclusive bounds check
#[inline]
pub fn in_range(n: i64, min: i64, max: i64) -> bool {
    min <= n && n <= max
}
