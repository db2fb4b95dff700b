use crate::converter::RomanNumeral;
use crate::table::{MAX_ROMAN_LEN, ROMAN_TABLE};
use std::fmt;

impl RomanNumeral {
    /// converts this number to Roman numeral string.
    #[inline]
    pub fn to_roman(&self) -> String {
        let mut buf = String::with_capacity(MAX_ROMAN_LEN);
        self.append_roman_buf(&mut buf);
        buf
    }

    /// appends Roman numeral to given buffer.
    /// Greedily consumes the largest denomination that still fits,
    /// and stops as soon as nothing is left.
    pub fn append_roman_buf(&self, buf: &mut String) {
        // validated number is always positive
        let mut n = self.number as u64;
        for (value, symbol) in ROMAN_TABLE.iter() {
            if n == 0 {
                break;
            }
            let value = *value as u64;
            let q = n / value;
            n %= value;
            for _ in 0..q {
                buf.push_str(symbol);
            }
        }
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::with_capacity(MAX_ROMAN_LEN);
        self.append_roman_buf(&mut buf);
        f.pad(&buf)
    }
}
