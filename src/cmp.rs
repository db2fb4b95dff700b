use crate::converter::RomanNumeral;
use std::cmp::Ordering;

// Numerals compare by the number they represent,
// regardless of the range they were validated against.

impl PartialEq for RomanNumeral {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for RomanNumeral {}

impl PartialOrd for RomanNumeral {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RomanNumeral {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::NumeralRange;

    #[test]
    fn test_cmp() {
        for (input1, input2, expected) in vec![
            (1, 1, Ordering::Equal),
            (1, 2, Ordering::Less),
            (2, 1, Ordering::Greater),
            (4, 9, Ordering::Less),
            (1994, 944, Ordering::Greater),
            (3999, 3999, Ordering::Equal),
        ] {
            let rn1 = RomanNumeral::new(input1).unwrap();
            let rn2 = RomanNumeral::new(input2).unwrap();
            assert_eq!(expected, rn1.cmp(&rn2));
        }
    }

    #[test]
    fn test_eq_ignores_range() {
        let rn1 = RomanNumeral::new(7).unwrap();
        let rn2 = RomanNumeral::with_range(7, NumeralRange::new(1, 10)).unwrap();
        assert_eq!(rn1, rn2);
        assert_ne!(rn1, RomanNumeral::new(8).unwrap());
    }

    #[test]
    fn test_sort() {
        let mut ns: Vec<RomanNumeral> = vec![1994, 4, 3999, 9, 944]
            .into_iter()
            .map(|n| RomanNumeral::new(n).unwrap())
            .collect();
        ns.sort();
        let actual: Vec<String> = ns.iter().map(|rn| rn.to_roman()).collect();
        assert_eq!(vec!["IV", "IX", "CMXLIV", "MCMXCIV", "MMMCMXCIX"], actual);
    }
}
