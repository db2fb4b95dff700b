use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Roman numeral input must be an integer, got {found}")]
    NonInteger { found: String },
    #[error("Roman numeral input {value} out of range [{min}, {max}]")]
    OutOfRange { value: String, min: i64, max: i64 },
    #[error("Roman numeral input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    #[inline]
    pub fn is_non_integer(&self) -> bool {
        matches!(self, Error::NonInteger { .. })
    }

    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        for (err, expected) in vec![
            (
                Error::NonInteger { found: "float 3.14".to_string() },
                "Roman numeral input must be an integer, got float 3.14",
            ),
            (
                Error::OutOfRange { value: "4000".to_string(), min: 1, max: 3999 },
                "Roman numeral input 4000 out of range [1, 3999]",
            ),
        ] {
            assert_eq!(expected, err.to_string());
        }
    }

    #[test]
    fn test_error_kind() {
        let err = Error::NonInteger { found: "null".to_string() };
        assert!(err.is_non_integer());
        assert!(!err.is_out_of_range());
        let err = Error::OutOfRange { value: "0".to_string(), min: 1, max: 3999 };
        assert!(err.is_out_of_range());
        assert!(!err.is_non_integer());
    }
}
