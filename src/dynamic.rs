use crate::converter::{out_of_range, RomanNumeral};
use crate::error::{Error, Result};
use crate::range::NumeralRange;
use serde_json::Value;

impl RomanNumeral {
    /// validates untyped input against default range.
    #[inline]
    pub fn from_value(value: &Value) -> Result<RomanNumeral> {
        Self::from_value_with_range(value, NumeralRange::default())
    }

    /// validates untyped input against given range.
    /// Only JSON integers are accepted: floats (even 3.0), strings,
    /// booleans, null, arrays and objects are non-integer input.
    /// Type is checked before range.
    pub fn from_value_with_range(value: &Value, range: NumeralRange) -> Result<RomanNumeral> {
        let number = integer_of(value, range)?;
        Self::with_range(number, range)
    }

    /// parses JSON text and validates the resulting value
    /// against default range.
    #[inline]
    pub fn from_json_str(s: &str) -> Result<RomanNumeral> {
        Self::from_json_str_with_range(s, NumeralRange::default())
    }

    /// parses JSON text and validates the resulting value
    /// against given range.
    pub fn from_json_str_with_range(s: &str, range: NumeralRange) -> Result<RomanNumeral> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value_with_range(&value, range)
    }
}

impl TryFrom<&Value> for RomanNumeral {
    type Error = Error;

    #[inline]
    fn try_from(value: &Value) -> Result<Self> {
        RomanNumeral::from_value(value)
    }
}

fn integer_of(value: &Value, range: NumeralRange) -> Result<i64> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Ok(i);
        }
        if let Some(u) = n.as_u64() {
            // integer, just beyond any range a caller can express
            return Err(out_of_range(u.to_string(), range));
        }
    }
    let found = describe(value);
    log::debug!("rejected roman numeral input: {}", found);
    Err(Error::NonInteger { found })
}

fn describe(value: &Value) -> String {
    let kind = match value {
        Value::Null => return "null".to_string(),
        Value::Bool(_) => "boolean",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("{} {}", kind, value)
}
