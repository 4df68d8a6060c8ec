use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::fmt;

/// Value held on either stack or in the variable store.
///
/// Integers are arbitrary precision. Floats only appear as the result of
/// division (or of arithmetic that already involves a float).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(BigInt),
    Float(f64),
}

impl Value {
    pub fn int(value: i64) -> Self {
        Value::Integer(BigInt::from(value))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Value::Integer(i) => i.is_zero(),
            Value::Float(f) => *f == 0.0,
        }
    }

    /// True for values `<= 0`. NaN is not non-positive.
    pub fn is_nonpositive(&self) -> bool {
        match self {
            Value::Integer(i) => !i.is_positive(),
            Value::Float(f) => *f <= 0.0,
        }
    }

    /// Float view of the value. Integers too large for `f64` become infinite.
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Integer(i) => i.to_f64().unwrap_or(if i.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Value::Float(f) => *f,
        }
    }

    /// Interpret the value as a Unicode scalar value.
    ///
    /// Floats are truncated toward zero first. Negative, non-finite and
    /// out-of-range values (including surrogates) have no character.
    pub fn as_char(&self) -> Option<char> {
        let code = match self {
            Value::Integer(i) => i.to_u32()?,
            Value::Float(f) => {
                if !f.is_finite() || *f < 0.0 {
                    return None;
                }
                f.trunc().to_u32()?
            }
        };
        char::from_u32(code)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Integer(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(BigInt::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_nan() => write!(f, "nan"),
            Value::Float(x) if x.is_infinite() => {
                write!(f, "{}", if *x > 0.0 { "inf" } else { "-inf" })
            }
            Value::Float(x) => {
                let scientific = format!("{:e}", x);
                match scientific.split_once('e') {
                    // Exponent form outside [1e-4, 1e16), with a signed two-digit exponent.
                    Some((mantissa, exponent)) => match exponent.parse::<i32>() {
                        Ok(e) if !(-4..16).contains(&e) => {
                            let sign = if e < 0 { '-' } else { '+' };
                            write!(f, "{}e{}{:02}", mantissa, sign, e.abs())
                        }
                        _ if x.fract() == 0.0 => write!(f, "{:.1}", x),
                        _ => write!(f, "{}", x),
                    },
                    None => write!(f, "{}", x),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integer_and_float() {
        assert_eq!(Value::int(-42).to_string(), "-42");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Float(3.0).to_string(), "3.0");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Float(f64::NAN).to_string(), "nan");
    }

    #[test]
    fn test_display_float_exponent_form() {
        assert_eq!(Value::Float(1e16).to_string(), "1e+16");
        assert_eq!(Value::Float(-2.5e300).to_string(), "-2.5e+300");
        assert_eq!(Value::Float(1e-5).to_string(), "1e-05");
        assert_eq!(Value::Float(1.5e-7).to_string(), "1.5e-07");
        assert_eq!(Value::Float(0.0001).to_string(), "0.0001");
        assert_eq!(Value::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Value::Float(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_nonpositive() {
        assert!(Value::int(0).is_nonpositive());
        assert!(Value::int(-3).is_nonpositive());
        assert!(!Value::int(1).is_nonpositive());
        assert!(Value::Float(-0.5).is_nonpositive());
        assert!(!Value::Float(f64::NAN).is_nonpositive());
    }

    #[test]
    fn test_as_char() {
        assert_eq!(Value::int(72).as_char(), Some('H'));
        assert_eq!(Value::Float(105.9).as_char(), Some('i'));
        assert_eq!(Value::int(-1).as_char(), None);
        assert_eq!(Value::int(0xD800).as_char(), None);
        assert_eq!(Value::int(0x110000).as_char(), None);
    }
}
