use crate::functions::traits::Primitive;
use crate::types::Value;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Apply an exact integer operation, or promote both sides to floats.
fn numeric(
    main: Value,
    aux: Value,
    int_op: impl FnOnce(BigInt, BigInt) -> BigInt,
    float_op: impl FnOnce(f64, f64) -> f64,
) -> Value {
    match (main, aux) {
        (Value::Integer(a), Value::Integer(b)) => Value::Integer(int_op(a, b)),
        (a, b) => Value::Float(float_op(a.to_f64(), b.to_f64())),
    }
}

/// Quotient and remainder rounded toward negative infinity. `b` is non-zero.
fn floor_div_rem(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let mut quotient = a / b;
    let mut remainder = a % b;
    if !remainder.is_zero() && remainder.is_negative() != b.is_negative() {
        quotient -= BigInt::one();
        remainder += b;
    }
    (quotient, remainder)
}

fn floor_rem_f64(a: f64, b: f64) -> f64 {
    let remainder = a % b;
    if remainder != 0.0 && (remainder < 0.0) != (b < 0.0) {
        remainder + b
    } else {
        remainder
    }
}

// --- Add ---
pub struct Add;

impl Primitive for Add {
    fn alias(&self) -> &'static str { "add" }
    fn main_default(&self) -> Value { Value::int(0) }
    fn aux_default(&self) -> Value { Value::int(0) }
    fn execute(&self, main: Value, aux: Value) -> Value {
        numeric(main, aux, |a, b| a + b, |a, b| a + b)
    }
}

// --- Subtract ---
pub struct Subtract;

impl Primitive for Subtract {
    fn alias(&self) -> &'static str { "sub" }
    fn main_default(&self) -> Value { Value::int(0) }
    fn aux_default(&self) -> Value { Value::int(0) }
    fn execute(&self, main: Value, aux: Value) -> Value {
        numeric(main, aux, |a, b| a - b, |a, b| a - b)
    }
}

// --- Multiply ---
pub struct Multiply;

impl Primitive for Multiply {
    fn alias(&self) -> &'static str { "mul" }
    fn main_default(&self) -> Value { Value::int(1) }
    fn aux_default(&self) -> Value { Value::int(1) }
    fn execute(&self, main: Value, aux: Value) -> Value {
        numeric(main, aux, |a, b| a * b, |a, b| a * b)
    }
}

// --- Power ---
pub struct Power;

impl Primitive for Power {
    fn alias(&self) -> &'static str { "pow" }
    fn main_default(&self) -> Value { Value::int(0) }
    fn aux_default(&self) -> Value { Value::int(0) }
    fn execute(&self, main: Value, aux: Value) -> Value {
        match (&main, &aux) {
            (Value::Integer(base), Value::Integer(exponent)) if !exponent.is_negative() => {
                if let Some(e) = exponent.to_u32() {
                    return Value::Integer(base.pow(e));
                }
                // Exponents beyond u32 stay exact only where the result is bounded.
                if base.is_zero() || base.is_one() {
                    return Value::Integer(base.clone());
                }
                if *base == -BigInt::one() {
                    let odd = !(exponent % BigInt::from(2)).is_zero();
                    return Value::int(if odd { -1 } else { 1 });
                }
                Value::Float(main.to_f64().powf(aux.to_f64()))
            }
            _ => Value::Float(main.to_f64().powf(aux.to_f64())),
        }
    }
}

// --- Divide ---
pub struct Divide;

impl Primitive for Divide {
    fn alias(&self) -> &'static str { "div" }
    fn main_default(&self) -> Value { Value::int(1) }
    fn aux_default(&self) -> Value { Value::int(1) }

    /// True division. Division by zero leaves the dividend unchanged; integer
    /// quotients too large for a float fall back to floor division.
    fn execute(&self, main: Value, aux: Value) -> Value {
        if aux.is_zero() {
            return main;
        }
        match (&main, &aux) {
            (Value::Integer(a), Value::Integer(b)) => {
                let quotient = ratio_f64(a, b);
                if quotient.is_finite() {
                    Value::Float(quotient)
                } else {
                    Value::Integer(floor_div_rem(a, b).0)
                }
            }
            _ => Value::Float(main.to_f64() / aux.to_f64()),
        }
    }
}

/// `a / b` rounded to a float, even when the operands themselves overflow
/// `f64`. `b` is non-zero.
fn ratio_f64(a: &BigInt, b: &BigInt) -> f64 {
    let (x, y) = (
        a.to_f64().unwrap_or(f64::INFINITY),
        b.to_f64().unwrap_or(f64::INFINITY),
    );
    if x.is_finite() && y.is_finite() {
        return x / y;
    }
    // Scale to a quotient of about 64 significant bits, then shift back.
    let scale = 64 - (a.bits() as i64 - b.bits() as i64);
    let (numerator, denominator) = (a.magnitude(), b.magnitude());
    let scaled = if scale >= 0 {
        (numerator.clone() << scale as usize) / denominator
    } else {
        numerator / (denominator.clone() << (-scale) as usize)
    };
    let exponent = (-scale).clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    let magnitude = scaled.to_f64().unwrap_or(f64::INFINITY) * 2f64.powi(exponent);
    if a.is_negative() != b.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

// --- Modulo ---
pub struct Modulo;

impl Primitive for Modulo {
    fn alias(&self) -> &'static str { "mod" }
    fn main_default(&self) -> Value { Value::int(0) }
    fn aux_default(&self) -> Value { Value::int(1) }

    /// Floored modulo: a non-zero result takes the sign of the divisor.
    /// A zero divisor is treated as one.
    fn execute(&self, main: Value, aux: Value) -> Value {
        let divisor = if aux.is_zero() { Value::int(1) } else { aux };
        match (main, divisor) {
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(floor_div_rem(&a, &b).1),
            (a, b) => Value::Float(floor_rem_f64(a.to_f64(), b.to_f64())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(text: &str) -> Value {
        Value::Integer(text.parse().unwrap())
    }

    #[test]
    fn test_integer_arithmetic_is_exact() {
        assert_eq!(Add.execute(big("9999999999999999999999"), Value::int(1)), big("10000000000000000000000"));
        assert_eq!(Subtract.execute(Value::int(3), Value::int(5)), Value::int(-2));
        assert_eq!(Multiply.execute(Value::int(-4), Value::int(6)), Value::int(-24));
    }

    #[test]
    fn test_float_promotion() {
        assert_eq!(Add.execute(Value::Float(0.5), Value::int(2)), Value::Float(2.5));
        assert_eq!(Multiply.execute(Value::int(3), Value::Float(0.5)), Value::Float(1.5));
    }

    #[test]
    fn test_power() {
        assert_eq!(Power.execute(Value::int(2), Value::int(10)), Value::int(1024));
        assert_eq!(Power.execute(Value::int(0), Value::int(0)), Value::int(1));
        assert_eq!(Power.execute(Value::int(2), Value::int(-1)), Value::Float(0.5));
        assert_eq!(Power.execute(Value::int(-1), big("10000000001")), Value::int(-1));
        assert_eq!(Power.execute(Value::int(1), big("10000000000")), Value::int(1));
    }

    #[test]
    fn test_divide_is_true_division() {
        assert_eq!(Divide.execute(Value::int(7), Value::int(2)), Value::Float(3.5));
        assert_eq!(Divide.execute(Value::int(6), Value::int(3)), Value::Float(2.0));
        assert_eq!(Divide.execute(Value::int(-1), Value::int(4)), Value::Float(-0.25));
    }

    #[test]
    fn test_divide_by_zero_keeps_dividend() {
        assert_eq!(Divide.execute(Value::int(5), Value::int(0)), Value::int(5));
        assert_eq!(Divide.execute(Value::int(0), Value::int(0)), Value::int(0));
        assert_eq!(Divide.execute(Value::Float(1.5), Value::Float(0.0)), Value::Float(1.5));
    }

    #[test]
    fn test_divide_overflow_falls_back_to_floor_division() {
        let huge = Value::Integer(BigInt::from(10).pow(400));
        let expected = Value::Integer(BigInt::from(10).pow(399));
        assert_eq!(Divide.execute(huge, Value::int(10)), expected);

        let negative = Value::Integer(-BigInt::from(10).pow(400) - BigInt::one());
        let floored = Value::Integer(-BigInt::from(10).pow(399) - BigInt::one());
        assert_eq!(Divide.execute(negative, Value::int(10)), floored);
    }

    #[test]
    fn test_divide_huge_operands_with_small_quotient() {
        let numerator = Value::Integer(BigInt::from(10).pow(400));
        let denominator = Value::Integer(BigInt::from(10).pow(399));
        assert_eq!(Divide.execute(numerator, denominator.clone()), Value::Float(10.0));

        let negative = Value::Integer(-BigInt::from(10).pow(398));
        assert_eq!(Divide.execute(negative, denominator.clone()), Value::Float(-0.1));
        assert_eq!(Divide.execute(Value::int(1), denominator), Value::Float(0.0));
    }

    #[test]
    fn test_modulo_is_floored() {
        assert_eq!(Modulo.execute(Value::int(7), Value::int(3)), Value::int(1));
        assert_eq!(Modulo.execute(Value::int(-7), Value::int(3)), Value::int(2));
        assert_eq!(Modulo.execute(Value::int(7), Value::int(-3)), Value::int(-2));
        assert_eq!(Modulo.execute(Value::Float(-1.5), Value::int(1)), Value::Float(0.5));
    }

    #[test]
    fn test_modulo_by_zero_uses_one() {
        assert_eq!(Modulo.execute(Value::int(7), Value::int(0)), Value::int(0));
        assert_eq!(Modulo.execute(Value::int(0), Value::int(0)), Value::int(0));
    }
}
