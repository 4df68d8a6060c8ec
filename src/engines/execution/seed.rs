use crate::types::Value;
use num_bigint::BigInt;

/// Turn extra command-line tokens into initial main-stack contents.
///
/// A token that reads as an integer is pushed as that integer. Anything else
/// pushes the code point of each of its characters, left to right.
pub fn seed_main_stack<S: AsRef<str>>(tokens: &[S]) -> Vec<Value> {
    let mut stack = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        match parse_integer(token) {
            Some(value) => stack.push(Value::Integer(value)),
            None => stack.extend(token.chars().map(|c| Value::from(u32::from(c)))),
        }
    }
    stack
}

/// Decimal integer with optional sign and surrounding whitespace. Single
/// underscores may separate digits.
fn parse_integer(token: &str) -> Option<BigInt> {
    let trimmed = token.trim();
    let (negative, digits) = match trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_');
    if !well_formed {
        return None;
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let magnitude = BigInt::parse_bytes(cleaned.as_bytes(), 10)?;
    Some(if negative { -magnitude } else { magnitude })
}
