use num_bigint::BigInt;
use num_traits::Zero;

use crate::DecodeError;

// Decode a digit string in the given base into an exact integer
// Positional evaluation: value = value * base + digit, most significant first
// Digits '0'-'9' map to 0-9, letters (either case) map to 10-35
pub fn decode(digits: &str, base: u32) -> Result<BigInt, DecodeError> {
    if !(2..=36).contains(&base) {
        return Err(DecodeError::UnsupportedBase(base));
    }

    let mut value = BigInt::zero();
    for digit in digits.chars() {
        let d = digit
            .to_digit(base)
            .ok_or(DecodeError::InvalidDigit { digit, base })?;
        value = value * base + d;
    }

    Ok(value)
}
