use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::{InterpolationError, Point};

// Evaluate f(x) = a_0 + a_1*x + a_2*x^2 + ... at point x, exactly
pub fn evaluate(coefficients: &[BigInt], x: &BigInt) -> BigInt {
    let mut result = BigInt::zero();
    let mut x_power = BigInt::one();

    for coeff in coefficients {
        result += coeff * &x_power;
        x_power *= x;
    }

    result
}

/// Interpolate the unique degree-(k-1) polynomial through `points` and
/// evaluate it at x = 0.
///
/// Each Lagrange term y_i * ∏(0 - x_j) / ∏(x_i - x_j) is folded into a
/// running exact fraction instead of being divided on its own: a single
/// term's division need not come out even, only the full sum is guaranteed
/// to be an integer. The division happens once, at the end, and a sum that
/// still has a denominator left is an error rather than a truncated result.
pub fn interpolate_at_zero(points: &[Point]) -> Result<BigInt, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::NoPoints);
    }

    // Running sum as an exact fraction sum_num / sum_den
    let mut sum_num = BigInt::zero();
    let mut sum_den = BigInt::one();

    for (i, point) in points.iter().enumerate() {
        // numerator = ∏(j≠i) (0 - x_j), denominator = ∏(j≠i) (x_i - x_j)
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }

            let diff = &point.x - &other.x;
            if diff.is_zero() {
                return Err(InterpolationError::DuplicateX(point.x.clone()));
            }

            numerator *= -&other.x;
            denominator *= diff;
        }

        // sum += y_i * numerator / denominator, kept as a fraction
        numerator *= &point.y;
        sum_num = sum_num * &denominator + &numerator * &sum_den;
        sum_den *= denominator;

        let common = gcd(&sum_num, &sum_den);
        if !common.is_one() {
            sum_num /= &common;
            sum_den /= &common;
        }
    }

    if !(&sum_num % &sum_den).is_zero() {
        return Err(InterpolationError::NonIntegerResult(sum_den.abs()));
    }

    Ok(sum_num / sum_den)
}

// Greatest common divisor by Euclid's algorithm, always non-negative
fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let (mut r, mut newr) = (a.abs(), b.abs());

    while !newr.is_zero() {
        let rem = &r % &newr;
        (r, newr) = (newr, rem);
    }

    r
}
