use num_bigint::BigInt;
use thiserror::Error;

pub mod lagrange;
pub mod radix;
pub mod record;
pub mod report;

/// One decoded share: a point (x, y) on the secret polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

/// Errors from decoding a digit string in a given base.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("base {0} is outside the supported range 2..=36")]
    UnsupportedBase(u32),

    #[error("'{digit}' is not a valid digit in base {base}")]
    InvalidDigit { digit: char, base: u32 },
}

/// Errors from Lagrange interpolation over a point set.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("cannot interpolate an empty point set")]
    NoPoints,

    #[error("duplicate x-coordinate {0} among interpolation points")]
    DuplicateX(BigInt),

    #[error("interpolated value at x = 0 is not an integer (denominator {0} remains)")]
    NonIntegerResult(BigInt),
}

/// Errors from a structurally unusable input record.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordShapeError {
    #[error("threshold k must be at least 1")]
    InvalidThreshold,

    #[error("record supplies {available} shares but threshold k = {threshold}")]
    NotEnoughShares { threshold: usize, available: usize },

    #[error("share index '{0}' is not a base-10 integer")]
    BadShareIndex(String),

    #[error("share '{index}' has a malformed base field '{base}'")]
    BadBase { index: String, base: String },
}

/// Any failure while reconstructing one record's secret.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReconstructError {
    #[error(transparent)]
    Shape(#[from] RecordShapeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
