use std::collections::BTreeMap;

use num_bigint::BigInt;
use serde::Deserialize;

use crate::{lagrange, radix, Point, ReconstructError, RecordShapeError};

/// Threshold metadata carried by every input record.
#[derive(Clone, Debug, Deserialize)]
pub struct RecordKeys {
    /// Total number of shares the record claims to supply.
    pub n: usize,
    /// Minimum number of shares needed to reconstruct (degree + 1).
    pub k: usize,
}

// The base field shows up both as a bare number and as a numeral string
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum BaseSpec {
    Number(u32),
    Text(String),
}

impl BaseSpec {
    fn resolve(&self, index: &str) -> Result<u32, RecordShapeError> {
        match self {
            BaseSpec::Number(base) => Ok(*base),
            BaseSpec::Text(text) => {
                text.trim().parse().map_err(|_| RecordShapeError::BadBase {
                    index: index.to_string(),
                    base: text.clone(),
                })
            }
        }
    }
}

/// One encoded share: a value in some base, keyed in the record by the
/// share's x-coordinate.
#[derive(Clone, Debug, Deserialize)]
pub struct ShareEntry {
    pub base: BaseSpec,
    pub value: String,
}

/// One parsed input record: threshold metadata plus the encoded shares,
/// keyed by their x-coordinate as a base-10 numeral string.
#[derive(Clone, Debug, Deserialize)]
pub struct ShareRecord {
    pub keys: RecordKeys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, ShareEntry>,
}

/// Decode every share in the record and recover the polynomial's constant
/// term from the k shares with the smallest x-coordinates. Shares beyond
/// the first k are discarded, not cross-validated.
pub fn recover_secret(record: &ShareRecord) -> Result<BigInt, ReconstructError> {
    let k = record.keys.k;
    if k == 0 {
        return Err(RecordShapeError::InvalidThreshold.into());
    }
    if record.shares.len() < k {
        return Err(RecordShapeError::NotEnoughShares {
            threshold: k,
            available: record.shares.len(),
        }
        .into());
    }

    let mut points = Vec::with_capacity(record.shares.len());
    for (index, entry) in &record.shares {
        let x: BigInt = index
            .parse()
            .map_err(|_| RecordShapeError::BadShareIndex(index.clone()))?;
        let base = entry.base.resolve(index)?;
        let y = radix::decode(&entry.value, base)?;
        points.push(Point { x, y });
    }

    // Select by decoded x, not by key order: "10" sorts after "2"
    points.sort_by(|a, b| a.x.cmp(&b.x));
    points.truncate(k);

    Ok(lagrange::interpolate_at_zero(&points)?)
}
