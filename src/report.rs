use num_bigint::BigInt;

use crate::record::{self, ShareRecord};

/// Outcome of one dataset in a batch run: the recovered secret, or the
/// failure message to echo in the report.
#[derive(Clone, Debug)]
pub struct DatasetResult {
    pub name: String,
    pub outcome: Result<BigInt, String>,
}

/// Reconstruct every dataset in the batch. A failing dataset is logged and
/// reported as "no result"; it never stops the remaining datasets.
pub fn recover_all(datasets: &[(String, ShareRecord)]) -> Vec<DatasetResult> {
    datasets
        .iter()
        .map(|(name, record)| {
            log::info!("{}: n = {}, k = {}", name, record.keys.n, record.keys.k);

            let outcome = match record::recover_secret(record) {
                Ok(secret) => {
                    log::info!("{}: recovered secret ({} bits)", name, secret.bits());
                    Ok(secret)
                }
                Err(e) => {
                    log::warn!("{}: reconstruction failed: {}", name, e);
                    Err(e.to_string())
                }
            };

            DatasetResult {
                name: name.clone(),
                outcome,
            }
        })
        .collect()
}

/// Render the human-readable batch summary, one line per dataset.
pub fn render(results: &[DatasetResult]) -> String {
    let mut out = String::new();
    out.push_str("SHAMIR SECRET SHARING RESULTS\n");
    out.push_str("=============================\n\n");

    for result in results {
        match &result.outcome {
            Ok(secret) => out.push_str(&format!("{}: secret = {}\n", result.name, secret)),
            Err(reason) => out.push_str(&format!("{}: no result ({})\n", result.name, reason)),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(name: &str, raw: &str) -> (String, ShareRecord) {
        (name.to_string(), serde_json::from_str(raw).unwrap())
    }

    #[test]
    fn failing_dataset_does_not_stop_the_batch() {
        let datasets = vec![
            dataset(
                "good1",
                r#"{
                    "keys": { "n": 2, "k": 2 },
                    "1": { "base": 10, "value": "8" },
                    "2": { "base": 10, "value": "11" }
                }"#,
            ),
            dataset(
                "bad",
                r#"{
                    "keys": { "n": 2, "k": 2 },
                    "1": { "base": 2, "value": "102" },
                    "2": { "base": 10, "value": "11" }
                }"#,
            ),
            dataset(
                "good2",
                r#"{
                    "keys": { "n": 1, "k": 1 },
                    "3": { "base": 16, "value": "ff" }
                }"#,
            ),
        ];

        let results = recover_all(&datasets);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].outcome, Ok(BigInt::from(5)));
        assert!(results[1].outcome.is_err());
        assert_eq!(results[2].outcome, Ok(BigInt::from(255)));
    }

    #[test]
    fn render_lists_secrets_and_failures() {
        let results = vec![
            DatasetResult {
                name: "input1.json".to_string(),
                outcome: Ok(BigInt::from(5)),
            },
            DatasetResult {
                name: "input2.json".to_string(),
                outcome: Err("cannot interpolate an empty point set".to_string()),
            },
        ];

        let summary = render(&results);

        assert!(summary.contains("input1.json: secret = 5"));
        assert!(summary.contains("input2.json: no result (cannot interpolate"));
    }
}
