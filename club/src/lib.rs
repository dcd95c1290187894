pub mod fetcher;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use fetcher::Client;

#[derive(thiserror::Error, Debug, Clone)]
pub enum ClubError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unexpected status code: {0}")]
    Status(u16),
}

/// One performance assessment of one athlete, as returned by the club
/// backend.
///
/// `metrics` is an open-ended bag: the set of scored skills varies per
/// record and the backend is known to slip technical fields into it, so
/// keys are filtered downstream rather than typed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    pub id: String,
    pub athlete_id: String,
    pub date: String,
    #[serde(default)]
    pub metrics: serde_json::Map<String, Value>,
}

impl EvaluationRecord {
    /// Numeric score for a single metric key, if present and numeric.
    pub fn metric(&self, key: &str) -> Option<f32> {
        self.metrics.get(key).and_then(Value::as_f64).map(|v| v as f32)
    }
}

/// The backend returns every evaluation in one payload; athlete filtering
/// happens client-side.
pub fn evaluations_for_athlete(
    records: Vec<EvaluationRecord>,
    athlete_id: &str,
) -> Vec<EvaluationRecord> {
    records
        .into_iter()
        .filter(|record| record.athlete_id == athlete_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_record() {
        let record: EvaluationRecord = serde_json::from_value(json!({
            "id": "ev-7",
            "athleteId": "42",
            "date": "15-03-2024",
            "metrics": { "controle": 4, "passe": 2.5, "comment": "solide" }
        }))
        .expect("record should deserialize");

        assert_eq!(record.athlete_id, "42");
        assert_eq!(record.metric("controle"), Some(4.0));
        assert_eq!(record.metric("passe"), Some(2.5));
        // Non-numeric entries stay in the bag but never read as scores.
        assert_eq!(record.metric("comment"), None);
        assert_eq!(record.metric("missing"), None);
    }

    #[test]
    fn missing_metrics_defaults_to_empty_bag() {
        let record: EvaluationRecord = serde_json::from_value(json!({
            "id": "ev-8",
            "athleteId": "42",
            "date": "2024-03-16"
        }))
        .expect("record should deserialize");

        assert!(record.metrics.is_empty());
    }

    #[test]
    fn filters_by_athlete_id() {
        let records: Vec<EvaluationRecord> = serde_json::from_value(json!([
            { "id": "a", "athleteId": "42", "date": "01-01-2024", "metrics": {} },
            { "id": "b", "athleteId": "7", "date": "02-01-2024", "metrics": {} },
            { "id": "c", "athleteId": "42", "date": "03-01-2024", "metrics": {} }
        ]))
        .expect("records should deserialize");

        let mine = evaluations_for_athlete(records, "42");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.athlete_id == "42"));
    }
}
