use club::EvaluationRecord;

use super::catalog;
use crate::util;

/// The stored metric scale tops out at 5; [`max_value`] widens past it when
/// the data does.
pub const SCALE_CEILING: f32 = 5.0;

/// One value per metric key, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSeries {
    entries: Vec<(String, f32)>,
}

impl MetricSeries {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<f32> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.entries.iter().map(|(_, value)| *value)
    }
}

/// Historical mean per key, rounded to one decimal. A key with zero
/// observations reads as exactly 0, not NaN.
pub fn mean(records: &[EvaluationRecord], keys: &[String]) -> MetricSeries {
    let entries = keys
        .iter()
        .map(|key| {
            let mut sum = 0.0f32;
            let mut count = 0u32;
            for record in records {
                if let Some(value) = record.metric(key) {
                    sum += value;
                    count += 1;
                }
            }
            let value = if count == 0 {
                0.0
            } else {
                util::round1(sum / count as f32)
            };
            (key.clone(), value)
        })
        .collect();

    MetricSeries { entries }
}

/// Series for the one highlighted evaluation; keys it never scored read
/// as 0.
pub fn selected(record: &EvaluationRecord, keys: &[String]) -> MetricSeries {
    let entries = keys
        .iter()
        .map(|key| (key.clone(), record.metric(key).unwrap_or(0.0)))
        .collect();

    MetricSeries { entries }
}

/// Normalization ceiling for radar geometry: at least the metric scale
/// ceiling, expanded by any data artifact above it rather than clipping.
pub fn max_value<'a>(series: impl IntoIterator<Item = &'a MetricSeries>) -> f32 {
    let mut max = SCALE_CEILING;
    for s in series {
        for value in s.values() {
            if value > max {
                max = value;
            }
        }
    }
    max
}

/// Mean of every numeric metric value in one record, one decimal. Drives
/// the line fallback when no per-key catalog exists.
pub fn average_score(record: &EvaluationRecord) -> f32 {
    let mut sum = 0.0f32;
    let mut count = 0u32;

    for (key, value) in &record.metrics {
        if catalog::is_excluded(key) {
            continue;
        }
        if let Some(value) = value.as_f64() {
            sum += value as f32;
            count += 1;
        }
    }

    if count == 0 {
        0.0
    } else {
        util::round1(sum / count as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<EvaluationRecord> {
        serde_json::from_value(value).unwrap()
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn mean_averages_present_values_to_one_decimal() {
        let records = records(json!([
            { "id": "a", "athleteId": "42", "date": "01-01-2024",
              "metrics": { "controle": 4, "passe": 2 } },
            { "id": "b", "athleteId": "42", "date": "02-01-2024",
              "metrics": { "controle": 3, "passe": 5 } },
            { "id": "c", "athleteId": "42", "date": "03-01-2024",
              "metrics": { "controle": 5, "passe": 3 } }
        ]));

        let series = mean(&records, &keys(&["controle", "passe"]));
        assert_eq!(series.get("controle"), Some(4.0));
        assert_eq!(series.get("passe"), Some(3.3));
    }

    #[test]
    fn mean_with_zero_observations_is_zero() {
        let records = records(json!([
            { "id": "a", "athleteId": "42", "date": "01-01-2024",
              "metrics": { "controle": 4 } }
        ]));

        let series = mean(&records, &keys(&["controle", "tir"]));
        assert_eq!(series.get("tir"), Some(0.0));
    }

    #[test]
    fn selected_fills_missing_keys_with_zero() {
        let records = records(json!([
            { "id": "a", "athleteId": "42", "date": "01-01-2024",
              "metrics": { "controle": 3 } }
        ]));

        let series = selected(&records[0], &keys(&["controle", "passe"]));
        assert_eq!(series.get("controle"), Some(3.0));
        assert_eq!(series.get("passe"), Some(0.0));
    }

    #[test]
    fn max_value_floors_at_scale_ceiling() {
        let records = records(json!([
            { "id": "a", "athleteId": "42", "date": "01-01-2024",
              "metrics": { "controle": 2, "passe": 1 } }
        ]));

        let series = mean(&records, &keys(&["controle", "passe"]));
        assert_eq!(max_value([&series]), 5.0);
    }

    #[test]
    fn max_value_expands_for_artifacts_above_scale() {
        let records = records(json!([
            { "id": "a", "athleteId": "42", "date": "01-01-2024",
              "metrics": { "controle": 6.2 } }
        ]));

        let series = selected(&records[0], &keys(&["controle"]));
        assert_eq!(max_value([&series]), 6.2);
    }

    #[test]
    fn average_score_ignores_technical_and_non_numeric_entries() {
        let records = records(json!([
            { "id": "a", "athleteId": "42", "date": "01-01-2024",
              "metrics": { "controle": 4, "passe": 3, "id": 999, "comment": "bien" } }
        ]));

        assert_eq!(average_score(&records[0]), 3.5);
    }

    #[test]
    fn average_score_of_empty_bag_is_zero() {
        let records = records(json!([
            { "id": "a", "athleteId": "42", "date": "01-01-2024", "metrics": {} }
        ]));

        assert_eq!(average_score(&records[0]), 0.0);
    }
}
