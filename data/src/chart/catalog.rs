use std::sync::LazyLock;

use club::EvaluationRecord;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Technical fields the backend is known to slip into the metrics bag.
/// These must never surface as chart axes even when numeric.
const EXCLUDED_KEYS: &[&str] = &["id", "evaluationId", "athleteId", "date"];

/// The club's standard skill metrics, in the order coaches expect to read
/// them. Keys outside this list append after it, in discovery order.
const PREFERRED_ORDER: &[&str] = &[
    "controle", "passe", "tir", "dribble", "defense", "physique", "vitesse", "mental",
];

const LABELS: &[(&str, &str)] = &[
    ("controle", "Control"),
    ("passe", "Passing"),
    ("tir", "Shooting"),
    ("dribble", "Dribbling"),
    ("defense", "Defense"),
    ("physique", "Physical"),
    ("vitesse", "Speed"),
    ("mental", "Mentality"),
];

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid pattern"));

pub(crate) fn is_excluded(key: &str) -> bool {
    EXCLUDED_KEYS.contains(&key)
}

/// Union of numeric-valued metric keys across all records, preferred-order
/// keys first. Output order depends only on the input record order, so the
/// same snapshot yields the same catalog on every pass.
pub fn discover(records: &[EvaluationRecord]) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut discovered: Vec<&str> = Vec::new();

    for record in records {
        for (key, value) in &record.metrics {
            if value.as_f64().is_none() || is_excluded(key) {
                continue;
            }
            if seen.insert(key.as_str()) {
                discovered.push(key.as_str());
            }
        }
    }

    let mut ordered: Vec<String> = Vec::with_capacity(discovered.len());
    for key in PREFERRED_ORDER {
        if seen.contains(key) {
            ordered.push((*key).to_string());
        }
    }
    for key in discovered {
        if !PREFERRED_ORDER.contains(&key) {
            ordered.push(key.to_string());
        }
    }

    ordered
}

/// Axis label for a metric key: the label table when the key is a known
/// club skill, otherwise camelCase/snake_case split into title-cased words.
pub fn humanize(key: &str) -> String {
    if let Some((_, label)) = LABELS.iter().find(|(known, _)| *known == key) {
        return (*label).to_string();
    }

    let spaced = CAMEL_BOUNDARY.replace_all(key, "$1 $2");
    let spaced = spaced.replace(['_', '-'], " ");

    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
