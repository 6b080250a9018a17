//! Payload factories shared across the integration suites.

use serde_json::{json, Value};

/// A full 18-hole scorecard.
pub fn valid_scores() -> Vec<i64> {
    vec![3, 4, 5, 6, 7, 3, 4, 5, 6, 7, 3, 4, 5, 6, 7, 3, 4, 5]
}

pub fn round_json(course: &str, username: &str, scores: &[i64]) -> Value {
    json!({
        "course": course,
        "username": username,
        "scores": scores,
    })
}
