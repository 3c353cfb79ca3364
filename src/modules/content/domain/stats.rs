/// Mean of the given scores, rounded to two decimal places.
///
/// An empty slice yields 0.0 so a content row with no ratings reads as
/// unrated rather than NaN.
pub fn average_score(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }

    let sum: f64 = scores.iter().sum();
    let mean = sum / scores.len() as f64;
    (mean * 100.0).round() / 100.0
}
