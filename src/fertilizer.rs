//! Rule-based fertilizer advice from soil nutrient levels.

/// Nutrient level below which an amendment is advised.
pub const NUTRIENT_THRESHOLD: f64 = 50.0;

/// Advisory messages in evaluation order: N, then P, then K.
const AMENDMENTS: [&str; 3] = [
    "Apply Urea for Nitrogen",
    "Apply Single Super Phosphate (SSP) for Phosphorus",
    "Apply Muriate of Potash (MOP) for Potassium",
];

const BALANCED: &str = "Soil nutrients are balanced, no extra fertilizer needed";

/// Suggest amendments for each nutrient strictly below the threshold.
///
/// Never returns an empty list: when all three nutrients are at or above
/// the threshold, a single balanced message is returned instead.
pub fn suggest(n: f64, p: f64, k: f64) -> Vec<String> {
    let mut advice = Vec::new();
    for (value, message) in [n, p, k].into_iter().zip(AMENDMENTS) {
        if value < NUTRIENT_THRESHOLD {
            advice.push(message.to_string());
        }
    }
    if advice.is_empty() {
        advice.push(BALANCED.to_string());
    }
    advice
}
