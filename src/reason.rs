//! Canned explanations for recommended crops.

/// Known crops and their climate-referencing explanations. Lookup is
/// case-insensitive on the crop name.
const EXPLANATIONS: [(&[&str], &str); 3] = [
    (
        &["rice"],
        "High rainfall and humidity favor rice growth in your soil.",
    ),
    (
        &["maize", "corn"],
        "Your Nitrogen and temperature are suitable for maize.",
    ),
    (
        &["mungbean"],
        "Mungbean improves soil fertility by fixing nitrogen naturally.",
    ),
];

/// Explain why a crop was recommended.
///
/// Climate values are accepted for context but the canned strings do not
/// branch on them; crops outside the table fall through to a generic
/// template interpolating the crop name.
pub fn explain(crop: &str, _temperature: f64, _humidity: f64, _rainfall: f64) -> String {
    let needle = crop.to_lowercase();
    for (names, explanation) in EXPLANATIONS {
        if names.contains(&needle.as_str()) {
            return explanation.to_string();
        }
    }
    format!("{crop} is well-suited based on your soil and climate conditions.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rice_explanation() {
        let reason = explain("rice", 25.0, 70.0, 200.0);
        assert!(reason.contains("rice"));
        assert!(reason.contains("rainfall"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            explain("RICE", 25.0, 70.0, 200.0),
            explain("rice", 25.0, 70.0, 200.0)
        );
    }

    #[test]
    fn test_corn_aliases_to_maize() {
        let reason = explain("corn", 20.0, 50.0, 100.0);
        assert!(reason.contains("maize"));
    }

    #[test]
    fn test_unknown_crop_falls_back_to_template() {
        let reason = explain("unknownplant", 20.0, 50.0, 100.0);
        assert!(reason.contains("unknownplant"));
        assert!(reason.contains("well-suited"));
    }

    #[test]
    fn test_climate_values_do_not_change_explanation() {
        assert_eq!(
            explain("rice", 0.0, 0.0, 0.0),
            explain("rice", 40.0, 99.0, 500.0)
        );
    }
}
