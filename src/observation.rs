//! Request observation and the fixed feature schema.

use serde::{Deserialize, Serialize};

/// Number of features the classifier was trained on.
pub const NUM_FEATURES: usize = 7;

fn default_language() -> String {
    "en".to_string()
}

/// One set of soil and climate measurements, as received on the wire.
///
/// Field names match the training dataset columns; `language` selects the
/// language of the composite summary and defaults to English.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Feature vector in the order the classifier was trained on:
/// [N, P, K, temperature, humidity, ph, rainfall].
///
/// The order is a contract with the trained model; reordering silently
/// produces wrong predictions, so `from_observation` is the only
/// constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f64; NUM_FEATURES]);

impl FeatureVector {
    pub fn from_observation(obs: &Observation) -> Self {
        Self([
            obs.n,
            obs.p,
            obs.k,
            obs.temperature,
            obs.humidity,
            obs.ph,
            obs.rainfall,
        ])
    }

    pub fn values(&self) -> &[f64; NUM_FEATURES] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_default_language() {
        let json = r#"{"N":10,"P":80,"K":10,"temperature":25,"humidity":70,"ph":6.5,"rainfall":200}"#;
        let obs: Observation = serde_json::from_str(json).unwrap();
        assert_eq!(obs.n, 10.0);
        assert_eq!(obs.p, 80.0);
        assert_eq!(obs.language, "en");
    }

    #[test]
    fn test_deserialize_explicit_language() {
        let json = r#"{"N":1,"P":2,"K":3,"temperature":4,"humidity":5,"ph":6,"rainfall":7,"language":"fr"}"#;
        let obs: Observation = serde_json::from_str(json).unwrap();
        assert_eq!(obs.language, "fr");
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{"N":1,"P":2,"K":3,"temperature":4,"humidity":5,"ph":6}"#;
        assert!(serde_json::from_str::<Observation>(json).is_err());
    }

    #[test]
    fn test_feature_order() {
        let obs = Observation {
            n: 1.0,
            p: 2.0,
            k: 3.0,
            temperature: 4.0,
            humidity: 5.0,
            ph: 6.0,
            rainfall: 7.0,
            language: "en".to_string(),
        };
        let features = FeatureVector::from_observation(&obs);
        assert_eq!(features.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }
}
