//! Recommendation pipeline: features, crop, advice, reason, summary.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::classifier::CropPredictor;
use crate::error::Result;
use crate::fertilizer;
use crate::observation::{FeatureVector, Observation};
use crate::reason;
use crate::translate::{localize, Translator};

/// Complete response for one observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub crop: String,
    pub reason: String,
    pub fertilizers: Vec<String>,
    /// Composite summary, localized when the requested language is not
    /// English and the translation backend cooperates.
    pub output_text: String,
}

/// Stateless composition of the inference and post-processing steps.
/// Safe to invoke concurrently for independent observations.
pub struct Recommender {
    predictor: CropPredictor,
    translator: Arc<dyn Translator>,
}

impl Recommender {
    pub fn new(predictor: CropPredictor, translator: Arc<dyn Translator>) -> Self {
        Self {
            predictor,
            translator,
        }
    }

    /// Run the full pipeline for one observation.
    pub async fn recommend(&self, obs: &Observation) -> Result<Recommendation> {
        let features = FeatureVector::from_observation(obs);
        let crop = self.predictor.predict(&features)?;

        let fertilizers = fertilizer::suggest(obs.n, obs.p, obs.k);
        let reason = reason::explain(&crop, obs.temperature, obs.humidity, obs.rainfall);

        let summary = format!(
            "Recommended Crop: {crop}\nReason: {reason}\nFertilizers: {}",
            fertilizers.join(", ")
        );
        let output_text = localize(self.translator.as_ref(), &summary, &obs.language).await;

        Ok(Recommendation {
            crop,
            reason,
            fertilizers,
            output_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::classifier::{CropClassifier, LabelDecoder};
    use crate::translate::TranslateError;

    /// Classifier pinned to a fixed class index.
    struct StubClassifier {
        index: usize,
        classes: usize,
    }

    impl CropClassifier for StubClassifier {
        fn predict_index(&self, _features: &FeatureVector) -> Result<usize> {
            Ok(self.index)
        }

        fn num_classes(&self) -> usize {
            self.classes
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(
            &self,
            _text: &str,
            _target_lang: &str,
        ) -> std::result::Result<String, TranslateError> {
            Err(TranslateError::Request("connection refused".to_string()))
        }
    }

    struct TaggingTranslator;

    #[async_trait]
    impl Translator for TaggingTranslator {
        async fn translate(
            &self,
            text: &str,
            target_lang: &str,
        ) -> std::result::Result<String, TranslateError> {
            Ok(format!("[{target_lang}] {text}"))
        }
    }

    fn rice_recommender(translator: Arc<dyn Translator>) -> Recommender {
        let classifier = StubClassifier {
            index: 0,
            classes: 2,
        };
        let decoder = LabelDecoder::new(vec!["rice".to_string(), "maize".to_string()]);
        let predictor = CropPredictor::new(Arc::new(classifier), decoder).unwrap();
        Recommender::new(predictor, translator)
    }

    fn observation(language: &str) -> Observation {
        Observation {
            n: 10.0,
            p: 80.0,
            k: 10.0,
            temperature: 25.0,
            humidity: 70.0,
            ph: 6.5,
            rainfall: 200.0,
            language: language.to_string(),
        }
    }

    #[tokio::test]
    async fn test_end_to_end_recommendation() {
        let recommender = rice_recommender(Arc::new(FailingTranslator));
        let rec = recommender.recommend(&observation("en")).await.unwrap();

        assert_eq!(rec.crop, "rice");
        assert_eq!(rec.fertilizers.len(), 2);
        assert!(rec.fertilizers[0].contains("Urea"));
        assert!(rec.fertilizers[1].contains("Potash"));
        assert!(!rec.fertilizers.iter().any(|f| f.contains("Phosphate")));

        assert!(rec.output_text.contains("rice"));
        assert!(rec.output_text.contains("Urea"));
        assert!(rec.output_text.contains("Potash"));
        // English requests are never routed through the backend.
        assert!(rec.output_text.starts_with("Recommended Crop: rice"));
    }

    #[tokio::test]
    async fn test_recommendation_is_deterministic() {
        let recommender = rice_recommender(Arc::new(TaggingTranslator));
        let first = recommender.recommend(&observation("en")).await.unwrap();
        let second = recommender.recommend(&observation("en")).await.unwrap();

        assert_eq!(first.crop, second.crop);
        assert_eq!(first.reason, second.reason);
        assert_eq!(first.fertilizers, second.fertilizers);
        assert_eq!(first.output_text, second.output_text);
    }

    #[tokio::test]
    async fn test_translated_summary_used_when_backend_succeeds() {
        let recommender = rice_recommender(Arc::new(TaggingTranslator));
        let rec = recommender.recommend(&observation("fr")).await.unwrap();
        assert!(rec.output_text.starts_with("[fr] Recommended Crop: rice"));
    }

    #[tokio::test]
    async fn test_translation_failure_degrades_to_original_text() {
        let recommender = rice_recommender(Arc::new(FailingTranslator));
        let rec = recommender.recommend(&observation("fr")).await.unwrap();
        // The only observable effect of the failure is the language.
        assert!(rec.output_text.starts_with("Recommended Crop: rice"));
    }
}
