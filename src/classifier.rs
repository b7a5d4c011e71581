//! Classifier artifact loading and crop label decoding.
//!
//! The trained model is a decision-tree ensemble serialized as JSON by the
//! training pipeline, paired with a label decoder mapping class indices to
//! crop names. Both are loaded once at startup, validated against each
//! other, and shared read-only across requests.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::observation::{FeatureVector, NUM_FEATURES};

/// Single-instance inference over the fixed feature schema.
///
/// The trait is the injection seam for the opaque model: production uses
/// [`ForestModel`], tests pin the predicted class with a stub.
pub trait CropClassifier: Send + Sync {
    /// Predict the class index for one feature vector.
    fn predict_index(&self, features: &FeatureVector) -> Result<usize>;

    /// Number of classes in the model's output space.
    fn num_classes(&self) -> usize;
}

/// Node of a serialized decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    /// Terminal node carrying the predicted class index
    Leaf { class: usize },
    /// Split on `feature <= threshold` (left) vs `> threshold` (right)
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

/// Decision-tree ensemble with majority voting across trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestModel {
    pub num_features: usize,
    pub num_classes: usize,
    pub trees: Vec<TreeNode>,
}

impl ForestModel {
    /// Load and validate a model from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            Error::Artifact(format!("cannot read model file {}: {e}", path.display()))
        })?;
        let model: ForestModel = serde_json::from_str(&data)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.num_features != NUM_FEATURES {
            return Err(Error::Artifact(format!(
                "model expects {} features, service schema has {}",
                self.num_features, NUM_FEATURES
            )));
        }
        if self.trees.is_empty() {
            return Err(Error::Artifact("model contains no trees".to_string()));
        }
        for tree in &self.trees {
            validate_node(tree, self.num_features, self.num_classes)?;
        }
        Ok(())
    }

    fn tree_class(&self, tree: &TreeNode, x: &[f64; NUM_FEATURES]) -> usize {
        let mut node = tree;
        loop {
            match node {
                TreeNode::Leaf { class } => return *class,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if x[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }
}

fn validate_node(node: &TreeNode, num_features: usize, num_classes: usize) -> Result<()> {
    match node {
        TreeNode::Leaf { class } => {
            if *class >= num_classes {
                return Err(Error::Artifact(format!(
                    "leaf class {class} outside class space of {num_classes}"
                )));
            }
        }
        TreeNode::Split {
            feature,
            left,
            right,
            ..
        } => {
            if *feature >= num_features {
                return Err(Error::Artifact(format!(
                    "split on feature {feature}, model has {num_features} features"
                )));
            }
            validate_node(left, num_features, num_classes)?;
            validate_node(right, num_features, num_classes)?;
        }
    }
    Ok(())
}

impl CropClassifier for ForestModel {
    fn predict_index(&self, features: &FeatureVector) -> Result<usize> {
        let x = features.values();
        let mut votes = vec![0usize; self.num_classes];

        for tree in &self.trees {
            let class = self.tree_class(tree, x);
            // Classes are validated at load time; a miss here means the
            // shared artifact was not the one that passed validation.
            let slot = votes.get_mut(class).ok_or_else(|| {
                Error::Inference(format!(
                    "tree voted for class {class}, model has {} classes",
                    self.num_classes
                ))
            })?;
            *slot += 1;
        }

        // Majority vote; ties resolve to the lowest class index.
        let mut predicted = 0;
        let mut max_votes = 0;
        for (class, &count) in votes.iter().enumerate() {
            if count > max_votes {
                max_votes = count;
                predicted = class;
            }
        }
        Ok(predicted)
    }

    fn num_classes(&self) -> usize {
        self.num_classes
    }
}

/// Ordered crop names indexed by class id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelDecoder {
    labels: Vec<String>,
}

impl LabelDecoder {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Load crop labels from a JSON array file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            Error::Artifact(format!("cannot read labels file {}: {e}", path.display()))
        })?;
        let decoder: LabelDecoder = serde_json::from_str(&data)?;
        if decoder.labels.is_empty() {
            return Err(Error::Artifact("label decoder is empty".to_string()));
        }
        Ok(decoder)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Decode a class index to its crop name.
    pub fn decode(&self, index: usize) -> Result<&str> {
        self.labels.get(index).map(String::as_str).ok_or_else(|| {
            Error::Inference(format!(
                "class index {index} outside label space of {}",
                self.labels.len()
            ))
        })
    }
}

/// Adapter pairing the opaque classifier with its label decoder.
pub struct CropPredictor {
    classifier: Arc<dyn CropClassifier>,
    decoder: LabelDecoder,
}

impl CropPredictor {
    /// Pair a classifier with a decoder, checking label-space compatibility.
    pub fn new(classifier: Arc<dyn CropClassifier>, decoder: LabelDecoder) -> Result<Self> {
        if classifier.num_classes() > decoder.len() {
            return Err(Error::Artifact(format!(
                "model predicts {} classes but decoder has {} labels",
                classifier.num_classes(),
                decoder.len()
            )));
        }
        Ok(Self { classifier, decoder })
    }

    /// Load both artifacts from disk. Any failure here is fatal: the
    /// service must not accept traffic without a working classifier.
    pub fn load(model_path: &Path, labels_path: &Path) -> Result<Self> {
        let model = ForestModel::from_file(model_path)?;
        let decoder = LabelDecoder::from_file(labels_path)?;
        info!(
            "Loaded classifier: {} trees, {} classes, {} labels",
            model.trees.len(),
            model.num_classes,
            decoder.len()
        );
        Self::new(Arc::new(model), decoder)
    }

    /// Run inference and decode the result to a crop name.
    pub fn predict(&self, features: &FeatureVector) -> Result<String> {
        let index = self.classifier.predict_index(features)?;
        Ok(self.decoder.decode(index)?.to_string())
    }
}
