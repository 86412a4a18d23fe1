use crate::models::ClassCounts;
use crate::types::{FeatureMatrix, LabelValue};
use crate::utils::count_class_frequencies;
use crate::Error;

/// A features matrix paired with its row-aligned label vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: FeatureMatrix,
    labels: Vec<LabelValue>,
}

impl Dataset {
    /// # Errors
    /// * `ShapeMismatchError` - if the row count differs from the label count.
    /// * `MultiClassError` - if a label is neither `0` nor `1`.
    pub fn new(features: FeatureMatrix, labels: Vec<LabelValue>) -> Result<Self, Error> {
        if features.len() != labels.len() {
            return Err(Error::ShapeMismatchError {
                feature_rows: features.len(),
                label_count: labels.len(),
            });
        }

        count_class_frequencies(&labels)?;

        Ok(Self { features, labels })
    }

    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }

    pub fn labels(&self) -> &[LabelValue] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn class_counts(&self) -> ClassCounts {
        // Labels were validated on construction
        count_class_frequencies(&self.labels).unwrap_or_default()
    }

    pub fn into_parts(self) -> (FeatureMatrix, Vec<LabelValue>) {
        (self.features, self.labels)
    }
}
