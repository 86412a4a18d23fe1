// Types listed here are either shared across multiple files and/or exposed via the library.

/// A single numeric feature value.
pub type Feature = f64;

/// One dataset row: the feature values of a single instance.
pub type FeatureRow = Vec<Feature>;

/// Rows are instances, columns are features. Row order is aligned with the label vector.
pub type FeatureMatrix = Vec<FeatureRow>;

/// A raw class label as it appears in a dataset. Only `0` (growth) and `1` (recession)
/// are valid; see `Label` for the validated form.
pub type LabelValue = f64;

/// A misclassification cost. Always non-negative.
pub type Cost = f64;

/// The 2x2 cost matrix `[[growth|growth, recession|growth], [growth|recession, recession|recession]]`.
pub type CostMatrix = [[Cost; 2]; 2];

/// Per-instance cost vector in the order expected by the sampling collaborator:
/// false-positive, false-negative, true-positive, true-negative.
pub type CostVector = [Cost; 4];

/// One `CostVector` per dataset row, in dataset row order.
pub type CostVectorArray = Vec<CostVector>;

/// What a `SamplingStrategy` hands back: resampled features, resampled labels and the
/// cost vectors of the resampled rows.
pub type SamplingOutput = (FeatureMatrix, Vec<LabelValue>, CostVectorArray);
