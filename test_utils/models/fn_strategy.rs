use cost_rebalance::{
    CostVectorArray, Error, FeatureMatrix, LabelValue, SamplingMethod, SamplingOutput,
    SamplingStrategy,
};

/// Delegates the resampled labels to a closure of
/// `(cost_vectors, method, oversampling_norm, max_weighted_cost)`.
pub struct FnStrategy<F>
where
    F: Fn(&CostVectorArray, SamplingMethod, f64, f64) -> Vec<LabelValue>,
{
    label_fn: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&CostVectorArray, SamplingMethod, f64, f64) -> Vec<LabelValue>,
{
    pub fn new(label_fn: F) -> Self {
        Self { label_fn }
    }
}

impl<F> SamplingStrategy for FnStrategy<F>
where
    F: Fn(&CostVectorArray, SamplingMethod, f64, f64) -> Vec<LabelValue>,
{
    fn sample(
        &self,
        x: &FeatureMatrix,
        _y: &[LabelValue],
        cost_vectors: &CostVectorArray,
        method: SamplingMethod,
        oversampling_norm: f64,
        max_weighted_cost: f64,
    ) -> Result<SamplingOutput, Error> {
        let labels = (self.label_fn)(cost_vectors, method, oversampling_norm, max_weighted_cost);
        let width = x.first().map(|row| row.len()).unwrap_or(0);
        let features = vec![vec![0.0; width]; labels.len()];

        Ok((features, labels, CostVectorArray::new()))
    }
}
