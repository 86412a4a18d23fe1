use cost_rebalance::{
    CostVectorArray, Error, FeatureMatrix, LabelValue, SamplingMethod, SamplingOutput,
    SamplingStrategy,
};

/// Always returns the same label distribution, paired with zeroed feature rows of the
/// input's width.
pub struct FixedLabelStrategy {
    pub labels: Vec<LabelValue>,
}

impl FixedLabelStrategy {
    pub fn new(n_growth: usize, n_recession: usize) -> Self {
        let labels = std::iter::repeat(0.0)
            .take(n_growth)
            .chain(std::iter::repeat(1.0).take(n_recession))
            .collect();

        Self { labels }
    }
}

impl SamplingStrategy for FixedLabelStrategy {
    fn sample(
        &self,
        x: &FeatureMatrix,
        _y: &[LabelValue],
        _cost_vectors: &CostVectorArray,
        _method: SamplingMethod,
        _oversampling_norm: f64,
        _max_weighted_cost: f64,
    ) -> Result<SamplingOutput, Error> {
        let width = x.first().map(|row| row.len()).unwrap_or(0);
        let features = vec![vec![0.0; width]; self.labels.len()];

        Ok((features, self.labels.clone(), CostVectorArray::new()))
    }
}
