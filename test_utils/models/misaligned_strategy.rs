use cost_rebalance::{
    CostVectorArray, Error, FeatureMatrix, LabelValue, SamplingMethod, SamplingOutput,
    SamplingStrategy,
};

/// Returns one label fewer than it returns feature rows.
pub struct MisalignedStrategy;

impl SamplingStrategy for MisalignedStrategy {
    fn sample(
        &self,
        x: &FeatureMatrix,
        y: &[LabelValue],
        cost_vectors: &CostVectorArray,
        _method: SamplingMethod,
        _oversampling_norm: f64,
        _max_weighted_cost: f64,
    ) -> Result<SamplingOutput, Error> {
        let mut labels = y.to_vec();
        labels.pop();

        Ok((x.clone(), labels, cost_vectors.clone()))
    }
}
