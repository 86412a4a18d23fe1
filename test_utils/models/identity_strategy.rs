use cost_rebalance::{
    CostVectorArray, Error, FeatureMatrix, LabelValue, SamplingMethod, SamplingOutput,
    SamplingStrategy,
};

/// Hands the input back untouched.
pub struct IdentityStrategy;

impl SamplingStrategy for IdentityStrategy {
    fn sample(
        &self,
        x: &FeatureMatrix,
        y: &[LabelValue],
        cost_vectors: &CostVectorArray,
        _method: SamplingMethod,
        _oversampling_norm: f64,
        _max_weighted_cost: f64,
    ) -> Result<SamplingOutput, Error> {
        Ok((x.clone(), y.to_vec(), cost_vectors.clone()))
    }
}
