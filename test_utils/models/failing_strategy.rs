use cost_rebalance::{
    CostVectorArray, Error, FeatureMatrix, LabelValue, SamplingMethod, SamplingOutput,
    SamplingStrategy,
};

pub struct FailingStrategy;

impl SamplingStrategy for FailingStrategy {
    fn sample(
        &self,
        _x: &FeatureMatrix,
        _y: &[LabelValue],
        _cost_vectors: &CostVectorArray,
        method: SamplingMethod,
        _oversampling_norm: f64,
        _max_weighted_cost: f64,
    ) -> Result<SamplingOutput, Error> {
        Err(Error::SamplingError(format!("{} is unavailable", method)))
    }
}
