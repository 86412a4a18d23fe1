use cost_rebalance::{
    CostVectorArray, Error, FeatureMatrix, LabelValue, SamplingMethod, SamplingOutput,
    SamplingStrategy,
};
use std::sync::Mutex;

/// Arguments of a single `sample` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingCall {
    pub feature_rows: usize,
    pub labels: Vec<LabelValue>,
    pub cost_vectors: CostVectorArray,
    pub method: SamplingMethod,
    pub oversampling_norm: f64,
    pub max_weighted_cost: f64,
}

/// Records every call, then behaves like `IdentityStrategy`.
#[derive(Default)]
pub struct RecordingStrategy {
    calls: Mutex<Vec<SamplingCall>>,
}

impl RecordingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SamplingCall> {
        self.calls.lock().expect("Recording lock poisoned").clone()
    }
}

impl SamplingStrategy for RecordingStrategy {
    fn sample(
        &self,
        x: &FeatureMatrix,
        y: &[LabelValue],
        cost_vectors: &CostVectorArray,
        method: SamplingMethod,
        oversampling_norm: f64,
        max_weighted_cost: f64,
    ) -> Result<SamplingOutput, Error> {
        self.calls
            .lock()
            .expect("Recording lock poisoned")
            .push(SamplingCall {
                feature_rows: x.len(),
                labels: y.to_vec(),
                cost_vectors: cost_vectors.clone(),
                method,
                oversampling_norm,
                max_weighted_cost,
            });

        Ok((x.clone(), y.to_vec(), cost_vectors.clone()))
    }
}
