use crate::types::{CostVectorArray, FeatureMatrix, LabelValue, SamplingOutput};
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The resampling procedures a `SamplingStrategy` can be asked to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingMethod {
    RejectionSampling,
    OverSampling,
}

impl SamplingMethod {
    pub const ALL: [SamplingMethod; 2] = [
        SamplingMethod::RejectionSampling,
        SamplingMethod::OverSampling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingMethod::RejectionSampling => "RejectionSampling",
            SamplingMethod::OverSampling => "OverSampling",
        }
    }
}

impl fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SamplingMethod {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SamplingMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == name)
            .ok_or_else(|| Error::UnknownSamplingMethodError(name.to_string()))
    }
}

/// Cost-proportionate resampling over per-instance cost vectors.
///
/// Implementations are provided by the integrator; this crate only drives them. Every
/// call receives `cost_vectors` with one row per label, ordered as (false positive, false
/// negative, true positive, true negative). The returned features and labels must have
/// the same number of rows.
///
/// Implementations backed by an unseeded global random generator are not safe to drive
/// from `GridSearchDriver::sweep_parallel` unless they serialize access internally.
pub trait SamplingStrategy {
    fn sample(
        &self,
        x: &FeatureMatrix,
        y: &[LabelValue],
        cost_vectors: &CostVectorArray,
        method: SamplingMethod,
        oversampling_norm: f64,
        max_weighted_cost: f64,
    ) -> Result<SamplingOutput, Error>;
}
