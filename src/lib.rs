mod constants;
pub mod models;
pub use constants::{
    DEFAULT_GRID_SEARCH_CONFIG, DEFAULT_MAX_WEIGHTED_COST, DEFAULT_OVERSAMPLING_NORM,
    DEFAULT_SAMPLING_METHOD,
};
pub use models::{
    CancellationToken, ClassCounts, CostModel, Dataset, DatasetReader, Error, GridPoint,
    GridReport, GridSearchConfig, GridSearchDriver, Label, Rebalancer, SamplingMethod,
    SamplingStrategy,
};
pub mod types;
mod utils;
pub use types::{
    Cost, CostMatrix, CostVector, CostVectorArray, Feature, FeatureMatrix, FeatureRow,
    LabelValue, SamplingOutput,
};
pub use utils::count_class_frequencies;

/// Rebalances `dataset` under `cost_model` with the default method, norm and weighted-cost
/// cutoff.
pub fn cost_sensitive_rebalance<S: SamplingStrategy + ?Sized>(
    dataset: &Dataset,
    cost_model: &CostModel,
    strategy: &S,
) -> Result<Dataset, Error> {
    Rebalancer::new(strategy).rebalance(
        dataset,
        cost_model,
        DEFAULT_SAMPLING_METHOD,
        DEFAULT_OVERSAMPLING_NORM,
        DEFAULT_MAX_WEIGHTED_COST,
    )
}
