use crate::models::{CostModel, Dataset, SamplingMethod, SamplingStrategy};
use crate::types::CostVectorArray;
use crate::Error;
use log::debug;

/// Turns a dataset and a cost model into a resampled dataset by way of a `SamplingStrategy`.
pub struct Rebalancer<'a, S: SamplingStrategy + ?Sized> {
    strategy: &'a S,
}

impl<'a, S: SamplingStrategy + ?Sized> Rebalancer<'a, S> {
    pub fn new(strategy: &'a S) -> Self {
        Self { strategy }
    }

    /// One cost vector per dataset row, in row order.
    pub fn cost_vectors(
        dataset: &Dataset,
        cost_model: &CostModel,
    ) -> Result<CostVectorArray, Error> {
        dataset
            .labels()
            .iter()
            .map(|&label| cost_model.cost_vector(label))
            .collect()
    }

    /// Resamples `dataset` under `cost_model`.
    ///
    /// The cost vectors derived by the strategy are not used past this point.
    ///
    /// # Errors
    /// * `SamplingContractViolation` - if the strategy returns misaligned features and labels.
    /// * `MultiClassError` - if the strategy returns a label other than `0` or `1`.
    /// * Any error raised by the strategy itself.
    pub fn rebalance(
        &self,
        dataset: &Dataset,
        cost_model: &CostModel,
        method: SamplingMethod,
        oversampling_norm: f64,
        max_weighted_cost: f64,
    ) -> Result<Dataset, Error> {
        let cost_vectors = Self::cost_vectors(dataset, cost_model)?;

        debug!(
            "Rebalancing {} rows with {} (norm: {}, max weighted cost: {})",
            dataset.len(),
            method,
            oversampling_norm,
            max_weighted_cost
        );

        let (features, labels, _derived_cost_vectors) = self.strategy.sample(
            dataset.features(),
            dataset.labels(),
            &cost_vectors,
            method,
            oversampling_norm,
            max_weighted_cost,
        )?;

        if features.len() != labels.len() {
            return Err(Error::SamplingContractViolation {
                feature_rows: features.len(),
                label_count: labels.len(),
            });
        }

        Dataset::new(features, labels)
    }
}
