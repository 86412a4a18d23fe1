use crate::models::{
    CancellationToken, ClassCounts, CostModel, Dataset, GridSearchConfig, Rebalancer,
    SamplingMethod, SamplingStrategy,
};
use crate::types::Cost;
use crate::Error;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::fmt;

/// One combination of swept parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub cost_recession_predicted_growth: Cost,
    pub cost_growth_predicted_recession: Cost,
    pub method: SamplingMethod,
    pub oversampling_norm: f64,
    pub max_weighted_cost: f64,
}

/// Class counts of the dataset produced at one grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridReport {
    pub point: GridPoint,
    pub counts: ClassCounts,
}

impl GridReport {
    pub fn recession_count(&self) -> usize {
        self.counts.recession
    }

    pub fn growth_count(&self) -> usize {
        self.counts.growth
    }
}

impl fmt::Display for GridReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Params: {} {:?} {:?}",
            self.point.method, self.point.oversampling_norm, self.point.max_weighted_cost
        )?;
        write!(
            f,
            "Costs ( {:?} , {:?} ) => Counts (Recession: {} Growth: {} ).",
            self.point.cost_recession_predicted_growth,
            self.point.cost_growth_predicted_recession,
            self.counts.recession,
            self.counts.growth
        )
    }
}

/// Sweeps a `GridSearchConfig`, rebalancing the dataset once per grid point.
///
/// Points whose rebalanced dataset holds no growth instances are skipped.
pub struct GridSearchDriver<'a, S: SamplingStrategy + ?Sized> {
    dataset: &'a Dataset,
    strategy: &'a S,
    config: GridSearchConfig,
}

impl<'a, S: SamplingStrategy + ?Sized + 'a> GridSearchDriver<'a, S> {
    pub fn new(dataset: &'a Dataset, strategy: &'a S, config: GridSearchConfig) -> Self {
        Self {
            dataset,
            strategy,
            config,
        }
    }

    pub fn config(&self) -> &GridSearchConfig {
        &self.config
    }

    /// Rebalances the dataset at a single grid point. Returns `None` if the point is skipped.
    pub fn evaluate(&self, point: &GridPoint) -> Result<Option<GridReport>, Error> {
        Self::evaluate_point(self.dataset, self.strategy, point)
    }

    fn evaluate_point(
        dataset: &Dataset,
        strategy: &S,
        point: &GridPoint,
    ) -> Result<Option<GridReport>, Error> {
        let cost_model = CostModel::new(
            point.cost_recession_predicted_growth,
            point.cost_growth_predicted_recession,
        )?;

        let resampled = Rebalancer::new(strategy).rebalance(
            dataset,
            &cost_model,
            point.method,
            point.oversampling_norm,
            point.max_weighted_cost,
        )?;

        let counts = resampled.class_counts();

        if counts.growth == 0 {
            debug!("Skipping {:?}: no growth instances after rebalancing", point);
            return Ok(None);
        }

        debug!("{:?} => {:?}", point, counts);

        Ok(Some(GridReport {
            point: *point,
            counts,
        }))
    }

    /// Lazily evaluates every grid point in order, stopping once `cancel` is triggered.
    pub fn sweep(
        &self,
        cancel: &CancellationToken,
    ) -> impl Iterator<Item = Result<GridReport, Error>> + 'a {
        info!(
            "Starting grid search over {} points",
            self.config.point_count()
        );

        let cancel = cancel.clone();
        let dataset = self.dataset;
        let strategy = self.strategy;

        self.config
            .grid_points()
            .take_while(move |_| {
                if cancel.is_cancelled() {
                    warn!("Grid search cancelled");
                    false
                } else {
                    true
                }
            })
            .filter_map(move |point| {
                Self::evaluate_point(dataset, strategy, &point).transpose()
            })
    }

    /// Evaluates the grid on the rayon thread pool. Report order is unspecified.
    ///
    /// The first error aborts the sweep. Once `cancel` is triggered no further grid points
    /// are handed out; points already in flight still finish.
    pub fn sweep_parallel(&self, cancel: &CancellationToken) -> Result<Vec<GridReport>, Error>
    where
        S: Sync,
    {
        info!(
            "Starting parallel grid search over {} points",
            self.config.point_count()
        );

        let reports = self
            .config
            .grid_points()
            .take_while(|_| !cancel.is_cancelled())
            .par_bridge()
            .filter_map(|point| self.evaluate(&point).transpose())
            .collect::<Result<Vec<GridReport>, Error>>()?;

        if cancel.is_cancelled() {
            warn!("Grid search cancelled after {} reports", reports.len());
        } else {
            info!("Grid search finished with {} reports", reports.len());
        }

        Ok(reports)
    }
}
