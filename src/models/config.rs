use crate::models::{GridPoint, SamplingMethod};
use crate::utils::scaled_range;

/// Shape of a grid search sweep. Each axis yields `steps` values starting at zero and
/// spaced `step` apart.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSearchConfig {
    /// Shared by both misclassification-cost axes.
    pub cost_steps: usize,
    pub cost_step: f64,
    pub norm_steps: usize,
    pub norm_step: f64,
    pub max_weighted_cost_steps: usize,
    pub max_weighted_cost_step: f64,
    pub methods: &'static [SamplingMethod],
}

impl GridSearchConfig {
    /// Lazily enumerates the grid, nested as norm, max weighted cost, method,
    /// `cost_recession_predicted_growth`, then `cost_growth_predicted_recession`.
    pub fn grid_points(&self) -> impl Iterator<Item = GridPoint> + Send {
        let costs = scaled_range(self.cost_steps, self.cost_step);
        let max_weighted_costs =
            scaled_range(self.max_weighted_cost_steps, self.max_weighted_cost_step);
        let methods = self.methods;

        scaled_range(self.norm_steps, self.norm_step).flat_map(move |oversampling_norm| {
            let costs = costs.clone();

            max_weighted_costs
                .clone()
                .flat_map(move |max_weighted_cost| {
                    let costs = costs.clone();

                    methods.iter().copied().flat_map(move |method| {
                        let rows = costs.clone();
                        let columns = costs.clone();

                        rows.flat_map(move |cost_recession_predicted_growth| {
                            columns
                                .clone()
                                .map(move |cost_growth_predicted_recession| GridPoint {
                                    cost_recession_predicted_growth,
                                    cost_growth_predicted_recession,
                                    method,
                                    oversampling_norm,
                                    max_weighted_cost,
                                })
                        })
                    })
                })
        })
    }

    pub fn point_count(&self) -> usize {
        self.norm_steps
            * self.max_weighted_cost_steps
            * self.methods.len()
            * self.cost_steps
            * self.cost_steps
    }
}
