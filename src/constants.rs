use crate::models::{GridSearchConfig, SamplingMethod};

/// Cost pairs `0.0..=9.9` in steps of `0.1`, norms `0.00..=0.99` in steps of `0.01`,
/// weighted-cost cutoffs `0..=99` in steps of `1`, for both sampling methods.
pub const DEFAULT_GRID_SEARCH_CONFIG: GridSearchConfig = GridSearchConfig {
    cost_steps: 100,
    cost_step: 0.1,
    norm_steps: 100,
    norm_step: 0.01,
    max_weighted_cost_steps: 100,
    max_weighted_cost_step: 1.0,
    methods: &SamplingMethod::ALL,
};

pub const DEFAULT_SAMPLING_METHOD: SamplingMethod = SamplingMethod::RejectionSampling;

pub const DEFAULT_OVERSAMPLING_NORM: f64 = 0.1;

pub const DEFAULT_MAX_WEIGHTED_COST: f64 = 97.5;
