pub mod cancellation_token;
pub use cancellation_token::CancellationToken;

pub mod config;
pub use config::GridSearchConfig;

pub mod cost_model;
pub use cost_model::CostModel;

pub mod dataset;
pub use dataset::Dataset;

pub mod dataset_reader;
pub use dataset_reader::DatasetReader;

pub mod error;
pub use error::Error;

pub mod grid_search;
pub use grid_search::{GridPoint, GridReport, GridSearchDriver};

pub mod label;
pub use label::{ClassCounts, Label};

pub mod rebalancer;
pub use rebalancer::Rebalancer;

pub mod sampling_strategy;
pub use sampling_strategy::{SamplingMethod, SamplingStrategy};
