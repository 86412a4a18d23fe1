use cost_rebalance::{Dataset, DatasetReader, FeatureMatrix, LabelValue};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::path::Path;

pub mod constants;
pub mod models;
pub use models::{
    FailingStrategy, FixedLabelStrategy, FnStrategy, IdentityStrategy, MisalignedStrategy,
    RecordingStrategy, SamplingCall,
};

/// Utility to load a dataset fixture for testing and benchmarking.
pub fn load_dataset_from_file<P: AsRef<Path>>(file_path: P) -> Result<Dataset, Box<dyn Error>> {
    let dataset = DatasetReader::read_dataset_from_path(file_path)?;
    Ok(dataset)
}

/// Builds a shuffled dataset with the given class sizes and uniformly random features.
/// The same seed always yields the same dataset.
pub fn synthetic_dataset(
    n_growth: usize,
    n_recession: usize,
    n_features: usize,
    seed: u64,
) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut labels: Vec<LabelValue> = std::iter::repeat(0.0)
        .take(n_growth)
        .chain(std::iter::repeat(1.0).take(n_recession))
        .collect();
    labels.shuffle(&mut rng);

    let features: FeatureMatrix = labels
        .iter()
        .map(|_| (0..n_features).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect();

    Dataset::new(features, labels).expect("Synthetic dataset is well-formed")
}
