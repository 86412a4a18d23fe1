use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static RECESSION_SAMPLE_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "recession_sample.csv"));

pub static RECESSION_SAMPLE_GZ_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "recession_sample.csv.gz"));

pub static MULTI_CLASS_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "multi_class.csv"));

/// Row counts of `recession_sample.csv`.
pub const RECESSION_SAMPLE_GROWTH_COUNT: usize = 8;
pub const RECESSION_SAMPLE_RECESSION_COUNT: usize = 2;
pub const RECESSION_SAMPLE_FEATURE_COUNT: usize = 3;
