pub mod count_class_frequencies;
pub mod scaled_range;

pub use count_class_frequencies::count_class_frequencies;
pub use scaled_range::scaled_range;
