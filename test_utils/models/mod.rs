pub mod failing_strategy;
pub use failing_strategy::FailingStrategy;

pub mod fixed_label_strategy;
pub use fixed_label_strategy::FixedLabelStrategy;

pub mod fn_strategy;
pub use fn_strategy::FnStrategy;

pub mod identity_strategy;
pub use identity_strategy::IdentityStrategy;

pub mod misaligned_strategy;
pub use misaligned_strategy::MisalignedStrategy;

pub mod recording_strategy;
pub use recording_strategy::{RecordingStrategy, SamplingCall};
