use crate::models::{ClassCounts, Label};
use crate::types::LabelValue;
use crate::Error;

/// Counts growth and recession instances in the given label sequence.
///
/// # Errors
/// * `MultiClassError` - if any label is neither `0` nor `1`.
pub fn count_class_frequencies(labels: &[LabelValue]) -> Result<ClassCounts, Error> {
    let mut counts = ClassCounts::default();

    for &value in labels {
        let label = Label::from_value(value).map_err(|_| Error::MultiClassError(value))?;
        counts.increment(label);
    }

    Ok(counts)
}
