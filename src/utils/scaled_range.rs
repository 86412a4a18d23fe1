/// Yields `steps` values `0, step, 2 * step, ...`, each computed as `index * step`.
pub fn scaled_range(steps: usize, step: f64) -> impl Iterator<Item = f64> + Clone {
    (0..steps).map(move |index| index as f64 * step)
}
