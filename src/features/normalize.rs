//! Batch min-max normalization.

/// Rescales `value` into [0, 1] against the batch extremes `min` and `max`.
///
/// Degenerate batches (all raw values equal, so `max == min`) map to 1.0
/// when the shared value is positive and 0.0 otherwise: deterministic,
/// NaN-free, and a non-zero signal only when the tied value itself carries
/// one.
pub fn min_max(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        if value > 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    }
}
