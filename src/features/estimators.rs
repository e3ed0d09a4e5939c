//! Raw feature estimators.

/// Raw urgency from the signed days-until-due offset.
///
/// Piecewise over `d = days_until_due`:
///
/// - absent → 0.0
/// - overdue (`d < 0`) → 1.0 + min(0.5, |d| / 30): grows with how overdue,
///   capped at 1.5 for anything a month late or more
/// - due today → 0.95
/// - within a week (1..=7) → 0.6 + 0.35 · (1 − (d−1)/6)
/// - within a month (8..=30) → 0.2 + 0.4 · (1 − (d−8)/22)
/// - beyond a month → 0.05
///
/// Raw values are deliberately not clamped to [0, 1]; overdue tasks exceed
/// 1.0 so they dominate the batch min-max rescale.
pub fn urgency_raw(days_until_due: Option<i64>) -> f64 {
    match days_until_due {
        None => 0.0,
        Some(d) if d < 0 => 1.0 + (d.unsigned_abs() as f64 / 30.0).min(0.5),
        Some(0) => 0.95,
        Some(d) if d <= 7 => 0.6 + 0.35 * (1.0 - (d - 1) as f64 / 6.0),
        Some(d) if d <= 30 => 0.2 + 0.4 * (1.0 - (d - 8) as f64 / 22.0),
        Some(_) => 0.05,
    }
}

/// Raw effort desirability: inverse of estimated hours.
///
/// Larger value = less effort = better "quick win". The additive epsilon
/// keeps zero-hour tasks finite (capped at 100) and avoids division by zero.
pub fn effort_raw(estimated_hours: f64) -> f64 {
    1.0 / (estimated_hours + 0.01)
}

/// Fixed linear map from the 1..=10 importance scale to [0, 1].
///
/// Unlike urgency and effort this is batch-independent: importance 5 maps
/// to the same sub-score in every batch.
pub fn importance_norm(importance: u8) -> f64 {
    (importance as f64 - 1.0) / 9.0
}
