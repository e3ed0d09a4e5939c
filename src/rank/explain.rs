//! Per-task rationale synthesis.
//!
//! Builds an ordered clause list from the raw feature values and joins it
//! into one string. The clause wording and thresholds are fixed constants;
//! display layers depend on these exact strings.

use super::types::PreparedTask;

/// Effort sub-score above which a task is called out as a quick win.
const QUICK_WIN_THRESHOLD: f64 = 0.7;

pub(crate) fn explanation(
    task: &PreparedTask,
    dependency_norm: f64,
    effort_norm: f64,
) -> String {
    let mut clauses: Vec<String> = Vec::new();

    match task.days_until_due {
        None => clauses.push("No due date (lower urgency)".to_string()),
        Some(d) if d < 0 => {
            clauses.push(format!("Past due ({} days overdue) → high urgency", -d))
        }
        Some(0) => clauses.push("Due today → high urgency".to_string()),
        Some(d) => clauses.push(format!("Due in {d} days")),
    }

    clauses.push(format!("Importance: {}/10", task.importance));
    clauses.push(format!("Estimated hours: {}", hours_display(task.estimated_hours)));

    if dependency_norm > 0.0 {
        clauses.push(format!(
            "Blocks {} other tasks (dependency score)",
            round_half_even(dependency_norm * 10.0)
        ));
    }
    if effort_norm > QUICK_WIN_THRESHOLD {
        clauses.push("Quick win (low effort)".to_string());
    }

    clauses.join("; ")
}

/// Hours render with at least one decimal: `3` prints as `3.0`, `0.5` as
/// `0.5`.
fn hours_display(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.1}")
    } else {
        format!("{hours}")
    }
}

/// Round half to even (2.5 → 2, 3.5 → 4), the rounding mode display layers
/// expect for the blocked-tasks count.
fn round_half_even(x: f64) -> i64 {
    let floor = x.floor();
    if (x - floor - 0.5).abs() < f64::EPSILON {
        let f = floor as i64;
        if f % 2 == 0 {
            f
        } else {
            f + 1
        }
    } else {
        x.round() as i64
    }
}
