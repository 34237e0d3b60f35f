pub mod attendance;
pub mod dashboard;
pub mod employee;

/// Share of `part` in `total` as a percentage, rounded to two decimal places
/// (half away from zero). Zero when `total` is zero.
pub fn percentage(part: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
