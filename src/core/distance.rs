use chrono::NaiveDate;

/// Absolute distance between two calendar dates in days
#[inline]
pub fn day_distance(a: NaiveDate, b: NaiveDate) -> u64 {
    a.signed_duration_since(b).num_days().unsigned_abs()
}

/// Absolute difference between two heights
#[inline]
pub fn height_distance(a: f64, b: f64) -> f64 {
    (a - b).abs()
}
