use crate::models::{Athlete, AthleteId};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Birthdate of every athlete, keyed by identifier
pub fn birthdates_by_id(athletes: &[Athlete]) -> BTreeMap<AthleteId, NaiveDate> {
    athletes
        .iter()
        .map(|athlete| (athlete.id, athlete.birthdate))
        .collect()
}

/// Height of every athlete that has one, keyed by identifier
///
/// Athletes without a recorded height take no part in height matching.
pub fn heights_by_id(athletes: &[Athlete]) -> BTreeMap<AthleteId, f64> {
    athletes
        .iter()
        .filter_map(|athlete| athlete.height.map(|height| (athlete.id, height)))
        .collect()
}
