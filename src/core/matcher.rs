use crate::core::{
    distance::{day_distance, height_distance},
    filters::{birthdates_by_id, heights_by_id},
};
use crate::models::{Athlete, AthleteId, DateMatch, HeightMatch, MatchReport, User};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Axis an athlete is compared along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Birthdate,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Birthdate => f.write_str("date of birth"),
            Dimension::Height => f.write_str("height"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("no athletes available to compare against by {dimension}")]
    EmptyCollection { dimension: Dimension },
}

/// Athlete whose birthdate is the fewest days away from `target`
///
/// Equally distant athletes resolve to the lowest identifier, whatever order
/// they arrive in.
pub fn nearest_by_date<I>(target: NaiveDate, athletes: I) -> Result<DateMatch, MatchError>
where
    I: IntoIterator<Item = (AthleteId, NaiveDate)>,
{
    nearest(athletes, |birthdate| day_distance(target, birthdate))
        .map(|(athlete_id, birthdate, days_apart)| DateMatch {
            athlete_id,
            birthdate,
            days_apart,
        })
        .ok_or(MatchError::EmptyCollection {
            dimension: Dimension::Birthdate,
        })
}

/// Athlete whose height differs least from `target`
///
/// Same tie-break as [`nearest_by_date`]. Heights that cannot be compared
/// (NaN) never win.
pub fn nearest_by_height<I>(target: f64, athletes: I) -> Result<HeightMatch, MatchError>
where
    I: IntoIterator<Item = (AthleteId, f64)>,
{
    nearest(athletes, |height| height_distance(target, height))
        .map(|(athlete_id, height, difference)| HeightMatch {
            athlete_id,
            height,
            difference,
        })
        .ok_or(MatchError::EmptyCollection {
            dimension: Dimension::Height,
        })
}

/// Run both dimensions for `user` over one athlete list
pub fn closest_athletes(user: &User, athletes: &[Athlete]) -> Result<MatchReport, MatchError> {
    Ok(MatchReport {
        by_birthdate: nearest_by_date(user.birthdate, birthdates_by_id(athletes))?,
        by_height: nearest_by_height(user.height, heights_by_id(athletes))?,
    })
}

/// Single pass keeping the closest candidate seen so far
fn nearest<T, D, I, F>(candidates: I, distance: F) -> Option<(AthleteId, T, D)>
where
    T: Copy,
    D: PartialOrd + Copy,
    I: IntoIterator<Item = (AthleteId, T)>,
    F: Fn(T) -> D,
{
    let mut best: Option<(AthleteId, T, D)> = None;

    for (id, value) in candidates {
        let dist = distance(value);
        let closer = match best {
            None => dist.partial_cmp(&dist).is_some(),
            Some((best_id, _, best_dist)) => match dist.partial_cmp(&best_dist) {
                Some(Ordering::Less) => true,
                Some(Ordering::Equal) => id < best_id,
                _ => false,
            },
        };

        if closer {
            best = Some((id, value, dist));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_nearest_by_date_basic() {
        let athletes = vec![(1, date(1985, 1, 1)), (2, date(1990, 5, 12))];

        let result = nearest_by_date(date(1990, 5, 10), athletes).unwrap();
        assert_eq!(result.athlete_id, 2);
        assert_eq!(result.birthdate, date(1990, 5, 12));
        assert_eq!(result.days_apart, 2);
    }

    #[test]
    fn test_date_tie_prefers_lowest_id() {
        // Two days before and two days after
        let forward = vec![(9, date(1990, 5, 8)), (4, date(1990, 5, 12))];
        let backward = vec![(4, date(1990, 5, 12)), (9, date(1990, 5, 8))];

        assert_eq!(nearest_by_date(date(1990, 5, 10), forward).unwrap().athlete_id, 4);
        assert_eq!(nearest_by_date(date(1990, 5, 10), backward).unwrap().athlete_id, 4);
    }

    #[test]
    fn test_height_tie_prefers_lowest_id() {
        let athletes = vec![(12, 1.80), (3, 1.80), (7, 1.95)];
        let result = nearest_by_height(1.80, athletes).unwrap();
        assert_eq!(result.athlete_id, 3);
        assert_eq!(result.difference, 0.0);
    }

    #[test]
    fn test_single_entry_always_wins() {
        let result = nearest_by_date(date(2020, 1, 1), vec![(5, date(1900, 1, 1))]).unwrap();
        assert_eq!(result.athlete_id, 5);

        let result = nearest_by_height(1.20, vec![(6, 2.30)]).unwrap();
        assert_eq!(result.athlete_id, 6);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(
            nearest_by_date(date(1990, 1, 1), Vec::new()),
            Err(MatchError::EmptyCollection {
                dimension: Dimension::Birthdate
            })
        );
        assert_eq!(
            nearest_by_height(1.75, Vec::new()).unwrap_err().to_string(),
            "no athletes available to compare against by height"
        );
    }

    #[test]
    fn test_nan_height_never_wins() {
        let result = nearest_by_height(1.75, vec![(1, f64::NAN), (2, 2.10)]).unwrap();
        assert_eq!(result.athlete_id, 2);
    }

    #[test]
    fn test_closest_athletes_skips_missing_height() {
        let user = User {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            gender: "Female".to_string(),
            email: "ada@example.com".to_string(),
            birthdate: date(1990, 5, 10),
            height: 1.75,
        };
        let athletes = vec![
            Athlete::new(1, date(1990, 5, 10), None),
            Athlete::new(2, date(1970, 1, 1), Some(1.80)),
        ];

        let report = closest_athletes(&user, &athletes).unwrap();
        assert_eq!(report.by_birthdate.athlete_id, 1);
        assert_eq!(report.by_height.athlete_id, 2);
    }

    #[test]
    fn test_closest_athletes_without_heights() {
        let user = User {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            gender: String::new(),
            email: String::new(),
            birthdate: date(1990, 5, 10),
            height: 1.75,
        };
        let athletes = vec![Athlete::new(1, date(1990, 5, 10), None)];

        assert_eq!(
            closest_athletes(&user, &athletes),
            Err(MatchError::EmptyCollection {
                dimension: Dimension::Height
            })
        );
    }
}
