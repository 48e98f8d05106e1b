use crate::models::domain::AthleteId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closest athlete by date of birth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateMatch {
    pub athlete_id: AthleteId,
    pub birthdate: NaiveDate,
    pub days_apart: u64,
}

/// Closest athlete by height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightMatch {
    pub athlete_id: AthleteId,
    pub height: f64,
    pub difference: f64,
}

/// Result of the query flow: one match per dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub by_birthdate: DateMatch,
    pub by_height: HeightMatch,
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Closest athlete by date of birth: {}, his date of birth: {}",
            self.by_birthdate.athlete_id, self.by_birthdate.birthdate
        )?;
        write!(
            f,
            "Nearest athlete: {}, his height: {:?}",
            self.by_height.athlete_id, self.by_height.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let report = MatchReport {
            by_birthdate: DateMatch {
                athlete_id: 7,
                birthdate: NaiveDate::from_ymd_opt(1990, 5, 12).unwrap(),
                days_apart: 2,
            },
            by_height: HeightMatch {
                athlete_id: 3,
                height: 1.7,
                difference: 0.05,
            },
        };

        assert_eq!(
            report.to_string(),
            "Closest athlete by date of birth: 7, his date of birth: 1990-05-12\n\
             Nearest athlete: 3, his height: 1.7"
        );
    }

    #[test]
    fn test_whole_metre_height_keeps_decimal() {
        let report = MatchReport {
            by_birthdate: DateMatch {
                athlete_id: 1,
                birthdate: NaiveDate::from_ymd_opt(1988, 3, 3).unwrap(),
                days_apart: 0,
            },
            by_height: HeightMatch {
                athlete_id: 1,
                height: 2.0,
                difference: 0.02,
            },
        };

        assert!(report.to_string().ends_with("Nearest athlete: 1, his height: 2.0"));
    }
}
