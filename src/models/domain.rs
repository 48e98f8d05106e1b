use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type AthleteId = i64;
pub type UserId = i64;

/// Athlete reference record
///
/// Only `birthdate` and `height` take part in matching; the rest is
/// descriptive and may be absent in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: AthleteId,
    pub birthdate: NaiveDate,
    /// Height in metres
    pub height: Option<f64>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub weight: Option<i64>,
    pub name: Option<String>,
    pub gold_medals: Option<i64>,
    pub silver_medals: Option<i64>,
    pub bronze_medals: Option<i64>,
    pub total_medals: Option<i64>,
    pub sport: Option<String>,
    pub country: Option<String>,
}

impl Athlete {
    /// Minimal athlete with only the matching fields set
    pub fn new(id: AthleteId, birthdate: NaiveDate, height: Option<f64>) -> Self {
        Self {
            id,
            birthdate,
            height,
            age: None,
            gender: None,
            weight: None,
            name: None,
            gold_medals: None,
            silver_medals: None,
            bronze_medals: None,
            total_medals: None,
            sport: None,
            country: None,
        }
    }
}

/// Registered user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub email: String,
    pub birthdate: NaiveDate,
    /// Height in metres
    pub height: f64,
}

/// A validated user that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub email: String,
    pub birthdate: NaiveDate,
    pub height: f64,
}
