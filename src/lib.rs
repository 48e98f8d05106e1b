//! Athlete Match - finds the athlete closest to a registered user
//!
//! Users and athlete reference data live in a SQLite store. The matcher scans
//! the athletes once per dimension and keeps the one nearest to the user by
//! date of birth and by height.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;
pub mod workflows;

// Re-export commonly used types
pub use crate::core::{closest_athletes, nearest_by_date, nearest_by_height, MatchError};
pub use crate::models::{Athlete, MatchReport, User, UserForm};
pub use crate::services::{Store, StoreError};
