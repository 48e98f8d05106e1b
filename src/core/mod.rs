// Core algorithm exports
pub mod dates;
pub mod distance;
pub mod filters;
pub mod matcher;

pub use dates::{format_date, parse_date};
pub use distance::{day_distance, height_distance};
pub use filters::{birthdates_by_id, heights_by_id};
pub use matcher::{closest_athletes, nearest_by_date, nearest_by_height, Dimension, MatchError};
