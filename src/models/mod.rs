// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Athlete, AthleteId, NewUser, User, UserId};
pub use requests::{parse_height, parse_user_id, UserForm, ValidationError};
pub use responses::{DateMatch, HeightMatch, MatchReport};
