use crate::core::dates::parse_date;
use crate::models::domain::{NewUser, UserId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Rejected user input
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required fields: {0}")]
    Fields(#[from] validator::ValidationErrors),

    #[error("'{input}' is not a date in the format YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("'{0}' is not a height in meters (use a dot to separate decimal parts)")]
    InvalidHeight(String),

    #[error("'{0}' is not a valid user ID")]
    InvalidUserId(String),
}

/// Raw registration input as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub gender: String,
    pub email: String,
    /// `YYYY-MM-DD`
    pub birthdate: String,
    /// Metres, dot as decimal separator
    pub height: String,
}

impl TryFrom<&UserForm> for NewUser {
    type Error = ValidationError;

    fn try_from(form: &UserForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let birthdate = parse_date(&form.birthdate).map_err(|source| {
            ValidationError::InvalidDate {
                input: form.birthdate.clone(),
                source,
            }
        })?;

        Ok(NewUser {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            gender: form.gender.clone(),
            email: form.email.clone(),
            birthdate,
            height: parse_height(&form.height)?,
        })
    }
}

/// Parse a height in metres; must be a finite positive number
pub fn parse_height(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(height) if height.is_finite() && height > 0.0 => Ok(height),
        _ => Err(ValidationError::InvalidHeight(trimmed.to_string())),
    }
}

/// Parse the identifier entered in the query flow
pub fn parse_user_id(input: &str) -> Result<UserId, ValidationError> {
    let trimmed = input.trim();
    trimmed
        .parse::<UserId>()
        .map_err(|_| ValidationError::InvalidUserId(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_form() -> UserForm {
        UserForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            gender: "Female".to_string(),
            email: "ada@example.com".to_string(),
            birthdate: "1990-05-10".to_string(),
            height: "1.75".to_string(),
        }
    }

    #[test]
    fn test_valid_form_converts() {
        let user = NewUser::try_from(&valid_form()).unwrap();
        assert_eq!(user.birthdate, NaiveDate::from_ymd_opt(1990, 5, 10).unwrap());
        assert_eq!(user.height, 1.75);
        assert_eq!(user.first_name, "Ada");
    }

    #[test]
    fn test_empty_name_rejected() {
        let form = UserForm {
            last_name: String::new(),
            ..valid_form()
        };
        assert!(matches!(NewUser::try_from(&form), Err(ValidationError::Fields(_))));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let form = UserForm {
            birthdate: "1990/05/10".to_string(),
            ..valid_form()
        };
        assert!(matches!(
            NewUser::try_from(&form),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_height_parsing() {
        assert_eq!(parse_height(" 1.82 ").unwrap(), 1.82);
        assert!(parse_height("1,82").is_err());
        assert!(parse_height("tall").is_err());
        assert!(parse_height("-1.5").is_err());
        assert!(parse_height("0").is_err());
        assert!(parse_height("NaN").is_err());
        assert!(parse_height("inf").is_err());
    }

    #[test]
    fn test_user_id_parsing() {
        assert_eq!(parse_user_id("42\n").unwrap(), 42);
        assert!(matches!(
            parse_user_id("forty-two"),
            Err(ValidationError::InvalidUserId(id)) if id == "forty-two"
        ));
    }
}
