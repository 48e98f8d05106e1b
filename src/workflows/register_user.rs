use super::{prompt, WorkflowError};
use crate::models::{UserForm, UserId, ValidationError};
use crate::services::{Store, StoreError};
use std::io::{self, BufRead, Write};

pub const SAVED_MESSAGE: &str = "Your data is saved in the database. Thanks!";

/// How a registration ended
#[derive(Debug)]
pub enum RegistrationOutcome {
    Saved(UserId),
    /// Nothing was written
    Rejected(ValidationError),
}

/// Collect the registration answers
pub fn read_form<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<UserForm> {
    Ok(UserForm {
        first_name: prompt(input, output, "Please enter your name: ")?,
        last_name: prompt(input, output, "And now the surname: ")?,
        gender: prompt(input, output, "What's your gender? (options: Male, Female): ")?,
        email: prompt(input, output, "I still need your email address: ")?,
        birthdate: prompt(
            input,
            output,
            "Please enter your date of birth in the format YYYY-MM-DD. for example, 1990-01-01: ",
        )?,
        height: prompt(
            input,
            output,
            "What is your height in meters? (Use dot to separate decimal parts): ",
        )?,
    })
}

/// Ask for a new user's details and save them
pub async fn run<R: BufRead, W: Write>(
    store: &Store,
    input: &mut R,
    output: &mut W,
) -> Result<RegistrationOutcome, WorkflowError> {
    writeln!(output, "Hello! I'll record your data!")?;
    let form = read_form(input, output)?;

    match store.save_user(&form).await {
        Ok(id) => {
            writeln!(output, "{}", SAVED_MESSAGE)?;
            writeln!(output, "Your user ID: {}", id)?;
            Ok(RegistrationOutcome::Saved(id))
        }
        Err(StoreError::Validation(e)) => {
            tracing::warn!("Registration rejected: {}", e);
            writeln!(output, "Invalid input: {}", e)?;
            Ok(RegistrationOutcome::Rejected(e))
        }
        Err(e) => Err(e.into()),
    }
}
