use super::{prompt, WorkflowError};
use crate::core::closest_athletes;
use crate::models::{parse_user_id, MatchReport, UserId};
use crate::services::{Store, StoreError};
use std::io::{BufRead, Write};

pub const NOT_FOUND_MESSAGE: &str = "No such user was found.";

/// How a query ended
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Matched(MatchReport),
    UserNotFound(UserId),
    /// Input or data problem, already reported to the user
    Rejected(String),
}

/// Closest athletes to a stored user, one per dimension
///
/// Loads the athlete table once; height matching only sees athletes with a
/// recorded height.
pub async fn find_closest(store: &Store, user_id: UserId) -> Result<QueryOutcome, WorkflowError> {
    let user = match store.find_user(user_id).await {
        Ok(user) => user,
        Err(StoreError::UserNotFound(id)) => return Ok(QueryOutcome::UserNotFound(id)),
        Err(e) => return Err(e.into()),
    };

    let athletes = store.all_athletes(false).await?;
    let report = closest_athletes(&user, &athletes)?;

    tracing::debug!(
        "User {}: nearest by birthdate {} ({} days), by height {} ({:.3} m)",
        user.id,
        report.by_birthdate.athlete_id,
        report.by_birthdate.days_apart,
        report.by_height.athlete_id,
        report.by_height.difference
    );

    Ok(QueryOutcome::Matched(report))
}

/// Ask for a user ID and print the closest athletes
pub async fn run<R: BufRead, W: Write>(
    store: &Store,
    input: &mut R,
    output: &mut W,
) -> Result<QueryOutcome, WorkflowError> {
    writeln!(output, "Let's look for athletes similar to one of the users.")?;
    let answer = prompt(input, output, "Enter user ID: ")?;

    let outcome = match parse_user_id(&answer) {
        Ok(user_id) => match find_closest(store, user_id).await {
            Err(WorkflowError::Match(e)) => QueryOutcome::Rejected(e.to_string()),
            other => other?,
        },
        Err(e) => QueryOutcome::Rejected(e.to_string()),
    };

    match &outcome {
        QueryOutcome::Matched(report) => writeln!(output, "{}", report)?,
        QueryOutcome::UserNotFound(id) => {
            tracing::info!("Query for unknown user {}", id);
            writeln!(output, "{}", NOT_FOUND_MESSAGE)?
        }
        QueryOutcome::Rejected(reason) => {
            tracing::warn!("Query rejected: {}", reason);
            writeln!(output, "{}", reason)?
        }
    }

    Ok(outcome)
}
