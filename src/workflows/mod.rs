//! Interactive flows behind the two binaries.
//!
//! Both flows read answers line by line from any `BufRead` and write prompts
//! and results to any `Write`, so they run the same against a terminal or an
//! in-memory buffer.

pub mod find_athlete;
pub mod register_user;

use crate::core::MatchError;
use crate::models::ValidationError;
use crate::services::StoreError;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub use find_athlete::QueryOutcome;
pub use register_user::RegistrationOutcome;

/// Failure that ends the current flow
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Print `question` and read one trimmed answer line
///
/// End of input before an answer is an `UnexpectedEof` error.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before an answer was given",
        ));
    }

    Ok(line.trim().to_string())
}
