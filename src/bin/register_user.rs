//! Interactive registration of a new user profile.

use athlete_match::config::Settings;
use athlete_match::workflows::{register_user, RegistrationOutcome};
use athlete_match::{logging, Store};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(&settings.logging);

    let store = match Store::connect(&settings.database).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open athlete store: {}", e);
            eprintln!("Could not open the database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let result = register_user::run(&store, &mut input, &mut output).await;
    store.close().await;

    match result {
        Ok(RegistrationOutcome::Saved(id)) => {
            info!("Registered user {}", id);
            ExitCode::SUCCESS
        }
        Ok(RegistrationOutcome::Rejected(_)) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Registration failed: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
