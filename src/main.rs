use athlete_match::config::Settings;
use athlete_match::workflows::{find_athlete, QueryOutcome};
use athlete_match::{logging, Store};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(&settings.logging);
    info!("Configuration loaded successfully");

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

    let result = find_athlete::run(&store, &mut input, &mut output).await;
    store.close().await;

    match result {
        Ok(QueryOutcome::Matched(report)) => {
            info!(
                "Matched athletes {} and {}",
                report.by_birthdate.athlete_id, report.by_height.athlete_id
            );
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Query failed: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
