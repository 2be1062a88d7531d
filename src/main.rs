//! CorteYa login - Entry Point
//!
//! Terminal sign-in for the CorteYa barbershop manager.

use log::{info, warn};
use tokio::io::BufReader;

use corteya_login::AppConfig;
use corteya_login::auth::CredentialValidator;
use corteya_login::error::handlers::{error_to_exit_code, handle_error};
use corteya_login::terminal::LoginPrompt;
use corteya_login::utils::logging::setup_logging;

#[tokio::main]
async fn main() {
    // Optional path to a config file; defaults to ./config.toml if present
    let config_path = std::env::args().nth(1);

    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(error_to_exit_code(&e));
        }
    };

    setup_logging(&config.log_level);

    info!(
        "Launching CorteYa login ({} known identities, min secret length {})",
        config.identities.len(),
        config.min_secret_length
    );

    let validator = CredentialValidator::from_config(&config);
    let prompt = LoginPrompt::new(&validator, &config.routes)
        .show_demo_accounts(config.show_demo_accounts);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    match prompt.run(stdin, &mut stdout).await {
        Ok(Some(_)) => {}
        Ok(None) => warn!("Input closed before signing in"),
        Err(e) => {
            handle_error(&e);
            std::process::exit(error_to_exit_code(&e));
        }
    }
}
