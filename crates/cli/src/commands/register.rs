//! `docquery register` — create an account.

use docquery_config::AppConfig;
use docquery_core::RegisterOutcome;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let api = super::api_client(&config)?;
    let mut lines = super::stdin_lines();

    let username = super::prompt(&mut lines, "Username: ").await?;
    let email = super::prompt(&mut lines, "Email: ").await?;
    let password = super::prompt(&mut lines, "Password: ").await?;

    match api.register(&username, &email, &password).await {
        RegisterOutcome::Registered => {
            println!("Account created. Run `docquery login` to sign in.");
        }
        RegisterOutcome::Rejected(detail) => {
            println!(
                "{}",
                detail.unwrap_or_else(|| "Registration failed. Try again.".into())
            );
        }
        RegisterOutcome::Transport(_) => {
            println!("Server error. Is the backend running?");
        }
    }

    Ok(())
}
