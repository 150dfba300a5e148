//! `docquery login` — obtain and persist a session token.

use docquery_config::{AppConfig, FileCredentialStore};
use docquery_core::{CredentialStore, LoginOutcome};

pub async fn run(username: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let api = super::api_client(&config)?;
    let mut lines = super::stdin_lines();

    let username = match username {
        Some(username) => username,
        None => super::prompt(&mut lines, "Username: ").await?,
    };
    let password = super::prompt(&mut lines, "Password: ").await?;

    match api.login(&username, &password).await {
        LoginOutcome::LoggedIn { token } => {
            FileCredentialStore::at_default_path().save(&token);
            println!("Logged in. Run `docquery chat` to start asking questions.");
        }
        LoginOutcome::InvalidCredentials => {
            println!("Invalid username or password");
        }
        LoginOutcome::Transport(_) => {
            println!("Connection error");
        }
    }

    Ok(())
}
