pub mod chat;
pub mod init;
pub mod login;
pub mod register;

use docquery_client::{ApiClient, ReqwestTransport};
use docquery_config::AppConfig;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Build the API client from the loaded configuration.
pub fn api_client(config: &AppConfig) -> Result<ApiClient, Box<dyn std::error::Error>> {
    let transport = ReqwestTransport::from_config(config)?;
    Ok(ApiClient::new(Arc::new(transport)))
}

pub fn stdin_lines() -> Lines<BufReader<Stdin>> {
    BufReader::new(tokio::io::stdin()).lines()
}

/// Print a prompt and read one trimmed line.
pub async fn prompt(
    lines: &mut Lines<BufReader<Stdin>>,
    label: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    print!("{label}");
    use std::io::Write;
    std::io::stdout().flush()?;

    let line = lines.next_line().await?.unwrap_or_default();
    Ok(line.trim().to_string())
}
