//! `docquery chat` — the interactive workspace.
//!
//! Slash commands manage the knowledge base; anything else is sent as a
//! question scoped to the current selection:
//!
//! - `/files`         — refresh and list your files
//! - `/upload <path>` — upload a document or image
//! - `/select <id>`   — toggle a file in or out of the question scope
//! - `/delete <id>`   — delete a file (asks for confirmation)
//! - `/logout`        — end the session
//! - `/quit`          — leave without ending the session

use async_trait::async_trait;
use docquery_config::{AppConfig, FileCredentialStore};
use docquery_core::{AssetId, CredentialStore, FilePayload, Role};
use docquery_session::{Command, ConfirmDelete, Severity, Workspace};
use std::path::Path;
use std::sync::Arc;

/// A confirmation that was already answered at the prompt.
struct Answered(bool);

#[async_trait]
impl ConfirmDelete for Answered {
    async fn confirm(&self, _filename: &str) -> bool {
        self.0
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let api = super::api_client(&config)?;
    let store = Arc::new(FileCredentialStore::at_default_path());

    if store.load().is_none() {
        println!("You are not logged in. Run `docquery login` first.");
        return Ok(());
    }

    let mut workspace = Workspace::new(api, store);

    println!("docquery — ask questions about your documents. /help lists commands.");
    let command = workspace.refresh_assets().await;
    render_assets(&workspace);
    render_notification(&workspace);
    if redirected(command) {
        return Ok(());
    }

    let mut lines = super::stdin_lines();
    loop {
        let line = super::prompt(&mut lines, "> ").await?;
        if line.is_empty() {
            continue;
        }

        let command = match line.split_once(' ').unwrap_or((line.as_str(), "")) {
            ("/quit", _) | ("/exit", _) => break,
            ("/help", _) => {
                print_help();
                None
            }
            ("/files", _) => {
                let command = workspace.refresh_assets().await;
                render_assets(&workspace);
                command
            }
            ("/select", arg) => {
                if let Some(id) = parse_id(arg) {
                    let selected = workspace.toggle_selection(id);
                    println!(
                        "{} file {id} ({} selected, empty selection means all files)",
                        if selected { "Selected" } else { "Unselected" },
                        workspace.selection().len()
                    );
                }
                None
            }
            ("/upload", arg) => workspace.upload(read_payload(arg).await).await,
            ("/delete", arg) => match parse_id(arg) {
                Some(id) => {
                    let filename = workspace
                        .assets()
                        .iter()
                        .find(|asset| asset.id == id)
                        .map(|asset| asset.filename.clone())
                        .unwrap_or_else(|| format!("file {id}"));
                    let answer = super::prompt(
                        &mut lines,
                        &format!("Delete \"{filename}\"? [y/N] "),
                    )
                    .await?;
                    let confirmed = matches!(answer.as_str(), "y" | "Y" | "yes");
                    workspace.delete_asset(id, &Answered(confirmed)).await
                }
                None => None,
            },
            ("/logout", _) => Some(workspace.logout()),
            (slash, _) if slash.starts_with('/') => {
                println!("Unknown command {slash}. /help lists commands.");
                None
            }
            _ => {
                let command = workspace.ask(&line).await;
                render_answer(&workspace);
                command
            }
        };

        render_notification(&workspace);
        if redirected(command) {
            break;
        }
    }

    Ok(())
}

fn redirected(command: Option<Command>) -> bool {
    match command {
        Some(Command::RedirectToLogin) => {
            println!("Run `docquery login` to start a new session.");
            true
        }
        None => false,
    }
}

fn parse_id(arg: &str) -> Option<AssetId> {
    match arg.trim().parse() {
        Ok(raw) => Some(AssetId(raw)),
        Err(_) => {
            println!("Expected a numeric file id.");
            None
        }
    }
}

/// Read a file into an upload payload, guessing the MIME type from the
/// extension. Unreadable paths surface here; everything else is left to
/// the validator.
async fn read_payload(arg: &str) -> Option<FilePayload> {
    let arg = arg.trim();
    if arg.is_empty() {
        return None;
    }

    let path = Path::new(arg);
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("Could not read {arg}: {e}");
            return None;
        }
    };

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| arg.to_string());
    let mime_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string();

    Some(FilePayload {
        filename,
        mime_type,
        bytes,
    })
}

fn render_assets(workspace: &Workspace) {
    if workspace.assets().is_empty() {
        println!("No files yet. /upload a document to get started.");
        return;
    }

    println!("{} file(s):", workspace.assets().len());
    for asset in workspace.assets() {
        let marker = if workspace.selection().contains(asset.id) {
            "*"
        } else {
            " "
        };
        println!(
            " {marker} [{}] {} ({})",
            asset.id,
            asset.filename,
            asset.kind.label()
        );
    }
}

fn render_answer(workspace: &Workspace) {
    let Some(message) = workspace.messages().last() else {
        return;
    };
    if message.role != Role::Assistant {
        return;
    }

    println!("{}", message.text);
    if !message.sources.is_empty() {
        let names: Vec<&str> = message
            .sources
            .iter()
            .map(|source| source.filename.as_str())
            .collect();
        println!("Sources: {}", names.join(", "));
    }
}

fn render_notification(workspace: &Workspace) {
    if let Some(notification) = workspace.notification() {
        let prefix = match notification.severity {
            Severity::Info => "i",
            Severity::Success => "ok",
            Severity::Warning => "warn",
            Severity::Error => "error",
        };
        println!("[{prefix}] {}", notification.text);
        // Printed once; the terminal has no transient surface to expire.
        workspace.dismiss_notification();
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /files          refresh and list your files");
    println!("  /upload <path>  upload a document or image");
    println!("  /select <id>    toggle a file in or out of the question scope");
    println!("  /delete <id>    delete a file");
    println!("  /logout         end the session");
    println!("  /quit           leave without ending the session");
    println!("Anything else is sent as a question about the selected files.");
}
