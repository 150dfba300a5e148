//! One method per backend endpoint, each mapping its response statuses to
//! the tagged outcome enums from `docquery-core`.
//!
//! The mapping here is deterministic and complete — callers match the
//! outcome exhaustively and never inspect a raw status. Transport failures
//! surface as the `Transport` variant of each outcome, kept apart from
//! HTTP-level failures.

use docquery_core::{
    ApiRequest, AssetId, ChatOutcome, DeleteOutcome, FilePayload, HttpTransport, ListOutcome,
    LoginOutcome, RegisterOutcome, Source, UploadOutcome,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Typed façade over the backend's REST contract.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// `GET /assets/` — the full asset listing.
    pub async fn list_assets(&self, token: &str) -> ListOutcome {
        let request = ApiRequest::get("/assets/").with_bearer(token);

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => return ListOutcome::Transport(e.0),
        };

        match response.status {
            status if response.is_success() => match serde_json::from_value(response.body) {
                Ok(assets) => ListOutcome::Listed(assets),
                Err(e) => {
                    warn!(status, error = %e, "Asset listing body did not parse");
                    ListOutcome::Failed { status }
                }
            },
            401 => ListOutcome::AuthExpired,
            status => ListOutcome::Failed { status },
        }
    }

    /// `POST /assets/upload/` — multipart upload of a single file.
    pub async fn upload_asset(&self, token: &str, file: FilePayload) -> UploadOutcome {
        debug!(filename = %file.filename, size = file.bytes.len(), "Uploading asset");
        let request = ApiRequest::upload("/assets/upload/", file).with_bearer(token);

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => return UploadOutcome::Transport(e.0),
        };

        match response.status {
            _ if response.is_success() => UploadOutcome::Uploaded,
            401 => UploadOutcome::AuthExpired,
            413 => UploadOutcome::TooLarge,
            415 => UploadOutcome::Unsupported,
            400 => UploadOutcome::BadRequest(response.detail()),
            500 => UploadOutcome::ServerFault,
            status => UploadOutcome::Failed {
                status,
                detail: response.detail(),
            },
        }
    }

    /// `DELETE /assets/{id}/`.
    pub async fn delete_asset(&self, token: &str, id: AssetId) -> DeleteOutcome {
        let request = ApiRequest::delete(format!("/assets/{id}/")).with_bearer(token);

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => return DeleteOutcome::Transport(e.0),
        };

        match response.status {
            _ if response.is_success() => DeleteOutcome::Deleted,
            401 => DeleteOutcome::AuthExpired,
            404 => DeleteOutcome::AlreadyGone,
            status => DeleteOutcome::Failed { status },
        }
    }

    /// `POST /api/chat/` — ask a question scoped to the given assets.
    ///
    /// `asset_ids: None` omits the field entirely, which the backend reads
    /// as "search across all documents". An empty list is NOT the same
    /// thing and is never sent; scoping decisions happen in the caller.
    pub async fn ask(
        &self,
        token: &str,
        question: &str,
        asset_ids: Option<Vec<AssetId>>,
    ) -> ChatOutcome {
        let mut body = serde_json::json!({ "question": question });
        if let Some(ids) = asset_ids {
            body["asset_ids"] = serde_json::json!(ids);
        }

        let request = ApiRequest::post_json("/api/chat/", body).with_bearer(token);

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => return ChatOutcome::Transport(e.0),
        };

        match response.status {
            _ if response.is_success() => match response.body.get("answer").and_then(Value::as_str)
            {
                Some(answer) => ChatOutcome::Answered {
                    answer: answer.to_owned(),
                    sources: parse_sources(response.body.get("sources")),
                },
                None => ChatOutcome::Malformed,
            },
            401 => ChatOutcome::AuthExpired,
            400 => ChatOutcome::BadRequest(response.detail()),
            404 => ChatOutcome::SelectionGone,
            500 => ChatOutcome::ServerFault,
            status => ChatOutcome::Failed { status },
        }
    }

    /// `POST /auth/login/`.
    ///
    /// A body without an `access` token means invalid credentials, whatever
    /// the HTTP status was.
    pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        let body = serde_json::json!({ "username": username, "password": password });
        let request = ApiRequest::post_json("/auth/login/", body);

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => return LoginOutcome::Transport(e.0),
        };

        match response.body.get("access").and_then(Value::as_str) {
            Some(token) => LoginOutcome::LoggedIn {
                token: token.to_owned(),
            },
            None => LoginOutcome::InvalidCredentials,
        }
    }

    /// `POST /auth/register/`.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> RegisterOutcome {
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let request = ApiRequest::post_json("/auth/register/", body);

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => return RegisterOutcome::Transport(e.0),
        };

        if response.is_success() {
            RegisterOutcome::Registered
        } else {
            RegisterOutcome::Rejected(response.detail())
        }
    }
}

/// Lenient source parsing: absent or malformed citations degrade to none.
fn parse_sources(value: Option<&Value>) -> Vec<Source> {
    value
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}
