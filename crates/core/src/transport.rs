//! The HTTP seam between the session layer and the backend.
//!
//! All network access goes through the [`HttpTransport`] trait so the
//! orchestration components can be exercised against a scripted fake.
//! A transport hands back plain status + parsed body; mapping statuses to
//! typed outcomes is the API client's job. The only `Err` a transport
//! produces is [`TransportError`] — the request never got an HTTP response
//! at all — which every caller keeps distinct from HTTP-level failures.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// HTTP method subset used by the backend contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A file payload for multipart upload. Content is held fully in memory;
/// there is no streaming or chunking.
#[derive(Clone, PartialEq)]
pub struct FilePayload {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FilePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePayload")
            .field("filename", &self.filename)
            .field("mime_type", &self.mime_type)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}

/// Request body variants.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// Multipart form with a single `file` field.
    Multipart(FilePayload),
}

/// A request to the backend. `path` is relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Bearer token for authenticated endpoints.
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            bearer: None,
            body: RequestBody::Empty,
        }
    }

    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            bearer: None,
            body: RequestBody::Json(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            bearer: None,
            body: RequestBody::Empty,
        }
    }

    pub fn upload(path: impl Into<String>, file: FilePayload) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            bearer: None,
            body: RequestBody::Multipart(file),
        }
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// An HTTP response that made it back over the wire.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body, `Value::Null` when the response had none.
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The server-provided `error` detail, when the body carries one.
    pub fn detail(&self) -> Option<String> {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

/// The request never produced an HTTP response (DNS failure, connection
/// refused, dropped socket).
#[derive(Debug, Clone, Error)]
#[error("network error: {0}")]
pub struct TransportError(pub String);

/// The transport seam. Implemented over reqwest in `docquery-client` and by
/// scripted fakes in tests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_is_attached_by_builder() {
        let req = ApiRequest::get("/assets/").with_bearer("tok-123");
        assert_eq!(req.bearer.as_deref(), Some("tok-123"));
        assert_eq!(req.method, Method::Get);
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(ApiResponse::new(200, Value::Null).is_success());
        assert!(ApiResponse::new(299, Value::Null).is_success());
        assert!(!ApiResponse::new(301, Value::Null).is_success());
        assert!(!ApiResponse::new(500, Value::Null).is_success());
    }

    #[test]
    fn detail_reads_error_field() {
        let resp = ApiResponse::new(400, serde_json::json!({"error": "Invalid file type"}));
        assert_eq!(resp.detail().as_deref(), Some("Invalid file type"));

        let no_detail = ApiResponse::new(400, serde_json::json!({"message": "nope"}));
        assert_eq!(no_detail.detail(), None);

        let null_body = ApiResponse::new(400, Value::Null);
        assert_eq!(null_body.detail(), None);
    }

    #[test]
    fn file_payload_debug_hides_content() {
        let payload = FilePayload {
            filename: "a.pdf".into(),
            mime_type: "application/pdf".into(),
            bytes: vec![0u8; 128],
        };
        let rendered = format!("{payload:?}");
        assert!(rendered.contains("128 bytes"));
    }
}
