//! Tagged per-endpoint outcomes.
//!
//! Every backend endpoint resolves to its own closed set of variants so
//! callers match exhaustively instead of inspecting raw status codes.
//! `Transport` means the request never got an HTTP response; it is kept
//! distinct from every HTTP-level failure so the two can be worded apart.

use crate::asset::Asset;
use crate::message::Source;

/// Outcome of `GET /assets/`.
#[derive(Debug, Clone)]
pub enum ListOutcome {
    /// The full listing. Replaces the local listing wholesale, never merged.
    Listed(Vec<Asset>),
    AuthExpired,
    Failed { status: u16 },
    Transport(String),
}

/// Outcome of `POST /assets/upload/`.
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// 2xx. The body is irrelevant beyond success.
    Uploaded,
    AuthExpired,
    /// 413 — the server's own size ceiling.
    TooLarge,
    /// 415 — the server refused the content type.
    Unsupported,
    /// 400, carrying the server detail when one was provided.
    BadRequest(Option<String>),
    /// 500.
    ServerFault,
    /// Any other non-2xx status.
    Failed {
        status: u16,
        detail: Option<String>,
    },
    Transport(String),
}

/// Outcome of `DELETE /assets/{id}/`.
#[derive(Debug, Clone)]
pub enum DeleteOutcome {
    Deleted,
    AuthExpired,
    /// 404 — the asset was already gone. Non-fatal.
    AlreadyGone,
    Failed { status: u16 },
    Transport(String),
}

/// Outcome of `POST /api/chat/`.
#[derive(Debug, Clone)]
pub enum ChatOutcome {
    Answered {
        answer: String,
        sources: Vec<Source>,
    },
    /// 2xx without an `answer` field.
    Malformed,
    AuthExpired,
    /// 400, carrying the server detail when one was provided.
    BadRequest(Option<String>),
    /// 404 — one or more selected assets no longer exist.
    SelectionGone,
    /// 500.
    ServerFault,
    /// Any other non-2xx status.
    Failed { status: u16 },
    Transport(String),
}

/// Outcome of `POST /auth/login/`.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// The body carried an `access` token.
    LoggedIn { token: String },
    /// Any response without an `access` token, regardless of HTTP status.
    InvalidCredentials,
    Transport(String),
}

/// Outcome of `POST /auth/register/`.
#[derive(Debug, Clone)]
pub enum RegisterOutcome {
    Registered,
    /// Non-2xx, carrying the server's `error` detail when present.
    Rejected(Option<String>),
    Transport(String),
}
