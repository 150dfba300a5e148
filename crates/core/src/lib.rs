//! # docquery core
//!
//! Domain types and trait seams for the docquery client. This crate has
//! **zero framework dependencies** — it defines the data model and the
//! injection points (HTTP transport, credential store) that the other
//! crates implement against.
//!
//! ## Design Philosophy
//!
//! The session layer is orchestration, not I/O. Everything that touches
//! the outside world is a trait here:
//! - [`HttpTransport`] — requests in, status + parsed body out, transport
//!   failures as a distinct variant rather than exceptions
//! - [`CredentialStore`] — the persisted bearer token, injected so tests
//!   never touch shared process state
//!
//! Endpoint responses are tagged outcome enums in [`outcome`], matched
//! exhaustively by callers.

pub mod asset;
pub mod credentials;
pub mod error;
pub mod message;
pub mod outcome;
pub mod transport;

// Re-export key types at crate root for ergonomics
pub use asset::{Asset, AssetId, AssetKind, ALLOWED_TYPE_LABELS};
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use error::{Error, Result};
pub use message::{Message, Role, Source};
pub use outcome::{
    ChatOutcome, DeleteOutcome, ListOutcome, LoginOutcome, RegisterOutcome, UploadOutcome,
};
pub use transport::{
    ApiRequest, ApiResponse, FilePayload, HttpTransport, Method, RequestBody, TransportError,
};
