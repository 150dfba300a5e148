//! Typed HTTP client for the docquery backend.
//!
//! Two layers:
//! - [`ReqwestTransport`] implements the `HttpTransport` seam over reqwest
//!   (base URL joining, bearer header, JSON and multipart bodies).
//! - [`ApiClient`] owns one method per backend endpoint and performs the
//!   deterministic status → outcome mapping. Callers never see raw status
//!   codes, only the tagged outcome enums from `docquery-core`.
//!
//! [`ScriptedTransport`] is a recording fake for exercising the mapping and
//! the orchestration layer without a server.

pub mod api;
pub mod scripted;
pub mod transport;

pub use api::ApiClient;
pub use scripted::ScriptedTransport;
pub use transport::ReqwestTransport;
