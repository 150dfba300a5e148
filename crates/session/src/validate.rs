//! Client-side upload pre-validation.
//!
//! Pure rules, evaluated in a fixed order with the first failure winning:
//! missing file, then type, then size ceiling, then empty file. The backend
//! re-validates authoritatively; this pass exists so obvious rejects never
//! cost a network round trip. Callers re-run it before every upload attempt.

use docquery_core::{AssetKind, ALLOWED_TYPE_LABELS};

/// Client-side upload size ceiling.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// What the validator looks at. Filename and content stay out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub mime_type: String,
    pub size_bytes: u64,
}

/// Verdict of a validation pass. Produced synchronously, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn fail(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Validate a file selection before upload.
pub fn validate(file: Option<&FileMetadata>) -> ValidationResult {
    let Some(file) = file else {
        return ValidationResult::fail("No file selected");
    };

    if AssetKind::from_mime(&file.mime_type).is_none() {
        return ValidationResult::fail(format!(
            "Unsupported file type. Allowed types: {ALLOWED_TYPE_LABELS}"
        ));
    }

    if file.size_bytes > MAX_UPLOAD_BYTES {
        return ValidationResult::fail(format!(
            "File is {:.2}MB. Maximum size is 10MB",
            file.size_bytes as f64 / (1024.0 * 1024.0)
        ));
    }

    if file.size_bytes == 0 {
        return ValidationResult::fail("File is empty");
    }

    ValidationResult::ok()
}
