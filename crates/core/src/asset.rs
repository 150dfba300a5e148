//! Asset domain types — the documents and images tracked by the registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an asset, assigned by the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(pub i64);

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of an uploaded asset, derived from its MIME type at upload time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Pdf,
    Text,
    Document,
    Image,
}

/// Human-readable list of accepted upload types, used in validation messages.
pub const ALLOWED_TYPE_LABELS: &str = "PDF, TXT, DOCX, PNG, JPEG";

impl AssetKind {
    /// Map a MIME type to its asset kind. `None` means the type is not accepted.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "text/plain" => Some(Self::Text),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Document)
            }
            "image/png" | "image/jpeg" => Some(Self::Image),
            _ => None,
        }
    }

    /// Label used when naming the kind in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Text => "text file",
            Self::Document => "Word document",
            Self::Image => "image",
        }
    }
}

/// A user-uploaded document or image tracked by the registry.
///
/// Created by a successful upload, destroyed by a successful delete,
/// immutable otherwise. The registry owns these; everything else refers to
/// them by [`AssetId`] only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,

    pub filename: String,

    #[serde(rename = "type")]
    pub kind: AssetKind,

    /// When the backend accepted the upload.
    #[serde(rename = "created_at")]
    pub uploaded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_map_covers_accepted_types() {
        assert_eq!(AssetKind::from_mime("application/pdf"), Some(AssetKind::Pdf));
        assert_eq!(AssetKind::from_mime("text/plain"), Some(AssetKind::Text));
        assert_eq!(
            AssetKind::from_mime(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            Some(AssetKind::Document)
        );
        assert_eq!(AssetKind::from_mime("image/png"), Some(AssetKind::Image));
        assert_eq!(AssetKind::from_mime("image/jpeg"), Some(AssetKind::Image));
    }

    #[test]
    fn mime_map_rejects_everything_else() {
        assert_eq!(AssetKind::from_mime("application/zip"), None);
        assert_eq!(AssetKind::from_mime("image/gif"), None);
        assert_eq!(AssetKind::from_mime(""), None);
    }

    #[test]
    fn asset_deserializes_from_backend_shape() {
        // The backend also sends `size`; unknown fields are ignored.
        let asset: Asset = serde_json::from_str(
            r#"{
                "id": 7,
                "filename": "policy.pdf",
                "type": "pdf",
                "size": 52841,
                "created_at": "2025-11-03T10:15:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(asset.id, AssetId(7));
        assert_eq!(asset.filename, "policy.pdf");
        assert_eq!(asset.kind, AssetKind::Pdf);
    }

    #[test]
    fn asset_id_is_transparent_in_json() {
        let json = serde_json::to_string(&AssetId(42)).unwrap();
        assert_eq!(json, "42");
    }
}
