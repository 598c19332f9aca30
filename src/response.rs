use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Param is a convenience type for query parameters sent alongside requests.
pub type Param = std::collections::HashMap<String, Value>;

/// Response of the `v1/authenticate` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedData {
    /// Whether the public key was accepted
    pub authenticated: bool,
    /// Account username
    pub username: String,
    /// Details of the API key used
    #[serde(rename = "apiKey")]
    pub api_key: ApiKeyInfo,
}

/// Details of an API key as reported by the authenticate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyInfo {
    /// Key title
    pub title: String,
    /// Projects the key grants access to
    pub projects: String,
}

/// Response of a document creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
    /// Document ID
    pub id: String,
    /// Document name
    pub name: String,
    /// Project-relative path
    pub path: String,
    /// Owning project
    pub project: String,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Metadata of a stored document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Document ID
    pub id: String,
    /// Owning project
    pub project: String,
    /// Project-relative path
    pub path: String,
    /// Last update timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Response of a content update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedDocument {
    /// Whether the stored content actually changed
    pub changed: bool,
}

/// Response of a document deletion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedDocument {
    /// Whether the document was deleted
    pub deleted: bool,
}

/// Response of a folder creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFolder {
    /// Folder ID
    pub id: String,
    /// Folder name
    pub name: String,
    /// Project-relative path
    pub path: String,
    /// Owning project
    pub project: String,
}
