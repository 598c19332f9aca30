use crate::client::{create_http_client, Config};
use crate::document::{CreateDocument, CreateFolder};
use crate::error::{JsbError, Result};
use crate::keys::{Keys, PRIVATE_KEY_HEADER, PUBLIC_KEY_HEADER};
use crate::query::{encode_query, QueryModifier};
use crate::response::{
    AuthenticatedData, DeletedDocument, DocumentMeta, NewDocument, NewFolder, UpdatedDocument,
};
use reqwest::blocking::Client;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Access level required by an endpoint
enum Access {
    /// No credentials
    Public,
    /// `jsb-pub-key` header
    PublicKey,
    /// `jsb-pub-key` and `jsb-prv-key` headers
    PrivateKey,
}

/// Client for the JsonBank API.
///
/// Every method performs a single HTTP round trip. Read endpoints for
/// public content need no credentials; reading own content requires the
/// public key, and write operations additionally require the private key.
pub struct JsonBank {
    /// HTTP client
    client: Client,
    /// Configuration
    pub config: Config,
    /// Optional API keys
    keys: Option<Keys>,
    /// Authentication data cached by [`JsonBank::authenticate`]
    auth: Option<AuthenticatedData>,
}

impl JsonBank {
    /// Create a new client with default configuration and no keys
    pub fn new() -> Self {
        JsonBank {
            client: create_http_client(),
            config: Config::default(),
            keys: None,
            auth: None,
        }
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: Config) -> Self {
        JsonBank {
            client: create_http_client(),
            config,
            keys: None,
            auth: None,
        }
    }

    /// Set the API keys
    pub fn with_keys(mut self, keys: Keys) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Check if a previous [`JsonBank::authenticate`] call succeeded
    pub fn is_authenticated(&self) -> bool {
        self.auth.as_ref().map_or(false, |a| a.authenticated)
    }

    /// Get the username reported by the authenticate endpoint
    pub fn username(&self) -> Option<&str> {
        self.auth.as_ref().map(|a| a.username.as_str())
    }

    /// Verify the configured public key against the API and cache the
    /// account data on success
    pub fn authenticate(&mut self) -> Result<AuthenticatedData> {
        let data: AuthenticatedData = self.request(
            Method::POST,
            "v1/authenticate",
            &[],
            Some(Value::Object(Default::default())),
            Access::PublicKey,
        )?;

        if data.authenticated {
            self.auth = Some(data.clone());
        }

        Ok(data)
    }

    /// Get public content by document ID or path
    pub fn get_content<T: DeserializeOwned>(&self, id_or_path: &str) -> Result<T> {
        self.request(
            Method::GET,
            &format!("f/{}", id_or_path),
            &[],
            None,
            Access::Public,
        )
    }

    /// Get metadata of a public document by ID or path
    pub fn get_document_meta(&self, id_or_path: &str) -> Result<DocumentMeta> {
        self.request(
            Method::GET,
            &format!("meta/f/{}", id_or_path),
            &[],
            None,
            Access::Public,
        )
    }

    /// Get a JSON file hosted on GitHub, e.g. `user/repo/path/to/file.json`
    pub fn get_github_content<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(
            Method::GET,
            &format!("gh/{}", path),
            &[],
            None,
            Access::Public,
        )
    }

    /// Get own content by document ID or path
    pub fn get_own_content<T: DeserializeOwned>(&self, id_or_path: &str) -> Result<T> {
        self.request(
            Method::GET,
            &format!("v1/file/{}", id_or_path),
            &[],
            None,
            Access::PublicKey,
        )
    }

    /// Get own content with a query modifier pipeline applied server-side
    pub fn get_own_content_with_query<T: DeserializeOwned>(
        &self,
        id_or_path: &str,
        modifiers: &[QueryModifier],
    ) -> Result<T> {
        let (query, extra) = encode_query(modifiers);

        let mut params: Vec<(String, String)> = Vec::with_capacity(extra.len() + 1);
        if !query.is_empty() {
            params.push(("query".to_string(), query));
        }
        for (key, value) in extra {
            params.push((key, query_value(&value)));
        }

        self.request(
            Method::GET,
            &format!("v1/file/{}", id_or_path),
            &params,
            None,
            Access::PublicKey,
        )
    }

    /// Get metadata of an own document by ID or path
    pub fn get_own_document_meta(&self, id_or_path: &str) -> Result<DocumentMeta> {
        self.request(
            Method::GET,
            &format!("v1/meta/file/{}", id_or_path),
            &[],
            None,
            Access::PublicKey,
        )
    }

    /// Create a new document
    pub fn create_document(&self, document: CreateDocument) -> Result<NewDocument> {
        self.request(
            Method::POST,
            "v1/document",
            &[],
            Some(serde_json::to_value(document)?),
            Access::PrivateKey,
        )
    }

    /// Replace the content of an own document
    pub fn update_own_content(
        &self,
        id_or_path: &str,
        content: impl Into<String>,
    ) -> Result<UpdatedDocument> {
        self.request(
            Method::POST,
            &format!("v1/file/{}", id_or_path),
            &[],
            Some(serde_json::json!({ "content": content.into() })),
            Access::PrivateKey,
        )
    }

    /// Delete an own document by ID or path
    pub fn delete_document(&self, id_or_path: &str) -> Result<DeletedDocument> {
        self.request(
            Method::DELETE,
            &format!("v1/file/{}", id_or_path),
            &[],
            None,
            Access::PrivateKey,
        )
    }

    /// Create a new folder inside a project
    pub fn create_folder(&self, folder: CreateFolder) -> Result<NewFolder> {
        self.request(
            Method::POST,
            "v1/folder",
            &[],
            Some(serde_json::to_value(folder)?),
            Access::PrivateKey,
        )
    }

    /// Execute a request and decode the JSON response
    fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
        body: Option<Value>,
        access: Access,
    ) -> Result<T> {
        let mut url = Url::parse(&format!("{}/{}", self.config.base_url(), path))?;
        for (key, value) in params {
            url.query_pairs_mut().append_pair(key, value);
        }

        let mut request = self.client.request(method.clone(), url.as_str());

        match access {
            Access::Public => {}
            Access::PublicKey => {
                let keys = self.keys()?;
                request = request.header(PUBLIC_KEY_HEADER, keys.public_key());
            }
            Access::PrivateKey => {
                let keys = self.keys()?;
                request = request
                    .header(PUBLIC_KEY_HEADER, keys.public_key())
                    .header(PRIVATE_KEY_HEADER, keys.private_key()?);
            }
        }

        if let Some(ref body) = body {
            request = request.json(body);
        }

        let start = std::time::Instant::now();
        let response = request.send()?;
        let status = response.status();
        let bytes = response.bytes()?;

        if self.config.debug {
            eprintln!(
                "[jsonbank] {} {} => {:?} (status: {})",
                method,
                path,
                start.elapsed(),
                status
            );
        }

        if !status.is_success() {
            return Err(JsbError::from_body(status.as_u16(), &bytes));
        }

        serde_json::from_slice(&bytes).map_err(JsbError::from)
    }

    /// Get the configured keys, failing if none were set
    fn keys(&self) -> Result<&Keys> {
        self.keys.as_ref().ok_or(JsbError::NoKeys)
    }
}

impl Default for JsonBank {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a side-channel parameter value as a query string value.
/// Strings pass through as-is, everything else is sent as JSON text.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let jsb = JsonBank::new();
        assert_eq!(jsb.config.scheme, "https");
        assert_eq!(jsb.config.host, "api.jsonbank.io");
        assert!(!jsb.is_authenticated());
        assert!(jsb.username().is_none());
    }

    #[test]
    fn test_client_with_config() {
        let config = Config::new("http".to_string(), "localhost:3000".to_string());
        let jsb = JsonBank::with_config(config);
        assert_eq!(jsb.config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_missing_keys() {
        let jsb = JsonBank::new();
        assert!(matches!(jsb.keys(), Err(JsbError::NoKeys)));
    }

    #[test]
    fn test_query_value_rendering() {
        assert_eq!(query_value(&json!("name-iso3")), "name-iso3");
        assert_eq!(query_value(&json!(["name", "iso3"])), r#"["name","iso3"]"#);
        assert_eq!(query_value(&json!(5)), "5");
    }
}
