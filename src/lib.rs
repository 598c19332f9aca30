//! # jsonbank - JsonBank API client for Rust
//!
//! A Rust client for [JsonBank](https://jsonbank.io), a hosted storage
//! service for JSON documents. This library covers reading public and
//! own content, creating, updating and deleting documents and folders,
//! and the query modifier language applied to read requests.
//!
//! ## Features
//!
//! - Public content access without credentials, including GitHub proxying
//! - Key-pair authentication (public key for reads, private key for writes)
//! - Typed responses for document and folder operations
//! - Composable query modifier pipelines encoded client-side
//! - Filesystem document upload
//!
//! ## Basic Usage
//!
//! ```no_run
//! use jsonbank::JsonBank;
//! use serde_json::Value;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let jsb = JsonBank::new();
//!
//!     // Fetch a public document by path
//!     let data: Value = jsb.get_content("jsonbank/sdk-test/index.json")?;
//!
//!     println!("{}", data);
//!     Ok(())
//! }
//! ```
//!
//! ## Authenticated Access
//!
//! ```no_run
//! use jsonbank::{JsonBank, Keys};
//! use jsonbank::query::modifiers;
//! use serde_json::Value;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut jsb = JsonBank::new().with_keys(Keys::from_env()?);
//!
//!     let auth = jsb.authenticate()?;
//!     println!("Account: {}", auth.username);
//!
//!     // Read own content with a modifier pipeline applied server-side
//!     let names: Value = jsb.get_own_content_with_query(
//!         "data/countries.json",
//!         &[modifiers::map_pick().args(vec!["name", "iso3"]), modifiers::first()],
//!     )?;
//!
//!     println!("{}", names);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod document;
pub mod error;
pub mod jsonbank;
pub mod keys;
pub mod query;
pub mod response;
pub mod upload;

// Re-export main types for convenience
pub use client::Config;
pub use document::{document_path, CreateDocument, CreateFolder};
pub use error::{JsbError, Result};
pub use jsonbank::JsonBank;
pub use keys::Keys;
pub use query::{encode_query, QueryArgs, QueryModifier};
pub use response::{
    AuthenticatedData, DeletedDocument, DocumentMeta, NewDocument, NewFolder, Param,
    UpdatedDocument,
};
pub use upload::{upload_document, UploadDocument};

// Re-export serde_json for convenience
pub use serde_json::json;
