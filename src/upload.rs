use crate::document::CreateDocument;
use crate::error::{JsbError, Result};
use crate::jsonbank::JsonBank;
use crate::response::NewDocument;
use std::fs;
use std::path::PathBuf;

/// A document to upload from the local filesystem
#[derive(Debug, Clone)]
pub struct UploadDocument {
    /// Path of the source file on disk
    pub file: PathBuf,
    /// Target project
    pub project: String,
    /// Document name, defaults to the file name when not set
    pub name: Option<String>,
    /// Target folder inside the project
    pub folder: Option<String>,
}

/// Upload a file from disk as a new document.
///
/// The file must exist and contain valid JSON text; the document name
/// defaults to the file's name when none is given.
pub fn upload_document(jsb: &JsonBank, document: UploadDocument) -> Result<NewDocument> {
    let file = document.file.as_path();

    if !file.exists() {
        return Err(JsbError::Other(format!(
            "File does not exist: {}",
            file.display()
        )));
    }

    let name = match document.name {
        Some(name) => name,
        None => file
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .ok_or_else(|| {
                JsbError::Other(format!(
                    "Cannot derive a document name from: {}",
                    file.display()
                ))
            })?,
    };

    let content = fs::read_to_string(file)?;

    jsb.create_document(CreateDocument {
        name,
        project: document.project,
        content,
        folder: document.folder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_missing_file() {
        let jsb = JsonBank::new();

        let result = upload_document(
            &jsb,
            UploadDocument {
                file: PathBuf::from("/no/such/file.json"),
                project: "store".to_string(),
                name: None,
                folder: None,
            },
        );

        match result {
            Err(JsbError::Other(message)) => {
                assert!(message.contains("File does not exist"));
            }
            other => panic!("expected JsbError::Other, got {:?}", other.err()),
        }
    }
}
