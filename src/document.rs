use serde::Serialize;

/// Request body for document creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateDocument {
    /// Document name
    pub name: String,
    /// Target project
    pub project: String,
    /// Document content, must be valid JSON text
    pub content: String,
    /// Target folder inside the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

/// Request body for folder creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateFolder {
    /// Folder name
    pub name: String,
    /// Target project
    pub project: String,
}

/// Build the project-relative path of a document
pub fn document_path(project: &str, folder: Option<&str>, name: &str) -> String {
    match folder {
        Some(folder) if !folder.is_empty() => format!("{}/{}/{}", project, folder, name),
        _ => format!("{}/{}", project, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path() {
        assert_eq!(
            document_path("store", Some("users"), "admin.json"),
            "store/users/admin.json"
        );
        assert_eq!(document_path("store", None, "admin.json"), "store/admin.json");
        // an empty folder behaves the same as no folder
        assert_eq!(document_path("store", Some(""), "admin.json"), "store/admin.json");
    }

    #[test]
    fn test_create_document_serialization() {
        let body = CreateDocument {
            name: "admin.json".to_string(),
            project: "store".to_string(),
            content: r#"{"name": "admin"}"#.to_string(),
            folder: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["name"], "admin.json");
        // absent folder must not be sent at all
        assert!(json.get("folder").is_none());
    }
}
