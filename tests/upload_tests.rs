use jsonbank::{upload_document, JsbError, JsonBank, Keys, UploadDocument};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_upload_rejects_missing_file() {
    let jsb = JsonBank::new();

    let result = upload_document(
        &jsb,
        UploadDocument {
            file: PathBuf::from("/tmp/does-not-exist-jsonbank.json"),
            project: "sdk-test".to_string(),
            name: None,
            folder: None,
        },
    );

    assert!(
        matches!(result, Err(JsbError::Other(_))),
        "expected an error for a missing file"
    );
}

#[test]
#[ignore] // Run with: cargo test --test upload_tests -- --ignored
fn test_upload_from_disk() {
    let keys = Keys::from_env().expect("JSB_PUBLIC_KEY must be set for integration tests");
    let jsb = JsonBank::new().with_keys(keys);

    // Write a scratch document to disk
    let mut file = tempfile::Builder::new()
        .prefix("rs-upload-")
        .suffix(".json")
        .tempfile()
        .expect("failed to create temp file");
    file.write_all(br#"{"uploaded": true}"#)
        .expect("failed to write temp file");

    let doc = upload_document(
        &jsb,
        UploadDocument {
            file: file.path().to_path_buf(),
            project: "sdk-test".to_string(),
            name: Some("rs-upload.json".to_string()),
            folder: None,
        },
    )
    .expect("failed to upload document");

    assert_eq!(doc.name, "rs-upload.json");
    assert_eq!(doc.project, "sdk-test");

    // Clean up on the server side
    let deleted = jsb
        .delete_document(&doc.path)
        .expect("failed to delete uploaded document");
    assert!(deleted.deleted);

    println!("Upload test passed: {}", doc.path);
}

#[test]
#[ignore]
fn test_upload_defaults_name_to_file_name() {
    let keys = Keys::from_env().expect("JSB_PUBLIC_KEY must be set for integration tests");
    let jsb = JsonBank::new().with_keys(keys);

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("rs-default-name.json");
    std::fs::write(&path, br#"{"named": false}"#).expect("failed to write temp file");

    let doc = upload_document(
        &jsb,
        UploadDocument {
            file: path,
            project: "sdk-test".to_string(),
            name: None,
            folder: None,
        },
    )
    .expect("failed to upload document");

    assert_eq!(doc.name, "rs-default-name.json");

    let deleted = jsb
        .delete_document(&doc.path)
        .expect("failed to delete uploaded document");
    assert!(deleted.deleted);

    println!("Default name upload test passed: {}", doc.path);
}
