//! End-to-end bridge scenarios over a real temporary directory.

use serde_json::{json, Value};
use tempfile::tempdir;

use markdesk::bridge;
use markdesk::models::FileEntry;

fn path_str(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

#[tokio::test]
async fn create_and_list_a_workspace_tree() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("x");

    let created = bridge::dispatch("createDirectory", json!({"dirPath": path_str(&root)}))
        .await
        .unwrap();
    assert_eq!(created["success"], true);
    assert_eq!(created["path"], json!(path_str(&root)));

    let file = root.join("a.md");
    bridge::dispatch(
        "createFile",
        json!({"path": path_str(&file), "content": "hello"}),
    )
    .await
    .unwrap();

    let tree = bridge::dispatch("listTree", json!({"dirPath": path_str(&root)}))
        .await
        .unwrap();
    let entries: Vec<FileEntry> = serde_json::from_value(tree.clone()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "a.md");
    assert!(entries[0].is_file);
    assert!(!entries[0].is_directory);
    assert!(entries[0].children.is_none());
    // the wire object must not carry a children key for files
    assert!(tree[0].get("children").is_none());
}

#[tokio::test]
async fn flat_list_matches_the_directory_contents() {
    let temp_dir = tempdir().unwrap();
    let sub = temp_dir.path().join("sub");
    std::fs::create_dir(&sub).unwrap();
    std::fs::write(temp_dir.path().join("readme.md"), "x").unwrap();

    let listed = bridge::dispatch("list", json!({"dirPath": path_str(temp_dir.path())}))
        .await
        .unwrap();
    let entries: Vec<FileEntry> = serde_json::from_value(listed).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.children.is_none()));
    assert!(entries
        .iter()
        .any(|e| e.name == "sub" && e.is_directory && !e.is_file));
}

#[tokio::test]
async fn text_round_trips_verbatim() {
    let temp_dir = tempdir().unwrap();
    let path = path_str(&temp_dir.path().join("note.md"));
    let content = "# Title\n\nBody with unicode: héllø ✓\n";

    bridge::dispatch("writeText", json!({"path": path, "content": content}))
        .await
        .unwrap();
    let read_back = bridge::dispatch("readText", json!({"path": path}))
        .await
        .unwrap();
    assert_eq!(read_back, json!(content));
}

#[tokio::test]
async fn exists_follows_create_and_delete() {
    let temp_dir = tempdir().unwrap();
    let path = path_str(&temp_dir.path().join("a.md"));

    let before = bridge::dispatch("exists", json!({"path": path})).await.unwrap();
    assert_eq!(before, json!(false));

    bridge::dispatch("createFile", json!({"path": path})).await.unwrap();
    let after_create = bridge::dispatch("exists", json!({"path": path})).await.unwrap();
    assert_eq!(after_create, json!(true));

    bridge::dispatch("deleteFile", json!({"path": path})).await.unwrap();
    let after_delete = bridge::dispatch("exists", json!({"path": path})).await.unwrap();
    assert_eq!(after_delete, json!(false));
}

#[tokio::test]
async fn rename_moves_between_paths() {
    let temp_dir = tempdir().unwrap();
    let a = path_str(&temp_dir.path().join("a.md"));
    let b = path_str(&temp_dir.path().join("b.md"));

    bridge::dispatch("createFile", json!({"path": a, "content": "body"}))
        .await
        .unwrap();
    let renamed = bridge::dispatch("rename", json!({"oldPath": a, "newPath": b}))
        .await
        .unwrap();
    assert_eq!(renamed["newPath"], json!(b.clone()));

    let a_exists = bridge::dispatch("exists", json!({"path": a})).await.unwrap();
    let b_exists = bridge::dispatch("exists", json!({"path": b})).await.unwrap();
    assert_eq!(a_exists, json!(false));
    assert_eq!(b_exists, json!(true));
}

#[tokio::test]
async fn recursive_delete_has_force_semantics() {
    let temp_dir = tempdir().unwrap();
    let missing = path_str(&temp_dir.path().join("never-created"));

    let deleted = bridge::dispatch("deleteDirectoryRecursive", json!({"dirPath": missing}))
        .await
        .unwrap();
    assert_eq!(deleted["success"], true);

    let populated = temp_dir.path().join("full");
    std::fs::create_dir(&populated).unwrap();
    std::fs::write(populated.join("nested.md"), "x").unwrap();

    bridge::dispatch(
        "deleteDirectoryRecursive",
        json!({"dirPath": path_str(&populated)}),
    )
    .await
    .unwrap();
    let still_there = bridge::dispatch(
        "directoryExists",
        json!({"dirPath": path_str(&populated)}),
    )
    .await
    .unwrap();
    assert_eq!(still_there, json!(false));
}

#[tokio::test]
async fn only_allow_listed_operations_dispatch() {
    for op in bridge::OPERATIONS {
        assert!(bridge::is_exported(op));
    }

    let err = bridge::dispatch("readBinary", Value::Null).await.unwrap_err();
    assert!(err.to_string().contains("readBinary"));

    // case matters: the wire name is the contract
    let err = bridge::dispatch("listtree", Value::Null).await.unwrap_err();
    assert!(err.to_string().contains("unknown operation"));
}
