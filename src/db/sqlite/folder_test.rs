//! Tests for SqliteFolderRepository.

use crate::db::{Database, DbError, FolderRepository, NoteInput, NoteRepository, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().expect("Migration should succeed");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn folder_create_and_get() {
    let db = setup_db().await;
    let folders = db.folders();

    let created = folders.create("Work").await.expect("Create should succeed");
    assert_eq!(created.name, "Work");

    let retrieved = folders.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn folder_get_nonexistent_returns_not_found() {
    let db = setup_db().await;

    let result = db.folders().get(999).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn folder_list_orders_by_id() {
    let db = setup_db().await;
    let folders = db.folders();

    assert!(folders.list().await.unwrap().is_empty());

    let a = folders.create("Personal").await.unwrap();
    let b = folders.create("Archive").await.unwrap();

    let listed = folders.list().await.expect("List should succeed");
    assert_eq!(listed, vec![a, b]);
}

#[tokio::test(flavor = "multi_thread")]
async fn folder_duplicate_name_is_constraint_error() {
    let db = setup_db().await;
    let folders = db.folders();

    folders.create("Work").await.unwrap();
    let result = folders.create("Work").await;

    match result {
        Err(DbError::Constraint { message }) => {
            assert_eq!(message, "Folder named 'Work' already exists");
        }
        other => panic!("expected Constraint, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn folder_update_renames() {
    let db = setup_db().await;
    let folders = db.folders();

    let folder = folders.create("Wrok").await.unwrap();
    let updated = folders
        .update(folder.id, "Work")
        .await
        .expect("Update should succeed");

    assert_eq!(updated.name, "Work");
    assert_eq!(folders.get(folder.id).await.unwrap().name, "Work");
}

#[tokio::test(flavor = "multi_thread")]
async fn folder_update_nonexistent_returns_not_found() {
    let db = setup_db().await;

    let result = db.folders().update(42, "Nope").await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn folder_delete() {
    let db = setup_db().await;
    let folders = db.folders();

    let folder = folders.create("Temp").await.unwrap();
    folders.delete(folder.id).await.expect("Delete should succeed");

    assert!(matches!(
        folders.get(folder.id).await,
        Err(DbError::NotFound { .. })
    ));
    assert!(matches!(
        folders.delete(folder.id).await,
        Err(DbError::NotFound { .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn folder_delete_detaches_notes() {
    let db = setup_db().await;

    let folder = db.folders().create("Work").await.unwrap();
    let note = db
        .notes()
        .create(&NoteInput {
            title: "Filed".to_string(),
            content: String::new(),
            folder_id: Some(folder.id),
            tag_ids: vec![],
        })
        .await
        .unwrap();
    assert!(note.folder.is_some());

    db.folders().delete(folder.id).await.unwrap();

    let note = db.notes().get(note.id).await.expect("Note should survive");
    assert_eq!(note.folder, None);
}
