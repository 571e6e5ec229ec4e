//! Integration tests for Departments domain
//!
//! Run the sea-orm repository against a migrated in-memory SQLite database.

use domain_departments::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

#[tokio::test]
async fn test_create_and_get_department() {
    let db = TestDatabase::new().await;
    let repo = DbDepartmentRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let created = repo
        .create(CreateDepartment {
            name: builder.department_name("main"),
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, builder.department_name("main"));

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "department should exist");
    assert_id_eq(retrieved.id, created.id, "retrieved department id");
    assert_eq!(retrieved, created);
}

#[tokio::test]
async fn test_list_orders_by_id() {
    let db = TestDatabase::new().await;
    let repo = DbDepartmentRepository::new(db.connection());

    for name in ["Zeta", "Alpha", "Mid"] {
        repo.create(CreateDepartment {
            name: name.to_string(),
        })
        .await
        .unwrap();
    }

    let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|d| d.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_update_overwrites_name_only() {
    let db = TestDatabase::new().await;
    let repo = DbDepartmentRepository::new(db.connection());

    let created = repo
        .create(CreateDepartment {
            name: "Engineering".to_string(),
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateDepartment {
                name: "Eng".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Eng");

    let stored = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Eng");
}

#[tokio::test]
async fn test_update_missing_department_creates_nothing() {
    let db = TestDatabase::new().await;
    let repo = DbDepartmentRepository::new(db.connection());

    let result = repo
        .update(
            77,
            UpdateDepartment {
                name: "Ghost".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(DepartmentError::NotFound(77))));
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_then_get_is_none() {
    let db = TestDatabase::new().await;
    let repo = DbDepartmentRepository::new(db.connection());

    let created = repo
        .create(CreateDepartment {
            name: "Temp".to_string(),
        })
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}
