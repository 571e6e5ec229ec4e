//! Integration tests for Employees domain
//!
//! Run the sea-orm repository against a migrated in-memory SQLite database,
//! including the foreign key to `departments`.

use domain_departments::{CreateDepartment, DbDepartmentRepository, DepartmentRepository};
use domain_employees::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn new_employee(builder: &TestDataBuilder, suffix: &str, department_id: i32) -> CreateEmployee {
    let (first_name, last_name) = builder.person(suffix);
    CreateEmployee {
        first_name,
        last_name,
        department_id,
    }
}

#[tokio::test]
async fn test_create_and_get_employee() {
    let db = TestDatabase::new().await;
    let repo = DbEmployeeRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");
    let department_id = db.seed_department(&builder.department_name("main")).await;

    let input = new_employee(&builder, "lead", department_id);
    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.first_name, input.first_name);
    assert_eq!(created.last_name, input.last_name);
    assert_id_eq(created.department_id, department_id, "department_id");

    let retrieved = assert_some(
        repo.get_by_id(created.id).await.unwrap(),
        "employee should exist",
    );
    assert_eq!(retrieved, created);
}

#[tokio::test]
async fn test_unknown_department_is_rejected_by_store() {
    let db = TestDatabase::new().await;
    let repo = DbEmployeeRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("fk_violation");

    let result = repo.create(new_employee(&builder, "orphan", 424242)).await;

    assert!(matches!(result, Err(EmployeeError::Database(_))));
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let db = TestDatabase::new().await;
    let repo = DbEmployeeRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update");
    let first = db.seed_department("First").await;
    let second = db.seed_department("Second").await;

    let created = repo
        .create(new_employee(&builder, "a", first))
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateEmployee {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                department_id: second,
            },
        )
        .await
        .unwrap();

    assert_id_eq(updated.id, created.id, "id is stable");
    assert_eq!(updated.first_name, "Grace");
    assert_eq!(updated.last_name, "Hopper");
    assert_eq!(updated.department_id, second);
}

#[tokio::test]
async fn test_update_missing_employee_creates_nothing() {
    let db = TestDatabase::new().await;
    let repo = DbEmployeeRepository::new(db.connection());

    let result = repo
        .update(
            5,
            UpdateEmployee {
                first_name: "No".to_string(),
                last_name: "Body".to_string(),
                department_id: 1,
            },
        )
        .await;

    assert!(matches!(result, Err(EmployeeError::NotFound(5))));
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_by_department_and_join() {
    let db = TestDatabase::new().await;
    let repo = DbEmployeeRepository::new(db.connection());
    let departments = DbDepartmentRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("join");

    let engineering = departments
        .create(CreateDepartment {
            name: "Engineering".to_string(),
        })
        .await
        .unwrap();
    let research = db.seed_department("Research").await;

    let a = repo
        .create(new_employee(&builder, "a", engineering.id))
        .await
        .unwrap();
    repo.create(new_employee(&builder, "b", research))
        .await
        .unwrap();
    let c = repo
        .create(new_employee(&builder, "c", engineering.id))
        .await
        .unwrap();

    let ids: Vec<i32> = repo
        .list_by_department(engineering.id)
        .await
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![a.id, c.id]);

    let (employee, department) = assert_some(
        repo.find_with_department(a.id).await.unwrap(),
        "employee should exist",
    );
    assert_eq!(employee, a);
    assert_eq!(department, Some(engineering));

    assert!(repo.find_with_department(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_employee() {
    let db = TestDatabase::new().await;
    let repo = DbEmployeeRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete");
    let department_id = db.seed_department("Ops").await;

    let created = repo
        .create(new_employee(&builder, "x", department_id))
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn test_deleting_department_removes_its_employees() {
    let db = TestDatabase::new().await;
    let repo = DbEmployeeRepository::new(db.connection());
    let departments = DbDepartmentRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("cascade");
    let legal = db.seed_department("Legal").await;
    let sales = db.seed_department("Sales").await;

    let gone = repo
        .create(new_employee(&builder, "x", legal))
        .await
        .unwrap();
    let kept = repo
        .create(new_employee(&builder, "y", sales))
        .await
        .unwrap();

    assert!(departments.delete(legal).await.unwrap());
    assert!(departments.get_by_id(legal).await.unwrap().is_none());
    assert!(repo.get_by_id(gone.id).await.unwrap().is_none());
    assert!(repo.list_by_department(legal).await.unwrap().is_empty());
    assert_eq!(repo.list().await.unwrap(), vec![kept]);
}
