use std::sync::Arc;

use anyhow::Result;
use entity::employees;
use products_hr::{
    EmployeeFields, EmployeeRepository, EmployeeService, HrError, HrService,
    SeaOrmEmployeeRepository,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection,
    Statement,
};

async fn memory_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    SeaOrmEmployeeRepository::ensure_table(&db).await?;
    Ok(db)
}

fn fields(name: &str, department: Option<&str>, salary: Option<f64>) -> EmployeeFields {
    EmployeeFields {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        department: department.map(str::to_string),
        salary,
    }
}

#[tokio::test]
async fn ensure_table_is_idempotent_and_keeps_rows() -> Result<()> {
    let db = memory_db().await?;
    let repo = SeaOrmEmployeeRepository::new(db.clone());
    repo.insert(fields("Alice", Some("Eng"), Some(90_000.0)))
        .await?;

    SeaOrmEmployeeRepository::ensure_table(&db).await?;

    assert_eq!(repo.find_all().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn insert_assigns_increasing_ids() -> Result<()> {
    let repo = SeaOrmEmployeeRepository::new(memory_db().await?);
    let first = repo.insert(fields("Alice", Some("Eng"), Some(90_000.0))).await?;
    let second = repo.insert(fields("Bob", None, None)).await?;

    assert!(second.id > first.id);
    assert_eq!(second.department, None);
    assert_eq!(second.salary, None);
    assert_eq!(repo.find_by_id(first.id).await?, Some(first));
    Ok(())
}

#[tokio::test]
async fn save_rewrites_every_field() -> Result<()> {
    let repo = SeaOrmEmployeeRepository::new(memory_db().await?);
    let mut employee = repo.insert(fields("Alice", Some("Eng"), Some(90_000.0))).await?;
    employee.replace_fields(fields("Alicia", None, Some(1.5)));

    let saved = repo.save(employee.clone()).await?;
    assert_eq!(saved, employee);
    assert_eq!(repo.find_by_id(employee.id).await?, Some(employee));
    Ok(())
}

#[tokio::test]
async fn save_of_deleted_row_fails() -> Result<()> {
    let repo = SeaOrmEmployeeRepository::new(memory_db().await?);
    let employee = repo.insert(fields("Alice", Some("Eng"), None)).await?;
    repo.delete(&employee).await?;

    assert!(repo.save(employee).await.is_err());
    Ok(())
}

#[tokio::test]
async fn department_lookup_matches_exactly() -> Result<()> {
    let repo = SeaOrmEmployeeRepository::new(memory_db().await?);
    repo.insert(fields("Alice", Some("Eng"), None)).await?;
    repo.insert(fields("Bob", Some("Sales"), None)).await?;
    repo.insert(fields("Carol", Some("Eng"), None)).await?;
    repo.insert(fields("Dave", None, None)).await?;

    let eng: Vec<String> = repo
        .find_by_department("Eng")
        .await?
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(eng, vec!["Alice", "Carol"]);
    assert!(repo.find_by_department("Engineering").await?.is_empty());
    assert!(repo.find_by_department("").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn rows_written_outside_the_service_are_visible() -> Result<()> {
    let db = memory_db().await?;
    employees::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set("Legacy".into()),
        email: ActiveValue::Set("legacy@example.com".into()),
        department: ActiveValue::Set(Some("Ops".into())),
        salary: ActiveValue::Set(Some(42.0)),
    }
    .insert(&db)
    .await?;

    let service = HrService::new(Arc::new(SeaOrmEmployeeRepository::new(db)));
    let ops = service.get_by_department("Ops").await?;
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].name, "Legacy");
    assert_eq!(service.get_by_id(ops[0].id).await?, ops[0]);
    Ok(())
}

#[tokio::test]
async fn service_delete_removes_the_row() -> Result<()> {
    let db = memory_db().await?;
    let service = HrService::new(Arc::new(SeaOrmEmployeeRepository::new(db.clone())));
    let created = service.create(fields("Alice", Some("Eng"), None)).await?;

    service.delete(created.id).await?;

    assert!(matches!(
        service.get_by_id(created.id).await,
        Err(HrError::NotFound(id)) if id == created.id
    ));
    let remaining = db
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS n FROM employees",
        ))
        .await?
        .expect("count row");
    assert_eq!(remaining.try_get::<i64>("", "n")?, 0);
    Ok(())
}
