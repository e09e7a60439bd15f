//! `/api/employees` handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::get,
};
use platform_api::ApiResult;
use products_hr::{Employee, EmployeeId, EmployeePayload, EmployeeService, HrError};

pub const DELETED_MESSAGE: &str = "Employee deleted successfully!";

pub type SharedEmployees = Arc<dyn EmployeeService>;

pub fn routes(employees: SharedEmployees) -> Router {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route(
            "/api/employees/department/{department}",
            get(list_by_department),
        )
        .with_state(employees)
}

async fn create_employee(
    State(employees): State<SharedEmployees>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let Json(payload) = payload?;
    let fields = payload.validate().map_err(HrError::from)?;
    Ok(Json(employees.create(fields).await?))
}

async fn list_employees(
    State(employees): State<SharedEmployees>,
) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(employees.get_all().await?))
}

async fn get_employee(
    State(employees): State<SharedEmployees>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> ApiResult<Json<Employee>> {
    let Path(id) = id?;
    Ok(Json(employees.get_by_id(id).await?))
}

async fn update_employee(
    State(employees): State<SharedEmployees>,
    id: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let fields = payload.validate().map_err(HrError::from)?;
    Ok(Json(employees.update(id, fields).await?))
}

async fn delete_employee(
    State(employees): State<SharedEmployees>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> ApiResult<&'static str> {
    let Path(id) = id?;
    employees.delete(id).await?;
    Ok(DELETED_MESSAGE)
}

async fn list_by_department(
    State(employees): State<SharedEmployees>,
    Path(department): Path<String>,
) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(employees.get_by_department(&department).await?))
}
