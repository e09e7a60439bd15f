//! Employee use-cases.
//!
//! Every lookup by id goes through [`HrService::get_by_id`], so update and
//! delete fail with [`HrError::NotFound`] exactly like a direct read does.
//! `update` is a read-modify-write with no version check: two concurrent
//! updates of the same id are resolved by the storage engine, last writer wins.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::{
    error::{HrError, HrResult},
    model::{Employee, EmployeeFields, EmployeeId},
    repo::EmployeeRepository,
};

#[async_trait]
pub trait EmployeeService: Send + Sync {
    async fn create(&self, fields: EmployeeFields) -> HrResult<Employee>;

    async fn get_all(&self) -> HrResult<Vec<Employee>>;

    async fn get_by_id(&self, id: EmployeeId) -> HrResult<Employee>;

    async fn update(&self, id: EmployeeId, fields: EmployeeFields) -> HrResult<Employee>;

    async fn delete(&self, id: EmployeeId) -> HrResult<()>;

    async fn get_by_department(&self, department: &str) -> HrResult<Vec<Employee>>;
}

#[derive(Clone)]
pub struct HrService {
    repo: Arc<dyn EmployeeRepository>,
}

impl HrService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EmployeeService for HrService {
    #[instrument(name = "hr.employees.create", skip_all)]
    async fn create(&self, fields: EmployeeFields) -> HrResult<Employee> {
        let employee = self.repo.insert(fields).await?;
        info!(id = employee.id, "employee created");
        Ok(employee)
    }

    #[instrument(name = "hr.employees.get_all", skip_all)]
    async fn get_all(&self) -> HrResult<Vec<Employee>> {
        Ok(self.repo.find_all().await?)
    }

    #[instrument(name = "hr.employees.get_by_id", skip(self))]
    async fn get_by_id(&self, id: EmployeeId) -> HrResult<Employee> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(HrError::NotFound(id))
    }

    #[instrument(name = "hr.employees.update", skip(self, fields))]
    async fn update(&self, id: EmployeeId, fields: EmployeeFields) -> HrResult<Employee> {
        let mut existing = self.get_by_id(id).await?;
        existing.replace_fields(fields);
        let saved = self.repo.save(existing).await?;
        info!(id, "employee updated");
        Ok(saved)
    }

    #[instrument(name = "hr.employees.delete", skip(self))]
    async fn delete(&self, id: EmployeeId) -> HrResult<()> {
        let existing = self.get_by_id(id).await?;
        self.repo.delete(&existing).await?;
        info!(id, "employee deleted");
        Ok(())
    }

    #[instrument(name = "hr.employees.get_by_department", skip(self))]
    async fn get_by_department(&self, department: &str) -> HrResult<Vec<Employee>> {
        Ok(self.repo.find_by_department(department).await?)
    }
}
