//! HR vertical slice: employee records.

pub mod error;
pub mod model;
pub mod repo;
pub mod service;

pub use error::{HrError, HrResult};
pub use model::{Employee, EmployeeFields, EmployeeId, EmployeePayload};
pub use repo::{EmployeeRepository, SeaOrmEmployeeRepository};
pub use service::{EmployeeService, HrService};
