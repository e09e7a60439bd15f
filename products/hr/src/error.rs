use platform_api::{ApiError, FieldErrors};
use thiserror::Error;

use crate::model::EmployeeId;

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error)]
pub enum HrError {
    #[error("Employee not found with id: {0}")]
    NotFound(EmployeeId),
    #[error("Validation failed")]
    Validation(FieldErrors),
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

impl From<FieldErrors> for HrError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<HrError> for ApiError {
    fn from(err: HrError) -> Self {
        match err {
            missing @ HrError::NotFound(_) => ApiError::not_found(missing.to_string()),
            HrError::Validation(errors) => ApiError::Validation(errors),
            HrError::Repository(source) => ApiError::internal(source),
        }
    }
}
