use once_cell::sync::Lazy;
use platform_api::FieldErrors;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub type EmployeeId = i64;

const BLANK: &str = "must not be blank";
const MALFORMED_EMAIL: &str = "must be a well-formed email address";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .expect("valid email regex")
});

/// A stored employee record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl Employee {
    /// Overwrites every mutable field. The id is kept.
    pub fn replace_fields(&mut self, fields: EmployeeFields) {
        let EmployeeFields {
            name,
            email,
            department,
            salary,
        } = fields;
        self.name = name;
        self.email = email;
        self.department = department;
        self.salary = salary;
    }
}

impl From<entity::employees::Model> for Employee {
    fn from(model: entity::employees::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            department: model.department,
            salary: model.salary,
        }
    }
}

/// Inbound request body, not yet validated. Any `id` in the body is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EmployeePayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

/// The mutable fields of an employee after validation.
#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl EmployeePayload {
    /// Checks every field and reports all violations at once.
    pub fn validate(self) -> Result<EmployeeFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.filter(|n| !n.trim().is_empty());
        if name.is_none() {
            errors.add("name", BLANK);
        }

        let email = match self.email {
            Some(email) if email.trim().is_empty() => {
                errors.add("email", BLANK);
                None
            }
            Some(email) if !is_well_formed_email(&email) => {
                errors.add("email", MALFORMED_EMAIL);
                None
            }
            Some(email) => Some(email),
            None => {
                errors.add("email", BLANK);
                None
            }
        };

        match (name, email) {
            (Some(name), Some(email)) if errors.is_empty() => Ok(EmployeeFields {
                name,
                email,
                department: self.department,
                salary: self.salary,
            }),
            _ => Err(errors),
        }
    }
}

pub fn is_well_formed_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
