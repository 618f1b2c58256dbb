use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::patch::{overwrite, Patch};
use crate::validation::{employee_text, Validate};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored employee; also the response shape.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub role: Role,
    pub address: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeCreate {
    pub name: String,
    pub designation: String,
    pub role: Role,
    pub address: String,
}

impl EmployeeCreate {
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            designation: self.designation,
            role: self.role,
            address: self.address,
        }
    }
}

impl Validate for EmployeeCreate {
    fn validate(self) -> Result<Self, ModelError> {
        Ok(Self {
            name: employee_text("name", self.name)?,
            designation: employee_text("designation", self.designation)?,
            role: self.role,
            address: employee_text("address", self.address)?,
        })
    }
}

/// Partial update. Unlike create, present fields are stored as sent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Patch<Employee> for EmployeeUpdate {
    fn apply_to(self, target: &mut Employee) {
        overwrite(&mut target.name, self.name);
        overwrite(&mut target.designation, self.designation);
        overwrite(&mut target.role, self.role);
        overwrite(&mut target.address, self.address);
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.designation.is_none() && self.role.is_none() && self.address.is_none()
    }
}
