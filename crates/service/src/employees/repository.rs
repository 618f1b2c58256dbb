use async_trait::async_trait;
use models::employee::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::errors::ServiceError;

/// Storage abstraction for employees.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list(&self) -> Vec<Employee>;
    async fn get(&self, id: &str) -> Result<Employee, ServiceError>;
    async fn create(&self, input: EmployeeCreate) -> Result<Employee, ServiceError>;
    async fn update(&self, id: &str, input: EmployeeUpdate) -> Result<Employee, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
