use std::sync::Arc;

use async_trait::async_trait;
use models::employee::{Employee, EmployeeCreate, EmployeeUpdate};
use models::patch::Patch;
use models::validation::Validate;
use tracing::{info, instrument};

use super::{EmployeeStore, ENTITY};
use crate::errors::ServiceError;
use crate::storage::memory_map_store::MemoryMapStore;

#[derive(Clone, Default)]
pub struct InMemoryEmployeeStore {
    store: MemoryMapStore<String, Employee>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list(&self) -> Vec<Employee> {
        self.store.values().await
    }

    async fn get(&self, id: &str) -> Result<Employee, ServiceError> {
        self.store
            .get(&id.to_string())
            .await
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip_all)]
    async fn create(&self, input: EmployeeCreate) -> Result<Employee, ServiceError> {
        let input = input.validate()?;
        let employee = input.into_employee(models::new_id());
        self.store.insert(employee.id.clone(), employee.clone()).await;
        info!(employee_id = %employee.id, role = %employee.role, "employee created");
        Ok(employee)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &str, input: EmployeeUpdate) -> Result<Employee, ServiceError> {
        let changed = !input.is_empty();
        let updated = self
            .store
            .replace_with(&id.to_string(), |current| input.merged(current))
            .await
            .ok_or_else(|| ServiceError::not_found(ENTITY))?;
        info!(employee_id = %updated.id, changed, "employee updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.store.remove(&id.to_string()).await {
            return Err(ServiceError::not_found(ENTITY));
        }
        info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::employee::Role;

    fn input(name: &str) -> EmployeeCreate {
        EmployeeCreate {
            name: name.into(),
            designation: "Engineer".into(),
            role: Role::User,
            address: "12 Main St".into(),
        }
    }

    #[tokio::test]
    async fn create_stores_trimmed_record() -> anyhow::Result<()> {
        let store = InMemoryEmployeeStore::new();
        let created = store.create(input("  Alice ")).await?;
        assert_eq!(created.name, "Alice");
        assert_eq!(created.designation, "Engineer");
        assert_eq!(store.get(&created.id).await?, created);
        Ok(())
    }

    #[tokio::test]
    async fn name_bounds() -> anyhow::Result<()> {
        let store = InMemoryEmployeeStore::new();
        assert!(store.create(input("Al")).await.is_ok());
        assert!(matches!(store.create(input(" ")).await, Err(ServiceError::Validation(_))));
        assert!(matches!(store.create(input("   ")).await, Err(ServiceError::Validation(_))));
        let padded = store.create(input(" A ")).await?;
        assert_eq!(padded.name, "A");
        assert!(matches!(store.create(input("A")).await, Err(ServiceError::Validation(_))));
        assert!(matches!(store.create(input(&"x".repeat(101))).await, Err(ServiceError::Validation(_))));
        assert_eq!(store.list().await.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn blank_designation_or_address_rejected() {
        let store = InMemoryEmployeeStore::new();
        let mut bad = input("Alice");
        bad.designation = "   ".into();
        assert!(matches!(store.create(bad).await, Err(ServiceError::Validation(_))));
        let mut bad = input("Alice");
        bad.address = "\t".into();
        assert!(matches!(store.create(bad).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn partial_update_merges() -> anyhow::Result<()> {
        let store = InMemoryEmployeeStore::new();
        let created = store.create(input("Alice")).await?;
        let upd = EmployeeUpdate { role: Some(Role::Admin), address: Some(String::new()), ..Default::default() };
        let updated = store.update(&created.id, upd).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.role, Role::Admin);
        assert_eq!(updated.address, "");

        let same = store.update(&created.id, EmployeeUpdate::default()).await?;
        assert_eq!(same, updated);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = InMemoryEmployeeStore::new();
        assert!(matches!(store.get("nope").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.update("nope", EmployeeUpdate::default()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.delete("nope").await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_is_effective() -> anyhow::Result<()> {
        let store = InMemoryEmployeeStore::new();
        let created = store.create(input("Alice")).await?;
        store.delete(&created.id).await?;
        assert!(store.list().await.is_empty());
        let err = store.get(&created.id).await.unwrap_err();
        assert_eq!(err.to_string(), "Employee not found");
        Ok(())
    }
}
