//! In-memory implementation of DataService for testing and development

use crate::core::entity::{Data, Entity, FieldAccess};
use crate::core::error::EntityError;
use crate::core::service::DataService;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory data service implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryDataService<T: Data> {
    data: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Data> InMemoryDataService<T> {
    /// Create a new in-memory data service
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: Data> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Data> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let mut data = self
            .data
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        data.insert(entity.id(), entity.clone());

        Ok(entity)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data.values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, entity: T) -> Result<T> {
        let mut data = self
            .data
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if !data.contains_key(id) {
            return Err(anyhow::Error::new(EntityError::NotFound {
                entity_type: T::resource_name_singular().to_string(),
                id: *id,
            }));
        }

        data.insert(*id, entity.clone());

        Ok(entity)
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        data.remove(id);

        Ok(())
    }

    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<T>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data
            .values()
            .filter(|entity| {
                entity
                    .field_value(field)
                    .is_some_and(|v| v.as_text() == value)
            })
            .cloned()
            .collect())
    }
}
