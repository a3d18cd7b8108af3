use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::UserRecord;

use super::{StoreError, UserStore};

/// Process-local document store keyed by record id.
pub struct MemoryUserStore {
    items: DashMap<Uuid, UserRecord>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<UserRecord> {
        self.items.get(&id).map(|item| item.value().clone())
    }

    pub fn list(&self) -> Vec<UserRecord> {
        self.items.iter().map(|item| item.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, record: &UserRecord) -> Result<UserRecord, StoreError> {
        match self.items.entry(record.id) {
            Entry::Occupied(_) => Err(StoreError::Conflict(record.id)),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record.clone())
            }
        }
    }
}
