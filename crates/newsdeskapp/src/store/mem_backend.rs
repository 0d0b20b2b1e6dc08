use super::backend::StorageBackend;
use crate::error::{NewsError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability; callers that share a store across
/// threads wrap the whole store in a mutex, so the backend itself never needs
/// to be `Sync`.
pub struct MemBackend {
    documents: RefCell<HashMap<Uuid, String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            documents: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant a raw (possibly malformed) document.
    pub fn insert_raw(&self, id: Uuid, document: &str) {
        self.documents
            .borrow_mut()
            .insert(id, document.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn read_document(&self, id: &Uuid) -> Result<Option<String>> {
        Ok(self.documents.borrow().get(id).cloned())
    }

    fn write_document(&self, id: &Uuid, document: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(NewsError::Store("Simulated write error".to_string()));
        }
        self.documents
            .borrow_mut()
            .insert(*id, document.to_string());
        Ok(())
    }

    fn delete_document(&self, id: &Uuid) -> Result<bool> {
        if *self.simulate_write_error.borrow() {
            return Err(NewsError::Store("Simulated write error".to_string()));
        }
        Ok(self.documents.borrow_mut().remove(id).is_some())
    }

    fn list_document_ids(&self) -> Result<Vec<Uuid>> {
        Ok(self.documents.borrow().keys().copied().collect())
    }
}
