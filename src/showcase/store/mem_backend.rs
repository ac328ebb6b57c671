use super::backend::StorageBackend;
use crate::error::{Result, ShowcaseError};
use crate::model::Collection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability so the `StorageBackend` trait
/// can keep `&self` on every method.
#[derive(Default)]
pub struct MemBackend {
    documents: RefCell<HashMap<Collection, String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document with raw text, bypassing the record layer.
    pub fn with_document(self, collection: Collection, content: &str) -> Self {
        self.documents
            .borrow_mut()
            .insert(collection, content.to_string());
        self
    }

    /// Raw document text, if the document exists.
    pub fn document(&self, collection: Collection) -> Option<String> {
        self.documents.borrow().get(&collection).cloned()
    }

    /// Number of `write` calls that went through.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn ensure(&self, collection: Collection, default_content: &str) -> Result<()> {
        self.documents
            .borrow_mut()
            .entry(collection)
            .or_insert_with(|| default_content.to_string());
        Ok(())
    }

    fn read(&self, collection: Collection) -> Result<String> {
        self.document(collection).ok_or_else(|| {
            ShowcaseError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no {} document", collection),
            ))
        })
    }

    fn write(&self, collection: Collection, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShowcaseError::Io(io::Error::other("simulated write error")));
        }
        self.documents
            .borrow_mut()
            .insert(collection, content.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn document_path(&self, collection: Collection) -> PathBuf {
        PathBuf::from("/mem").join(collection.file_name())
    }
}
