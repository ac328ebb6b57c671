//! # Storage Layer
//!
//! Each collection lives in its own JSON document: an array of records in
//! insertion order. The layer is split in two:
//!
//! - [`backend::StorageBackend`]: raw document I/O.
//!   - [`fs_backend::FsBackend`]: production backend, one file per collection
//!     at the paths given by [`fs_backend::StorePaths`].
//!   - [`mem_backend::MemBackend`]: in-memory backend for tests.
//! - [`RecordStore`]: typed load/save of a collection over any backend.
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! ├── products.json   # [ {"id": "p1", ...}, ... ]
//! └── sections.json   # [ {"id": "s1", ...}, ... ]
//! ```
//!
//! Documents are pretty-printed with two-space indentation and non-ASCII
//! text is written as is. A missing document is created as `[]` on first
//! load. Nothing is cached: every load reads the file, every save rewrites
//! all of it. There is no locking, concurrent writers are last-write-wins.

use crate::error::{Result, ShowcaseError};
use crate::model::{Collection, Record};
use backend::{StorageBackend, EMPTY_DOCUMENT};
use std::path::PathBuf;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

/// Typed access to the collection documents of a backend.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn document_path(&self, collection: Collection) -> PathBuf {
        self.backend.document_path(collection)
    }

    /// Create the collection document as `[]` if it is missing.
    pub fn ensure(&self, collection: Collection) -> Result<()> {
        self.backend.ensure(collection, EMPTY_DOCUMENT)
    }

    /// Read the whole collection of `R`, creating an empty document first
    /// if needed.
    pub fn load<R: Record>(&self) -> Result<Vec<R>> {
        let collection = R::COLLECTION;
        self.ensure(collection)?;
        let content = self.backend.read(collection)?;
        let records: Vec<R> =
            serde_json::from_str(&content).map_err(|source| ShowcaseError::DocumentCorrupt {
                path: self.document_path(collection),
                source,
            })?;
        tracing::debug!(collection = %collection, count = records.len(), "loaded collection");
        Ok(records)
    }

    /// Overwrite the whole collection document with `records`.
    pub fn save<R: Record>(&self, records: &[R]) -> Result<()> {
        let content = serde_json::to_string_pretty(records).map_err(ShowcaseError::Serialization)?;
        self.backend.write(R::COLLECTION, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemBackend;
    use super::*;
    use crate::model::{Product, ProductDraft, Section};

    fn product(id: &str, title: &str) -> Product {
        Product::new(id.to_string(), ProductDraft::new(title, "desc", 10))
    }

    #[test]
    fn load_creates_empty_document() {
        let store = RecordStore::new(MemBackend::new());
        let products: Vec<Product> = store.load().unwrap();
        assert!(products.is_empty());
        assert_eq!(
            store.backend().document(Collection::Products).as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn save_then_load_keeps_order_and_fields() {
        let store = RecordStore::new(MemBackend::new());
        let records = vec![product("p2", "second"), product("p1", "first")];
        store.save(&records).unwrap();

        let loaded: Vec<Product> = store.load().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn save_writes_pretty_json_with_literal_unicode() {
        let store = RecordStore::new(MemBackend::new());
        store.save(&[product("p1", "年终总结模板")]).unwrap();

        let text = store.backend().document(Collection::Products).unwrap();
        assert!(text.contains("年终总结模板"));
        assert!(text.contains("\n  {\n    \"id\": \"p1\""));
    }

    #[test]
    fn object_document_is_corrupt() {
        let backend = MemBackend::new().with_document(Collection::Sections, r#"{"id": "s1"}"#);
        let store = RecordStore::new(backend);
        let err = store.load::<Section>().unwrap_err();
        assert!(matches!(err, ShowcaseError::DocumentCorrupt { .. }));
    }

    #[test]
    fn non_mapping_elements_are_corrupt() {
        let backend = MemBackend::new().with_document(Collection::Products, "[1, 2]");
        let store = RecordStore::new(backend);
        assert!(matches!(
            store.load::<Product>(),
            Err(ShowcaseError::DocumentCorrupt { .. })
        ));
    }

    #[test]
    fn collections_are_independent() {
        let store = RecordStore::new(MemBackend::new());
        store.save(&[product("p1", "only product")]).unwrap();
        let sections: Vec<Section> = store.load().unwrap();
        assert!(sections.is_empty());
    }
}
