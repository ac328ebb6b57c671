//! # API Facade
//!
//! `ShowcaseApi` is the single entry point for every operation, whatever
//! the client: the web handlers and the CLI both go through it. It owns the
//! [`RecordStore`] and the [`ServiceOptions`] and dispatches to the
//! collection services in `commands/`.
//!
//! The facade does no business logic and no presentation. It is generic
//! over the storage backend:
//! - Production: `ShowcaseApi<FsBackend>`
//! - Testing: `ShowcaseApi<MemBackend>`

use crate::commands::{self, doctor::DoctorReport};
use crate::error::Result;
use crate::model::{Product, ProductDraft, Section, SectionDraft};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

/// Everything the public page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingContent {
    pub products: Vec<Product>,
    pub sections: Vec<Section>,
}

pub struct ShowcaseApi<B: StorageBackend> {
    store: RecordStore<B>,
    options: ServiceOptions,
}

impl<B: StorageBackend> ShowcaseApi<B> {
    pub fn new(backend: B, options: ServiceOptions) -> Self {
        Self {
            store: RecordStore::new(backend),
            options,
        }
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn landing(&self) -> Result<LandingContent> {
        Ok(LandingContent {
            products: commands::products::list(&self.store)?,
            sections: commands::sections::list(&self.store)?,
        })
    }

    // --- Products ---

    pub fn list_products(&self) -> Result<Vec<Product>> {
        commands::products::list(&self.store)
    }

    pub fn add_product(&self, draft: ProductDraft) -> Result<Vec<Product>> {
        commands::products::add(&self.store, &self.options, draft)
    }

    pub fn get_product(&self, id: &str) -> Result<Option<Product>> {
        commands::products::get(&self.store, id)
    }

    pub fn update_product(&self, id: &str, draft: ProductDraft) -> Result<bool> {
        commands::products::update(&self.store, &self.options, id, draft)
    }

    pub fn delete_product(&self, id: &str) -> Result<usize> {
        commands::products::delete(&self.store, &self.options, id)
    }

    // --- Sections ---

    pub fn list_sections(&self) -> Result<Vec<Section>> {
        commands::sections::list(&self.store)
    }

    pub fn add_section(&self, draft: SectionDraft) -> Result<Vec<Section>> {
        commands::sections::add(&self.store, &self.options, draft)
    }

    pub fn get_section(&self, id: &str) -> Result<Option<Section>> {
        commands::sections::get(&self.store, id)
    }

    pub fn update_section(&self, id: &str, draft: SectionDraft) -> Result<bool> {
        commands::sections::update(&self.store, &self.options, id, draft)
    }

    pub fn delete_section(&self, id: &str) -> Result<usize> {
        commands::sections::delete(&self.store, &self.options, id)
    }

    pub fn doctor(&self) -> Result<DoctorReport> {
        commands::doctor::run(&self.store)
    }
}

pub use crate::ids::IdStrategy;
pub use commands::{MissingPolicy, ServiceOptions};
