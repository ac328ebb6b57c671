//! # Collection Services
//!
//! Business logic for the two collections. Every operation is one
//! load → mutate → save cycle against the [`RecordStore`]; nothing is kept
//! in memory between calls.
//!
//! - [`products`]: CRUD over the product cards.
//! - [`sections`]: CRUD over the page sections, with bullet parsing.
//! - [`doctor`]: read-only health report over both documents.
//!
//! [`RecordStore`]: crate::store::RecordStore

use crate::error::{Result, ShowcaseError};
use crate::ids::IdStrategy;
use crate::model::Collection;

pub mod doctor;
pub mod helpers;
pub mod products;
pub mod sections;

/// What update and delete do when no record carries the requested id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Succeed silently and write the collection back unchanged.
    #[default]
    Ignore,
    /// Fail with `RecordNotFound` and leave the document untouched.
    Strict,
}

impl MissingPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            MissingPolicy::Strict
        } else {
            MissingPolicy::Ignore
        }
    }

    pub(crate) fn on_missing(&self, collection: Collection, id: &str) -> Result<()> {
        match self {
            MissingPolicy::Ignore => {
                tracing::warn!(%collection, id, "no record matched, nothing changed");
                Ok(())
            }
            MissingPolicy::Strict => Err(ShowcaseError::RecordNotFound {
                collection,
                id: id.to_string(),
            }),
        }
    }
}

/// Knobs shared by every collection service call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceOptions {
    pub id_strategy: IdStrategy,
    pub missing: MissingPolicy,
}

impl ServiceOptions {
    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    pub fn with_missing(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }
}
