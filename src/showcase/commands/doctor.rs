use crate::error::Result;
use crate::model::{Collection, Product, Record, Section};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use std::collections::HashMap;
use std::path::PathBuf;

/// Health of one collection document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    pub collection: Collection,
    pub path: PathBuf,
    pub records: usize,
    /// Ids carried by more than one record, in first-seen order.
    pub duplicate_ids: Vec<String>,
}

impl CollectionReport {
    pub fn is_healthy(&self) -> bool {
        self.duplicate_ids.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    pub collections: Vec<CollectionReport>,
}

impl DoctorReport {
    pub fn is_healthy(&self) -> bool {
        self.collections.iter().all(CollectionReport::is_healthy)
    }
}

/// Load both documents and look for ids shared by several records.
/// A corrupt document fails the whole run.
pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<DoctorReport> {
    Ok(DoctorReport {
        collections: vec![inspect::<Product, _>(store)?, inspect::<Section, _>(store)?],
    })
}

fn inspect<R: Record, B: StorageBackend>(store: &RecordStore<B>) -> Result<CollectionReport> {
    let records: Vec<R> = store.load()?;

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicate_ids = Vec::new();
    for record in &records {
        let count = seen.entry(record.id()).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicate_ids.push(record.id().to_string());
        }
    }

    Ok(CollectionReport {
        collection: R::COLLECTION,
        path: store.document_path(R::COLLECTION),
        records: records.len(),
        duplicate_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{products, ServiceOptions};
    use crate::error::ShowcaseError;
    use crate::model::ProductDraft;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn empty_store_is_healthy() {
        let store = RecordStore::new(MemBackend::new());
        let report = run(&store).unwrap();
        assert!(report.is_healthy());
        assert_eq!(report.collections.len(), 2);
        assert_eq!(report.collections[0].records, 0);
    }

    #[test]
    fn reports_reissued_ids() {
        let store = RecordStore::new(MemBackend::new());
        let opts = ServiceOptions::default();
        for title in ["a", "b"] {
            products::add(&store, &opts, ProductDraft::new(title, "", 1)).unwrap();
        }
        products::delete(&store, &opts, "p1").unwrap();
        products::add(&store, &opts, ProductDraft::new("c", "", 1)).unwrap();

        let report = run(&store).unwrap();
        assert!(!report.is_healthy());
        assert_eq!(report.collections[0].collection, Collection::Products);
        assert_eq!(report.collections[0].records, 2);
        assert_eq!(report.collections[0].duplicate_ids, vec!["p2"]);
        assert!(report.collections[1].is_healthy());
    }

    #[test]
    fn corrupt_document_fails() {
        let backend = MemBackend::new().with_document(Collection::Sections, "{oops");
        let store = RecordStore::new(backend);
        assert!(matches!(
            run(&store),
            Err(ShowcaseError::DocumentCorrupt { .. })
        ));
    }
}
