use crate::error::Result;
use crate::model::Record;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

use super::MissingPolicy;

/// First record whose id equals `id`.
pub fn find<R: Record, B: StorageBackend>(store: &RecordStore<B>, id: &str) -> Result<Option<R>> {
    let records: Vec<R> = store.load()?;
    Ok(records.into_iter().find(|r| r.id() == id))
}

/// Apply `change` to the first record carrying `id` and save the collection.
///
/// Returns whether a record matched. With [`MissingPolicy::Ignore`] the
/// collection is written back as loaded when nothing matched.
pub fn update_first<R, B, F>(
    store: &RecordStore<B>,
    missing: MissingPolicy,
    id: &str,
    change: F,
) -> Result<bool>
where
    R: Record,
    B: StorageBackend,
    F: FnOnce(&mut R),
{
    let mut records: Vec<R> = store.load()?;
    let matched = match records.iter_mut().find(|r| r.id() == id) {
        Some(record) => {
            change(record);
            true
        }
        None => {
            missing.on_missing(R::COLLECTION, id)?;
            false
        }
    };
    store.save(&records)?;
    Ok(matched)
}

/// Drop every record carrying `id`, not only the first, and save.
/// Returns how many were removed.
pub fn remove_all<R: Record, B: StorageBackend>(
    store: &RecordStore<B>,
    missing: MissingPolicy,
    id: &str,
) -> Result<usize> {
    let mut records: Vec<R> = store.load()?;
    let before = records.len();
    records.retain(|r| r.id() != id);
    let removed = before - records.len();
    if removed == 0 {
        missing.on_missing(R::COLLECTION, id)?;
    }
    store.save(&records)?;
    Ok(removed)
}
