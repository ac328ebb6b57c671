use crate::error::Result;
use crate::model::Collection;
use std::path::PathBuf;

/// Canonical content of an empty collection document.
pub const EMPTY_DOCUMENT: &str = "[]";

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (parsing, typed records).
pub trait StorageBackend {
    /// Create the document with `default_content` if it does not exist yet.
    /// Existing documents are left alone, whatever they contain.
    fn ensure(&self, collection: Collection, default_content: &str) -> Result<()>;

    /// Read the full document text. The document must exist.
    fn read(&self, collection: Collection) -> Result<String>;

    /// Replace the full document text.
    fn write(&self, collection: Collection, content: &str) -> Result<()>;

    /// Where the document lives. For MemBackend, a virtual path.
    fn document_path(&self, collection: Collection) -> PathBuf;
}
