use super::backend::StorageBackend;
use crate::error::{Result, ShowcaseError};
use crate::model::Collection;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Resolved locations of the two collection documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub products: PathBuf,
    pub sections: PathBuf,
}

impl StorePaths {
    /// `products.json` and `sections.json` inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            products: data_dir.join(Collection::Products.file_name()),
            sections: data_dir.join(Collection::Sections.file_name()),
        }
    }

    pub fn get(&self, collection: Collection) -> &Path {
        match collection {
            Collection::Products => &self.products,
            Collection::Sections => &self.sections,
        }
    }
}

pub struct FsBackend {
    paths: StorePaths,
}

impl FsBackend {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShowcaseError::Io)?;
            }
        }
        Ok(())
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        self.ensure_parent(path)?;
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("document");
        let tmp_path = path.with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(ShowcaseError::Io)?;
        fs::rename(&tmp_path, path).map_err(ShowcaseError::Io)?;
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn ensure(&self, collection: Collection, default_content: &str) -> Result<()> {
        let path = self.paths.get(collection);
        if path.exists() {
            return Ok(());
        }
        tracing::debug!(path = %path.display(), "creating empty {} document", collection);
        self.ensure_parent(path)?;
        fs::write(path, default_content).map_err(ShowcaseError::Io)?;
        Ok(())
    }

    fn read(&self, collection: Collection) -> Result<String> {
        let content = fs::read_to_string(self.paths.get(collection)).map_err(ShowcaseError::Io)?;
        Ok(content)
    }

    fn write(&self, collection: Collection, content: &str) -> Result<()> {
        self.write_atomic(self.paths.get(collection), content)
    }

    fn document_path(&self, collection: Collection) -> PathBuf {
        self.paths.get(collection).to_path_buf()
    }
}
