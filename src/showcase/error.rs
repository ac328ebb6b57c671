use crate::model::Collection;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("Document {path:?} is not a JSON array of records: {source}")]
    DocumentCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No record with id {id:?} in {collection}")]
    RecordNotFound { collection: Collection, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
