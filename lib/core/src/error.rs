use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog source not readable: {path}")]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog source malformed: {0}")]
    CatalogMalformed(String),

    #[error("Vector space model has an empty vocabulary")]
    EmptyVocabulary,
}
