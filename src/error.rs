use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Invalid filter type: {0}")]
    InvalidFilterKind(String),

    #[error("Invalid lexicon encoding: {0}")]
    InvalidEncoding(String),

    #[error("Record is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: std::str::Utf8Error,
    },

    #[error("Corpus '{name}' not found, available: {}", available.join(", "))]
    CorpusNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
