use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate tab value: {0}")]
    DuplicateValue(String),

    #[error("Unknown tab value: {0}")]
    UnknownValue(String),

    /// The panel collection and the tab collection are out of sync
    #[error("No tab registered at index {index} ({len} tabs registered)")]
    MissingTab { index: usize, len: usize },

    #[error("Tab at index {index} reported unusable geometry (start {start}, extent {extent})")]
    InvalidGeometry { index: usize, start: f64, extent: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
