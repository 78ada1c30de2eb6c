use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbhyasError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load file: {0}")]
    FailedToLoadFile(String),
}

impl From<std::io::Error> for AbhyasError {
    fn from(error: std::io::Error) -> Self {
        AbhyasError::Io(Box::new(error))
    }
}
