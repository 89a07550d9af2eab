use thiserror::Error;

#[derive(Error, Debug)]
pub enum KapianError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized content: {0}")]
    UnrecognizedContent(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("No API key configured. Set one in Settings or via GEMINI_API_KEY.")]
    MissingApiKey,

    #[error("Deck has no cards")]
    EmptyDeck,

    #[error("KapianError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for KapianError {
    fn from(error: std::io::Error) -> Self {
        KapianError::Io(Box::new(error))
    }
}
