use std::path::PathBuf;

use crate::core::models::Deck;

/// Where an in-flight ingestion came from, for progress and error copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckSource {
    Topic,
    Content,
    File,
    Url,
}

impl DeckSource {
    pub fn label(self) -> &'static str {
        match self {
            DeckSource::Topic => "topic generation",
            DeckSource::Content => "word list",
            DeckSource::File => "file import",
            DeckSource::Url => "URL import",
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    DeckReady { source: DeckSource, result: Result<Deck, String> },
    ExportFinished(Result<PathBuf, String>),
    SpeechFinished(Result<(), String>),
    LoadingMessage(String),
}
