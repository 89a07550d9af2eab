use std::{
    path::PathBuf,
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::types::{
    DeckSource,
    TaskResult,
};
use crate::{
    core::{
        export,
        http,
        ingest,
        models::Deck,
        speech,
    },
    gen::GenerationClient,
};

/// Runs the suspending operations (generation, fetches, file reads, speech)
/// off the UI thread. Results come back through a channel the app polls every
/// frame; the app's busy flag keeps ingestion to one outstanding task.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn generate_from_topic(&self, topic: String, client: GenerationClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Generating deck...".to_string()));

            let result = runtime.block_on(async {
                client.generate_from_topic(&topic).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::DeckReady { source: DeckSource::Topic, result });
        });
    }

    pub fn ingest_text(&self, text: String, client: Option<GenerationClient>) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Building deck...".to_string()));

            let result = runtime.block_on(async {
                ingest::ingest(&text, client.as_ref()).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::DeckReady { source: DeckSource::Content, result });
        });
    }

    pub fn ingest_file(&self, path: PathBuf, client: Option<GenerationClient>) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Reading file...".to_string()));

            let result = runtime.block_on(async {
                let text = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
                ingest::ingest(&text, client.as_ref()).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::DeckReady { source: DeckSource::File, result });
        });
    }

    pub fn ingest_url(&self, url: String, client: Option<GenerationClient>) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Fetching URL...".to_string()));

            let result = runtime.block_on(async {
                let text = http::fetch_text(&url).await.map_err(|e| e.to_string())?;
                ingest::ingest(&text, client.as_ref()).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::DeckReady { source: DeckSource::Url, result });
        });
    }

    pub fn export_deck(&self, deck: Deck, path: PathBuf) {
        let (sender, _) = self.task_context();

        thread::spawn(move || {
            let result = export::export_deck(&deck, &path)
                .map(|_| path)
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::ExportFinished(result));
        });
    }

    pub fn speak(&self, text: String) {
        let (sender, _) = self.task_context();

        thread::spawn(move || {
            let result = speech::speak(&text).map_err(|e| e.to_string());
            let _ = sender.send(TaskResult::SpeechFinished(result));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
