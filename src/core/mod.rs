pub mod errors;
pub mod export;
pub mod http;
pub mod ingest;
pub mod models;
pub mod normalize;
pub mod session;
pub mod speech;
pub mod tasks;

pub use errors::KapianError;
pub use models::{Card, Deck, Example, ScriptMode};
pub use session::ReviewSession;
