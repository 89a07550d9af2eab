pub mod client;
pub mod prompts;

pub use client::{
    GenerationClient,
    DEFAULT_MODEL,
};
