use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::prompts;
use crate::core::{
    models::Deck,
    normalize::{
        normalize_deck,
        RawDeck,
    },
    KapianError,
};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Thin wrapper over one generateContent call with a fixed structured-output
/// schema. Single attempt, no retry; every failure surfaces as one
/// generation-failed error.
#[derive(Clone)]
pub struct GenerationClient {
    http: Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerationClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self { http: Client::new(), api_key: api_key.into(), model: model.into() }
    }

    pub async fn generate_from_topic(&self, topic: &str) -> Result<Deck, KapianError> {
        self.generate(prompts::topic_prompt(topic)).await
    }

    pub async fn generate_from_content(&self, content: &str) -> Result<Deck, KapianError> {
        self.generate(prompts::content_prompt(content)).await
    }

    async fn generate(&self, prompt: String) -> Result<Deck, KapianError> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);

        let body = json!({
            "systemInstruction": { "parts": [{ "text": prompts::SYSTEM_INSTRUCTION }] },
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": deck_response_schema(),
            },
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| KapianError::Generation(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(KapianError::Generation(format!(
                "service returned HTTP {}",
                response.status()
            )));
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| KapianError::Generation(format!("unreadable response: {e}")))?;

        parse_deck_response(&response)
    }
}

/// Structured-output schema the service must fill: title, and per card the
/// two script forms, pinyin, definition, and example sentences.
fn deck_response_schema() -> serde_json::Value {
    let example = json!({
        "type": "OBJECT",
        "properties": {
            "simplified": { "type": "STRING" },
            "traditional": { "type": "STRING" },
            "pinyin": { "type": "STRING" },
            "english": { "type": "STRING" },
        },
        "required": ["simplified", "traditional", "english"],
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "cards": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "simplified": { "type": "STRING" },
                        "traditional": { "type": "STRING" },
                        "pinyin": { "type": "STRING" },
                        "english": { "type": "STRING" },
                        "examples": { "type": "ARRAY", "items": example },
                    },
                    "required": ["simplified", "traditional", "pinyin", "english", "examples"],
                },
            },
        },
        "required": ["title", "cards"],
    })
}

fn parse_deck_response(response: &GenerateContentResponse) -> Result<Deck, KapianError> {
    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| content.parts.iter().find_map(|p| p.text.as_deref()))
        .ok_or_else(|| KapianError::Generation("response contained no content".to_string()))?;

    let raw: RawDeck = serde_json::from_str(text)
        .map_err(|e| KapianError::Generation(format!("response was not a valid deck: {e}")))?;

    // A syntactically valid but empty deck is still a generation failure: a
    // review session cannot accept zero cards.
    if raw.cards.is_empty() {
        return Err(KapianError::Generation("service returned zero cards".to_string()));
    }

    Ok(normalize_deck(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_text(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content { parts: vec![Part { text: Some(text.to_string()) }] }),
            }],
        }
    }

    #[test]
    fn valid_response_becomes_a_normalized_deck() {
        let deck_json = r#"{
            "title": "水果",
            "cards": [{
                "simplified": "苹果",
                "traditional": "蘋果",
                "pinyin": "píngguǒ",
                "english": "apple",
                "examples": [{
                    "simplified": "我爱吃苹果",
                    "traditional": "我愛吃蘋果",
                    "pinyin": "wǒ ài chī píngguǒ",
                    "english": "I love eating apples."
                }]
            }]
        }"#;

        let deck = parse_deck_response(&response_with_text(deck_json)).unwrap();
        assert_eq!(deck.title, "水果");
        assert_eq!(deck.cards.len(), 1);
        assert!(!deck.cards[0].id.is_empty());
        assert_eq!(deck.cards[0].examples[0].simplified, "我爱吃苹果");
    }

    #[test]
    fn empty_candidate_list_is_a_generation_failure() {
        let response = GenerateContentResponse { candidates: Vec::new() };
        assert!(matches!(parse_deck_response(&response), Err(KapianError::Generation(_))));
    }

    #[test]
    fn malformed_deck_text_is_a_generation_failure() {
        let response = response_with_text("not json at all");
        assert!(matches!(parse_deck_response(&response), Err(KapianError::Generation(_))));
    }

    #[test]
    fn zero_card_deck_is_a_generation_failure() {
        let response = response_with_text(r#"{"title": "Empty", "cards": []}"#);
        assert!(matches!(parse_deck_response(&response), Err(KapianError::Generation(_))));
    }

    #[test]
    fn api_response_shape_deserializes() {
        let body = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "{\"title\":\"t\",\"cards\":[]}" }], "role": "model" },
                "finishReason": "STOP"
            }],
            "modelVersion": "gemini-2.0-flash"
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.candidates.len(), 1);
    }

    #[test]
    fn schema_names_every_card_field() {
        let schema = deck_response_schema();
        let card = &schema["properties"]["cards"]["items"]["properties"];
        for field in ["simplified", "traditional", "pinyin", "english", "examples"] {
            assert!(card.get(field).is_some(), "schema missing {field}");
        }
    }
}
