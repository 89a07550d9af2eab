use serde_json::Value;

use super::{
    errors::KapianError,
    models::Deck,
    normalize::{
        normalize_deck,
        RawDeck,
    },
};
use crate::gen::GenerationClient;

/// What an opaque text payload turned out to be. Every input maps to exactly
/// one variant or to an unrecognized-content error.
#[derive(Debug, Clone)]
pub enum ParsedPayload {
    /// Already a valid deck. No generation call needed.
    Deck(RawDeck),
    /// A JSON array of plain strings, to be expanded by generation.
    WordList(Vec<String>),
    /// Not JSON at all. The whole payload goes to generation as-is.
    FreeText(String),
}

pub fn classify(input: &str) -> Result<ParsedPayload, KapianError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(KapianError::UnrecognizedContent("input is empty".to_string()));
    }

    let value: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(_) => return Ok(ParsedPayload::FreeText(trimmed.to_string())),
    };

    match value {
        Value::Object(ref map) => {
            if !map.get("cards").map(Value::is_array).unwrap_or(false) {
                return Err(KapianError::UnrecognizedContent(
                    "JSON object has no 'cards' array".to_string(),
                ));
            }
            if !map.get("title").map(Value::is_string).unwrap_or(false) {
                return Err(KapianError::UnrecognizedContent(
                    "JSON object has no string 'title'".to_string(),
                ));
            }

            let raw: RawDeck = serde_json::from_value(value)
                .map_err(|e| KapianError::UnrecognizedContent(format!("not a valid deck: {e}")))?;

            if raw.cards.is_empty() {
                return Err(KapianError::EmptyDeck);
            }

            Ok(ParsedPayload::Deck(raw))
        }
        Value::Array(items) => {
            let mut words = Vec::with_capacity(items.len());
            for item in &items {
                match item.as_str() {
                    Some(word) if !word.trim().is_empty() => words.push(word.trim().to_string()),
                    Some(_) => {}
                    None => {
                        return Err(KapianError::UnrecognizedContent(
                            "JSON array contains non-string entries".to_string(),
                        ));
                    }
                }
            }

            if words.is_empty() {
                return Err(KapianError::UnrecognizedContent(
                    "JSON array contains no words".to_string(),
                ));
            }

            Ok(ParsedPayload::WordList(words))
        }
        _ => Err(KapianError::UnrecognizedContent(
            "JSON payload is neither a deck nor a list of words".to_string(),
        )),
    }
}

/// Turns arbitrary user-supplied text into a canonical deck: valid decks are
/// normalized directly, everything else is expanded through the generation
/// client. `client` may be absent when no API key is configured; only the
/// generation routes need it.
pub async fn ingest(
    input: &str,
    client: Option<&GenerationClient>,
) -> Result<Deck, KapianError> {
    match classify(input)? {
        ParsedPayload::Deck(raw) => Ok(normalize_deck(raw)),
        ParsedPayload::WordList(words) => {
            let client = client.ok_or(KapianError::MissingApiKey)?;
            client.generate_from_content(&words.join("\n")).await
        }
        ParsedPayload::FreeText(text) => {
            let client = client.ok_or(KapianError::MissingApiKey)?;
            client.generate_from_content(&text).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_json_routes_to_direct_acceptance() {
        let payload = r#"{
            "title": "Fruit",
            "cards": [
                {"id": "a", "simplified": "苹果", "traditional": "蘋果",
                 "pinyin": "píngguǒ", "english": "apple", "examples": []}
            ]
        }"#;

        match classify(payload) {
            Ok(ParsedPayload::Deck(raw)) => {
                assert_eq!(raw.title, "Fruit");
                assert_eq!(raw.cards.len(), 1);
            }
            other => panic!("expected Deck, got {:?}", other),
        }
    }

    #[test]
    fn string_array_routes_to_word_list() {
        match classify(r#"["你好", "谢谢"]"#) {
            Ok(ParsedPayload::WordList(words)) => {
                assert_eq!(words, vec!["你好".to_string(), "谢谢".to_string()]);
            }
            other => panic!("expected WordList, got {:?}", other),
        }
    }

    #[test]
    fn non_json_routes_to_free_text() {
        match classify("苹果: 我爱吃苹果\n香蕉") {
            Ok(ParsedPayload::FreeText(text)) => assert!(text.starts_with("苹果")),
            other => panic!("expected FreeText, got {:?}", other),
        }
    }

    #[test]
    fn object_without_cards_is_a_classification_failure() {
        let result = classify(r#"{"title": "Fruit", "words": ["苹果"]}"#);
        assert!(matches!(result, Err(KapianError::UnrecognizedContent(_))));
    }

    #[test]
    fn object_without_title_is_a_classification_failure() {
        let result = classify(r#"{"cards": []}"#);
        assert!(matches!(result, Err(KapianError::UnrecognizedContent(_))));
    }

    #[test]
    fn deck_with_zero_cards_is_rejected() {
        let result = classify(r#"{"title": "Empty", "cards": []}"#);
        assert!(matches!(result, Err(KapianError::EmptyDeck)));
    }

    #[test]
    fn bare_scalars_are_a_classification_failure() {
        assert!(matches!(classify("42"), Err(KapianError::UnrecognizedContent(_))));
        assert!(matches!(classify("true"), Err(KapianError::UnrecognizedContent(_))));
    }

    #[test]
    fn array_with_non_strings_is_a_classification_failure() {
        let result = classify(r#"["你好", 3]"#);
        assert!(matches!(result, Err(KapianError::UnrecognizedContent(_))));
    }

    #[test]
    fn empty_input_is_a_classification_failure() {
        assert!(matches!(classify("   "), Err(KapianError::UnrecognizedContent(_))));
    }

    #[test]
    fn word_list_entries_are_trimmed() {
        match classify(r#"["  你好  ", "", "谢谢"]"#) {
            Ok(ParsedPayload::WordList(words)) => {
                assert_eq!(words, vec!["你好".to_string(), "谢谢".to_string()]);
            }
            other => panic!("expected WordList, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn word_list_without_client_is_a_configuration_failure() {
        let result = ingest(r#"["你好", "谢谢"]"#, None).await;
        assert!(matches!(result, Err(KapianError::MissingApiKey)));
    }

    #[tokio::test]
    async fn free_text_without_client_is_a_configuration_failure() {
        let result = ingest("苹果: 我爱吃苹果\n香蕉", None).await;
        assert!(matches!(result, Err(KapianError::MissingApiKey)));
    }

    #[tokio::test]
    async fn deck_payload_needs_no_client() {
        let payload = r#"{
            "title": "Fruit",
            "cards": [
                {"id": "a", "simplified": "苹果", "traditional": "蘋果",
                 "pinyin": "píngguǒ", "english": "apple", "examples": []}
            ]
        }"#;

        let deck = ingest(payload, None).await.unwrap();
        assert_eq!(deck.title, "Fruit");
        assert_eq!(deck.cards[0].id, "a");
    }
}
