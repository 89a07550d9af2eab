use std::collections::HashSet;

use serde::Deserialize;

use super::models::{
    Card,
    Deck,
    Example,
};

/// Lenient mirror of [`Deck`] for payloads of unknown completeness: imported
/// files, legacy exports, and raw generation output all deserialize into
/// these before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDeck {
    pub title: String,
    pub cards: Vec<RawCard>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCard {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub simplified: String,
    #[serde(default)]
    pub traditional: String,
    #[serde(default)]
    pub pinyin: String,
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub examples: Vec<RawExample>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExample {
    #[serde(default)]
    pub simplified: Option<String>,
    #[serde(default)]
    pub traditional: Option<String>,
    /// Older exports carried one undifferentiated Chinese field.
    #[serde(default)]
    pub chinese: Option<String>,
    #[serde(default)]
    pub pinyin: Option<String>,
    #[serde(default)]
    pub english: String,
}

/// Hands out card ids that are unique within one ingestion batch. Existing
/// ids are kept as-is; missing, blank, or colliding ids get a fresh one
/// derived from the batch timestamp and a running position.
pub struct IdAllocator {
    stamp: i64,
    position: usize,
    used: HashSet<String>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { stamp: chrono::Utc::now().timestamp_millis(), position: 0, used: HashSet::new() }
    }

    #[cfg(test)]
    fn with_stamp(stamp: i64) -> Self {
        Self { stamp, position: 0, used: HashSet::new() }
    }

    pub fn claim(&mut self, existing: Option<&str>) -> String {
        if let Some(id) = existing {
            let id = id.trim();
            if !id.is_empty() && self.used.insert(id.to_string()) {
                return id.to_string();
            }
        }

        loop {
            let candidate = format!("{}-{}", self.stamp, self.position);
            self.position += 1;
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces a structurally complete deck from a structurally plausible one.
/// Recognized fields are preserved verbatim; no linguistic content is ever
/// invented here.
pub fn normalize_deck(raw: RawDeck) -> Deck {
    let mut ids = IdAllocator::new();
    let cards = raw.cards.into_iter().map(|card| normalize_card(card, &mut ids)).collect();

    Deck { title: raw.title, cards }
}

pub fn normalize_card(raw: RawCard, ids: &mut IdAllocator) -> Card {
    Card {
        id: ids.claim(raw.id.as_deref()),
        simplified: raw.simplified,
        traditional: raw.traditional,
        pinyin: raw.pinyin,
        english: raw.english,
        examples: raw.examples.into_iter().map(normalize_example).collect(),
    }
}

fn normalize_example(raw: RawExample) -> Example {
    let filled = |field: Option<String>| field.filter(|s| !s.trim().is_empty());

    let simplified = filled(raw.simplified);
    let traditional = filled(raw.traditional);
    let chinese = filled(raw.chinese);

    // A legacy single-script field fills whichever slots are missing.
    let (simplified, traditional) = match (simplified, traditional, chinese) {
        (Some(s), Some(t), _) => (s, t),
        (Some(s), None, Some(c)) => (s, c),
        (None, Some(t), Some(c)) => (c, t),
        (None, None, Some(c)) => (c.clone(), c),
        (Some(s), None, None) => (s.clone(), s),
        (None, Some(t), None) => (t.clone(), t),
        (None, None, None) => (String::new(), String::new()),
    };

    Example { simplified, traditional, pinyin: raw.pinyin, english: raw.english }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_card(id: Option<&str>) -> RawCard {
        RawCard {
            id: id.map(str::to_string),
            simplified: "苹果".to_string(),
            traditional: "蘋果".to_string(),
            pinyin: "píngguǒ".to_string(),
            english: "apple".to_string(),
            examples: Vec::new(),
        }
    }

    #[test]
    fn existing_ids_are_preserved() {
        let mut ids = IdAllocator::new();
        let card = normalize_card(raw_card(Some("card-7")), &mut ids);
        assert_eq!(card.id, "card-7");
    }

    #[test]
    fn missing_and_blank_ids_are_synthesized() {
        let mut ids = IdAllocator::with_stamp(1700000000000);

        let a = normalize_card(raw_card(None), &mut ids);
        let b = normalize_card(raw_card(Some("   ")), &mut ids);

        assert_eq!(a.id, "1700000000000-0");
        assert_eq!(b.id, "1700000000000-1");
    }

    #[test]
    fn duplicate_ids_within_a_batch_are_reassigned() {
        let mut ids = IdAllocator::with_stamp(42);

        let a = normalize_card(raw_card(Some("dup")), &mut ids);
        let b = normalize_card(raw_card(Some("dup")), &mut ids);

        assert_eq!(a.id, "dup");
        assert_eq!(b.id, "42-0");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn allocator_skips_ids_already_claimed() {
        let mut ids = IdAllocator::with_stamp(9);

        let a = normalize_card(raw_card(Some("9-0")), &mut ids);
        let b = normalize_card(raw_card(None), &mut ids);

        assert_eq!(a.id, "9-0");
        assert_eq!(b.id, "9-1");
    }

    #[test]
    fn legacy_chinese_field_fills_both_scripts() {
        let raw = RawExample {
            chinese: Some("我爱吃苹果".to_string()),
            english: "I love eating apples.".to_string(),
            ..Default::default()
        };

        let example = normalize_example(raw);
        assert_eq!(example.simplified, "我爱吃苹果");
        assert_eq!(example.traditional, "我爱吃苹果");
    }

    #[test]
    fn distinct_scripts_are_untouched_by_legacy_field() {
        let raw = RawExample {
            simplified: Some("这个苹果很甜".to_string()),
            traditional: Some("這個蘋果很甜".to_string()),
            chinese: Some("ignored".to_string()),
            pinyin: Some("zhège píngguǒ hěn tián".to_string()),
            english: "This apple is sweet.".to_string(),
        };

        let example = normalize_example(raw);
        assert_eq!(example.simplified, "这个苹果很甜");
        assert_eq!(example.traditional, "這個蘋果很甜");
        assert_eq!(example.pinyin.as_deref(), Some("zhège píngguǒ hěn tián"));
    }

    #[test]
    fn single_script_is_mirrored() {
        let raw = RawExample {
            simplified: Some("我爱吃苹果".to_string()),
            english: "I love eating apples.".to_string(),
            ..Default::default()
        };

        let example = normalize_example(raw);
        assert_eq!(example.simplified, example.traditional);
    }

    #[test]
    fn normalize_deck_keeps_card_order_and_fields() {
        let raw = RawDeck {
            title: "Fruit".to_string(),
            cards: vec![raw_card(Some("a")), raw_card(Some("b"))],
        };

        let deck = normalize_deck(raw);
        assert_eq!(deck.title, "Fruit");
        assert_eq!(deck.cards.len(), 2);
        assert_eq!(deck.cards[0].id, "a");
        assert_eq!(deck.cards[1].id, "b");
        assert_eq!(deck.cards[0].pinyin, "píngguǒ");
    }
}
