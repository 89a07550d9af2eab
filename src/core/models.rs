use serde::{
    Deserialize,
    Serialize,
};

/// A named, ordered collection of vocabulary cards. Built wholesale by
/// ingestion and replaced wholesale when a new deck is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    pub cards: Vec<Card>,
}

/// One vocabulary entry. `id` is unique within its deck and never recomputed
/// once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub simplified: String,
    pub traditional: String,
    pub pinyin: String,
    pub english: String,
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub simplified: String,
    pub traditional: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    pub english: String,
}

impl Example {
    pub fn text(&self, script: ScriptMode) -> &str {
        match script {
            ScriptMode::Simplified => &self.simplified,
            ScriptMode::Traditional => &self.traditional,
        }
    }
}

impl Card {
    pub fn headword(&self, script: ScriptMode) -> &str {
        match script {
            ScriptMode::Simplified => &self.simplified,
            ScriptMode::Traditional => &self.traditional,
        }
    }

    pub fn alternate(&self, script: ScriptMode) -> &str {
        match script {
            ScriptMode::Simplified => &self.traditional,
            ScriptMode::Traditional => &self.simplified,
        }
    }
}

/// The user's preferred Chinese script for primary display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptMode {
    Simplified,
    Traditional,
}

impl Default for ScriptMode {
    fn default() -> Self {
        ScriptMode::Simplified
    }
}

impl ScriptMode {
    pub fn toggled(self) -> Self {
        match self {
            ScriptMode::Simplified => ScriptMode::Traditional,
            ScriptMode::Traditional => ScriptMode::Simplified,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScriptMode::Simplified => "简体",
            ScriptMode::Traditional => "繁體",
        }
    }
}
