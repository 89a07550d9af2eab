use super::{
    errors::KapianError,
    models::{
        Card,
        Deck,
        ScriptMode,
    },
};

/// Review state for one loaded deck: a circular cursor, a flip flag, and the
/// script preference. Replaced wholesale when a new deck is loaded.
pub struct ReviewSession {
    deck: Deck,
    active_index: usize,
    flipped: bool,
    script: ScriptMode,
}

impl ReviewSession {
    pub fn new(deck: Deck, script: ScriptMode) -> Result<Self, KapianError> {
        if deck.cards.is_empty() {
            return Err(KapianError::EmptyDeck);
        }

        Ok(Self { deck, active_index: 0, flipped: false, script })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current(&self) -> &Card {
        &self.deck.cards[self.active_index]
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn card_count(&self) -> usize {
        self.deck.cards.len()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn script(&self) -> ScriptMode {
        self.script
    }

    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.deck.cards.len();
        self.flipped = false;
    }

    pub fn previous(&mut self) {
        let count = self.deck.cards.len();
        self.active_index = (self.active_index + count - 1) % count;
        self.flipped = false;
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn toggle_script(&mut self) {
        self.script = self.script.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Example;

    fn deck(count: usize) -> Deck {
        let cards = (0..count)
            .map(|i| Card {
                id: format!("card-{i}"),
                simplified: "你好".to_string(),
                traditional: "你好".to_string(),
                pinyin: "nǐ hǎo".to_string(),
                english: "hello".to_string(),
                examples: vec![Example {
                    simplified: "你好吗？".to_string(),
                    traditional: "你好嗎？".to_string(),
                    pinyin: None,
                    english: "How are you?".to_string(),
                }],
            })
            .collect();

        Deck { title: "Greetings".to_string(), cards }
    }

    #[test]
    fn empty_deck_is_rejected() {
        let result = ReviewSession::new(Deck { title: "x".to_string(), cards: Vec::new() },
            ScriptMode::Simplified);
        assert!(matches!(result, Err(KapianError::EmptyDeck)));
    }

    #[test]
    fn n_steps_forward_returns_to_start() {
        let mut session = ReviewSession::new(deck(5), ScriptMode::Simplified).unwrap();
        session.next();
        session.next();
        let start = session.active_index();

        for _ in 0..5 {
            session.next();
        }
        assert_eq!(session.active_index(), start);
    }

    #[test]
    fn n_steps_backward_returns_to_start() {
        let mut session = ReviewSession::new(deck(4), ScriptMode::Simplified).unwrap();
        let start = session.active_index();

        for _ in 0..4 {
            session.previous();
        }
        assert_eq!(session.active_index(), start);
    }

    #[test]
    fn previous_wraps_from_zero() {
        let mut session = ReviewSession::new(deck(3), ScriptMode::Simplified).unwrap();
        session.previous();
        assert_eq!(session.active_index(), 2);
    }

    #[test]
    fn double_flip_is_identity() {
        let mut session = ReviewSession::new(deck(2), ScriptMode::Simplified).unwrap();
        assert!(!session.is_flipped());
        session.flip();
        assert!(session.is_flipped());
        session.flip();
        assert!(!session.is_flipped());
    }

    #[test]
    fn navigation_resets_flip_state() {
        let mut session = ReviewSession::new(deck(2), ScriptMode::Simplified).unwrap();

        session.flip();
        session.next();
        assert!(!session.is_flipped());

        session.flip();
        session.previous();
        assert!(!session.is_flipped());
    }

    #[test]
    fn toggle_script_leaves_cursor_alone() {
        let mut session = ReviewSession::new(deck(3), ScriptMode::Simplified).unwrap();
        session.next();
        session.flip();

        session.toggle_script();
        assert_eq!(session.script(), ScriptMode::Traditional);
        assert_eq!(session.active_index(), 1);
        assert!(session.is_flipped());

        session.toggle_script();
        assert_eq!(session.script(), ScriptMode::Simplified);
    }

    #[test]
    fn single_card_deck_cycles_in_place() {
        let mut session = ReviewSession::new(deck(1), ScriptMode::Simplified).unwrap();
        session.next();
        assert_eq!(session.active_index(), 0);
        session.previous();
        assert_eq!(session.active_index(), 0);
    }
}
