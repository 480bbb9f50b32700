// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::card::Card;
use crate::card::ValidationError;

/// The sample deck loaded by `load_defaults`. Seeds go through the same
/// normalization as user input.
const DEFAULT_CARDS: [(&str, &str); 3] = [
    (
        "What is JavaScript?",
        "A programming language used for web development.",
    ),
    ("What does DOM stand for?", "Document Object Model."),
    ("What keyword declares a constant?", "const"),
];

/// Ordered collection of cards. Insertion order is preserved, duplicate
/// questions are allowed, and no caller holds references into the internal
/// storage.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> CardStore {
        CardStore { cards: Vec::new() }
    }

    /// Validate, normalize, and append a card. Returns the new card's 1-based
    /// display index. The store is unchanged on error.
    pub fn add(&mut self, question: &str, answer: &str) -> Result<usize, ValidationError> {
        let card = Card::new(question, answer)?;
        self.cards.push(card);
        Ok(self.cards.len())
    }

    /// All questions in insertion order, paired with their 1-based display
    /// indices. Answers are not exposed here.
    pub fn list(&self) -> Vec<(usize, &str)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(position, card)| (position + 1, card.question()))
            .collect()
    }

    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Remove all cards. Idempotent.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Replace whatever is stored with the fixed sample deck.
    pub fn load_defaults(&mut self) {
        self.cards.clear();
        for (question, answer) in DEFAULT_CARDS {
            // The seed table is static and never fails validation.
            let card = Card::new(question, answer).expect("default card is valid");
            self.cards.push(card);
        }
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_returns_display_index() {
        let mut store = CardStore::new();
        assert_eq!(store.add("first", "one"), Ok(1));
        assert_eq!(store.add("second", "two"), Ok(2));
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn test_add_failure_leaves_store_unchanged() {
        let mut store = CardStore::new();
        store.add("kept", "yes").unwrap();
        assert!(store.add("", "x").is_err());
        assert!(store.add("x", "").is_err());
        assert!(store.add("", "").is_err());
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn test_duplicate_questions_are_allowed() {
        let mut store = CardStore::new();
        store.add("same", "a").unwrap();
        store.add("same", "b").unwrap();
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn test_list_shows_normalized_questions_only() {
        let mut store = CardStore::new();
        store.add("what is a variable", "a named storage location").unwrap();
        assert_eq!(store.list(), vec![(1, "What is a variable?")]);
    }

    #[test]
    fn test_list_empty() {
        let store = CardStore::new();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = CardStore::new();
        store.add("q", "a").unwrap();
        store.clear();
        assert!(store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }

    fn questions(store: &CardStore) -> Vec<String> {
        store
            .list()
            .into_iter()
            .map(|(_, question)| question.to_string())
            .collect()
    }

    #[test]
    fn test_load_defaults_is_deterministic() {
        let mut store = CardStore::new();
        store.add("stale", "gone").unwrap();
        store.load_defaults();
        assert_eq!(store.size(), 3);
        let first = questions(&store);
        store.load_defaults();
        assert_eq!(store.size(), 3);
        assert_eq!(questions(&store), first);
        assert_eq!(first[0], "What is JavaScript?");
        assert_eq!(first[1], "What does DOM stand for?");
        assert_eq!(first[2], "What keyword declares a constant?");
    }

    #[test]
    fn test_default_cards_are_normalized() {
        let mut store = CardStore::new();
        store.load_defaults();
        assert_eq!(store.get(2).unwrap().answer(), "Const");
    }
}
