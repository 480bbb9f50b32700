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

use crate::error::DeckError;
use crate::store::CardStore;

/// Snapshot of the card under the cursor. `answer` is present only when the
/// answer is revealed. `index` is the 1-based display index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub question: String,
    pub answer: Option<String>,
}

/// Navigation state over a [`CardStore`]: the current position and whether
/// the answer there is revealed.
///
/// Invariant: `position < store.size()` whenever the store is non-empty. The
/// cursor holds no card data, only the index, so it must be rewound whenever
/// the store shrinks; [`crate::session::Session`] takes care of that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuizCursor {
    position: usize,
    answer_revealed: bool,
}

impl QuizCursor {
    pub fn new() -> QuizCursor {
        QuizCursor {
            position: 0,
            answer_revealed: false,
        }
    }

    /// Advance one card, wrapping past the last card back to the first. The
    /// answer at the new position starts hidden.
    pub fn next(&mut self, store: &CardStore) -> Result<CardView, DeckError> {
        let size = self.guard(store)?;
        self.position = (self.position + 1) % size;
        self.answer_revealed = false;
        Ok(self.question_view(store))
    }

    /// Step back one card, wrapping before the first card to the last. The
    /// answer at the new position starts hidden.
    pub fn previous(&mut self, store: &CardStore) -> Result<CardView, DeckError> {
        let size = self.guard(store)?;
        self.position = (self.position + size - 1) % size;
        self.answer_revealed = false;
        Ok(self.question_view(store))
    }

    /// Reveal the answer at the current position without moving.
    pub fn reveal(&mut self, store: &CardStore) -> Result<CardView, DeckError> {
        self.guard(store)?;
        self.answer_revealed = true;
        Ok(self.full_view(store))
    }

    /// Return to the first card with the answer hidden.
    pub fn reset(&mut self, store: &CardStore) -> Result<CardView, DeckError> {
        self.guard(store)?;
        self.rewind();
        Ok(self.question_view(store))
    }

    /// The single-button quiz action: the first press reveals the answer in
    /// place, the next press advances to the following question, and so on,
    /// alternating indefinitely.
    pub fn toggle_step(&mut self, store: &CardStore) -> Result<CardView, DeckError> {
        if self.answer_revealed {
            self.next(store)
        } else {
            self.reveal(store)
        }
    }

    /// Forget the position and reveal state unconditionally. Unlike `reset`,
    /// this works on an empty store; it is the re-validation hook for store
    /// mutations.
    pub(crate) fn rewind(&mut self) {
        self.position = 0;
        self.answer_revealed = false;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    fn guard(&self, store: &CardStore) -> Result<usize, DeckError> {
        if store.is_empty() {
            Err(DeckError::Empty)
        } else {
            Ok(store.size())
        }
    }

    fn question_view(&self, store: &CardStore) -> CardView {
        self.view(store, false)
    }

    fn full_view(&self, store: &CardStore) -> CardView {
        self.view(store, true)
    }

    fn view(&self, store: &CardStore, with_answer: bool) -> CardView {
        // guard() ran first, so the position is in range.
        let card = store.get(self.position).expect("cursor position in range");
        CardView {
            index: self.position + 1,
            question: card.question().to_string(),
            answer: with_answer.then(|| card.answer().to_string()),
        }
    }
}
