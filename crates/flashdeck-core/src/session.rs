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

use crate::command::Command;
use crate::cursor::CardView;
use crate::cursor::QuizCursor;
use crate::error::DeckError;
use crate::store::CardStore;

/// Inputs accompanying a command submission. Only `add` reads them.
#[derive(Clone, Debug, Default)]
pub struct CommandInput {
    pub question: String,
    pub answer: String,
}

/// Structured outcome of a successfully executed command. The presentation
/// layer turns these into display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// A card was stored; carries its display index and normalized text.
    Added {
        index: usize,
        question: String,
        answer: String,
    },
    /// All questions in insertion order with their display indices.
    Listing(Vec<(usize, String)>),
    /// The cursor moved or was reset; the answer is hidden.
    Prompt(CardView),
    /// The answer at the current position is revealed.
    Revealed(CardView),
    /// The store was emptied.
    Cleared,
    /// The sample deck replaced the store contents.
    DefaultsLoaded { count: usize },
}

/// One user's card store and quiz cursor, bound together so that every
/// size-changing mutation also rewinds the cursor. Positions from before a
/// `clear` or `load_defaults` are never observable afterwards.
#[derive(Debug, Default)]
pub struct Session {
    store: CardStore,
    cursor: QuizCursor,
}

impl Session {
    pub fn new() -> Session {
        Session {
            store: CardStore::new(),
            cursor: QuizCursor::new(),
        }
    }

    /// Pre-check for the caller-side confirmation step: destructive commands
    /// only need confirming when there is something to lose.
    pub fn has_cards(&self) -> bool {
        !self.store.is_empty()
    }

    pub fn size(&self) -> usize {
        self.store.size()
    }

    pub fn cursor(&self) -> &QuizCursor {
        &self.cursor
    }

    pub fn add(&mut self, question: &str, answer: &str) -> Result<Reply, DeckError> {
        let index = self.store.add(question, answer)?;
        // add() validated the input, so the stored card is present.
        let card = self.store.get(index - 1).expect("card just added");
        Ok(Reply::Added {
            index,
            question: card.question().to_string(),
            answer: card.answer().to_string(),
        })
    }

    pub fn list(&self) -> Result<Reply, DeckError> {
        if self.store.is_empty() {
            return Err(DeckError::Empty);
        }
        let entries = self
            .store
            .list()
            .into_iter()
            .map(|(index, question)| (index, question.to_string()))
            .collect();
        Ok(Reply::Listing(entries))
    }

    pub fn quiz(&mut self) -> Result<Reply, DeckError> {
        let view = self.cursor.toggle_step(&self.store)?;
        Ok(wrap_view(view))
    }

    pub fn next(&mut self) -> Result<Reply, DeckError> {
        let view = self.cursor.next(&self.store)?;
        Ok(Reply::Prompt(view))
    }

    pub fn previous(&mut self) -> Result<Reply, DeckError> {
        let view = self.cursor.previous(&self.store)?;
        Ok(Reply::Prompt(view))
    }

    pub fn reveal(&mut self) -> Result<Reply, DeckError> {
        let view = self.cursor.reveal(&self.store)?;
        Ok(Reply::Revealed(view))
    }

    pub fn reset(&mut self) -> Result<Reply, DeckError> {
        let view = self.cursor.reset(&self.store)?;
        Ok(Reply::Prompt(view))
    }

    /// Empty the store and rewind the cursor. Idempotent; confirmation is the
    /// caller's business.
    pub fn clear(&mut self) -> Reply {
        self.store.clear();
        self.cursor.rewind();
        Reply::Cleared
    }

    /// Replace the store contents with the sample deck and rewind the cursor.
    pub fn load_defaults(&mut self) -> Reply {
        self.store.load_defaults();
        self.cursor.rewind();
        Reply::DefaultsLoaded {
            count: self.store.size(),
        }
    }

    /// Map a command to its single operation. Destructive commands mutate
    /// unconditionally here; the confirmation round-trip happens in the
    /// presentation layer, gated on [`Session::has_cards`].
    pub fn execute(&mut self, command: Command, input: &CommandInput) -> Result<Reply, DeckError> {
        match command {
            Command::Add => self.add(&input.question, &input.answer),
            Command::List => self.list(),
            Command::Quiz => self.quiz(),
            Command::Clear => Ok(self.clear()),
            Command::LoadDefault => Ok(self.load_defaults()),
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::Reveal => self.reveal(),
            Command::Reset => self.reset(),
        }
    }
}

fn wrap_view(view: CardView) -> Reply {
    if view.answer.is_some() {
        Reply::Revealed(view)
    } else {
        Reply::Prompt(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ValidationError;

    fn seeded() -> Session {
        let mut session = Session::new();
        session.load_defaults();
        session
    }

    #[test]
    fn test_add_reports_normalized_card() {
        let mut session = Session::new();
        let reply = session.add("what is a variable", "a named storage location").unwrap();
        assert_eq!(
            reply,
            Reply::Added {
                index: 1,
                question: "What is a variable?".to_string(),
                answer: "A named storage location".to_string(),
            }
        );
    }

    #[test]
    fn test_add_surfaces_both_validation_flags() {
        let mut session = Session::new();
        let err = session.add(" ", "").unwrap_err();
        assert_eq!(
            err,
            DeckError::Validation(ValidationError {
                missing_question: true,
                missing_answer: true,
            })
        );
        assert_eq!(session.size(), 0);
    }

    #[test]
    fn test_list_hides_answers() {
        let session = seeded();
        let Reply::Listing(entries) = session.list().unwrap() else {
            panic!("expected listing");
        };
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], (1, "What is JavaScript?".to_string()));
        for (_, question) in &entries {
            assert!(!question.contains("Document Object Model"));
        }
    }

    #[test]
    fn test_list_empty_store() {
        let session = Session::new();
        assert_eq!(session.list(), Err(DeckError::Empty));
    }

    #[test]
    fn test_quiz_alternates_reveal_and_advance() {
        let mut session = seeded();
        let Reply::Revealed(view) = session.quiz().unwrap() else {
            panic!("first quiz press should reveal");
        };
        assert_eq!(view.index, 1);
        assert_eq!(
            view.answer.as_deref(),
            Some("A programming language used for web development.")
        );
        let Reply::Prompt(view) = session.quiz().unwrap() else {
            panic!("second quiz press should advance");
        };
        assert_eq!(view.index, 2);
        assert_eq!(view.answer, None);
    }

    #[test]
    fn test_clear_rewinds_cursor() {
        let mut session = seeded();
        session.next().unwrap();
        session.reveal().unwrap();
        assert_eq!(session.clear(), Reply::Cleared);
        assert!(!session.has_cards());
        assert_eq!(session.cursor().position(), 0);
        assert!(!session.cursor().answer_revealed());
    }

    #[test]
    fn test_load_defaults_rewinds_cursor() {
        let mut session = seeded();
        session.next().unwrap();
        let reply = session.load_defaults();
        assert_eq!(reply, Reply::DefaultsLoaded { count: 3 });
        assert_eq!(session.cursor().position(), 0);
    }

    #[test]
    fn test_cursor_valid_after_shrinking_reload() {
        let mut session = Session::new();
        for i in 0..5 {
            session.add(&format!("q{i}"), "a").unwrap();
        }
        session.next().unwrap();
        session.next().unwrap();
        session.next().unwrap();
        session.next().unwrap();
        assert_eq!(session.cursor().position(), 4);
        session.load_defaults();
        // The stale position is gone; navigation starts from the top.
        let Reply::Prompt(view) = session.next().unwrap() else {
            panic!("expected prompt");
        };
        assert_eq!(view.index, 2);
    }

    #[test]
    fn test_execute_maps_every_command() {
        let mut session = seeded();
        let input = CommandInput::default();
        assert!(matches!(
            session.execute(Command::Next, &input),
            Ok(Reply::Prompt(_))
        ));
        assert!(matches!(
            session.execute(Command::Previous, &input),
            Ok(Reply::Prompt(_))
        ));
        assert!(matches!(
            session.execute(Command::Reveal, &input),
            Ok(Reply::Revealed(_))
        ));
        assert!(matches!(
            session.execute(Command::Reset, &input),
            Ok(Reply::Prompt(_))
        ));
        assert!(matches!(
            session.execute(Command::Quiz, &input),
            Ok(Reply::Revealed(_))
        ));
        assert!(matches!(
            session.execute(Command::List, &input),
            Ok(Reply::Listing(_))
        ));
        assert!(matches!(
            session.execute(Command::Clear, &input),
            Ok(Reply::Cleared)
        ));
        assert!(matches!(
            session.execute(Command::LoadDefault, &input),
            Ok(Reply::DefaultsLoaded { count: 3 })
        ));
        let input = CommandInput {
            question: "q".to_string(),
            answer: "a".to_string(),
        };
        assert!(matches!(
            session.execute(Command::Add, &input),
            Ok(Reply::Added { index: 4, .. })
        ));
    }

    #[test]
    fn test_errors_leave_state_unchanged() {
        let mut session = Session::new();
        session.add("q", "a").unwrap();
        session.next().unwrap();
        let before_position = session.cursor().position();
        session.add("", "").unwrap_err();
        assert_eq!(session.size(), 1);
        assert_eq!(session.cursor().position(), before_position);
    }
}
