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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

/// A single flashcard. Stored text always satisfies: the question is
/// non-empty, starts with an uppercase letter, and ends with `?`; the answer
/// is non-empty and starts with an uppercase letter. Cards are immutable once
/// created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    question: String,
    answer: String,
}

/// Field-level failures from card creation. The fields are checked
/// independently, so both flags can be set by a single call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub missing_question: bool,
    pub missing_answer: bool,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match (self.missing_question, self.missing_answer) {
            (true, true) => "question and answer are required.",
            (true, false) => "question is required.",
            (false, true) => "answer is required.",
            (false, false) => "input is valid.",
        };
        write!(f, "{msg}")
    }
}

impl Error for ValidationError {}

impl Card {
    /// Validate and normalize raw input into a card.
    ///
    /// Both fields are trimmed and must be non-empty. The first character of
    /// each is uppercased, and a `?` is appended to the question unless it
    /// already ends with one.
    pub fn new(question: &str, answer: &str) -> Result<Card, ValidationError> {
        let question = question.trim();
        let answer = answer.trim();
        let error = ValidationError {
            missing_question: question.is_empty(),
            missing_answer: answer.is_empty(),
        };
        if error.missing_question || error.missing_answer {
            return Err(error);
        }
        let mut question = capitalize_first(question);
        if !question.ends_with('?') {
            question.push('?');
        }
        Ok(Card {
            question,
            answer: capitalize_first(answer),
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Uppercase the first character of `s`, leaving the rest untouched. The
/// empty string is returned unchanged.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
