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

use crate::card::ValidationError;

/// Recoverable failures surfaced by deck operations. Every variant leaves the
/// session in its previous, consistent state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// No cards exist, so there is nothing to list or navigate.
    Empty,
    /// `add` rejected its input; the flags say which fields were missing.
    Validation(ValidationError),
    /// The command token matched none of the recognized set. Carries the
    /// offending token.
    UnknownCommand(String),
}

impl Display for DeckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::Empty => write!(f, "No cards available."),
            DeckError::Validation(error) => write!(f, "{error}"),
            DeckError::UnknownCommand(token) => write!(f, "unknown command: {token}"),
        }
    }
}

impl Error for DeckError {}

impl From<ValidationError> for DeckError {
    fn from(value: ValidationError) -> Self {
        DeckError::Validation(value)
    }
}
