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

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::error::DeckError;

/// The command tokens accepted by the dispatch surface. Each maps to exactly
/// one store or cursor operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Quiz,
    Clear,
    LoadDefault,
    Next,
    Previous,
    Reveal,
    Reset,
}

impl Command {
    /// Destructive commands discard stored cards and require a caller-side
    /// confirmation step first (skipped when the store is already empty).
    pub fn is_destructive(&self) -> bool {
        matches!(self, Command::Clear | Command::LoadDefault)
    }
}

impl FromStr for Command {
    type Err = DeckError;

    fn from_str(token: &str) -> Result<Command, DeckError> {
        match token {
            "add" => Ok(Command::Add),
            "list" => Ok(Command::List),
            "quiz" => Ok(Command::Quiz),
            "clear" => Ok(Command::Clear),
            "load_default" => Ok(Command::LoadDefault),
            "next" => Ok(Command::Next),
            "previous" => Ok(Command::Previous),
            "reveal" => Ok(Command::Reveal),
            "reset" => Ok(Command::Reset),
            _ => Err(DeckError::UnknownCommand(token.to_string())),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Command::Add => "add",
            Command::List => "list",
            Command::Quiz => "quiz",
            Command::Clear => "clear",
            Command::LoadDefault => "load_default",
            Command::Next => "next",
            Command::Previous => "previous",
            Command::Reveal => "reveal",
            Command::Reset => "reset",
        };
        write!(f, "{token}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let commands = [
            Command::Add,
            Command::List,
            Command::Quiz,
            Command::Clear,
            Command::LoadDefault,
            Command::Next,
            Command::Previous,
            Command::Reveal,
            Command::Reset,
        ];
        for command in commands {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn test_unknown_token() {
        let err = "shuffle".parse::<Command>().unwrap_err();
        assert_eq!(err, DeckError::UnknownCommand("shuffle".to_string()));
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!("Add".parse::<Command>().is_err());
    }

    #[test]
    fn test_destructive_commands() {
        assert!(Command::Clear.is_destructive());
        assert!(Command::LoadDefault.is_destructive());
        assert!(!Command::Quiz.is_destructive());
        assert!(!Command::Add.is_destructive());
    }
}
