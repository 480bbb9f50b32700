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

//! flashdeck-core: Core library for the flashdeck flashcard tool.
//!
//! This library provides the in-memory model behind the web console:
//! - Card storage with input validation and normalization
//! - Quiz navigation (wraparound cursor, answer reveal)
//! - Command dispatch over both
//!
//! Everything here is synchronous and single-user; the binary crate owns the
//! HTTP surface and wraps one [`Session`] per process.

pub mod card;
pub mod command;
pub mod cursor;
pub mod error;
pub mod session;
pub mod store;

// Re-exports for convenience
pub use card::{Card, ValidationError, capitalize_first};
pub use command::Command;
pub use cursor::{CardView, QuizCursor};
pub use error::DeckError;
pub use session::{CommandInput, Reply, Session};
pub use store::CardStore;
