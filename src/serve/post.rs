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

use axum::extract::Form;
use axum::extract::State;
use axum::response::Html;
use flashdeck_core::command::Command;
use flashdeck_core::error::DeckError;
use flashdeck_core::session::CommandInput;
use serde::Deserialize;

use crate::serve::state::MutableState;
use crate::serve::state::ServerState;
use crate::serve::template::PageView;
use crate::serve::template::console_page;
use crate::serve::template::page_template;
use crate::serve::template::reply_text;

/// Form fields posted by the console. The quiz control buttons post only the
/// `command` field, hence the defaults.
#[derive(Deserialize)]
pub struct CommandForm {
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<CommandForm>,
) -> Html<String> {
    let mut mutable = state.mutable.lock().unwrap();
    let view = dispatch(&mut mutable, &form);
    Html(page_template(console_page(&view)).into_string())
}

fn dispatch(mutable: &mut MutableState, form: &CommandForm) -> PageView {
    let token = form.command.trim();
    log::debug!("Dispatching command: {token}");

    // Settle a pending confirmation first. Any token other than the
    // confirm/cancel pair drops the parked command.
    if let Some(pending) = mutable.pending.take() {
        match token {
            "confirm" => return run_confirmed(mutable, pending),
            "cancel" => {
                return PageView {
                    output: "Cancelled".to_string(),
                    ..PageView::default()
                };
            }
            _ => {}
        }
    }

    let command = match token.parse::<Command>() {
        Ok(command) => command,
        Err(error) => {
            log::debug!("{error}");
            return PageView {
                command_error: "Unknown command".to_string(),
                ..PageView::default()
            };
        }
    };

    if command.is_destructive() {
        if !mutable.session.has_cards() {
            // Nothing to lose; skip the confirmation.
            return run_confirmed(mutable, command);
        }
        mutable.pending = Some(command);
        return PageView {
            confirm: true,
            ..PageView::default()
        };
    }

    let input = CommandInput {
        question: form.question.trim().to_string(),
        answer: form.answer.trim().to_string(),
    };
    match mutable.session.execute(command, &input) {
        Ok(reply) => PageView {
            output: reply_text(&reply),
            ..PageView::default()
        },
        Err(DeckError::Validation(error)) => PageView {
            question_error: required_marker(error.missing_question),
            answer_error: required_marker(error.missing_answer),
            ..PageView::default()
        },
        Err(error) => PageView {
            output: format!("Error: {error}"),
            ..PageView::default()
        },
    }
}

fn run_confirmed(mutable: &mut MutableState, command: Command) -> PageView {
    let output = match command {
        Command::Clear => {
            if mutable.session.has_cards() {
                reply_text(&mutable.session.clear())
            } else {
                "No cards to clear.".to_string()
            }
        }
        Command::LoadDefault => reply_text(&mutable.session.load_defaults()),
        // Only destructive commands are ever parked for confirmation.
        _ => String::new(),
    };
    PageView {
        output,
        ..PageView::default()
    }
}

fn required_marker(missing: bool) -> String {
    if missing {
        "Required".to_string()
    } else {
        String::new()
    }
}
