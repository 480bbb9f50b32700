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

use flashdeck_core::session::Reply;
use maud::DOCTYPE;
use maud::Markup;
use maud::html;

/// Everything the console page needs to render one request's outcome. The
/// error fields land next to their form controls; `output` fills the display
/// region.
#[derive(Default)]
pub struct PageView {
    pub output: String,
    pub command_error: String,
    pub question_error: String,
    pub answer_error: String,
    /// A destructive command is parked; render the confirmation prompt.
    pub confirm: bool,
}

pub fn page_template(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "flashdeck" }
                link rel="stylesheet" href="/style.css";
            }
            body {
                (body)
                script src="/script.js" {};
            }
        }
    }
}

pub fn console_page(view: &PageView) -> Markup {
    html! {
        main {
            h1 { "flashdeck" }
            form method="post" action="/" {
                div class="field" {
                    label for="command" { "Command" }
                    select id="command" name="command" {
                        option value="add" { "add" }
                        option value="list" { "list" }
                        option value="quiz" { "quiz" }
                        option value="clear" { "clear" }
                        option value="load_default" { "load_default" }
                    }
                    span class="error" id="commandError" { (view.command_error) }
                }
                div class="field" {
                    label for="question" { "Question" }
                    input type="text" id="question" name="question";
                    span class="error" id="questionError" { (view.question_error) }
                }
                div class="field" {
                    label for="answer" { "Answer" }
                    input type="text" id="answer" name="answer";
                    span class="error" id="answerError" { (view.answer_error) }
                }
                button type="submit" { "Run" }
            }
            form method="post" action="/" class="controls" {
                button name="command" value="previous" { "Previous Question" }
                button name="command" value="next" { "Next Question" }
                button name="command" value="reveal" { "Show Answer" }
                button name="command" value="reset" { "Reset Quiz" }
            }
            @if view.confirm {
                div class="confirm" {
                    p { "Are you sure? This will delete all saved cards." }
                    form method="post" action="/" {
                        button name="command" value="confirm" { "Confirm" }
                        button name="command" value="cancel" { "Cancel" }
                    }
                }
            }
            pre id="output" { (view.output) }
        }
    }
}

/// Format a structured reply into the console's display text.
pub fn reply_text(reply: &Reply) -> String {
    match reply {
        Reply::Added {
            index,
            question,
            answer,
        } => format!("Card #{index}\n{question}\n{answer}"),
        Reply::Listing(entries) => {
            let mut text = String::from("All cards:\n");
            for (index, question) in entries {
                text.push_str(&format!("#{index}: {question}\n"));
            }
            text
        }
        Reply::Prompt(view) => format!(
            "#{}\n{}\n\nPress \"Show Answer\" to see the answer.",
            view.index, view.question
        ),
        Reply::Revealed(view) => format!(
            "#{}\n{}\n{}\n\nPress \"Next Question\" to see the next question.",
            view.index,
            view.question,
            view.answer.as_deref().unwrap_or("")
        ),
        Reply::Cleared => "All cards cleared.".to_string(),
        Reply::DefaultsLoaded { count } => format!("{count} default cards loaded."),
    }
}

#[cfg(test)]
mod tests {
    use flashdeck_core::cursor::CardView;

    use super::*;

    #[test]
    fn test_added_text() {
        let reply = Reply::Added {
            index: 1,
            question: "What is a variable?".to_string(),
            answer: "A named storage location".to_string(),
        };
        assert_eq!(
            reply_text(&reply),
            "Card #1\nWhat is a variable?\nA named storage location"
        );
    }

    #[test]
    fn test_listing_text() {
        let reply = Reply::Listing(vec![
            (1, "First?".to_string()),
            (2, "Second?".to_string()),
        ]);
        assert_eq!(reply_text(&reply), "All cards:\n#1: First?\n#2: Second?\n");
    }

    #[test]
    fn test_prompt_text() {
        let reply = Reply::Prompt(CardView {
            index: 2,
            question: "Second?".to_string(),
            answer: None,
        });
        assert_eq!(
            reply_text(&reply),
            "#2\nSecond?\n\nPress \"Show Answer\" to see the answer."
        );
    }

    #[test]
    fn test_revealed_text() {
        let reply = Reply::Revealed(CardView {
            index: 2,
            question: "Second?".to_string(),
            answer: Some("Because".to_string()),
        });
        assert_eq!(
            reply_text(&reply),
            "#2\nSecond?\nBecause\n\nPress \"Next Question\" to see the next question."
        );
    }

    #[test]
    fn test_page_contains_controls() {
        let html = page_template(console_page(&PageView::default())).into_string();
        assert!(html.contains("load_default"));
        assert!(html.contains("Show Answer"));
        assert!(!html.contains("Are you sure?"));
        let confirming = PageView {
            confirm: true,
            ..PageView::default()
        };
        let html = page_template(console_page(&confirming)).into_string();
        assert!(html.contains("Are you sure? This will delete all saved cards."));
    }
}
