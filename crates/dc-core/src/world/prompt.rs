//! Yes/no confirmation prompts
//!
//! The core asks questions synchronously; whoever drives the game decides
//! how they get answered.

use std::collections::VecDeque;

pub trait Prompter {
    fn yes_no(&mut self, question: &str) -> bool;
}

/// Answers every question with the same reply
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Default for AutoConfirm {
    fn default() -> Self {
        AutoConfirm(true)
    }
}

impl Prompter for AutoConfirm {
    fn yes_no(&mut self, _question: &str) -> bool {
        self.0
    }
}

/// Replays a fixed list of answers and records what was asked. Once the
/// answers run out every further question is declined.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn yes_no(&mut self, question: &str) -> bool {
        self.asked.push(question.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
