use std::collections::VecDeque;
use std::io;

use orderdesk_core::Cents;

use crate::{CartRow, ProductRow, Terminal};

/// Everything a scripted session showed, for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Products(Vec<ProductRow>),
    Cart { rows: Vec<CartRow>, total: Cents },
    Line(String),
    Prompt(String),
}

/// Test double: replays queued numeric answers and records output.
///
/// Out-of-range answers consume the next queued value, like a clerk re-typing
/// at a re-prompt. Running out of answers reads as EOF.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    answers: VecDeque<u64>,
    shown: Vec<Shown>,
}

impl ScriptedTerminal {
    pub fn new(answers: impl IntoIterator<Item = u64>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            shown: Vec::new(),
        }
    }

    pub fn shown(&self) -> &[Shown] {
        &self.shown
    }

    /// Plain message lines, in display order.
    pub fn lines(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Line(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Answers not consumed by the session. Empty for a well-formed script.
    pub fn unused_answers(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self) -> io::Result<u64> {
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }
}

impl Terminal for ScriptedTerminal {
    fn prompt_index(&mut self, prompt: &str, len: usize) -> io::Result<usize> {
        self.shown.push(Shown::Prompt(prompt.to_string()));
        loop {
            let answer = self.next_answer()?;
            if (answer as usize) < len {
                return Ok(answer as usize);
            }
        }
    }

    fn prompt_quantity(&mut self, prompt: &str) -> io::Result<u32> {
        self.shown.push(Shown::Prompt(prompt.to_string()));
        loop {
            let answer = self.next_answer()?;
            if answer >= 1 && answer <= u64::from(u32::MAX) {
                return Ok(answer as u32);
            }
        }
    }

    fn prompt_choice(&mut self, prompt: &str, labels: &[&str]) -> io::Result<usize> {
        self.shown.push(Shown::Prompt(prompt.to_string()));
        loop {
            let answer = self.next_answer()?;
            if (answer as usize) < labels.len() {
                return Ok(answer as usize);
            }
        }
    }

    fn show_products(&mut self, rows: &[ProductRow]) -> io::Result<()> {
        self.shown.push(Shown::Products(rows.to_vec()));
        Ok(())
    }

    fn show_cart(&mut self, rows: &[CartRow], total: Cents) -> io::Result<()> {
        self.shown.push(Shown::Cart {
            rows: rows.to_vec(),
            total,
        });
        Ok(())
    }

    fn line(&mut self, msg: &str) -> io::Result<()> {
        self.shown.push(Shown::Line(msg.to_string()));
        Ok(())
    }
}
