//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全：第一个单词补全命令名，之后补全顶点键

use super::commands::COMMAND_NAMES;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// WayGraph CLI 补全器
#[derive(Default)]
pub struct ShellCompleter {
    /// 当前图中的顶点键
    keys: Vec<String>,
}

impl ShellCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 更新可补全的顶点键
    pub fn set_keys(&mut self, keys: Vec<String>) {
        self.keys = keys;
    }

    /// 计算补全候选（不依赖 rustyline 上下文）
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let line_to_cursor = &line[..pos];
        let word_start = line_to_cursor
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        let current = &line_to_cursor[word_start..];
        let first_word = line_to_cursor[..word_start].trim().is_empty();

        let matches: Vec<String> = if first_word {
            COMMAND_NAMES
                .iter()
                .filter(|cmd| cmd.starts_with(&current.to_lowercase()))
                .map(|cmd| cmd.to_string())
                .collect()
        } else {
            self.keys
                .iter()
                .filter(|key| key.starts_with(current))
                .cloned()
                .collect()
        };

        (word_start, matches)
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(line, pos);
        let pairs = matches
            .into_iter()
            .map(|m| Pair {
                display: m.clone(),
                replacement: m,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Highlighter for ShellCompleter {}

impl Validator for ShellCompleter {}

impl Helper for ShellCompleter {}
