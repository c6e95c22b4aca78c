// crates/domain/src/document.rs
use envstamp_shared_kernel::{BuildDate, CompositeVersion};
use serde::Serialize;

use crate::key::EntryKey;

/// Separator used when the document is written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// A single `KEY=VALUE` line. Values come from typed sources only, so they
/// never contain line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    key: EntryKey,
    value: String,
}

impl ConfigEntry {
    #[must_use]
    pub fn version(key: &EntryKey, version: &CompositeVersion) -> Self {
        Self {
            key: key.clone(),
            value: version.as_str().to_string(),
        }
    }

    #[must_use]
    pub fn build_date(key: &EntryKey, date: BuildDate) -> Self {
        Self {
            key: key.clone(),
            value: date.to_string(),
        }
    }

    #[must_use]
    pub const fn key(&self) -> &EntryKey {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn render(&self) -> String {
        format!("{}={}", self.key, self.value)
    }
}

/// Where an upsert landed. Line numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UpsertOutcome {
    Replaced { line: usize },
    Appended { line: usize },
}

impl UpsertOutcome {
    #[must_use]
    pub const fn line(self) -> usize {
        match self {
            Self::Replaced { line } | Self::Appended { line } => line,
        }
    }
}

/// In-memory view of a line-oriented configuration file.
///
/// Each line remembers the terminator that followed it, so rewriting one
/// entry leaves every other line byte-identical even in mixed-ending files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    lines: Vec<String>,
    endings: Vec<LineEnding>,
    line_ending: LineEnding,
}

impl ConfigDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` into lines. A final newline does not add an empty line.
    /// New lines use the last terminator found in `text`, or LF.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let split: Vec<(&str, Option<LineEnding>)> = text
            .split_inclusive('\n')
            .map(|piece| {
                if let Some(line) = piece.strip_suffix("\r\n") {
                    (line, Some(LineEnding::CrLf))
                } else if let Some(line) = piece.strip_suffix('\n') {
                    (line, Some(LineEnding::Lf))
                } else {
                    (piece, None)
                }
            })
            .collect();

        let line_ending = split
            .iter()
            .rev()
            .find_map(|(_, ending)| *ending)
            .unwrap_or_default();
        let (lines, endings) = split
            .into_iter()
            .map(|(line, ending)| {
                let ending = ending.unwrap_or(line_ending);
                (line.to_string(), ending)
            })
            .unzip();
        Self {
            lines,
            endings,
            line_ending,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Terminator used for lines this document appends.
    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the first line assigning `key`. Later duplicates are ignored.
    #[must_use]
    pub fn find(&self, key: &EntryKey) -> Option<usize> {
        self.lines.iter().position(|line| key.matches_line(line))
    }

    /// Replace the first line for the entry's key in place, or append it.
    pub fn upsert(&mut self, entry: &ConfigEntry) -> UpsertOutcome {
        if let Some(idx) = self.find(entry.key()) {
            self.lines[idx] = entry.render();
            return UpsertOutcome::Replaced { line: idx + 1 };
        }

        // Appended entries follow the last content line.
        while self.ends_with_blank_line() {
            self.lines.pop();
            self.endings.pop();
        }
        self.lines.push(entry.render());
        self.endings.push(self.line_ending);
        UpsertOutcome::Appended {
            line: self.lines.len(),
        }
    }

    /// Serialized text with leading and trailing whitespace removed.
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = String::new();
        let last = self.lines.len().saturating_sub(1);
        let lines = self.lines.iter().zip(&self.endings);
        for (idx, (line, ending)) in lines.enumerate() {
            text.push_str(line);
            if idx < last {
                text.push_str(ending.as_str());
            }
        }
        text.trim().to_string()
    }

    fn ends_with_blank_line(&self) -> bool {
        self.lines.last().is_some_and(|line| line.trim().is_empty())
    }
}
