use regex::Regex;
use thiserror::Error;

use spendview_core::Transaction;

use crate::settings::{AccountSettings, CategoryMapping};

/// Labels longer than this are cut and suffixed with `...`.
pub const MAX_LABEL_CHARS: usize = 30;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Invalid noise pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Description cleaning engine for one account: ordered noise stripping,
/// ordered category relabeling, then truncation.
pub struct CleanEngine {
    patterns: Vec<Regex>,
    rules: Vec<CategoryMapping>,
}

impl CleanEngine {
    /// Compiles the account's noise patterns up front. An invalid pattern
    /// fails construction; the whole ordered list is load-bearing.
    pub fn new(settings: &AccountSettings) -> Result<Self, CleanError> {
        let patterns = settings
            .noise_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| CleanError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CleanEngine {
            patterns,
            rules: settings.categories.clone(),
        })
    }

    /// Returns new records with cleaned labels; the input is never mutated.
    pub fn clean(&self, records: &[Transaction]) -> Vec<Transaction> {
        records
            .iter()
            .map(|tx| tx.with_description(self.clean_description(&tx.description)))
            .collect()
    }

    pub fn clean_description(&self, raw: &str) -> String {
        let stripped = self.strip_noise(raw);
        truncate_label(self.categorize(&stripped))
    }

    /// Each pattern is applied to the previous pattern's output, with a
    /// whitespace trim after every removal.
    fn strip_noise(&self, raw: &str) -> String {
        let mut text = raw.to_string();
        for pattern in &self.patterns {
            text = pattern.replace_all(&text, "").trim().to_string();
        }
        text
    }

    /// Rules are checked in order against the stripped text; every match
    /// overwrites the label, so the last matching trigger wins. A text
    /// matching no trigger passes through unchanged.
    fn categorize<'a>(&'a self, stripped: &'a str) -> &'a str {
        let mut label = stripped;
        for rule in &self.rules {
            if stripped.contains(&rule.trigger) {
                label = &rule.label;
            }
        }
        label
    }
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let cut: String = label.chars().take(MAX_LABEL_CHARS).collect();
        format!("{cut}...")
    } else {
        label.to_string()
    }
}
