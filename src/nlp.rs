//! Entity extraction capability.
//!
//! The assistant asks an [`EntityExtractor`] for labelled spans (reported back
//! to the client) and for noun chunks (used to pull a product name out of
//! "find product ..." messages). The implementation is chosen once at startup;
//! when the rule set is unavailable a [`NullExtractor`] answers with empty
//! results instead of failing requests.

use std::sync::Arc;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::entity::EntitySpan;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("Invalid entity pattern {label}: {source}")]
    Pattern {
        label: &'static str,
        source: regex::Error,
    },
}

/// Given text, return labelled spans and noun chunks. Never fails.
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<EntitySpan>;
    fn noun_chunks(&self, text: &str) -> Vec<String>;
}

/// Which extractor to build at startup.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    #[default]
    Rules,
    None,
}

/// Build the configured extractor, degrading to [`NullExtractor`] when the
/// rule set cannot be compiled.
pub fn build_extractor(kind: ExtractorKind) -> Arc<dyn EntityExtractor> {
    match kind {
        ExtractorKind::None => Arc::new(NullExtractor),
        ExtractorKind::Rules => match RuleExtractor::new() {
            Ok(extractor) => Arc::new(extractor),
            Err(e) => {
                log::warn!("Entity extractor unavailable, falling back to no-op: {e}");
                Arc::new(NullExtractor)
            }
        },
    }
}

/// Extractor that finds nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullExtractor;

impl EntityExtractor for NullExtractor {
    fn extract(&self, _text: &str) -> Vec<EntitySpan> {
        Vec::new()
    }

    fn noun_chunks(&self, _text: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Entity patterns in priority order; an earlier label wins on overlap.
const PATTERNS: &[(&str, &str)] = &[
    ("EMAIL", r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"),
    (
        "MONEY",
        r"\$\s?\d+(?:,\d{3})*(?:\.\d+)?|\b\d+(?:\.\d+)?\s?(?i:dollars|usd|euros?|eur)\b",
    ),
    ("PERCENT", r"\b\d+(?:\.\d+)?(?:%|\s?(?i:percent)\b)"),
    ("DATE", r"\b\d{4}-\d{2}-\d{2}\b|\b\d{1,2}/\d{1,2}/\d{4}\b"),
    ("CARDINAL", r"\b\d+(?:\.\d+)?\b"),
    ("PROPN", r"\b[A-Z][A-Za-z0-9]*(?:\s+[A-Z][A-Za-z0-9]*)*\b"),
];

/// Words that never belong to a noun chunk.
const STOP_WORDS: &[&str] = &[
    "a", "about", "all", "an", "and", "any", "are", "as", "at", "be", "been", "but", "by", "can",
    "could", "did", "display", "do", "does", "each", "every", "find", "for", "from", "get", "give",
    "had", "has", "have", "her", "here", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "like", "list", "look", "many", "may", "me", "much", "my", "named", "called", "no", "not",
    "of", "on", "or", "our", "please", "search", "show", "so", "some", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "to", "up", "us", "was",
    "we", "were", "what", "when", "where", "which", "who", "why", "will", "with", "would", "you",
    "your",
];

/// Regex rules standing in for a statistical model.
pub struct RuleExtractor {
    patterns: Vec<(&'static str, Regex)>,
}

impl RuleExtractor {
    pub fn new() -> Result<Self, ExtractorError> {
        let patterns = PATTERNS
            .iter()
            .map(|&(label, pattern)| {
                Regex::new(pattern)
                    .map(|regex| (label, regex))
                    .map_err(|source| ExtractorError::Pattern { label, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }
}

/// Offset of the first word, which is capitalised by convention rather than
/// because it names something.
fn sentence_start(text: &str) -> usize {
    text.len() - text.trim_start().len()
}

impl EntityExtractor for RuleExtractor {
    fn extract(&self, text: &str) -> Vec<EntitySpan> {
        let first_word = sentence_start(text);
        let mut accepted: Vec<(usize, usize, &'static str)> = Vec::new();

        for (label, regex) in &self.patterns {
            let label = *label;
            for found in regex.find_iter(text) {
                let (mut start, end) = (found.start(), found.end());
                if label == "PROPN" && start == first_word {
                    // Drop the sentence-initial word, keep any capitalised tail.
                    match text[start..end].find(char::is_whitespace) {
                        Some(offset) => {
                            start += offset;
                            start += text[start..end].len() - text[start..end].trim_start().len();
                        }
                        None => continue,
                    }
                }
                let overlaps = accepted.iter().any(|&(s, e, _)| start < e && s < end);
                if !overlaps {
                    accepted.push((start, end, label));
                }
            }
        }

        accepted.sort_by_key(|&(start, _, _)| start);
        accepted
            .into_iter()
            .map(|(start, end, label)| EntitySpan::new(label, &text[start..end]))
            .collect()
    }

    fn noun_chunks(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        let mut flush = |current: &mut Vec<&str>| {
            if !current.is_empty() {
                chunks.push(current.join(" "));
                current.clear();
            }
        };

        for raw in text.split_whitespace() {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
            let ends_clause = raw.ends_with([',', ';', ':', '?', '!', '.']);

            if word.is_empty() || STOP_WORDS.contains(&word.to_lowercase().as_str()) {
                flush(&mut current);
                continue;
            }

            // "product Widget": a common noun followed by a proper one starts a new phrase.
            let starts_upper = word.chars().next().is_some_and(char::is_uppercase);
            let previous_lower = current
                .last()
                .and_then(|w| w.chars().next())
                .is_some_and(char::is_lowercase);
            if starts_upper && previous_lower {
                flush(&mut current);
            }

            current.push(word);
            if ends_clause {
                flush(&mut current);
            }
        }
        flush(&mut current);

        chunks
    }
}
