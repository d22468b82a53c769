use serde::{Deserialize, Serialize};

/// A labelled span of text found by an entity extractor, e.g. `MONEY` / `$20`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntitySpan {
    pub label: String,
    pub text: String,
}

impl EntitySpan {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}
