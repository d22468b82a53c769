//! Keyword intent table.
//!
//! Intents are matched against the lowercased message in table order and the
//! first matching entry wins, so overlapping keywords ("list products" also
//! mentions "product") resolve deterministically.

/// One of the fixed question categories the assistant can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    ListProducts,
    ProductCategories,
    OutOfStock,
    ProductCount,
    Brands,
    ListUsers,
    UserPermissions,
    Suppliers,
    FindProduct,
    DatabaseOverview,
    Help,
    CategoryProducts,
}

/// Substring test applied to a lowercased message.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Every keyword must occur.
    All(&'static [&'static str]),
    /// At least one keyword must occur.
    Any(&'static [&'static str]),
}

impl Trigger {
    pub fn matches(&self, lowercased: &str) -> bool {
        match self {
            Trigger::All(keywords) => keywords.iter().all(|k| lowercased.contains(k)),
            Trigger::Any(keywords) => keywords.iter().any(|k| lowercased.contains(k)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub trigger: Trigger,
}

const fn rule(intent: Intent, trigger: Trigger) -> IntentRule {
    IntentRule { intent, trigger }
}

/// Phrases introducing a category name, e.g. "browse category Tools".
///
/// None of them mentions "product", which would hand the message to the
/// category listing rule first.
pub const CATEGORY_BROWSE_PHRASES: &[&str] = &["browse category", "in category"];

/// Intent rules in priority order.
pub const INTENT_RULES: &[IntentRule] = &[
    rule(Intent::ListProducts, Trigger::All(&["list", "product"])),
    rule(Intent::ProductCategories, Trigger::All(&["product", "category"])),
    rule(Intent::OutOfStock, Trigger::All(&["out of stock"])),
    rule(
        Intent::ProductCount,
        Trigger::Any(&["how many product", "product count"]),
    ),
    rule(Intent::Brands, Trigger::All(&["brand"])),
    rule(Intent::ListUsers, Trigger::All(&["list", "user"])),
    rule(Intent::UserPermissions, Trigger::All(&["user permission"])),
    rule(Intent::Suppliers, Trigger::All(&["supplier"])),
    rule(
        Intent::FindProduct,
        Trigger::Any(&["find product", "search product"]),
    ),
    rule(
        Intent::DatabaseOverview,
        Trigger::Any(&["database", "schema"]),
    ),
    rule(Intent::Help, Trigger::All(&["help"])),
    rule(
        Intent::CategoryProducts,
        Trigger::Any(CATEGORY_BROWSE_PHRASES),
    ),
];

/// Original-case text following the first browse phrase, with surrounding
/// quotes and trailing punctuation removed. `None` when nothing follows.
pub fn category_name(message: &str) -> Option<&str> {
    let (start, phrase) = message.char_indices().find_map(|(i, _)| {
        CATEGORY_BROWSE_PHRASES.iter().find_map(|phrase| {
            message
                .get(i..i + phrase.len())
                .filter(|s| s.eq_ignore_ascii_case(phrase))
                .map(|_| (i, *phrase))
        })
    })?;

    let name = message[start + phrase.len()..]
        .trim()
        .trim_end_matches(['?', '!', '.'])
        .trim_matches(['\'', '"'])
        .trim();
    (!name.is_empty()).then_some(name)
}

/// Classify a message, returning `None` when no rule matches.
pub fn classify(message: &str) -> Option<Intent> {
    let lowercased = message.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.trigger.matches(&lowercased))
        .map(|rule| rule.intent)
}
