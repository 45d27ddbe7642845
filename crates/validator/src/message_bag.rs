//! Failure messages grouped by field and rule.
//!
//! A [`MessageBag`] maps `field -> (rule -> message)`. Both levels keep
//! insertion order, so [`MessageBag::first`] always answers with the message of
//! the earliest failing rule.
//!
//! Two ways of combining messages exist and they disagree on precedence:
//!
//! - [`MessageBag::add`] keeps the first non-empty message recorded for a
//!   `(field, rule)` pair.
//! - [`MessageBag::merge`] folds whole bags in, later bags overwriting.
//!
//! # Examples
//!
//! ```
//! use fieldrules_validator::MessageBag;
//!
//! let mut bag = MessageBag::new();
//! bag.add("dob", "Date", "The dob must be a valid date")
//!     .add("dob", "Date", "ignored, dob.Date already has a message");
//!
//! assert_eq!(bag.first("dob"), Some("The dob must be a valid date"));
//! assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["dob"]);
//! ```

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Messages recorded for one field, keyed by rule name.
pub type FieldMessages = IndexMap<String, String>;

/// Insertion-ordered `field -> (rule -> message)` container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBag {
    messages: IndexMap<String, FieldMessages>,
}

impl MessageBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bag by merging `bags` in order; later bags win on collisions.
    #[must_use]
    pub fn merged(bags: impl IntoIterator<Item = Self>) -> Self {
        let mut bag = Self::new();
        bag.merge(bags);
        bag
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Records `message` for `(field, rule)` unless a non-empty message is
    /// already there.
    pub fn add(
        &mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        let rules = self.messages.entry(field.into()).or_default();
        match rules.entry(rule.into()) {
            Entry::Vacant(slot) => {
                slot.insert(message.into());
            }
            Entry::Occupied(mut slot) => {
                if slot.get().is_empty() {
                    slot.insert(message.into());
                }
            }
        }
        self
    }

    /// [`add`](Self::add) with a combined `"field.Rule"` key.
    ///
    /// The key is split on its first dot; both halves must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MalformedMessageKey`] if the key has no
    /// dot or either half is empty.
    pub fn add_dotted(
        &mut self,
        key: &str,
        message: impl Into<String>,
    ) -> Result<&mut Self, ConfigurationError> {
        match key.split_once('.') {
            Some((field, rule)) if !field.is_empty() && !rule.is_empty() => {
                Ok(self.add(field, rule, message))
            }
            _ => Err(ConfigurationError::MalformedMessageKey {
                key: key.to_owned(),
            }),
        }
    }

    /// Folds `bags` into this one, in order.
    ///
    /// Field sub-maps are unioned; a `(field, rule)` present in a later bag
    /// overwrites the earlier message.
    pub fn merge(&mut self, bags: impl IntoIterator<Item = Self>) -> &mut Self {
        for bag in bags {
            for (field, rules) in bag.messages {
                self.messages.entry(field).or_default().extend(rules);
            }
        }
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Fields with at least one recorded message, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(|(_, rules)| !rules.is_empty())
            .map(|(field, _)| field.as_str())
    }

    /// The first message recorded for `field`.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.messages
            .get(field)
            .and_then(|rules| rules.first())
            .map(|(_, message)| message.as_str())
    }

    /// All messages recorded for `field`, keyed by rule.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldMessages> {
        self.messages.get(field)
    }

    /// The message at position `index` for `field`.
    ///
    /// An unknown field yields `""`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::IndexOutOfRange`] if the field is known
    /// and `index` is past its last message.
    pub fn get_at(&self, field: &str, index: usize) -> Result<&str, ConfigurationError> {
        let Some(rules) = self.messages.get(field) else {
            return Ok("");
        };
        rules
            .get_index(index)
            .map(|(_, message)| message.as_str())
            .ok_or_else(|| ConfigurationError::IndexOutOfRange {
                field: field.to_owned(),
                index,
                len: rules.len(),
            })
    }

    /// The message recorded for `(field, rule)`.
    #[must_use]
    pub fn get_rule(&self, field: &str, rule: &str) -> Option<&str> {
        self.messages
            .get(field)
            .and_then(|rules| rules.get(rule))
            .map(String::as_str)
    }

    /// Returns true if `field` has at least one message.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.messages
            .get(field)
            .is_some_and(|rules| !rules.is_empty())
    }

    /// Total number of recorded messages across all fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.values().map(IndexMap::len).sum()
    }

    /// Returns true if no message is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates `(field, rule, message)` triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.messages.iter().flat_map(|(field, rules)| {
            rules
                .iter()
                .map(move |(rule, message)| (field.as_str(), rule.as_str(), message.as_str()))
        })
    }
}

impl From<IndexMap<String, FieldMessages>> for MessageBag {
    fn from(messages: IndexMap<String, FieldMessages>) -> Self {
        Self { messages }
    }
}

impl FromIterator<(String, FieldMessages)> for MessageBag {
    fn from_iter<I: IntoIterator<Item = (String, FieldMessages)>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for MessageBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, rules)) in self.messages.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: \"{{")?;
            for (j, (rule, message)) in rules.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{rule}: {message}")?;
            }
            f.write_str("}\"")?;
        }
        f.write_str("}")
    }
}

// ============================================================================
// TESTS
// ============================================================================
