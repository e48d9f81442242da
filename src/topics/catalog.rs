//! Topic values and the in-memory catalog.

use serde::{Deserialize, Serialize};

use crate::error::{LiarError, Result};

/// One round's secret: the question and the numeric range answers fall in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TopicRecord")]
pub struct Topic {
    question: String,
    range: String,
}

/// Unvalidated wire shape of a `Topic`.
#[derive(Deserialize)]
struct TopicRecord {
    question: String,
    range: String,
}

impl TryFrom<TopicRecord> for Topic {
    type Error = LiarError;

    fn try_from(record: TopicRecord) -> Result<Self> {
        Topic::new(record.question, record.range)
    }
}

/// Names a field of `Topic` in validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicField {
    Question,
    Range,
}

impl std::fmt::Display for TopicField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopicField::Question => write!(f, "question"),
            TopicField::Range => write!(f, "range"),
        }
    }
}

impl Topic {
    /// Create a topic. Both fields must contain something other than whitespace.
    pub fn new(question: impl Into<String>, range: impl Into<String>) -> Result<Self> {
        let question = question.into();
        let range = range.into();

        if question.trim().is_empty() {
            return Err(LiarError::EmptyTopicField(TopicField::Question));
        }
        if range.trim().is_empty() {
            return Err(LiarError::EmptyTopicField(TopicField::Range));
        }

        Ok(Self { question, range })
    }

    /// The secret question. Withheld from the Liar.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The range hint, e.g. "1~100". Shown to everyone.
    #[must_use]
    pub fn range(&self) -> &str {
        &self.range
    }
}

/// Ordered list of topics, selected by position.
///
/// Serializes as a plain list of `{question, range}` records.
///
/// ```
/// use liar_game::topics::TopicCatalog;
///
/// let mut catalog = TopicCatalog::new();
/// catalog.add("How many stairs in your building?", "1~300").unwrap();
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.get(0).unwrap().range(), "1~300");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
}

impl TopicCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a topic. Returns its position.
    pub fn add(&mut self, question: impl Into<String>, range: impl Into<String>) -> Result<usize> {
        let topic = Topic::new(question, range)?;
        self.topics.push(topic);
        Ok(self.topics.len() - 1)
    }

    /// Get the topic at `index`.
    pub fn get(&self, index: usize) -> Result<&Topic> {
        self.topics.get(index).ok_or(LiarError::TopicNotFound {
            index,
            len: self.topics.len(),
        })
    }

    /// Number of topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Iterate over topics in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }
}

impl FromIterator<Topic> for TopicCatalog {
    fn from_iter<I: IntoIterator<Item = Topic>>(iter: I) -> Self {
        Self {
            topics: iter.into_iter().collect(),
        }
    }
}
