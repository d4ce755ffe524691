use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a fact's text, in characters.
pub const MAX_TEXT_LEN: usize = 200;

/// Hard cap on how many facts a single read returns.
pub const FACT_LIST_CAP: usize = 1000;

/// The fixed set of topical tags a fact can carry, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Science,
    Finance,
    Society,
    Entertainment,
    Health,
    History,
    News,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Technology,
        Category::Science,
        Category::Finance,
        Category::Society,
        Category::Entertainment,
        Category::Health,
        Category::History,
        Category::News,
    ];

    /// Display color for category tags and filter buttons.
    pub fn color(self) -> &'static str {
        match self {
            Category::Technology => "#3b82f6",
            Category::Science => "#16a34a",
            Category::Finance => "#ef4444",
            Category::Society => "#eab308",
            Category::Entertainment => "#db2777",
            Category::Health => "#14b8a6",
            Category::History => "#f97316",
            Category::News => "#8b5cf6",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Science => "science",
            Category::Finance => "finance",
            Category::Society => "society",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::History => "history",
            Category::News => "news",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The active list filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    /// The category filter this selection implies, if any.
    pub fn filter(self) -> Option<Category> {
        match self {
            CategorySelection::All => None,
            CategorySelection::Only(c) => Some(c),
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str("all"),
            CategorySelection::Only(c) => c.fmt(f),
        }
    }
}

impl FromStr for CategorySelection {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategorySelection::All)
        } else {
            Ok(CategorySelection::Only(s.parse()?))
        }
    }
}

/// A single sourced, categorized statement with three vote counters.
///
/// Identity (`id`) is assigned by the remote store; vote counters only ever
/// grow, by exactly one per accepted vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub id: i64,
    pub text: String,
    pub source: String,
    pub category: Category,
    #[serde(rename = "votesInteresting")]
    pub votes_interesting: u32,
    #[serde(rename = "votesMindblowing")]
    pub votes_mindblowing: u32,
    #[serde(rename = "votesFalse")]
    pub votes_false: u32,
    #[serde(rename = "createdIn")]
    pub created_in: i32,
}

impl Fact {
    /// A fact is disputed when false votes outweigh interesting + mindblowing
    /// combined. Derived on every read, never persisted.
    pub fn is_disputed(&self) -> bool {
        self.votes_interesting + self.votes_mindblowing < self.votes_false
    }
}

/// A validated candidate fact, ready to insert. Vote counters and the
/// creation year are defaulted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFact {
    pub text: String,
    pub source: String,
    pub category: Category,
}

/// Which of the three vote counters a vote action increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteKind {
    Interesting,
    Mindblowing,
    False,
}

impl VoteKind {
    /// Wire column name in the `facts` table.
    pub fn column(self) -> &'static str {
        match self {
            VoteKind::Interesting => "votesInteresting",
            VoteKind::Mindblowing => "votesMindblowing",
            VoteKind::False => "votesFalse",
        }
    }
}

/// Current calendar year, used for `createdIn` at submission time.
pub fn current_year() -> i32 {
    Utc::now().year()
}
