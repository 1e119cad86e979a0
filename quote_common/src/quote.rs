//! Quote record shared by every program in the workspace.
//!
//! A `Quote` is what the remote quotes API returns (minus any extra fields), what the
//! store persists, and what the API and plotter read back.
use serde::{Deserialize, Serialize};

/// A single quote with its numeric id and author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Identifier assigned by the quotes API.
    pub id: u64,
    /// Quote text.
    pub quote: String,
    /// Author name as reported by the API.
    pub author: String,
}

impl Quote {
    /// Creates a new quote record.
    pub fn new(id: u64, quote: &str, author: &str) -> Self {
        Quote {
            id,
            quote: String::from(quote),
            author: String::from(author),
        }
    }

    /// Case-insensitive author comparison.
    pub fn is_by(&self, author: &str) -> bool {
        self.author.to_lowercase() == author.to_lowercase()
    }
}
