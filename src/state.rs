//! Search-session state
//!
//! Plain model types for the search UI: the toggles that shape a query and
//! the "has searched at least once" flag that gates the empty-results view.

use serde::{Deserialize, Serialize};

/// Toggles that widen how a search query is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Widen matches to the whole family of a matched entry
    pub use_families: bool,
    /// Also match known synonyms of the query
    pub use_synonyms: bool,
}

/// Per-session search UI state
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    /// Latched when the first search is submitted; never resets in-session
    pub has_searched_once: bool,
    /// Current query toggles
    pub params: SearchParams,
}

impl SearchSession {
    /// Create a fresh session with default toggles
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a search has been submitted
    pub fn mark_searched(&mut self) {
        self.has_searched_once = true;
    }
}
