//! Search-match highlighting for UI text
//!
//! Wraps every case-insensitive occurrence of one or more query strings in
//! `<mark>…</mark>` so a UI layer can style the matches, plus the small
//! search-session state that accompanies the highlighter.

pub mod highlight;
pub mod state;

// Re-export commonly used items
pub use highlight::{highlight, highlight_all};
pub use state::{SearchParams, SearchSession};
