//! Search-match highlighting
//!
//! Builds one case-insensitive pattern from the caller's query strings and
//! wraps every match in `<mark>…</mark>` in a single replace pass. The
//! matched text keeps its original casing and is not HTML-escaped; the
//! literal tags are the only injected markup.

use regex::RegexBuilder;

/// Wrap every case-insensitive occurrence of `query` in `<mark>…</mark>`.
///
/// The query is trimmed first; a query that is empty after trimming leaves
/// `text` unchanged, as does a query with no occurrence in `text`.
pub fn highlight(text: &str, query: &str) -> String {
    highlight_all(text, &[query])
}

/// Wrap every case-insensitive occurrence of any non-blank query in
/// `<mark>…</mark>`.
///
/// Queries are trimmed and blank entries dropped; if none survive, `text` is
/// returned unchanged. The surviving queries are joined into one alternation
/// and applied in a single pass: at each position the earliest-listed query
/// that matches wins, and scanning resumes after the match, so matches never
/// overlap.
pub fn highlight_all<S: AsRef<str>>(text: &str, queries: &[S]) -> String {
    let escaped: Vec<String> = queries
        .iter()
        .map(|q| q.as_ref().trim())
        .filter(|q| !q.is_empty())
        .map(regex::escape)
        .collect();

    if escaped.is_empty() {
        return text.to_string();
    }

    let pattern = format!("({})", escaped.join("|"));
    tracing::trace!(%pattern, "built highlight pattern");

    let matcher = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped queries always form a valid pattern");

    matcher.replace_all(text, "<mark>${1}</mark>").into_owned()
}
