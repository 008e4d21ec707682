//! Find / Replace engine
//!
//! Literal, case-sensitive matching only. `find_next` relies on the surface's
//! native forward search and wraps to the document start at most once per
//! call. `replace_all` rewrites the whole content in one left-to-right pass.
//!
//! An empty find string never matches. Literal substring semantics would
//! otherwise insert the replacement between every character.

use crate::dialogs::Dialogs;
use crate::error::Error;
use crate::surface::TextSurface;

/// The two inputs of a Find/Replace session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindReplaceQuery {
    pub find_text: String,
    pub replace_text: String,
}

impl FindReplaceQuery {
    pub fn new(find_text: impl Into<String>, replace_text: impl Into<String>) -> Self {
        Self {
            find_text: find_text.into(),
            replace_text: replace_text.into(),
        }
    }
}

/// Result of a `find_next` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Match found after the cursor.
    Found,
    /// Match found after restarting from the document start.
    Wrapped,
    NotFound,
}

/// Result of a `replace_one` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// Whether a selection was replaced.
    pub replaced: bool,
    /// The follow-up search.
    pub next: SearchOutcome,
}

/// Non-overlapping, left-to-right occurrences of `needle`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Replace every non-overlapping occurrence of `needle`.
pub fn replace_literal(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }
    haystack.replace(needle, replacement)
}

fn report_miss(dialogs: &mut impl Dialogs, title: &str, needle: &str) {
    let miss = Error::SearchMiss;
    tracing::debug!("{:?}: {}", needle, miss);
    dialogs.inform(title, &miss.to_string());
}

/// Select the next match after the cursor, wrapping to the start once.
///
/// On a full miss the user is told and the original selection is restored.
pub fn find_next(
    surface: &mut impl TextSurface,
    dialogs: &mut impl Dialogs,
    query: &FindReplaceQuery,
) -> SearchOutcome {
    let needle = query.find_text.as_str();
    if surface.find_forward(needle) {
        return SearchOutcome::Found;
    }

    let before = surface.selection();
    surface.move_to_start();
    if surface.find_forward(needle) {
        tracing::debug!("find wrapped to document start");
        return SearchOutcome::Wrapped;
    }

    surface.set_selection(before);
    report_miss(dialogs, "Find", needle);
    SearchOutcome::NotFound
}

/// Replace the current selection, then move on to the next match.
///
/// The caller is expected to have selected a match with [`find_next`]. Without
/// a selection nothing is replaced but the search still runs.
pub fn replace_one(
    surface: &mut impl TextSurface,
    dialogs: &mut impl Dialogs,
    query: &FindReplaceQuery,
) -> ReplaceOutcome {
    let replaced = surface.has_selection();
    if replaced {
        surface.insert_text(&query.replace_text);
    }
    let next = find_next(surface, dialogs, query);
    ReplaceOutcome { replaced, next }
}

/// Replace every occurrence in the document and report the count.
///
/// Returns 0 (and leaves the content untouched) when nothing matched.
pub fn replace_all(
    surface: &mut impl TextSurface,
    dialogs: &mut impl Dialogs,
    query: &FindReplaceQuery,
) -> usize {
    let text = surface.text();
    let count = count_occurrences(&text, &query.find_text);
    if count == 0 {
        report_miss(dialogs, "Replace All", &query.find_text);
        return 0;
    }

    let replaced = replace_literal(&text, &query.find_text, &query.replace_text);
    surface.set_text(&replaced);
    tracing::debug!("replaced {} occurrences of {:?}", count, query.find_text);
    dialogs.inform("Replace All", &format!("Replaced {count} occurrences."));
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::RecordingDialogs;
    use crate::surface::MemorySurface;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_count_is_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("aaa", "aa"), 1);
        assert_eq!(count_occurrences("Foo foo", "foo"), 1);
        assert_eq!(count_occurrences("anything", ""), 0);
    }

    #[test]
    fn test_replace_literal_ignores_regex_syntax() {
        assert_eq!(replace_literal("a.b.c", ".", "-"), "a-b-c");
        assert_eq!(replace_literal("x*y", "*", "+"), "x+y");
        assert_eq!(replace_literal("abc", "", "!"), "abc");
    }

    #[test]
    fn test_replace_all_scenario() {
        let mut surface = MemorySurface::with_text("foo bar foo");
        let mut dialogs = RecordingDialogs::new();
        let query = FindReplaceQuery::new("foo", "baz");

        let count = replace_all(&mut surface, &mut dialogs, &query);

        assert_eq!(count, 2);
        assert_eq!(surface.text(), "baz bar baz");
        assert_eq!(dialogs.last_notice().unwrap().message, "Replaced 2 occurrences.");
    }

    #[test]
    fn test_replace_all_absent_is_noop() {
        let mut surface = MemorySurface::with_text("foo bar foo");
        let mut dialogs = RecordingDialogs::new();
        let query = FindReplaceQuery::new("qux", "baz");

        assert_eq!(replace_all(&mut surface, &mut dialogs, &query), 0);
        assert_eq!(surface.text(), "foo bar foo");
        assert_eq!(dialogs.last_notice().unwrap().message, "Text not found.");
    }

    #[test]
    fn test_replace_all_empty_find_is_noop() {
        let mut surface = MemorySurface::with_text("abc");
        let mut dialogs = RecordingDialogs::new();
        let query = FindReplaceQuery::new("", "-");

        assert_eq!(replace_all(&mut surface, &mut dialogs, &query), 0);
        assert_eq!(surface.text(), "abc");
    }

    #[test]
    fn test_replacement_containing_needle() {
        let mut surface = MemorySurface::with_text("a a");
        let mut dialogs = RecordingDialogs::new();
        let query = FindReplaceQuery::new("a", "aa");

        assert_eq!(replace_all(&mut surface, &mut dialogs, &query), 2);
        assert_eq!(surface.text(), "aa aa");
    }

    #[test]
    fn test_find_next_wraps_once() {
        let mut surface = MemorySurface::with_text("needle in a haystack");
        surface.set_selection(12..12);
        let mut dialogs = RecordingDialogs::new();
        let query = FindReplaceQuery::new("needle", "");

        assert_eq!(find_next(&mut surface, &mut dialogs, &query), SearchOutcome::Wrapped);
        assert_eq!(surface.selection(), 0..6);

        // Past the only match: wraps again and finds the same one.
        assert_eq!(find_next(&mut surface, &mut dialogs, &query), SearchOutcome::Wrapped);
        assert_eq!(surface.selection(), 0..6);
        assert!(dialogs.notices().is_empty());
    }

    /// Surface that counts forward searches.
    struct CountingSurface {
        inner: MemorySurface,
        searches: usize,
    }

    impl CountingSurface {
        fn with_text(text: &str) -> Self {
            Self {
                inner: MemorySurface::with_text(text),
                searches: 0,
            }
        }
    }

    impl TextSurface for CountingSurface {
        fn text(&self) -> String {
            self.inner.text()
        }
        fn set_text(&mut self, text: &str) {
            self.inner.set_text(text);
        }
        fn selection(&self) -> std::ops::Range<usize> {
            self.inner.selection()
        }
        fn set_selection(&mut self, range: std::ops::Range<usize>) {
            self.inner.set_selection(range);
        }
        fn insert_text(&mut self, text: &str) {
            self.inner.insert_text(text);
        }
        fn undo(&mut self) {
            self.inner.undo();
        }
        fn redo(&mut self) {
            self.inner.redo();
        }
        fn cut(&mut self) {
            self.inner.cut();
        }
        fn copy(&mut self) {
            self.inner.copy();
        }
        fn paste(&mut self) {
            self.inner.paste();
        }
        fn find_forward(&mut self, needle: &str) -> bool {
            self.searches += 1;
            self.inner.find_forward(needle)
        }
    }

    #[test]
    fn test_find_next_searches_at_most_twice() {
        let mut dialogs = RecordingDialogs::new();

        let mut miss = CountingSurface::with_text("nothing here");
        let query = FindReplaceQuery::new("absent", "");
        assert_eq!(find_next(&mut miss, &mut dialogs, &query), SearchOutcome::NotFound);
        assert_eq!(miss.searches, 2);

        let mut wrapped = CountingSurface::with_text("needle in a haystack");
        wrapped.set_selection(12..12);
        let query = FindReplaceQuery::new("needle", "");
        assert_eq!(find_next(&mut wrapped, &mut dialogs, &query), SearchOutcome::Wrapped);
        assert_eq!(wrapped.searches, 2);

        let mut direct = CountingSurface::with_text("needle in a haystack");
        assert_eq!(find_next(&mut direct, &mut dialogs, &query), SearchOutcome::Found);
        assert_eq!(direct.searches, 1);
    }

    #[test]
    fn test_find_next_miss_restores_cursor() {
        let mut surface = MemorySurface::with_text("nothing here");
        surface.set_selection(4..4);
        let mut dialogs = RecordingDialogs::new();
        let query = FindReplaceQuery::new("absent", "");

        assert_eq!(find_next(&mut surface, &mut dialogs, &query), SearchOutcome::NotFound);
        assert_eq!(surface.selection(), 4..4);
        assert_eq!(dialogs.notices().len(), 1);
        assert_eq!(dialogs.last_notice().unwrap().title, "Find");
    }

    #[test]
    fn test_replace_one_walks_matches() {
        let mut surface = MemorySurface::with_text("cat cat cat");
        let mut dialogs = RecordingDialogs::new();
        let query = FindReplaceQuery::new("cat", "dog");

        // No selection yet: only searches.
        let first = replace_one(&mut surface, &mut dialogs, &query);
        assert!(!first.replaced);
        assert_eq!(first.next, SearchOutcome::Found);
        assert_eq!(surface.selection(), 0..3);

        let second = replace_one(&mut surface, &mut dialogs, &query);
        assert!(second.replaced);
        assert_eq!(surface.text(), "dog cat cat");
        assert_eq!(surface.selection(), 4..7);
    }
}
