//! FAQ accordion state.
//!
//! Each entry opens and closes on its own; opening one never collapses
//! another. The state round-trips through the query string (`?faq=0,2`), so
//! every question renders as a plain link to the page with that entry toggled
//! and the accordion works without client scripting.

use std::collections::BTreeSet;

/// Query parameter carrying the open entries.
pub const FAQ_QUERY_PARAM: &str = "faq";

/// Indices of the expanded FAQ entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: BTreeSet<usize>,
}

impl FaqAccordion {
    /// Parse a `faq` query value such as `0,2`.
    ///
    /// Indices at or beyond `len` and anything that is not a number are
    /// dropped.
    #[must_use]
    pub fn from_query(value: Option<&str>, len: usize) -> Self {
        let open = value
            .unwrap_or_default()
            .split(',')
            .filter_map(|part| part.trim().parse::<usize>().ok())
            .filter(|&index| index < len)
            .collect();
        Self { open }
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn open(&mut self, index: usize) {
        self.open.insert(index);
    }

    pub fn close(&mut self, index: usize) {
        self.open.remove(&index);
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.open.remove(&index) {
            self.open.insert(index);
        }
    }

    /// The state with `index` toggled, leaving `self` untouched.
    #[must_use]
    pub fn toggled(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.toggle(index);
        next
    }

    /// Serialize for the query string: ascending, comma-separated.
    #[must_use]
    pub fn to_query(&self) -> String {
        self.open
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Page link that renders this state and scrolls to entry `index`.
    #[must_use]
    pub fn href(&self, index: usize) -> String {
        let query = self.to_query();
        if query.is_empty() {
            format!("/#faq-{index}")
        } else {
            format!("/?{FAQ_QUERY_PARAM}={query}#faq-{index}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_sets_expanded() {
        let mut accordion = FaqAccordion::default();
        assert!(!accordion.is_open(1));
        accordion.open(1);
        assert!(accordion.is_open(1));
    }

    #[test]
    fn test_entries_are_independent() {
        let mut accordion = FaqAccordion::default();
        accordion.open(0);
        accordion.open(3);
        assert!(accordion.is_open(0));
        assert!(accordion.is_open(3));

        accordion.close(3);
        assert!(accordion.is_open(0));
        assert!(!accordion.is_open(3));
    }

    #[test]
    fn test_toggle() {
        let mut accordion = FaqAccordion::default();
        accordion.toggle(2);
        assert!(accordion.is_open(2));
        accordion.toggle(2);
        assert!(!accordion.is_open(2));
    }

    #[test]
    fn test_from_query_ignores_garbage_and_out_of_range() {
        let accordion = FaqAccordion::from_query(Some("2, 0,x,,9,-1"), 5);
        assert_eq!(accordion.to_query(), "0,2");
        assert_eq!(FaqAccordion::from_query(None, 5), FaqAccordion::default());
    }

    #[test]
    fn test_href_toggles_only_its_entry() {
        let accordion = FaqAccordion::from_query(Some("0"), 5);
        assert_eq!(accordion.toggled(1).href(1), "/?faq=0,1#faq-1");
        assert_eq!(accordion.toggled(0).href(0), "/#faq-0");
        assert!(accordion.is_open(0));
    }
}
