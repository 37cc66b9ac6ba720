//! New-alert detection across successive polls of the alert list.
//!
//! An alert is new when its id was absent from the previous fetch. Comparing
//! id sets rather than only the newest id keeps the result correct when the
//! recognition process back-fills older events or the list is reordered.
//!
//! The server does not use this itself. Dashboard clients that poll
//! `GET /api/alerts` hold one [`AlertFeed`] each and badge whatever
//! [`AlertFeed::observe`] returns.

use std::collections::HashSet;

use crate::alert_enrichment::EnrichedAlert;

/// Tracks the ids seen in the most recent fetch.
#[derive(Debug, Default, Clone)]
pub struct AlertFeed {
    previous: Option<HashSet<String>>,
}

impl AlertFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetch and return the ids not present in the previous one, in
    /// fetch order. The first fetch is a baseline and reports nothing.
    pub fn observe(&mut self, latest: &[EnrichedAlert]) -> Vec<String> {
        self.observe_ids(latest.iter().map(|a| a.id.as_str()))
    }

    /// Same as [`AlertFeed::observe`] for a bare sequence of ids.
    pub fn observe_ids<'a>(&mut self, latest: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let ids: Vec<&str> = latest.into_iter().collect();

        let fresh = match &self.previous {
            Some(prev) => {
                let mut emitted = HashSet::new();
                ids.iter()
                    .filter(|id| !prev.contains(**id) && emitted.insert(**id))
                    .map(|id| id.to_string())
                    .collect()
            }
            None => Vec::new(),
        };

        self.previous = Some(ids.into_iter().map(str::to_string).collect());
        fresh
    }

    /// Whether at least one fetch has been observed.
    pub fn has_baseline(&self) -> bool {
        self.previous.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fetch_is_baseline() {
        let mut feed = AlertFeed::new();
        assert!(!feed.has_baseline());
        assert!(feed.observe_ids(["a", "b"]).is_empty());
        assert!(feed.has_baseline());
    }

    #[test]
    fn reports_ids_missing_from_previous_fetch() {
        let mut feed = AlertFeed::new();
        feed.observe_ids(["b", "a"]);
        assert_eq!(feed.observe_ids(["c", "b", "a"]), vec!["c"]);
        assert!(feed.observe_ids(["c", "b", "a"]).is_empty());
    }

    #[test]
    fn backfilled_alert_below_newest_is_detected() {
        let mut feed = AlertFeed::new();
        feed.observe_ids(["c", "a"]);
        // Newest id unchanged, but "b" arrived out of order.
        assert_eq!(feed.observe_ids(["c", "b", "a"]), vec!["b"]);
    }

    #[test]
    fn reordering_alone_is_not_new() {
        let mut feed = AlertFeed::new();
        feed.observe_ids(["a", "b", "c"]);
        assert!(feed.observe_ids(["c", "a", "b"]).is_empty());
    }

    #[test]
    fn comparison_is_against_previous_fetch_only() {
        let mut feed = AlertFeed::new();
        feed.observe_ids(["a", "b"]);
        feed.observe_ids(["b"]);
        assert_eq!(feed.observe_ids(["a", "b"]), vec!["a"]);
    }

    #[test]
    fn empty_previous_fetch_makes_everything_new() {
        let mut feed = AlertFeed::new();
        feed.observe_ids(std::iter::empty());
        assert_eq!(feed.observe_ids(["x", "y"]), vec!["x", "y"]);
    }
}
