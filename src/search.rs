use crate::models::EventRecord;

/// A case-insensitive substring query over name, location and category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    raw: String,
    needle: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Query {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Query { raw, needle }
    }

    /// The query as typed, for echoing back into the search box.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn matches(&self, event: &EventRecord) -> bool {
        event.matches(&self.needle)
    }

    /// Matching events in catalog order.
    pub fn apply<'a>(&self, catalog: &'a [EventRecord]) -> Vec<&'a EventRecord> {
        catalog.iter().filter(|event| self.matches(event)).collect()
    }
}

pub fn filter_events<'a>(catalog: &'a [EventRecord], query: &str) -> Vec<&'a EventRecord> {
    Query::new(query).apply(catalog)
}

#[cfg(test)]
mod tests {
    use super::{filter_events, Query};
    use crate::catalog::catalog;

    fn ids(query: &str) -> Vec<u32> {
        filter_events(catalog(), query)
            .into_iter()
            .map(|event| event.id)
            .collect()
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        let all: Vec<_> = catalog().iter().collect();
        assert_eq!(filter_events(catalog(), ""), all);
    }

    #[test]
    fn music_matches_category_and_name() {
        assert_eq!(ids("music"), vec![1, 3]);
        assert_eq!(ids("MUSIC"), vec![1, 3]);
    }

    #[test]
    fn islamabad_matches_locations() {
        assert_eq!(ids("islamabad"), vec![1, 3, 4, 5]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(ids("zzz-no-match").is_empty());
    }

    #[test]
    fn description_is_not_searched() {
        // "cherry blossoms" only appears in the Pilates description.
        assert!(ids("cherry").is_empty());
    }

    #[test]
    fn query_is_not_trimmed() {
        assert_eq!(ids(" music "), vec![1]);
        assert_eq!(ids("fest"), vec![1, 3]);
        assert_eq!(ids("fest "), vec![3]);
    }

    #[test]
    fn every_result_contains_the_query() {
        for query in &["a", "Park", "fEST", "in", "2025", "-9", "food"] {
            let needle = query.to_lowercase();
            for event in filter_events(catalog(), query) {
                assert!(
                    event.name.to_lowercase().contains(&needle)
                        || event.location.to_lowercase().contains(&needle)
                        || event.category.to_lowercase().contains(&needle),
                    "{:?} does not contain {:?}",
                    event,
                    query
                );
            }
        }
    }

    #[test]
    fn keeps_raw_text() {
        let query = Query::new("Pilates");
        assert_eq!(query.as_str(), "Pilates");
        assert!(!query.is_empty());
        assert!(Query::default().is_empty());
    }
}
