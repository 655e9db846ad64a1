use crate::format::{format_date, CategoryStyle};
use crate::models::EventRecord;
use crate::search::Query;
use crate::settings::Site;
use crate::templates;
use crate::Error;

/// Everything a card needs, with display strings worked out up front.
pub struct EventCard<'a> {
    pub event: &'a EventRecord,
    pub date_label: String,
    pub style: CategoryStyle,
}

impl<'a> EventCard<'a> {
    pub fn new(event: &'a EventRecord) -> EventCard<'a> {
        EventCard {
            event,
            date_label: format_date(&event.date),
            style: CategoryStyle::for_category(&event.category),
        }
    }
}

pub struct Listing<'a> {
    pub query: &'a Query,
    pub cards: Vec<EventCard<'a>>,
    pub total: usize,
}

impl<'a> Listing<'a> {
    pub fn new(catalog: &'a [EventRecord], query: &'a Query) -> Listing<'a> {
        let cards = query
            .apply(catalog)
            .into_iter()
            .map(EventCard::new)
            .collect();
        Listing {
            query,
            cards,
            total: catalog.len(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} event{}",
            self.cards.len(),
            self.total,
            if self.total == 1 { "" } else { "s" }
        )
    }
}

/// Renders the full featured-events document for `query`.
pub fn render(site: &Site, catalog: &[EventRecord], query: &Query) -> Result<Vec<u8>, Error> {
    let listing = Listing::new(catalog, query);
    log::debug!(
        "query {:?} matched {} of {} events",
        query.as_str(),
        listing.cards.len(),
        listing.total
    );
    let mut buf = Vec::new();
    templates::page_html(&mut buf, site, &listing).map_err(Error::Render)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn render_to_string(query: &str) -> String {
        let body = render(&Site::default(), catalog(), &Query::new(query)).unwrap();
        String::from_utf8(body).unwrap()
    }

    #[test]
    fn cards_carry_formatted_dates_and_styles() {
        let query = Query::new("cupcakes");
        let listing = Listing::new(catalog(), &query);
        assert_eq!(listing.cards.len(), 1);
        let card = &listing.cards[0];
        assert_eq!(card.event.id, 4);
        assert_eq!(card.date_label, "Wednesday, July 2, 2025");
        assert_eq!(card.style, CategoryStyle::Food);
    }

    #[test]
    fn summary_counts_matches() {
        let query = Query::new("music");
        assert_eq!(
            Listing::new(catalog(), &query).summary(),
            "Showing 2 of 5 events"
        );
    }

    #[test]
    fn full_page_lists_every_event() {
        let page = render_to_string("");
        for event in catalog() {
            assert!(page.contains(&event.name), "missing {}", event.name);
        }
        assert!(page.contains("Sunday, June 15, 2025"));
        assert!(page.contains("badge-purple"));
        assert!(!page.contains("No magical events found"));
    }

    #[test]
    fn no_match_shows_empty_state() {
        let page = render_to_string("zzz-no-match");
        assert!(page.contains("No magical events found"));
        assert!(page.contains("Showing 0 of 5 events"));
        assert!(!page.contains("Register Now"));
    }

    #[test]
    fn query_is_escaped() {
        let page = render_to_string("<script>\"x\"");
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn site_branding_is_used() {
        let site = Site {
            name: "Petal Events".to_owned(),
            copyright_year: 2031,
            ..Site::default()
        };
        let body = render(&site, catalog(), &Query::default()).unwrap();
        let page = String::from_utf8(body).unwrap();
        assert!(page.contains("Petal Events"));
        assert!(page.contains("© 2031 Petal Events"));
    }
}
