use log::{debug, warn};

use crate::markup;
use crate::page::{AlertSink, Field, Page, Region, Role};
use crate::types::WidgetError;

/// What a submission did. `MissingInput` is the only failure mode and is
/// surfaced to the user inline or via an alert, never as an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    MissingInput,
}

//
// ---------- Resource Search ----------
//
/// Renders a mock resource listing for a domain/location pair. Missing input is
/// reported inline next to the form.
#[derive(Debug, Clone)]
pub struct ResourceSearch {
    domain: Field,
    location: Field,
    results: Region,
    error: Region,
}

impl ResourceSearch {
    /// Binds against the page; fails if any required role is absent, in which
    /// case the caller skips wiring this feature.
    pub fn bind(page: &Page) -> Result<Self, WidgetError> {
        Ok(Self {
            domain: page.field(Role::DomainSelect)?,
            location: page.field(Role::LocationInput)?,
            results: page.region(Role::ResourceResults)?,
            error: page.region(Role::ResourceError)?,
        })
    }

    pub fn submit(&self) -> Outcome {
        let domain = self.domain.trimmed();
        let location = self.location.trimmed();

        if domain.is_empty() || location.is_empty() {
            warn!("resource search submitted without domain or location");
            self.error
                .replace(&markup::inline_error("Please select a category and enter a location."));
            return Outcome::MissingInput;
        }

        debug!("rendering mock resources for {domain} in {location}");
        self.error.clear();
        self.results.replace(&markup::results_header(&domain, &location));
        self.results.scroll_into_view();
        Outcome::Rendered
    }
}

//
// ---------- Video Search ----------
//
/// Renders a mock video listing for a query term. Missing input is reported
/// through a blocking alert rather than inline, matching the page it was
/// lifted from.
#[derive(Debug, Clone)]
pub struct VideoSearch {
    query: Field,
    results: Region,
    alerts: AlertSink,
}

impl VideoSearch {
    pub fn bind(page: &Page) -> Result<Self, WidgetError> {
        Ok(Self {
            query: page.field(Role::VideoQuery)?,
            results: page.region(Role::VideoResults)?,
            alerts: page.alert_sink(),
        })
    }

    /// Searches for `explicit` when given, otherwise for the field's trimmed
    /// value.
    pub fn search(&self, explicit: Option<&str>) -> Outcome {
        let term = match explicit {
            Some(term) => term.trim().to_string(),
            None => self.query.trimmed(),
        };

        if term.is_empty() {
            warn!("video search submitted without a query");
            self.alerts.raise("Please enter a search term.");
            return Outcome::MissingInput;
        }

        debug!("rendering mock videos for {term}");
        self.results.replace(&markup::video_placeholder(&term));
        Outcome::Rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource_page() -> Page {
        Page::new()
            .with_field(Role::DomainSelect)
            .with_field(Role::LocationInput)
            .with_region(Role::ResourceResults, true)
            .with_region(Role::ResourceError, true)
    }

    fn video_page() -> Page {
        Page::new()
            .with_field(Role::VideoQuery)
            .with_region(Role::VideoResults, true)
    }

    #[test]
    fn blank_location_shows_inline_error_and_leaves_results_alone() {
        let page = resource_page();
        let search = ResourceSearch::bind(&page).unwrap();
        page.field(Role::DomainSelect).unwrap().set("Pension");
        page.field(Role::LocationInput).unwrap().set("   ");

        assert_eq!(search.submit(), Outcome::MissingInput);
        assert!(page.region(Role::ResourceResults).unwrap().is_empty());
        assert!(
            page.region(Role::ResourceError)
                .unwrap()
                .markup()
                .contains("Please select a category")
        );
    }

    #[test]
    fn valid_submission_renders_header_and_scrolls() {
        let page = resource_page();
        let search = ResourceSearch::bind(&page).unwrap();
        page.field(Role::DomainSelect).unwrap().set("Pension");
        page.field(Role::LocationInput).unwrap().set("Austin");

        assert_eq!(search.submit(), Outcome::Rendered);
        let results = page.region(Role::ResourceResults).unwrap();
        assert!(
            results
                .markup()
                .contains("Displaying mock results for Pension in Austin")
        );
        assert_eq!(results.last_scroll(), Some(crate::page::Scroll::IntoView));
        assert!(page.region(Role::ResourceError).unwrap().is_empty());
    }

    #[test]
    fn resubmission_clears_a_previous_inline_error() {
        let page = resource_page();
        let search = ResourceSearch::bind(&page).unwrap();
        search.submit();
        assert!(!page.region(Role::ResourceError).unwrap().is_empty());

        page.field(Role::DomainSelect).unwrap().set("Education");
        page.field(Role::LocationInput).unwrap().set("Dallas");
        assert_eq!(search.submit(), Outcome::Rendered);
        assert!(page.region(Role::ResourceError).unwrap().is_empty());
    }

    #[test]
    fn search_values_are_escaped_in_the_results_region() {
        let page = resource_page();
        let search = ResourceSearch::bind(&page).unwrap();
        page.field(Role::DomainSelect).unwrap().set("<b>Pension</b>");
        page.field(Role::LocationInput).unwrap().set("Austin");

        search.submit();
        let markup = page.region(Role::ResourceResults).unwrap().markup();
        assert!(!markup.contains("<b>"));
        assert!(markup.contains("&lt;b&gt;Pension&lt;/b&gt;"));
    }

    #[test]
    fn empty_video_query_alerts_and_leaves_container_unchanged() {
        let page = video_page();
        let search = VideoSearch::bind(&page).unwrap();

        assert_eq!(search.search(None), Outcome::MissingInput);
        assert!(page.region(Role::VideoResults).unwrap().is_empty());
        assert_eq!(page.alerts(), vec!["Please enter a search term."]);
    }

    #[test]
    fn explicit_query_wins_over_the_field() {
        let page = video_page();
        let search = VideoSearch::bind(&page).unwrap();
        page.field(Role::VideoQuery).unwrap().set("swimming");

        assert_eq!(search.search(Some("yoga")), Outcome::Rendered);
        assert!(
            page.region(Role::VideoResults)
                .unwrap()
                .markup()
                .contains("Showing mock video results for \"yoga\"...")
        );
    }

    #[test]
    fn field_query_is_used_when_no_explicit_term_given() {
        let page = video_page();
        let search = VideoSearch::bind(&page).unwrap();
        page.field(Role::VideoQuery).unwrap().set("  yoga  ");

        assert_eq!(search.search(None), Outcome::Rendered);
        assert!(
            page.region(Role::VideoResults)
                .unwrap()
                .markup()
                .contains("Showing mock video results for \"yoga\"...")
        );
        assert!(page.alerts().is_empty());
    }

    #[test]
    fn binding_fails_on_a_page_without_the_form() {
        let page = video_page();
        assert!(ResourceSearch::bind(&page).is_err());
        assert!(VideoSearch::bind(&page).is_ok());
    }
}
