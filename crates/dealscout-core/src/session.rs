//! Search interaction state machine.
//!
//! [`SearchSession`] owns everything the search view displays: the query
//! text, the request lifecycle status, the last successful result set and
//! the server's advisory message. All mutation goes through named
//! transition functions; the view layer never touches fields directly.
//!
//! One session lives for one page view. Overlapping searches are not
//! prevented, but each [`begin_search`](SearchSession::begin_search)
//! supersedes all earlier requests: a settle is applied only while its
//! token is still the latest issued one, so a response arriving after a
//! newer search has started is discarded rather than overwriting newer
//! state.

use crate::error::SearchError;
use crate::product::Product;

/// Lifecycle of the current search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchStatus {
    /// No search has been started yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Searching,
    /// The most recent applied settle was a success.
    Succeeded,
    /// The most recent applied settle was a failure.
    Failed,
}

/// Token identifying one issued search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Mutable state of the search interaction, owned by the search view.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: String,
    status: SearchStatus,
    results: Vec<Product>,
    message: Option<String>,
    issued: u64,
}

impl SearchSession {
    /// Fresh session: idle, empty query, no results, no message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text box contents.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current lifecycle status.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Last successfully received result set, in server order.
    pub fn results(&self) -> &[Product] {
        &self.results
    }

    /// Server-supplied advisory text, if any is on screen.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether a request is outstanding.
    pub fn is_searching(&self) -> bool {
        self.status == SearchStatus::Searching
    }

    /// Replace the query with the control's current text.
    ///
    /// Any advisory message on screen refers to an earlier query, so it is
    /// cleared immediately. No request is sent.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.message = None;
    }

    /// Start a search for the current query.
    ///
    /// Clears the previous message, marks the session as searching and
    /// issues a token that supersedes all earlier ones. The caller must
    /// hand the token back on settle.
    pub fn begin_search(&mut self) -> RequestToken {
        self.issued += 1;
        self.status = SearchStatus::Searching;
        self.message = None;
        log::debug!("search #{} started for query {:?}", self.issued, self.query);
        RequestToken(self.issued)
    }

    /// Apply a successful settle.
    ///
    /// The result list replaces the previous one wholesale, in server
    /// order; the message is set from the response (or cleared when the
    /// response carries none). Returns `false` when the token has been
    /// superseded and the settle was discarded.
    pub fn on_search_succeeded(
        &mut self,
        token: RequestToken,
        products: Vec<Product>,
        message: Option<String>,
    ) -> bool {
        if !self.is_latest(token) {
            log::debug!("discarding stale success for search #{}", token.0);
            return false;
        }
        log::debug!("search #{} returned {} products", token.0, products.len());
        self.results = products;
        self.message = message;
        self.status = SearchStatus::Succeeded;
        true
    }

    /// Apply a failed settle.
    ///
    /// Previously shown results are kept and no user-visible message is
    /// set; the failure is logged only. Returns `false` when the token has
    /// been superseded and the settle was discarded.
    pub fn on_search_failed(&mut self, token: RequestToken, error: &SearchError) -> bool {
        if !self.is_latest(token) {
            log::debug!("discarding stale failure for search #{}", token.0);
            return false;
        }
        log::error!("search #{} failed: {}", token.0, error);
        self.status = SearchStatus::Failed;
        true
    }

    fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, sale_price: i64) -> Product {
        Product {
            name: name.to_string(),
            detail_url: format!("https://www.myntra.com/{}/buy", name),
            image_url: None,
            list_price: sale_price,
            discount_percent: 0,
            sale_price,
            source: "myntra".to_string(),
        }
    }

    #[test]
    fn test_fresh_session_is_idle() {
        let session = SearchSession::new();
        assert_eq!(session.status(), SearchStatus::Idle);
        assert!(session.results().is_empty());
        assert_eq!(session.message(), None);
        assert!(!session.is_searching());
    }

    #[test]
    fn test_successful_search() {
        let mut session = SearchSession::new();
        session.set_query("oversized tshirt");

        let token = session.begin_search();
        assert!(session.is_searching());

        let applied = session.on_search_succeeded(
            token,
            vec![product("tee-a", 679), product("tee-b", 999)],
            None,
        );
        assert!(applied);
        assert_eq!(session.status(), SearchStatus::Succeeded);
        assert_eq!(session.results().len(), 2);
        assert_eq!(session.message(), None);
        assert!(!session.is_searching());
    }

    #[test]
    fn test_results_replaced_wholesale_in_server_order() {
        let mut session = SearchSession::new();
        let token = session.begin_search();
        session.on_search_succeeded(
            token,
            vec![product("old-a", 100), product("old-b", 200)],
            None,
        );

        let token = session.begin_search();
        session.on_search_succeeded(
            token,
            vec![product("new-z", 900), product("new-a", 100)],
            None,
        );

        // No merge with the old set, no re-sort of the new one.
        let names: Vec<&str> = session.results().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["new-z", "new-a"]);
    }

    #[test]
    fn test_failed_search_preserves_results() {
        let mut session = SearchSession::new();
        let token = session.begin_search();
        session.on_search_succeeded(
            token,
            vec![product("tee-a", 679), product("tee-b", 999)],
            None,
        );

        let token = session.begin_search();
        let applied =
            session.on_search_failed(token, &SearchError::Transport("offline".into()));

        assert!(applied);
        assert_eq!(session.status(), SearchStatus::Failed);
        assert_eq!(session.results().len(), 2);
        // Errors are never surfaced as a message.
        assert_eq!(session.message(), None);
        assert!(!session.is_searching());
    }

    #[test]
    fn test_query_edit_clears_message() {
        let mut session = SearchSession::new();
        let token = session.begin_search();
        session.on_search_succeeded(
            token,
            vec![],
            Some("No results for previous query".into()),
        );
        assert!(session.message().is_some());

        session.set_query("oversized t");
        assert_eq!(session.message(), None);
        assert_eq!(session.query(), "oversized t");
    }

    #[test]
    fn test_begin_search_clears_message() {
        let mut session = SearchSession::new();
        let token = session.begin_search();
        session.on_search_succeeded(token, vec![], Some("advisory".into()));

        session.begin_search();
        assert_eq!(session.message(), None);
        assert!(session.is_searching());
    }

    #[test]
    fn test_message_set_then_cleared_by_next_success() {
        let mut session = SearchSession::new();
        let token = session.begin_search();
        session.on_search_succeeded(token, vec![], Some("advisory".into()));
        assert_eq!(session.message(), Some("advisory"));

        let token = session.begin_search();
        session.on_search_succeeded(token, vec![product("tee", 500)], None);
        assert_eq!(session.message(), None);
    }

    #[test]
    fn test_stale_success_is_discarded() {
        let mut session = SearchSession::new();
        session.set_query("first");
        let first = session.begin_search();

        session.set_query("second");
        let second = session.begin_search();

        // First request settles late: discarded entirely.
        let applied = session.on_search_succeeded(first, vec![product("stale", 1)], None);
        assert!(!applied);
        assert!(session.is_searching());
        assert!(session.results().is_empty());

        // The latest request still settles normally.
        let applied = session.on_search_succeeded(second, vec![product("fresh", 2)], None);
        assert!(applied);
        assert_eq!(session.results()[0].name, "fresh");
        assert_eq!(session.status(), SearchStatus::Succeeded);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut session = SearchSession::new();
        let first = session.begin_search();
        let second = session.begin_search();

        let applied =
            session.on_search_failed(first, &SearchError::Status(502));
        assert!(!applied);
        assert!(session.is_searching());

        session.on_search_succeeded(second, vec![product("tee", 500)], None);
        assert_eq!(session.status(), SearchStatus::Succeeded);
    }

    #[test]
    fn test_empty_query_search_is_allowed() {
        let mut session = SearchSession::new();
        assert_eq!(session.query(), "");
        let token = session.begin_search();
        assert!(session.is_searching());
        session.on_search_succeeded(token, vec![], None);
        assert_eq!(session.status(), SearchStatus::Succeeded);
    }
}
