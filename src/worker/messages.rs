//! Message types exchanged between the event loop and the fetch worker.
//!
//! A request carries the ticket minted when the user action was handled; the
//! outcome echoes it back together with the query and page so the event
//! handler can discard stale responses and log meaningfully. Trace continuity
//! across the task boundary is handled by instrumenting the spawned future,
//! so no trace context travels inside the messages themselves.

use crate::domain::{Result, SearchPage};

/// A catalog search to execute in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Ticket minted for this request. Tickets increase monotonically; only
    /// the outcome matching the most recently minted ticket is applied.
    pub ticket: u64,

    /// Committed query text.
    pub query: String,

    /// One-based page to fetch.
    pub page: u32,
}

/// The result of a background catalog search.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Ticket echoed from the originating [`FetchRequest`].
    pub ticket: u64,

    /// Query the request was issued for.
    pub query: String,

    /// Page the request was issued for.
    pub page: u32,

    /// The fetched page, or the error to surface.
    pub result: Result<SearchPage>,
}

impl FetchOutcome {
    /// Builds an outcome echoing the identity of `request`.
    #[must_use]
    pub fn for_request(request: &FetchRequest, result: Result<SearchPage>) -> Self {
        Self {
            ticket: request.ticket,
            query: request.query.clone(),
            page: request.page,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_echoes_request_identity() {
        let request = FetchRequest {
            ticket: 7,
            query: "batman".to_string(),
            page: 3,
        };

        let outcome = FetchOutcome::for_request(
            &request,
            Ok(SearchPage {
                page: 3,
                results: vec![],
                total_pages: 0,
                total_results: 0,
            }),
        );

        assert_eq!(outcome.ticket, 7);
        assert_eq!(outcome.query, "batman");
        assert_eq!(outcome.page, 3);
        assert!(outcome.result.is_ok());
    }
}
