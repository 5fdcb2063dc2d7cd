//! Fetch worker implementation.
//!
//! Spawns one Tokio task per submitted search and delivers the outcome back
//! to the event loop over an mpsc channel. The worker never cancels in-flight
//! requests; superseded responses are filtered out by ticket when the event
//! handler receives them, which keeps cancellation logic in one place.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Instrument;

use crate::catalog::CatalogClient;
use crate::worker::{FetchOutcome, FetchRequest};

/// Executes catalog searches in the background.
///
/// The worker holds the shared catalog client and the sending half of the
/// outcome channel. It is cheap to construct and owns no task handles; each
/// submission is detached and reports back through the channel.
pub struct FetchWorker {
    client: Arc<dyn CatalogClient>,
    outcomes: mpsc::Sender<FetchOutcome>,
}

impl FetchWorker {
    /// Creates a worker delivering outcomes into `outcomes`.
    #[must_use]
    pub fn new(client: Arc<dyn CatalogClient>, outcomes: mpsc::Sender<FetchOutcome>) -> Self {
        Self { client, outcomes }
    }

    /// Spawns a background task executing `request`.
    ///
    /// The task sends exactly one [`FetchOutcome`] when the search completes.
    /// If the receiving side of the channel is gone the outcome is dropped,
    /// which only happens during shutdown.
    pub fn submit(&self, request: FetchRequest) {
        let client = Arc::clone(&self.client);
        let outcomes = self.outcomes.clone();
        let span = tracing::debug_span!(
            "fetch_search",
            ticket = request.ticket,
            query = %request.query,
            page = request.page
        );

        tokio::spawn(
            async move {
                let result = client.search(&request.query, request.page).await;
                match &result {
                    Ok(page) => tracing::debug!(
                        results = page.results.len(),
                        total_pages = page.total_pages,
                        "search completed"
                    ),
                    Err(error) => tracing::debug!(error = %error, "search failed"),
                }

                let outcome = FetchOutcome::for_request(&request, result);
                if outcomes.send(outcome).await.is_err() {
                    tracing::debug!("event loop closed, dropping fetch outcome");
                }
            }
            .instrument(span),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::{CinescopeError, Movie, Result, SearchPage};

    /// Catalog double returning pre-scripted results in submission order.
    struct ScriptedCatalog {
        responses: Mutex<VecDeque<Result<SearchPage>>>,
    }

    impl ScriptedCatalog {
        fn new(responses: Vec<Result<SearchPage>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
            }
        }
    }

    #[async_trait]
    impl CatalogClient for ScriptedCatalog {
        async fn search(&self, _query: &str, _page: u32) -> Result<SearchPage> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(CinescopeError::Unknown("script exhausted".to_string())))
        }
    }

    fn sample_page(page: u32) -> SearchPage {
        SearchPage {
            page,
            results: vec![Movie {
                id: 1,
                title: "Heat".to_string(),
                overview: String::new(),
                release_date: Some("1995-12-15".to_string()),
                vote_average: 7.9,
                poster_path: None,
                backdrop_path: None,
            }],
            total_pages: 4,
            total_results: 61,
        }
    }

    #[tokio::test]
    async fn submit_delivers_outcome_with_request_identity() {
        let (tx, mut rx) = mpsc::channel(8);
        let catalog = Arc::new(ScriptedCatalog::new(vec![Ok(sample_page(2))]));
        let worker = FetchWorker::new(catalog, tx);

        worker.submit(FetchRequest {
            ticket: 5,
            query: "heat".to_string(),
            page: 2,
        });

        let outcome = rx.recv().await.expect("outcome should arrive");
        assert_eq!(outcome.ticket, 5);
        assert_eq!(outcome.query, "heat");
        assert_eq!(outcome.page, 2);
        assert_eq!(outcome.result.unwrap().total_results, 61);
    }

    #[tokio::test]
    async fn submit_delivers_errors_unchanged() {
        let (tx, mut rx) = mpsc::channel(8);
        let catalog = Arc::new(ScriptedCatalog::new(vec![Err(CinescopeError::Request(
            "Invalid API key.".to_string(),
        ))]));
        let worker = FetchWorker::new(catalog, tx);

        worker.submit(FetchRequest {
            ticket: 1,
            query: "heat".to_string(),
            page: 1,
        });

        let outcome = rx.recv().await.expect("outcome should arrive");
        match outcome.result {
            Err(CinescopeError::Request(message)) => assert_eq!(message, "Invalid API key."),
            other => panic!("expected Request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn each_submission_reports_exactly_once() {
        let (tx, mut rx) = mpsc::channel(8);
        let catalog = Arc::new(ScriptedCatalog::new(vec![
            Ok(sample_page(1)),
            Ok(sample_page(2)),
        ]));
        let worker = FetchWorker::new(catalog, tx);

        worker.submit(FetchRequest {
            ticket: 1,
            query: "heat".to_string(),
            page: 1,
        });
        worker.submit(FetchRequest {
            ticket: 2,
            query: "heat".to_string(),
            page: 2,
        });

        let first = rx.recv().await.expect("first outcome");
        let second = rx.recv().await.expect("second outcome");
        let mut tickets = vec![first.ticket, second.ticket];
        tickets.sort_unstable();
        assert_eq!(tickets, vec![1, 2]);
    }
}
