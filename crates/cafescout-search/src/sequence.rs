//! Last-write-wins sequencing for overlapping searches.
//!
//! A user can issue a new search while the previous one is still in flight;
//! without a guard the slower response could land last and clobber the newer
//! results. Each request takes a monotonic ticket and a completion whose
//! ticket has been superseded is discarded.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::types::CitySearch;

/// Monotonic ticket issuer shared by all searches of one session.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: AtomicU64,
}

impl SearchSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket, superseding every earlier one.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True iff `ticket` is still the newest issued.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

/// A [`SearchClient`] whose completions are filtered to the newest request.
///
/// `search_latest` returns `Ok(None)` for a response that arrives after a
/// newer search was issued, so stale results never reach the caller.
pub struct SequencedClient {
    client: SearchClient,
    sequencer: SearchSequencer,
}

impl SequencedClient {
    #[must_use]
    pub fn new(client: SearchClient) -> Self {
        Self {
            client,
            sequencer: SearchSequencer::new(),
        }
    }

    /// Searches for cafes in `city`, discarding the result if a newer search
    /// was issued while this one was in flight.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError`] from the underlying client. Errors from
    /// superseded requests are also discarded: a stale failure is as
    /// irrelevant as a stale success.
    pub async fn search_latest(&self, city: &str) -> Result<Option<CitySearch>, SearchError> {
        let ticket = self.sequencer.issue();
        let result = self.client.search(city).await;
        if !self.sequencer.is_current(ticket) {
            tracing::debug!(city, ticket, "discarding superseded search response");
            return Ok(None);
        }
        result.map(Some)
    }
}
