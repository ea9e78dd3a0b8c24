use contracts::usecases::u603_run_query::{HistoryEntry, QueryResponse, Row};

use crate::shared::api_utils::ApiError;
use crate::shared::state::{RequestSeq, Ticket};

pub const UNREACHABLE: &str = "Unable to connect to backend.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

/// Outcome of the latest query submission, owned by the app shell and
/// rendered by `ResultsView`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryRunState {
    pub phase: QueryPhase,
    pub sql: String,
    pub results: Option<Vec<Row>>,
    pub error: String,
    /// Seconds reported by the backend for the last answered query
    pub response_time: f64,
    pub cache_hit: bool,
    seq: RequestSeq,
}

impl QueryRunState {
    /// Enters `Loading`. The previous response time stays visible until a
    /// new one arrives.
    pub fn begin(mut self) -> (Self, Ticket) {
        let ticket = self.seq.issue();
        self.phase = QueryPhase::Loading;
        self.sql.clear();
        self.results = None;
        self.error.clear();
        self.cache_hit = false;
        (self, ticket)
    }

    pub fn resolve(mut self, ticket: Ticket, outcome: Result<QueryResponse, ApiError>) -> Self {
        if !self.seq.is_current(ticket) {
            log::debug!("query: dropping stale response {}", ticket);
            return self;
        }
        match outcome {
            Ok(response) => {
                self.response_time = response.response_time.unwrap_or(0.0);
                self.cache_hit = response.cache_hit.unwrap_or(false);
                match response.error_message() {
                    Some(error) => {
                        self.phase = QueryPhase::Failure;
                        self.error = error.to_string();
                        self.sql = response.generated_sql.unwrap_or_default();
                    }
                    None => {
                        self.phase = QueryPhase::Success;
                        self.sql = response.generated_sql.unwrap_or_default();
                        self.results = response.results;
                    }
                }
            }
            Err(ApiError::Rejected {
                status,
                message: Some(message),
            }) => {
                log::debug!("query rejected with HTTP {}", status);
                self.phase = QueryPhase::Failure;
                self.error = message;
            }
            Err(_) => {
                self.phase = QueryPhase::Failure;
                self.error = UNREACHABLE.to_string();
            }
        }
        self
    }

    pub fn is_loading(&self) -> bool {
        self.phase == QueryPhase::Loading
    }

    /// Rows to tabulate, if any
    pub fn rows(&self) -> Option<&[Row]> {
        self.results.as_deref().filter(|r| !r.is_empty())
    }

    /// Nothing to show: not loading, no error, no SQL, no rows, no time.
    pub fn is_blank(&self) -> bool {
        !self.is_loading()
            && self.error.is_empty()
            && self.sql.is_empty()
            && self.rows().is_none()
            && self.response_time == 0.0
    }

    /// Answer came from the backend's cache. Independent of the time, which
    /// is usually 0 for cached answers.
    pub fn shows_cached_badge(&self) -> bool {
        self.cache_hit && !self.is_loading()
    }

    /// e.g. "0.4s"; `None` unless the time is positive
    pub fn time_label(&self) -> Option<String> {
        (self.response_time > 0.0).then(|| format!("{}s", self.response_time))
    }
}

/// History as displayed: most recent first
pub fn latest_first(mut entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    entries.reverse();
    entries
}

/// The raw text to submit, or `None` when it is blank after trimming
pub fn submittable(text: &str) -> Option<String> {
    (!text.trim().is_empty()).then(|| text.to_string())
}
