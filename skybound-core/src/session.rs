//! Search lifecycle as an explicit state machine instead of loose UI
//! booleans, plus the stale-response guard: every query carries a
//! monotonically increasing sequence number, and a resolution is applied
//! only if no newer query has started since.

use std::sync::Mutex;

use serde::Serialize;
use tracing::warn;

use crate::domain::SearchResult;
use crate::error::Result;

/// Whole-value states of one search surface. Transitions replace the
/// state outright; nothing is mutated in place.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchState {
    Idle,
    Loading,
    Success { result: SearchResult },
    Failed { message: String },
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }
}

/// Handle for resolving exactly the query that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket {
    seq: u64,
}

struct Inner {
    seq: u64,
    state: SearchState,
}

/// Serializes the query lifecycle of one search surface.
///
/// `try_begin` backs the submission guard: a second submission while a
/// query is in flight is dropped. `begin` supersedes whatever is in
/// flight; the superseded query's eventual resolution is discarded by the
/// ticket check in `resolve`.
pub struct SearchSession {
    inner: Mutex<Inner>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                seq: 0,
                state: SearchState::Idle,
            }),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().unwrap().state.is_loading()
    }

    /// Start a new query only if none is in flight. Returns `None` for a
    /// dropped (no-op) submission.
    pub fn try_begin(&self) -> Option<QueryTicket> {
        let mut inner = self.inner.lock().unwrap();
        if inner.state.is_loading() {
            return None;
        }
        Some(Self::start(&mut inner))
    }

    /// Start a new query unconditionally, superseding any in-flight one.
    pub fn begin(&self) -> QueryTicket {
        let mut inner = self.inner.lock().unwrap();
        Self::start(&mut inner)
    }

    fn start(inner: &mut Inner) -> QueryTicket {
        inner.seq += 1;
        inner.state = SearchState::Loading;
        QueryTicket { seq: inner.seq }
    }

    /// Apply a query outcome. Returns `false` (and leaves the state
    /// untouched) when the ticket belongs to a superseded query, so a slow
    /// late response never clobbers a newer one.
    pub fn resolve(&self, ticket: QueryTicket, outcome: Result<SearchResult>) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if ticket.seq != inner.seq {
            warn!(
                stale_seq = ticket.seq,
                current_seq = inner.seq,
                "discarding stale query resolution"
            );
            return false;
        }
        inner.state = match outcome {
            Ok(result) => SearchState::Success { result },
            Err(err) => SearchState::Failed {
                message: err.to_string(),
            },
        };
        true
    }

    pub fn snapshot(&self) -> SearchState {
        self.inner.lock().unwrap().state.clone()
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
