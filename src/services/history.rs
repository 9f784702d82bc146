// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

//! Pagination cursor and the history-loading session.
//!
//! The session enforces last-request-wins: every filter change or refresh
//! bumps a request generation, and any response observed under a stale
//! generation is discarded instead of being shown. Rapid filter changes can
//! therefore never surface an outdated page. The in-memory record list is
//! only ever replaced or extended wholesale, never patched.

use crate::domain::error::AppError;
use crate::domain::model::{FilterState, HistoryPage, TransactionRecord};
use crate::infrastructure::network::ledger_client::{HistoryFilters, LedgerClient};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorState {
    #[default]
    Idle,
    Loading,
    Loaded {
        has_more: bool,
    },
    Failed,
}

#[derive(Debug, Clone)]
pub struct HistoryCursor {
    page: u32,
    limit: u32,
    state: CursorState,
}

impl HistoryCursor {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            state: CursorState::Idle,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Back to page 1. Required whenever the active filter changes: a new
    /// filter means a different underlying result set, which invalidates the
    /// old cursor. Also the only way out of `Failed`.
    pub fn reset(&mut self) {
        self.page = 1;
        self.state = CursorState::Idle;
    }

    /// Start a load from the top; returns the page number to request.
    pub fn begin_refresh(&mut self) -> u32 {
        self.page = 1;
        self.state = CursorState::Loading;
        1
    }

    /// Start an incremental load; returns the page number to request.
    pub fn begin_next(&mut self) -> Result<u32, AppError> {
        match self.state {
            CursorState::Loaded { has_more: true } => {
                self.state = CursorState::Loading;
                Ok(self.page + 1)
            }
            CursorState::Loaded { has_more: false } => Err(AppError::AtEnd),
            CursorState::Idle => {
                self.state = CursorState::Loading;
                Ok(1)
            }
            CursorState::Loading => Err(AppError::Validation {
                field: "cursor".to_string(),
                message: "a page load is already in flight".to_string(),
            }),
            CursorState::Failed => Err(AppError::Validation {
                field: "cursor".to_string(),
                message: "reset the cursor before retrying a failed load".to_string(),
            }),
        }
    }

    pub fn complete(&mut self, page: &HistoryPage) {
        self.page = page.page;
        self.state = CursorState::Loaded {
            has_more: page.has_more,
        };
    }

    pub fn fail(&mut self) {
        self.state = CursorState::Failed;
    }
}

/// One logical history list: client + filter + cursor + loaded records.
///
/// Methods take `&self` so a UI can drive the session from concurrent tasks
/// behind an `Arc`.
pub struct HistorySession {
    client: LedgerClient,
    page_limit: u32,
    filter: RwLock<FilterState>,
    cursor: Mutex<HistoryCursor>,
    records: RwLock<Vec<TransactionRecord>>,
    generation: AtomicU64,
}

impl HistorySession {
    pub fn new(client: LedgerClient, page_limit: u32) -> Self {
        Self {
            client,
            page_limit,
            filter: RwLock::new(FilterState::default()),
            cursor: Mutex::new(HistoryCursor::new(page_limit)),
            records: RwLock::new(Vec::new()),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn filter(&self) -> FilterState {
        self.filter.read().await.clone()
    }

    pub async fn records(&self) -> Vec<TransactionRecord> {
        self.records.read().await.clone()
    }

    pub async fn cursor_state(&self) -> CursorState {
        self.cursor.lock().await.state()
    }

    /// Swap the active filter. Supersedes any in-flight load and clears the
    /// stale result set.
    pub async fn set_filter(&self, filter: FilterState) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.filter.write().await = filter;
        self.cursor.lock().await.reset();
        self.records.write().await.clear();
    }

    /// Reload page 1 for the current filter. Returns `Ok(None)` when the
    /// response was superseded while in flight.
    pub async fn refresh(&self) -> Result<Option<HistoryPage>, AppError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let filter = self.filter.read().await.clone();
        let page = self.cursor.lock().await.begin_refresh();
        let outcome = self.client.fetch_history(&self.wire_filters(&filter, page)).await;
        self.settle(generation, outcome, true).await
    }

    /// Load the page after the last loaded one. `AppError::AtEnd` when the
    /// server already reported `has_more = false`.
    pub async fn load_next_page(&self) -> Result<Option<HistoryPage>, AppError> {
        let generation = self.generation.load(Ordering::SeqCst);
        let filter = self.filter.read().await.clone();
        let page = self.cursor.lock().await.begin_next()?;
        let outcome = self.client.fetch_history(&self.wire_filters(&filter, page)).await;
        self.settle(generation, outcome, false).await
    }

    fn wire_filters(&self, filter: &FilterState, page: u32) -> HistoryFilters {
        HistoryFilters {
            page: Some(page),
            limit: Some(self.page_limit),
            period: Some(filter.period),
            status: filter.status.clone(),
            start_date: None,
            end_date: None,
        }
    }

    async fn settle(
        &self,
        generation: u64,
        outcome: Result<HistoryPage, AppError>,
        replace: bool,
    ) -> Result<Option<HistoryPage>, AppError> {
        if self.generation.load(Ordering::SeqCst) != generation {
            // Superseded while in flight; the newer request owns the view.
            return Ok(None);
        }
        match outcome {
            Ok(page) => {
                {
                    let mut records = self.records.write().await;
                    if replace {
                        *records = page.items.clone();
                    } else {
                        records.extend(page.items.iter().cloned());
                    }
                }
                self.cursor.lock().await.complete(&page);
                Ok(Some(page))
            }
            Err(err) => {
                self.cursor.lock().await.fail();
                Err(err)
            }
        }
    }
}

/// Convenience for one-shot CLI reads without session state. Absent page and
/// limit stay absent so the server applies its own defaults.
pub fn one_shot_filters(
    filter: &FilterState,
    page: Option<u32>,
    limit: Option<u32>,
) -> HistoryFilters {
    HistoryFilters {
        page,
        limit,
        period: Some(filter.period),
        status: filter.status.clone(),
        start_date: None,
        end_date: None,
    }
}
