// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

// =============================================================================
// RELEASE & FILTER WINDOWS
// =============================================================================

/// Hold period between job completion and fund release. The pending-earnings
/// endpoint reports its own `buffer_days`; the server value wins when present.
pub const DEFAULT_RELEASE_BUFFER_DAYS: u32 = 7;

// Rolling filter windows. These are request windows, not calendar periods,
// and are configured independently of the release buffer.
pub const PERIOD_WEEK_DAYS: i64 = 7;
pub const PERIOD_MONTH_DAYS: i64 = 30;

/// A fetched summary older than this should be refetched before display.
pub const SUMMARY_STALE_AFTER_SECS: i64 = 120;

// =============================================================================
// TRANSPORT DEFAULTS
// =============================================================================

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

// =============================================================================
// ENDPOINT PATHS (relative to the configured API base)
// =============================================================================

pub const EARNINGS_SUMMARY_PATH: &str = "/api/worker/earnings/summary";
pub const EARNINGS_HISTORY_PATH: &str = "/api/worker/earnings/history";
pub const PENDING_EARNINGS_PATH: &str = "/api/agency/wallet/pending-earnings";
