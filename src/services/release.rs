// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

//! Release-countdown calculator for escrowed earnings.
//!
//! Pure and deterministic: `now` is always injected so tests never depend on
//! the wall clock. Dispute state (the backjob flag) is supplied by the
//! caller; this module knows nothing about how disputes are adjudicated.

use chrono::{DateTime, Duration, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseSchedule {
    pub release_date: DateTime<Utc>,
    pub days_until_release: u32,
    pub is_releasable: bool,
}

/// Compute when a completed job's earnings unlock.
///
/// `days_until_release` uses the ceiling: a partial day remaining still
/// counts as one day, so the countdown never shows "0 days left" before the
/// release instant has actually passed.
pub fn compute_release(
    completed_at: DateTime<Utc>,
    buffer_days: u32,
    has_active_backjob: bool,
    now: DateTime<Utc>,
) -> ReleaseSchedule {
    let release_date = completed_at + Duration::days(i64::from(buffer_days));
    let remaining_ms = (release_date - now).num_milliseconds();

    let days_until_release = if remaining_ms <= 0 {
        0
    } else {
        remaining_ms.div_ceil(MILLIS_PER_DAY) as u32
    };

    ReleaseSchedule {
        release_date,
        days_until_release,
        is_releasable: remaining_ms <= 0 && !has_active_backjob,
    }
}
