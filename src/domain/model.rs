// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

//! Canonical read-model types for the remote funds ledger.
//!
//! The backend exposes several legacy field names (`date` for `paidAt`,
//! `totalEarnings` for `totalNet`, ...). Those aliases are absorbed here at
//! the serde boundary; only the canonical names exist past this module.

use crate::domain::constants::SUMMARY_STALE_AFTER_SECS;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction status as reported by the server. Kept open: the server may
/// introduce new statuses at any time and old clients must keep rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    Pending,
    Released,
    Withdrawn,
    Completed,
    Failed,
    Unknown(String),
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Released => "released",
            TransactionStatus::Withdrawn => "withdrawn",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Unknown(raw) => raw,
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => TransactionStatus::Pending,
            "released" => TransactionStatus::Released,
            "withdrawn" => TransactionStatus::Withdrawn,
            "completed" => TransactionStatus::Completed,
            "failed" => TransactionStatus::Failed,
            _ => TransactionStatus::Unknown(raw),
        }
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One money movement. Immutable from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    #[serde(alias = "job_id")]
    pub job_id: String,
    #[serde(alias = "job_title")]
    pub job_title: String,
    #[serde(alias = "gross_amount", alias = "amount")]
    pub gross_amount: Decimal,
    #[serde(alias = "platform_fee")]
    pub platform_fee: Decimal,
    #[serde(alias = "net_amount")]
    pub net_amount: Decimal,
    pub status: TransactionStatus,
    // Legacy clients receive the same value under `date`.
    #[serde(alias = "date", alias = "paid_at")]
    pub paid_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// `net = gross - fee` must hold for every record. A violation is a
    /// data-integrity bug on the server side; the client flags it but still
    /// renders the server-supplied figures unchanged.
    pub fn fee_invariant_holds(&self) -> bool {
        self.net_amount == self.gross_amount - self.platform_fee
    }
}

/// Point-in-time aggregate snapshot, recomputed server-side on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    #[serde(alias = "total_gross")]
    pub total_gross: Decimal,
    #[serde(alias = "total_fees")]
    pub total_fees: Decimal,
    #[serde(alias = "totalEarnings", alias = "total_net")]
    pub total_net: Decimal,
    #[serde(alias = "availableBalance", alias = "current_balance")]
    pub current_balance: Decimal,
    #[serde(alias = "pendingPayments", alias = "pending_earnings")]
    pub pending_earnings: Decimal,
    #[serde(alias = "completed_jobs")]
    pub completed_jobs: u64,
    #[serde(alias = "average_earning")]
    pub average_earning: Decimal,
}

impl EarningsSummary {
    pub fn totals_invariant_holds(&self) -> bool {
        self.total_net == self.total_gross - self.total_fees
    }
}

/// A fetched summary together with its fetch time, so callers can decide
/// when a refetch is due.
#[derive(Debug, Clone)]
pub struct SummarySnapshot {
    pub summary: EarningsSummary,
    pub fetched_at: DateTime<Utc>,
}

impl SummarySnapshot {
    pub fn new(summary: EarningsSummary, fetched_at: DateTime<Utc>) -> Self {
        Self {
            summary,
            fetched_at,
        }
    }

    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now - self.fetched_at >= Duration::seconds(SUMMARY_STALE_AFTER_SECS)
    }
}

/// A completed-but-not-yet-released payment in the agency wallet view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingEarningsItem {
    #[serde(alias = "job_id")]
    pub job_id: String,
    #[serde(alias = "job_title")]
    pub job_title: String,
    pub amount: Decimal,
    #[serde(alias = "completed_at")]
    pub completed_at: DateTime<Utc>,
    #[serde(alias = "release_date")]
    pub release_date: DateTime<Utc>,
    #[serde(alias = "days_until_release")]
    pub days_until_release: u32,
    // An open remedial-work request blocks release regardless of elapsed time.
    #[serde(alias = "has_active_backjob")]
    pub has_active_backjob: bool,
    pub status: TransactionStatus,
}

/// Wire shape of the pending-earnings endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PendingEarningsReport {
    pub total_pending: Decimal,
    pub count: u64,
    pub buffer_days: u32,
    pub items: Vec<PendingEarningsItem>,
    #[serde(default)]
    pub info_message: Option<String>,
}

/// One page of transaction history.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPage {
    #[serde(alias = "earnings")]
    pub items: Vec<TransactionRecord>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}

/// Trailing filter window. Rolling, not calendar-aligned, matching the
/// server's query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    Week,
    Month,
    #[default]
    All,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::All => "all",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// View-local filter state. Ephemeral: reset on navigation, never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub period: Period,
    pub status: Option<TransactionStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_keeps_unknown_wire_value() {
        let status = TransactionStatus::from("on_hold".to_string());
        assert_eq!(status, TransactionStatus::Unknown("on_hold".to_string()));
        assert_eq!(status.to_string(), "on_hold");
    }

    #[test]
    fn status_parsing_is_case_insensitive() {
        assert_eq!(
            TransactionStatus::from("Released".to_string()),
            TransactionStatus::Released
        );
    }

    #[test]
    fn record_absorbs_legacy_date_alias() {
        let body = r#"{
            "id": "txn_1",
            "jobId": "job_1",
            "jobTitle": "Aircon cleaning",
            "grossAmount": 1500.0,
            "platformFee": 150.0,
            "netAmount": 1350.0,
            "status": "released",
            "date": "2026-08-01T08:30:00Z"
        }"#;
        let record: TransactionRecord = serde_json::from_str(body).expect("decode record");
        assert_eq!(record.paid_at.to_rfc3339(), "2026-08-01T08:30:00+00:00");
        assert!(record.fee_invariant_holds());
    }

    #[test]
    fn summary_absorbs_legacy_aliases() {
        let body = r#"{
            "total_gross": 10000,
            "total_fees": 1000,
            "totalEarnings": 9000,
            "availableBalance": 4000,
            "pendingPayments": 5000,
            "completed_jobs": 4,
            "average_earning": 2250
        }"#;
        let summary: EarningsSummary = serde_json::from_str(body).expect("decode summary");
        assert_eq!(summary.total_net, Decimal::from(9000));
        assert_eq!(summary.current_balance, Decimal::from(4000));
        assert!(summary.totals_invariant_holds());
    }

    #[test]
    fn summary_snapshot_goes_stale_after_window() {
        let summary = EarningsSummary {
            total_gross: Decimal::ZERO,
            total_fees: Decimal::ZERO,
            total_net: Decimal::ZERO,
            current_balance: Decimal::ZERO,
            pending_earnings: Decimal::ZERO,
            completed_jobs: 0,
            average_earning: Decimal::ZERO,
        };
        let fetched_at = "2026-08-25T12:00:00Z".parse().expect("timestamp");
        let snapshot = SummarySnapshot::new(summary, fetched_at);
        assert!(!snapshot.is_stale(fetched_at + Duration::seconds(119)));
        assert!(snapshot.is_stale(fetched_at + Duration::seconds(120)));
    }
}
