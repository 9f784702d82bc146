// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

//! HTTP client for the remote ledger endpoints.
//!
//! Owns no state beyond the connection pool: no caching, no retry loops.
//! Transport failures map to `AppError::Network`, non-2xx responses to
//! `AppError::Server` with the message lifted from a JSON `{message}` body
//! when one is present.

use crate::domain::constants::{
    EARNINGS_HISTORY_PATH, EARNINGS_SUMMARY_PATH, PENDING_EARNINGS_PATH,
};
use crate::domain::error::AppError;
use crate::domain::model::{
    EarningsSummary, HistoryPage, PendingEarningsReport, Period, TransactionRecord,
    TransactionStatus,
};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Optional history query filters. Absent keys are omitted from the query
/// string entirely, never sent as empty or defaulted values.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilters {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub period: Option<Period>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<TransactionStatus>,
}

impl HistoryFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(period) = self.period {
            pairs.push(("period", period.as_str().to_string()));
        }
        if let Some(start_date) = self.start_date {
            pairs.push((
                "start_date",
                start_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        if let Some(end_date) = self.end_date {
            pairs.push((
                "end_date",
                end_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.to_string()));
        }
        pairs
    }
}

#[derive(Clone)]
pub struct LedgerClient {
    http: Client,
    base_url: Url,
}

impl LedgerClient {
    pub fn new(
        base_url: &str,
        session_cookie: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)?;

        // Cookie-based session auth; requests carry no other custom headers.
        let mut headers = HeaderMap::new();
        if let Some(cookie) = session_cookie {
            let value = HeaderValue::from_str(cookie).map_err(|_| {
                AppError::Config("session_cookie contains non-header characters".to_string())
            })?;
            headers.insert(header::COOKIE, value);
        }

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(format!("HTTP client build failed: {e}")))?;

        Ok(Self { http, base_url })
    }

    pub async fn fetch_summary(&self) -> Result<EarningsSummary, AppError> {
        let summary: EarningsSummary = self.get_json(EARNINGS_SUMMARY_PATH, &[]).await?;
        if !summary.totals_invariant_holds() {
            tracing::warn!(
                target: "ledger",
                total_gross = %summary.total_gross,
                total_fees = %summary.total_fees,
                total_net = %summary.total_net,
                "Summary totals violate net = gross - fees; rendering server values as-is"
            );
        }
        Ok(summary)
    }

    pub async fn fetch_history(&self, filters: &HistoryFilters) -> Result<HistoryPage, AppError> {
        let page: HistoryPage = self
            .get_json(EARNINGS_HISTORY_PATH, &filters.query_pairs())
            .await?;
        for record in &page.items {
            flag_fee_violation(record);
        }
        Ok(page)
    }

    pub async fn fetch_pending_earnings(&self) -> Result<PendingEarningsReport, AppError> {
        self.get_json(PENDING_EARNINGS_PATH, &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = self.base_url.join(path)?;
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Server {
                status: status.as_u16(),
                message: extract_server_message(status, &body),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Prefer the JSON `{message}` field of an error body; otherwise a generic
/// line with the status code.
fn extract_server_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| format!("Request failed with HTTP {}", status.as_u16()))
}

fn flag_fee_violation(record: &TransactionRecord) {
    if !record.fee_invariant_holds() {
        tracing::warn!(
            target: "ledger",
            id = %record.id,
            gross = %record.gross_amount,
            fee = %record.platform_fee,
            net = %record.net_amount,
            "Record violates net = gross - fee; rendering server values as-is"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_absent_keys() {
        let filters = HistoryFilters {
            period: Some(Period::Week),
            ..HistoryFilters::default()
        };
        let pairs = filters.query_pairs();
        assert_eq!(pairs, vec![("period", "week".to_string())]);
    }

    #[test]
    fn query_carries_all_present_keys() {
        let filters = HistoryFilters {
            page: Some(2),
            limit: Some(20),
            period: Some(Period::Month),
            start_date: None,
            end_date: None,
            status: Some(TransactionStatus::Released),
        };
        let keys: Vec<&str> = filters.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["page", "limit", "period", "status"]);
    }

    #[test]
    fn empty_filters_build_an_empty_query() {
        assert!(HistoryFilters::default().query_pairs().is_empty());
    }

    #[test]
    fn server_message_prefers_json_body() {
        let message =
            extract_server_message(StatusCode::BAD_REQUEST, r#"{"message":"Invalid period"}"#);
        assert_eq!(message, "Invalid period");
    }

    #[test]
    fn server_message_falls_back_on_non_json_body() {
        let message = extract_server_message(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(message, "Request failed with HTTP 502");
    }

    #[test]
    fn status_serializes_unknown_value_verbatim() {
        let filters = HistoryFilters {
            status: Some(TransactionStatus::Unknown("on_hold".to_string())),
            ..HistoryFilters::default()
        };
        assert_eq!(
            filters.query_pairs(),
            vec![("status", "on_hold".to_string())]
        );
    }
}
