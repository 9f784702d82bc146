// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

//! Pure filtering and aggregation over fetched transaction lists.
//!
//! Both filters are independent predicates, so their composition commutes;
//! apply the period filter first on large lists to shrink the intermediate
//! set before the status pass.

use crate::domain::constants::{PERIOD_MONTH_DAYS, PERIOD_WEEK_DAYS};
use crate::domain::model::{FilterState, Period, TransactionRecord, TransactionStatus};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Aggregates {
    pub count: usize,
    pub sum_gross: Decimal,
    pub sum_net: Decimal,
    pub sum_fees: Decimal,
}

/// Keep records whose `paid_at` falls inside the trailing window ending at
/// `now`. Boundary: `paid_at >= now - window`, inclusive of `now` itself.
pub fn filter_by_period(
    records: &[TransactionRecord],
    period: Period,
    now: DateTime<Utc>,
) -> Vec<TransactionRecord> {
    let window_days = match period {
        Period::Week => PERIOD_WEEK_DAYS,
        Period::Month => PERIOD_MONTH_DAYS,
        Period::All => return records.to_vec(),
    };
    let window_start = now - Duration::days(window_days);
    records
        .iter()
        .filter(|record| record.paid_at >= window_start)
        .cloned()
        .collect()
}

/// Exact status match; `None` passes every record through.
pub fn filter_by_status(
    records: &[TransactionRecord],
    status: Option<&TransactionStatus>,
) -> Vec<TransactionRecord> {
    match status {
        None => records.to_vec(),
        Some(wanted) => records
            .iter()
            .filter(|record| &record.status == wanted)
            .cloned()
            .collect(),
    }
}

/// Apply a full filter state: period first, then status.
pub fn apply_filters(
    records: &[TransactionRecord],
    filter: &FilterState,
    now: DateTime<Utc>,
) -> Vec<TransactionRecord> {
    let by_period = filter_by_period(records, filter.period, now);
    filter_by_status(&by_period, filter.status.as_ref())
}

/// Reduce a record list to its totals. Empty input yields all-zero
/// aggregates.
pub fn aggregate(records: &[TransactionRecord]) -> Aggregates {
    records.iter().fold(Aggregates::default(), |mut acc, record| {
        acc.count += 1;
        acc.sum_gross += record.gross_amount;
        acc.sum_net += record.net_amount;
        acc.sum_fees += record.platform_fee;
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, status: TransactionStatus, paid_at: DateTime<Utc>) -> TransactionRecord {
        TransactionRecord {
            id: id.to_string(),
            job_id: format!("job_{id}"),
            job_title: "Pipe repair".to_string(),
            gross_amount: Decimal::from(1000),
            platform_fee: Decimal::from(100),
            net_amount: Decimal::from(900),
            status,
            paid_at,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        "2026-08-25T12:00:00Z".parse().expect("timestamp")
    }

    #[test]
    fn rolling_windows_select_expected_records() {
        let now = fixed_now();
        let records = vec![
            record("a", TransactionStatus::Released, now - Duration::days(2)),
            record("b", TransactionStatus::Released, now - Duration::days(10)),
            record("c", TransactionStatus::Released, now - Duration::days(40)),
        ];

        let week = filter_by_period(&records, Period::Week, now);
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].id, "a");

        let month = filter_by_period(&records, Period::Month, now);
        assert_eq!(month.len(), 2);
        assert_eq!(month[0].id, "a");
        assert_eq!(month[1].id, "b");

        assert_eq!(filter_by_period(&records, Period::All, now).len(), 3);
    }

    #[test]
    fn window_start_is_inclusive() {
        let now = fixed_now();
        let records = vec![record(
            "edge",
            TransactionStatus::Released,
            now - Duration::days(7),
        )];
        assert_eq!(filter_by_period(&records, Period::Week, now).len(), 1);
    }

    #[test]
    fn status_filter_matches_exactly() {
        let now = fixed_now();
        let records = vec![
            record("a", TransactionStatus::Released, now),
            record("b", TransactionStatus::Pending, now),
            record("c", TransactionStatus::Unknown("on_hold".into()), now),
        ];
        let released = filter_by_status(&records, Some(&TransactionStatus::Released));
        assert_eq!(released.len(), 1);
        assert_eq!(released[0].id, "a");
        assert_eq!(filter_by_status(&records, None).len(), 3);
    }

    #[test]
    fn filters_commute() {
        let now = fixed_now();
        let records = vec![
            record("a", TransactionStatus::Released, now - Duration::days(2)),
            record("b", TransactionStatus::Pending, now - Duration::days(3)),
            record("c", TransactionStatus::Released, now - Duration::days(20)),
        ];
        let status = Some(TransactionStatus::Released);

        let period_first = filter_by_status(
            &filter_by_period(&records, Period::Week, now),
            status.as_ref(),
        );
        let status_first = filter_by_period(
            &filter_by_status(&records, status.as_ref()),
            Period::Week,
            now,
        );
        assert_eq!(period_first, status_first);
    }

    #[test]
    fn aggregate_of_empty_list_is_all_zero() {
        let totals = aggregate(&[]);
        assert_eq!(totals.count, 0);
        assert_eq!(totals.sum_gross, Decimal::ZERO);
        assert_eq!(totals.sum_net, Decimal::ZERO);
        assert_eq!(totals.sum_fees, Decimal::ZERO);
    }

    #[test]
    fn aggregate_sums_all_fields() {
        let now = fixed_now();
        let records = vec![
            record("a", TransactionStatus::Released, now),
            record("b", TransactionStatus::Released, now),
        ];
        let totals = aggregate(&records);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.sum_gross, Decimal::from(2000));
        assert_eq!(totals.sum_net, Decimal::from(1800));
        assert_eq!(totals.sum_fees, Decimal::from(200));
    }

    #[test]
    fn composed_pipeline_is_idempotent_on_identical_input() {
        let now = fixed_now();
        let records = vec![
            record("a", TransactionStatus::Released, now - Duration::days(1)),
            record("b", TransactionStatus::Pending, now - Duration::days(12)),
        ];
        let filter = FilterState {
            period: Period::Month,
            status: Some(TransactionStatus::Pending),
        };
        let first = aggregate(&apply_filters(&records, &filter, now));
        let second = aggregate(&apply_filters(&records, &filter, now));
        assert_eq!(first, second);
        assert_eq!(first.count, 1);
    }
}
