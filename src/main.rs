// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::future::Future;
use std::time::Duration;
use trabaho_ledger::app::config::LedgerSettings;
use trabaho_ledger::app::logging::setup_logging;
use trabaho_ledger::common::retry::retry_async;
use trabaho_ledger::domain::error::AppError;
use trabaho_ledger::domain::model::{
    EarningsSummary, FilterState, HistoryPage, Period, TransactionStatus,
};
use trabaho_ledger::infrastructure::network::ledger_client::LedgerClient;
use trabaho_ledger::services::aggregate::{aggregate, apply_filters};
use trabaho_ledger::services::history::one_shot_filters;
use trabaho_ledger::services::presentation::status_style;
use trabaho_ledger::services::release::compute_release;

const RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Parser, Debug)]
#[command(author, version, about = "trabaho ledger view")]
struct Cli {
    /// Path to config file (default: config.{toml,yaml,...})
    #[arg(long)]
    config: Option<String>,

    /// Emit logs as JSON instead of compact text
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    /// Extra attempts after a failed fetch (0 = single attempt, no auto-retry)
    #[arg(long, default_value_t = 0)]
    retries: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Current earnings summary
    Summary,
    /// Transaction history with local totals
    History {
        #[arg(long, value_enum, default_value_t = PeriodArg::All)]
        period: PeriodArg,
        /// Filter by status (pending, released, withdrawn, ...)
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Completed jobs awaiting fund release
    Pending,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PeriodArg {
    Week,
    Month,
    All,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Week => Period::Week,
            PeriodArg::Month => Period::Month,
            PeriodArg::All => Period::All,
        }
    }
}

/// One attempt, plus opt-in bounded retries for retryable failures only.
async fn fetch_with_retries<T, F, Fut>(attempts: usize, mut op: F) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    match op().await {
        Ok(v) => Ok(v),
        Err(e) if attempts > 1 && e.is_retryable() => {
            tracing::warn!(error = %e, "Fetch failed; retrying");
            retry_async(|_| op(), attempts - 1, RETRY_DELAY).await
        }
        Err(e) => Err(e),
    }
}

fn print_summary(summary: &EarningsSummary) {
    println!("Earnings summary");
    println!("  gross earned:      PHP {}", summary.total_gross);
    println!("  platform fees:     PHP {}", summary.total_fees);
    println!("  net earned:        PHP {}", summary.total_net);
    println!("  available balance: PHP {}", summary.current_balance);
    println!("  pending earnings:  PHP {}", summary.pending_earnings);
    println!(
        "  completed jobs:    {} (avg PHP {})",
        summary.completed_jobs, summary.average_earning
    );
}

fn print_history(page: &HistoryPage, filter: &FilterState) {
    let now = Utc::now();
    let filtered = apply_filters(&page.items, filter, now);
    let totals = aggregate(&filtered);

    println!(
        "History page {} ({} of {} records, filter: {})",
        page.page,
        filtered.len(),
        page.total,
        filter.period
    );
    for record in &filtered {
        let style = status_style(&record.status);
        println!(
            "  [{}] {:<10} {}  net PHP {}  ({})",
            style.icon,
            record.status,
            record.job_title,
            record.net_amount,
            record.paid_at.format("%Y-%m-%d")
        );
    }
    println!(
        "  totals: gross PHP {}, fees PHP {}, net PHP {}",
        totals.sum_gross, totals.sum_fees, totals.sum_net
    );
    if page.has_more {
        println!("  more records available; pass --page {}", page.page + 1);
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let settings = LedgerSettings::load_with_path(cli.config.as_deref())?;
    setup_logging(if settings.debug { "debug" } else { "info" }, cli.json_logs);

    let session_cookie = settings.session_cookie_value();
    if session_cookie.is_none() {
        tracing::warn!("No session cookie configured; the ledger API will likely reject requests");
    }
    let client = LedgerClient::new(
        &settings.api_base_url,
        session_cookie.as_deref(),
        settings.request_timeout(),
    )?;
    let attempts = cli.retries + 1;

    match cli.command {
        Command::Summary => {
            let summary = fetch_with_retries(attempts, || client.fetch_summary()).await?;
            print_summary(&summary);
        }
        Command::History {
            period,
            status,
            page,
            limit,
        } => {
            let filter = FilterState {
                period: period.into(),
                status: status.map(TransactionStatus::from),
            };
            let filters = one_shot_filters(&filter, page, limit);

            // Summary and history are independent reads; a failure in one
            // must not blank out the other.
            let (summary_res, history_res) = tokio::join!(
                fetch_with_retries(attempts, || client.fetch_summary()),
                fetch_with_retries(attempts, || client.fetch_history(&filters)),
            );

            match &summary_res {
                Ok(summary) => print_summary(summary),
                Err(e) => println!("Summary unavailable, try again: {e}"),
            }
            println!();
            match &history_res {
                Ok(history) => print_history(history, &filter),
                Err(e) => println!("History unavailable, try again: {e}"),
            }

            if let (Err(_), Err(e)) = (summary_res, history_res) {
                return Err(e);
            }
        }
        Command::Pending => {
            let report = fetch_with_retries(attempts, || client.fetch_pending_earnings()).await?;
            let now = Utc::now();
            let buffer_days = if report.buffer_days == 0 {
                settings.release_buffer_days_value()
            } else {
                report.buffer_days
            };

            println!(
                "Pending earnings: PHP {} across {} jobs (release buffer: {} days)",
                report.total_pending, report.count, buffer_days
            );
            if let Some(message) = &report.info_message {
                println!("  note: {message}");
            }
            for item in &report.items {
                let schedule =
                    compute_release(item.completed_at, buffer_days, item.has_active_backjob, now);
                let state = if item.has_active_backjob {
                    "blocked by active backjob".to_string()
                } else if schedule.is_releasable {
                    "releasable now".to_string()
                } else {
                    format!("{} day(s) until release", schedule.days_until_release)
                };
                println!(
                    "  {}  PHP {}  completed {}  -> {}",
                    item.job_title,
                    item.amount,
                    item.completed_at.format("%Y-%m-%d"),
                    state
                );
            }
        }
    }

    Ok(())
}
