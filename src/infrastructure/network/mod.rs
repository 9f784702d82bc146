// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

pub mod ledger_client;

pub use ledger_client::{HistoryFilters, LedgerClient};
