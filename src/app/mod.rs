// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

pub mod config;
pub mod logging;
