// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

pub mod aggregate;
pub mod history;
pub mod presentation;
pub mod release;
