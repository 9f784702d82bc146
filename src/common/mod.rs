// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

pub mod retry;

// Shared aliases for frequently used modules.
pub use crate::domain::constants;
pub use crate::domain::error;
