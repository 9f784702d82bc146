// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

// This toolchain's std still gates `i64::div_ceil` behind `int_roundings`.
#![feature(int_roundings)]

pub mod app;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Backward-compat re-exports
pub use domain::model;
pub use infrastructure::network;
