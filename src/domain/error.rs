// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Response decode failed: {0}")]
    Decode(String),

    #[error("Validation failed for field {field}: {message}")]
    Validation { field: String, message: String },

    #[error("History is already fully loaded")]
    AtEnd,

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("Invalid URL: {err}"))
    }
}

impl AppError {
    /// Transport and server failures are worth a manual retry; everything
    /// else is a caller bug or a terminal condition.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Server { .. })
    }
}
