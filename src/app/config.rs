// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

use crate::domain::constants::{
    DEFAULT_PAGE_LIMIT, DEFAULT_RELEASE_BUFFER_DAYS, DEFAULT_REQUEST_TIMEOUT_SECS, MAX_PAGE_LIMIT,
};
use crate::domain::error::AppError;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct LedgerSettings {
    // General
    #[serde(default = "default_debug")]
    pub debug: bool,

    // Backend
    pub api_base_url: String,
    /// Full `Cookie:` header value for the session (e.g. "sid=..."). Kept out
    /// of committed config files; see tests/config_guard.rs.
    pub session_cookie: Option<String>,

    // Transport
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    // View defaults
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    #[serde(default = "default_release_buffer_days")]
    pub release_buffer_days: u32,
}

// Defaults
fn default_debug() -> bool {
    false
}
fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}
fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}
fn default_release_buffer_days() -> u32 {
    DEFAULT_RELEASE_BUFFER_DAYS
}

impl LedgerSettings {
    pub fn load_with_path(path: Option<&str>) -> Result<Self, AppError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let selected_config = resolve_config_path(path);
        let mut builder = Config::builder();

        if let Some(ref selected_path) = selected_config {
            builder = builder.add_source(File::from(Path::new(selected_path)).required(true));
        } else {
            builder = builder.add_source(File::with_name("config").required(false));
        }
        // Deterministic precedence: CLI (in main) > env/.env > selected profile file.
        builder = builder.add_source(Environment::default());

        let settings: LedgerSettings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load() -> Result<Self, AppError> {
        Self::load_with_path(None)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config("API_BASE_URL is missing".to_string()));
        }
        Url::parse(&self.api_base_url).map_err(|e| {
            AppError::Config(format!("api_base_url '{}' is invalid: {e}", self.api_base_url))
        })?;
        Ok(())
    }

    pub fn session_cookie_value(&self) -> Option<String> {
        if let Ok(v) = std::env::var("SESSION_COOKIE")
            && !v.trim().is_empty()
        {
            return Some(v);
        }
        self.session_cookie
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.clamp(1, 120))
    }

    pub fn page_limit_value(&self) -> u32 {
        self.page_limit.clamp(1, MAX_PAGE_LIMIT)
    }

    pub fn release_buffer_days_value(&self) -> u32 {
        self.release_buffer_days.max(1)
    }
}

fn resolve_config_path(path: Option<&str>) -> Option<String> {
    if let Some(path) = path {
        return Some(path.to_string());
    }
    detect_active_config_file()
}

fn detect_active_config_file() -> Option<String> {
    // Check common config.*.toml files first
    let priority_files = [
        "config.prod.toml",
        "config.dev.toml",
        "config.example.toml",
        "config.toml",
    ];

    for file in priority_files.iter() {
        if let Some(true) = config_has_active_flag(file) {
            return Some((*file).to_string());
        }
    }

    // Fallback: scan current dir for config.*.toml with THIS_ACTIVE = true
    if let Ok(entries) = std::fs::read_dir(".") {
        for entry in entries.flatten() {
            let path = entry.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str())
                && name.starts_with("config.")
                && name.ends_with(".toml")
                && let Some(true) = config_has_active_flag(name)
            {
                return Some(name.to_string());
            }
        }
    }

    None
}

fn config_has_active_flag(path: &str) -> Option<bool> {
    let p = Path::new(path);
    if !p.exists() {
        return None;
    }

    Config::builder()
        .add_source(File::from(p))
        .build()
        .ok()?
        .get_bool("THIS_ACTIVE")
        .ok()
}
