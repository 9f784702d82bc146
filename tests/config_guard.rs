// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

use regex::Regex;
use std::fs;
use std::path::Path;

/// Fail CI if config files contain a real-looking session cookie or other
/// obvious secrets. Placeholders stay short; real session tokens do not.
#[test]
fn no_committed_session_secrets_in_configs() {
    let cookie_re = Regex::new(r#"(?i)session_cookie\s*=\s*"[^"]{24,}""#).unwrap();
    let hex_re = Regex::new(r"[a-fA-F0-9]{48,}").unwrap();
    let candidates = [
        "config.toml",
        "config.prod.toml",
        "config.dev.toml",
        "config.example.toml",
    ];
    for file in candidates {
        if !Path::new(file).exists() {
            continue;
        }
        let body = fs::read_to_string(file).expect("read config");
        for (idx, line) in body.lines().enumerate() {
            if cookie_re.is_match(line) || hex_re.is_match(line) {
                panic!("Secret-looking value in {} at line {}", file, idx + 1);
            }
        }
    }
}
