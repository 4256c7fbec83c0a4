// ABOUTME: Shared CLI utilities - command context, API client setup and display formatting
//
// Dates are shown the vi-VN way (d/m/yyyy) and money with '.' thousands separators.

use anyhow::{anyhow, Context as _, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use super::OutputFormat;
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::session::{SessionProvider, SessionStore};

/// Everything a command needs: resolved config and the session store
pub struct Context {
    pub config: AppConfig,
    pub store: SessionStore,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: AppConfig, format: OutputFormat) -> Result<Self> {
        let store = SessionStore::new(config.session_path()?);
        Ok(Self {
            config,
            store,
            format,
        })
    }

    /// API client carrying the stored token, if any
    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.config.api, self.store.token()).context("Failed to create API client")
    }

    /// API client for commands that need a logged-in user
    pub fn authenticated_client(&self, action: &str) -> Result<ApiClient> {
        if !self.store.is_authenticated() {
            return Err(anyhow!(
                "Bạn cần đăng nhập để {action}. Chạy 'viecnong login' hoặc 'viecnong register' trước."
            ));
        }
        self.client()
    }
}

/// Print any serializable value as pretty JSON
pub fn output_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// 350000 -> "350.000"
pub fn format_vnd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// "300.000 - 350.000 VNĐ"
pub fn format_price_range(min: i64, max: i64) -> String {
    format!("{} - {} VNĐ", format_vnd(min), format_vnd(max))
}

/// Parse the server's timestamps: RFC 3339, naive datetime, or a bare date (midnight UTC)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// vi-VN short date, e.g. "5/1/2025". Unparsable input is shown as is.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%-d/%-m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_optional_date(raw: Option<&str>) -> String {
    raw.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Whole days until the deadline, rounded up
pub fn days_left(deadline: &str, now: DateTime<Utc>) -> Option<i64> {
    let deadline = parse_timestamp(deadline)?;
    let seconds = (deadline - now).num_seconds();
    Some(seconds.div_euclid(86_400) + i64::from(seconds.rem_euclid(86_400) != 0))
}

/// Split a delimited list, dropping blanks
pub fn split_list(raw: Option<&str>, delimiter: char) -> Vec<String> {
    raw.map(|s| {
        s.split(delimiter)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToString::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Truncate to `max` characters with an ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
