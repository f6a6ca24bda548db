// Copyright © 2025 Nipun Kumar

//! Date helpers for the chat-log filter.
//!
//! The backend's `time` filter takes a plain `YYYY-MM-DD` day, while session
//! rows carry whatever timestamp format the server serialized.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Extracts the calendar day from a session timestamp. Recognizes RFC 3339
/// (the day in the timestamp's own offset), `YYYY-MM-DD HH:MM:SS`, a bare day,
/// a bare year, and unix seconds of at least nine digits.
pub fn day_of(timestamp: &str) -> Option<String> {
    let ts = timestamp.trim();
    if ts.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.date_naive().format(DAY_FORMAT).to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date().format(DAY_FORMAT).to_string());
    }
    if let Ok(d) = NaiveDate::parse_from_str(ts, DAY_FORMAT) {
        return Some(d.format(DAY_FORMAT).to_string());
    }
    if !ts.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if ts.len() == 4 {
        return NaiveDate::from_ymd_opt(ts.parse().ok()?, 1, 1)
            .map(|d| d.format(DAY_FORMAT).to_string());
    }
    if ts.len() >= 9
        && let Ok(secs) = ts.parse::<i64>()
    {
        return DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.with_timezone(&Local).date_naive().format(DAY_FORMAT).to_string());
    }
    None
}

pub fn today() -> String {
    Local::now().date_naive().format(DAY_FORMAT).to_string()
}

/// Day to open the chat-log drawer on: the session's last activity, or today.
pub fn chatlog_day(n_time: &str) -> String {
    day_of(n_time).unwrap_or_else(today)
}
