// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Time and date display.
//!
//! Timestamps arrive from the leaderboard data as unix seconds. This module
//! renders them as calendar dates, turns durations into readable phrases,
//! and parses the compact timespan strings users type (`"1d 2h"`), the
//! inverse of the duration formatter.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Seconds in a minute.
pub const MINUTE: u64 = 60;

/// Seconds in an hour.
pub const HOUR: u64 = 60 * MINUTE;

/// Seconds in a day.
pub const DAY: u64 = 24 * HOUR;

// Rendered for timestamps outside the representable calendar range.
const INVALID_DATE: &str = "Invalid Date";

// Characters ignored between timespan components.
const TIMESPAN_SEPARATORS: &[char] = &[' ', ',', ';', ':', '\t', '/', '.'];

/// Failure modes of [`parse_timespan`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimespanError {
    /// Digits that do not fit a duration value.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A unit letter with no digits in front of it.
    #[error("expected digits before unit '{0}'")]
    MissingNumber(char),

    /// A character that is neither a digit, a unit, nor a separator.
    #[error("unexpected symbol '{0}'")]
    UnexpectedSymbol(char),

    /// Digits at the end of the input with no unit after them.
    #[error("unfinished component at end of timespan '{0}'")]
    UnfinishedComponent(String),
}

/// Renders a unix timestamp as an HTTP-style UTC date.
///
/// Timestamps outside the representable calendar range render a placeholder
/// rather than failing; the function is total.
///
/// # Examples
///
/// ```
/// use runeboard::format::time::format_timestamp;
///
/// assert_eq!(format_timestamp(0), "Thu, 01 Jan 1970 00:00:00 GMT");
/// ```
pub fn format_timestamp(unix_secs: i64) -> String {
    match DateTime::from_timestamp(unix_secs, 0) {
        Some(utc) => utc.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Turns a duration in seconds into a readable phrase.
///
/// Days, hours, minutes and seconds compose with coarse suppression rules:
/// hours disappear past a month of days, minutes once there are whole days,
/// seconds once there are whole hours. Zero-valued units are omitted and a
/// zero duration reads as `"same time"`.
///
/// # Examples
///
/// ```
/// use runeboard::format::time::humanize_seconds;
///
/// assert_eq!(humanize_seconds(65), "1 min 5 sec");
/// assert_eq!(humanize_seconds(90_000), "1 day 1 hour");
/// ```
pub fn humanize_seconds(total: u64) -> String {
    if total == 0 {
        return "same time".to_string();
    }

    let minutes = total / MINUTE;
    let hours = total / HOUR;
    let days = total / DAY;

    let mut parts: Vec<String> = Vec::new();

    if days > 0 {
        let label = if days == 1 { "day" } else { "days" };
        parts.push(format!("{days} {label}"));
    }

    if days <= 31 && hours % 24 > 0 {
        let n = hours % 24;
        let label = if n == 1 { "hour" } else { "hours" };
        parts.push(format!("{n} {label}"));
    }

    if days == 0 && minutes % 60 > 0 {
        parts.push(format!("{} min", minutes % 60));
    }

    if hours == 0 && total % 60 > 0 {
        parts.push(format!("{} sec", total % 60));
    }

    parts.join(" ")
}

/// Renders how long ago a unix timestamp was.
///
/// Zero is the "never happened" sentinel used across the leaderboard data.
/// Instants at or ahead of the current clock read as `"just now"`.
pub fn time_ago(unix_secs: i64) -> String {
    time_ago_from(unix_secs, Utc::now().timestamp())
}

fn time_ago_from(unix_secs: i64, now_secs: i64) -> String {
    if unix_secs == 0 {
        return "never".to_string();
    }

    let elapsed = now_secs.saturating_sub(unix_secs);
    if elapsed <= 0 {
        return "just now".to_string();
    }

    format!("{} ago", humanize_seconds(elapsed as u64))
}

/// Compact wall-clock distance to a target instant.
///
/// Renders `"{days}d {HH}:{MM}"` with the day component omitted when zero.
/// A target already in the past renders the swapped distance with a `-`
/// prefix.
///
/// # Examples
///
/// ```
/// use runeboard::format::time::short_countdown;
///
/// assert_eq!(short_countdown(90_300, 0), "1d 01:05");
/// assert_eq!(short_countdown(0, 300), "-00:05");
/// ```
pub fn short_countdown(target_secs: i64, now_secs: i64) -> String {
    if target_secs < now_secs {
        return format!("-{}", short_countdown(now_secs, target_secs));
    }

    let minutes = target_secs.saturating_sub(now_secs) / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let days = if days > 0 {
        format!("{days}d ")
    } else {
        String::new()
    };

    format!("{}{:02}:{:02}", days, hours % 24, minutes % 60)
}

/// Parses a compact timespan string into seconds.
///
/// A bare unsigned integer is taken as seconds. Otherwise the input is a
/// sequence of `<digits><unit>` components, where the unit is one of `d`,
/// `h`, `m`, `s` (case-insensitive) and component values sum. Spaces,
/// commas, semicolons, colons, tabs, slashes and dots may separate
/// components. Sums saturate instead of overflowing.
///
/// # Errors
///
/// Returns a [`TimespanError`] when a unit has no digits in front of it,
/// when an unexpected character appears, or when trailing digits are left
/// without a unit.
///
/// # Examples
///
/// ```
/// use runeboard::format::time::parse_timespan;
///
/// assert_eq!(parse_timespan("1d 2h"), Ok(93_600));
/// assert_eq!(parse_timespan("90"), Ok(90));
/// assert!(parse_timespan("2x").is_err());
/// ```
pub fn parse_timespan(text: &str) -> Result<u64, TimespanError> {
    let text = text.trim();
    if let Ok(seconds) = text.parse::<u64>() {
        return Ok(seconds);
    }

    let mut total: u64 = 0;
    let mut pending = String::new();

    for symbol in text.chars() {
        let symbol = symbol.to_ascii_lowercase();

        if let Some(multiplier) = unit_seconds(symbol) {
            if pending.is_empty() {
                return Err(TimespanError::MissingNumber(symbol));
            }

            let number: u64 = pending
                .parse()
                .map_err(|_| TimespanError::InvalidNumber(pending.clone()))?;
            total = total.saturating_add(number.saturating_mul(multiplier));
            pending.clear();
        } else if symbol.is_ascii_digit() {
            pending.push(symbol);
        } else if TIMESPAN_SEPARATORS.contains(&symbol) {
            // Separator between components.
        } else {
            return Err(TimespanError::UnexpectedSymbol(symbol));
        }
    }

    if !pending.is_empty() {
        return Err(TimespanError::UnfinishedComponent(pending));
    }

    Ok(total)
}

fn unit_seconds(unit: char) -> Option<u64> {
    match unit {
        's' => Some(1),
        'm' => Some(MINUTE),
        'h' => Some(HOUR),
        'd' => Some(DAY),
        _ => None,
    }
}
