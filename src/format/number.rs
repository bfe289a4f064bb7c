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

//! Numeric display formatting.
//!
//! Raw leaderboard figures arrive as plain numbers. The helpers here
//! produce the strings the tables render: grouped digits, fixed-precision
//! percentage shares, rounded volumes, and currency-decorated amounts.

use std::fmt;

/// Symbol appended to amounts displayed in the native currency.
pub const RUNE_SYMBOL: &str = "ᚱ";

/// A formatted percentage.
///
/// Percentage formatting has two distinct shapes: a zero divisor yields the
/// bare numeral `0`, every other input yields fixed-precision text. The
/// variants keep those cases distinguishable for callers that care which
/// one they received; both render through [`Display`](fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercentDisplay {
    /// The bare numeral `0`, produced when the divisor is zero.
    Zero,
    /// Fixed-precision percentage text.
    Text(String),
}

impl fmt::Display for PercentDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentDisplay::Zero => f.write_str("0"),
            PercentDisplay::Text(text) => f.write_str(text),
        }
    }
}

/// Formats a number with thousands separators.
///
/// The value is rendered in its canonical decimal form, then the integer
/// digits are grouped with commas. The fractional part, when present, is
/// left untouched, and a leading minus sign is never separated from the
/// first digit.
///
/// # Examples
///
/// ```
/// use runeboard::format::number::format_number;
///
/// assert_eq!(format_number(1234567.0), "1,234,567");
/// assert_eq!(format_number(1234.5), "1,234.5");
/// ```
pub fn format_number(value: f64) -> String {
    let text = value.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a trading volume.
///
/// Volumes display as whole units: the value is rounded to the nearest
/// integer before the digits are grouped.
///
/// # Examples
///
/// ```
/// use runeboard::format::number::format_volume;
///
/// assert_eq!(format_volume(1234.6), "1,235");
/// ```
pub fn format_volume(value: f64) -> String {
    format_number(value.round())
}

/// Formats a percentage share.
///
/// Without a `total` the value itself is rendered with two decimal places.
/// With a non-zero `total` the share `(value / total) * 100` is rendered
/// with three decimal places. A zero `total` short-circuits to
/// [`PercentDisplay::Zero`] instead of dividing.
///
/// # Examples
///
/// ```
/// use runeboard::format::number::{PercentDisplay, format_percent};
///
/// assert_eq!(format_percent(12.5, None).to_string(), "12.50");
/// assert_eq!(format_percent(50.0, Some(200.0)).to_string(), "25.000");
/// assert_eq!(format_percent(50.0, Some(0.0)), PercentDisplay::Zero);
/// ```
pub fn format_percent(value: f64, total: Option<f64>) -> PercentDisplay {
    match total {
        None => PercentDisplay::Text(format!("{value:.2}")),
        Some(total) if total == 0.0 => PercentDisplay::Zero,
        Some(total) => PercentDisplay::Text(format!("{:.3}", value / total * 100.0)),
    }
}

/// Decorates an already formatted amount with its currency symbol.
///
/// The native currency appends the rune glyph; any other code is treated as
/// a dollar amount and prefixed. The comparison is exact, currency codes are
/// lowercase throughout the application.
///
/// # Examples
///
/// ```
/// use runeboard::format::number::format_currency;
///
/// assert_eq!(format_currency("100", "rune"), "100 ᚱ");
/// assert_eq!(format_currency("100", "usd"), "$ 100");
/// ```
pub fn format_currency(value: &str, currency: &str) -> String {
    if currency == "rune" {
        format!("{value} {RUNE_SYMBOL}")
    } else {
        format!("$ {value}")
    }
}
