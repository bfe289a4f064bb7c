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

//! Display formatting for the leaderboard UI.
//!
//! Everything in this module converts raw values into human-readable
//! strings. The functions are pure: no I/O, no shared state, no failure
//! modes beyond the one documented parser. Malformed numeric input flows
//! through permissively rather than erroring, which is acceptable for a
//! display-only layer; callers validate values before they reach a screen.
//!
//! # Organization
//!
//! * [`address`]: truncating chain addresses to a fixed column width.
//! * [`number`]: digit grouping, percentage shares, volumes, and currency
//!   decoration.
//! * [`time`]: calendar timestamps, humanized durations, relative time, and
//!   the timespan parser.

pub mod address;
pub mod number;
pub mod time;

pub use address::{SHORT_ADDRESS_LEN, short_address};
pub use number::{
    PercentDisplay, RUNE_SYMBOL, format_currency, format_number, format_percent, format_volume,
};
pub use time::{
    DAY, HOUR, MINUTE, TimespanError, format_timestamp, humanize_seconds, parse_timespan,
    short_countdown, time_ago,
};
