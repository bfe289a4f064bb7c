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

//! # Leaderboard Display Core.
//!
//! The display layer of a RUNE trading leaderboard.
//!
//! This crate turns the raw values the leaderboard works with, such as
//! trader addresses, swap volumes, percentage shares, currency amounts and
//! unix timestamps, into the strings the user interface renders. It also
//! carries the small declarative structures the surrounding application
//! wires together at startup: the page-route table and the persisted
//! configuration.
//!
//! ## Architecture
//!
//! * [`format`] holds the formatting functions. Nothing in it performs I/O
//!   or keeps state; every call is an independent, deterministic
//!   computation, so the UI can call these helpers from any rendering
//!   context.
//! * [`routes`] declares which page component answers which client-side
//!   path. The table is plain ordered data for an external router to
//!   consume; no matching happens in this crate.
//! * [`config`] manages the on-disk configuration and stamps the running
//!   crate version into the loaded value, so the rest of the application
//!   reads one process-wide version string.
//!
//! The commonly used items are re-exported at the crate root so UI code can
//! import them flat.

pub mod config;
pub mod format;
pub mod routes;

pub use config::{AppConfig, load_config, save_config};
pub use format::address::{SHORT_ADDRESS_LEN, short_address};
pub use format::number::{
    PercentDisplay, RUNE_SYMBOL, format_currency, format_number, format_percent, format_volume,
};
pub use format::time::{
    DAY, HOUR, MINUTE, TimespanError, format_timestamp, humanize_seconds, parse_timespan,
    short_countdown, time_ago,
};
pub use routes::{CATCH_ALL, Route, RouteTable, default_routes};

/// Application version, read from the crate manifest at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
