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

//! Integration tests for the display core.
//!
//! These exercise the crate's public surface the way the UI layer consumes
//! it: through the flat re-exports at the crate root, composing several
//! formatters into the strings a leaderboard row actually shows.

use runeboard::{
    AppConfig, CATCH_ALL, PercentDisplay, SHORT_ADDRESS_LEN, VERSION, default_routes,
    format_currency, format_number, format_percent, format_timestamp, format_volume,
    humanize_seconds, parse_timespan, short_address, time_ago,
};

#[test]
fn address_columns_have_a_stable_width() {
    let addresses = vec![
        "thor1g98cy3n9mmjrpn0sxmn63lztelera37n8n67c0",
        "bnb1u9dxkp29fcvgc5v2q9m4y8u6fwwe9v3w3kdyfv",
        "0x3fbe1f8c3f31ab9ad1514e42c04d1dbd2ed86b6e",
    ];

    for addr in addresses {
        let short = short_address(addr, SHORT_ADDRESS_LEN);
        let (front, back) = short.split_once("...").unwrap();

        assert_eq!(short.chars().count(), SHORT_ADDRESS_LEN);
        assert!(addr.starts_with(front));
        assert!(addr.ends_with(back));
    }
}

#[test]
fn a_leaderboard_row_renders_end_to_end() {
    // Volume cell: rounded, grouped, decorated per the configured currency.
    let volume = format_volume(1_234_567.89);
    assert_eq!(volume, "1,234,568");
    assert_eq!(format_currency(&volume, "rune"), "1,234,568 ᚱ");
    assert_eq!(format_currency(&volume, "usd"), "$ 1,234,568");

    // Share cell: this trader did 50 of 200 swaps.
    assert_eq!(format_percent(50.0, Some(200.0)).to_string(), "25.000");

    // Date cell.
    assert_eq!(format_timestamp(0), "Thu, 01 Jan 1970 00:00:00 GMT");
}

#[test]
fn grouping_does_not_touch_fractions() {
    assert_eq!(format_number(1234567.0), "1,234,567");
    assert_eq!(format_number(1234.5), "1,234.5");
}

#[test]
fn a_zero_total_share_stays_a_numeral() {
    for value in [0.0, 1.0, -7.5, f64::MAX] {
        assert_eq!(format_percent(value, Some(0.0)), PercentDisplay::Zero);
        assert_eq!(format_percent(value, Some(0.0)).to_string(), "0");
    }
}

#[test]
fn durations_and_timespans_are_inverses_for_round_amounts() {
    let seconds = parse_timespan("1d 2h").unwrap();
    assert_eq!(seconds, 93_600);
    assert_eq!(humanize_seconds(seconds), "1 day 2 hours");
}

#[test]
fn the_never_sentinel_survives_the_public_api() {
    assert_eq!(time_ago(0), "never");
}

#[test]
fn the_default_route_table_is_ordered_and_catch_all_terminated() {
    let table = default_routes();
    let last = table.routes().last().unwrap();

    assert_eq!(table.routes().first().unwrap().path, "/");
    assert_eq!(last.path, CATCH_ALL);
    assert_eq!(last.component, "leaderboard");
}

#[test]
fn the_crate_version_comes_from_the_manifest() {
    assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!VERSION.is_empty());
}

#[test]
fn config_defaults_are_usable_without_a_file() {
    let cfg = AppConfig::default();
    let amount = format_currency("42", &cfg.currency);
    assert_eq!(amount, "42 ᚱ");
}
