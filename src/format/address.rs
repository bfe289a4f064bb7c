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

//! Chain address truncation.
//!
//! Leaderboard rows identify traders by their chain address. A full address
//! is far too wide for a table column, so it is shortened to a fixed width
//! with an ellipsis between a head and a tail segment. Keeping both ends
//! visible is deliberate: the tail is what people compare when two addresses
//! share a prefix.

/// Default display width used by the leaderboard tables.
pub const SHORT_ADDRESS_LEN: usize = 16;

const SEPARATOR: &str = "...";

/// Shortens a chain address to at most `max_len` characters.
///
/// Addresses no longer than `max_len` are returned unchanged. Longer ones
/// keep a head and a tail segment joined by `...`, sized so that the result
/// is exactly `max_len` characters; the head receives the larger half when
/// the remaining budget is odd, and the tail is taken from the end of the
/// address.
///
/// Widths smaller than the separator clamp the segment budget to zero, so
/// the result degenerates toward the bare separator instead of underflowing.
/// Lengths are measured in characters, not bytes, so multibyte input is
/// never split inside a code point.
///
/// # Arguments
///
/// * `addr` - The address to shorten.
/// * `max_len` - The display width budget, in characters.
///
/// # Examples
///
/// ```
/// use runeboard::format::address::short_address;
///
/// let addr = "thor1g98cy3n9mmjrpn0sxmn63lztelera37n8n67c0";
/// assert_eq!(short_address(addr, 16), "thor1g9...8n67c0");
/// assert_eq!(short_address("thor1g98", 16), "thor1g98");
/// ```
pub fn short_address(addr: &str, max_len: usize) -> String {
    let len = addr.chars().count();
    if len <= max_len {
        return addr.to_string();
    }

    let chars_to_show = max_len.saturating_sub(SEPARATOR.len());
    let front_chars = chars_to_show.div_ceil(2);
    let back_chars = chars_to_show / 2;

    let front: String = addr.chars().take(front_chars).collect();
    let back: String = addr.chars().skip(len - back_chars).collect();

    format!("{front}{SEPARATOR}{back}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "thor1g98cy3n9mmjrpn0sxmn63lztelera37n8n67c0";

    #[test]
    fn returns_short_addresses_unchanged() {
        assert_eq!(short_address("thor1g98", 16), "thor1g98");
        assert_eq!(short_address("", 16), "");

        // Exactly at the budget is still unchanged.
        assert_eq!(short_address("0123456789abcdef", 16), "0123456789abcdef");
    }

    #[test]
    fn shortens_to_exact_width() {
        let short = short_address(ADDR, SHORT_ADDRESS_LEN);

        assert_eq!(short, "thor1g9...8n67c0");
        assert_eq!(short.chars().count(), SHORT_ADDRESS_LEN);
        assert_eq!(short.matches(SEPARATOR).count(), 1);
    }

    #[test]
    fn keeps_head_and_tail_of_the_address() {
        let short = short_address(ADDR, 20);
        let (front, back) = short.split_once(SEPARATOR).unwrap();

        assert!(ADDR.starts_with(front));
        assert!(ADDR.ends_with(back));
        assert_eq!(short.chars().count(), 20);
    }

    #[test]
    fn head_receives_the_larger_half_of_an_odd_budget() {
        // A width of 14 leaves 11 characters: 6 in front, 5 behind.
        assert_eq!(short_address(ADDR, 14), "thor1g...n67c0");
    }

    #[test]
    fn degenerates_gracefully_below_separator_width() {
        assert_eq!(short_address(ADDR, 3), "...");
        assert_eq!(short_address(ADDR, 2), "...");
        assert_eq!(short_address(ADDR, 0), "...");

        // One spare character goes to the head.
        assert_eq!(short_address(ADDR, 4), "t...");
    }

    #[test]
    fn measures_characters_not_bytes() {
        let runes = "ᚠᚡᚢᚣᚤᚥᚦᚧᚨᚩᚪᚫᚬᚭᚮᚯᚰᚱ";
        let short = short_address(runes, 10);

        assert_eq!(short, "ᚠᚡᚢᚣ...ᚯᚰᚱ");
        assert_eq!(short.chars().count(), 10);
    }
}
