//! Offline parsing of free-text floorplan descriptions.

use lazy_static::lazy_static;
use regex::Regex;
use shared::{domain::Language, protocol::FloorplanSpec};

const ROOM_COUNT_RANGE: std::ops::RangeInclusive<u32> = 1..=3;

lazy_static! {
    static ref BEDROOM_COUNT: Regex = Regex::new(r"(\d+)\s+bedroom").expect("bedroom pattern");
    static ref WASHROOM_COUNT: Regex =
        Regex::new(r"(\d+)\s+(?:washroom|bathroom)").expect("washroom pattern");
    static ref DECIMAL_DIGIT: Regex = Regex::new(r"^\d$").expect("digit pattern");
}

/// Builds a floorplan spec from a description such as `"3 bedroom house"`.
///
/// Counts outside 1..=3 fall back to the defaults. A garage is always
/// included, and plans with two or more bedrooms get an attached washroom.
pub fn parse_floorplan_request(user_text: &str) -> FloorplanSpec {
    let text = user_text.to_lowercase();
    let defaults = FloorplanSpec::default();

    let bedrooms = count_before(&text, &BEDROOM_COUNT)
        .filter(|n| ROOM_COUNT_RANGE.contains(n))
        .map_or(defaults.bedrooms, |n| n as u8);
    let washrooms = count_before(&text, &WASHROOM_COUNT)
        .filter(|n| ROOM_COUNT_RANGE.contains(n))
        .map_or(defaults.washrooms, |n| n as u8);

    let language = if text.contains("urdu") {
        Language::Urdu
    } else {
        Language::English
    };

    FloorplanSpec {
        bedrooms,
        washrooms,
        has_garage: true,
        has_attached_washroom: bedrooms >= 2,
        language,
    }
}

/// Reads the count captured by the first match of `pattern`.
///
/// Digits from any script are accepted. A count that does not fit in a `u32`
/// comes back as `u32::MAX`, so the caller treats it as out of range.
fn count_before(text: &str, pattern: &Regex) -> Option<u32> {
    let digits = pattern.captures(text)?.get(1)?.as_str();
    let count = digits
        .chars()
        .try_fold(0u32, |acc, c| acc.checked_mul(10)?.checked_add(decimal_value(c)));
    Some(count.unwrap_or(u32::MAX))
}

/// Decimal digits sit in contiguous runs of ten starting at zero, so a
/// digit's value is its distance from the start of its run, modulo ten.
fn decimal_value(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    (c as u32 - start) % 10
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}
