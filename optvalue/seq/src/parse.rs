//! String parsing that reports failure as an absent optional.
//!
//! Parsing follows the [`FromStr`] rules of the target type. A failure is
//! absent with a [`ParseReason`] naming the target type.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use optvalue_core::{none_with_reason, Optional};

use crate::reason::ParseReason;

/// Parses `s` as a `T`.
pub fn try_parse<T: FromStr>(s: &str) -> Optional<T> {
    match s.parse() {
        Ok(value) => Optional::some(value),
        Err(_) => failed::<T>(s),
    }
}

fn failed<T>(s: &str) -> Optional<T> {
    let reason = ParseReason::of::<T>();
    log::trace!("{s:?} {reason}");
    none_with_reason(reason)
}

/// Parses `s` as an [`i32`].
pub fn try_parse_int(s: &str) -> Optional<i32> {
    try_parse(s)
}

macro_rules! parse_helpers {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Parses `s` as [`", stringify!($ty), "`].")]
            pub fn $name(s: &str) -> Optional<$ty> {
                try_parse(s)
            }
        )*
    };
}

parse_helpers! {
    try_parse_i8 => i8,
    try_parse_i16 => i16,
    try_parse_i32 => i32,
    try_parse_i64 => i64,
    try_parse_i128 => i128,
    try_parse_isize => isize,
    try_parse_u8 => u8,
    try_parse_u16 => u16,
    try_parse_u32 => u32,
    try_parse_u64 => u64,
    try_parse_u128 => u128,
    try_parse_usize => usize,
    try_parse_f32 => f32,
    try_parse_f64 => f64,
    try_parse_bool => bool,
    try_parse_char => char,
}

// DATES AND TIMES
// ===================

/// Parses a date and time without offset using a `strftime`-style format.
pub fn try_parse_datetime(s: &str, fmt: &str) -> Optional<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(s, fmt) {
        Ok(value) => Optional::some(value),
        Err(_) => failed(s),
    }
}

/// Parses a date using a `strftime`-style format.
pub fn try_parse_date(s: &str, fmt: &str) -> Optional<NaiveDate> {
    match NaiveDate::parse_from_str(s, fmt) {
        Ok(value) => Optional::some(value),
        Err(_) => failed(s),
    }
}

/// Parses an RFC 3339 timestamp, keeping its offset.
pub fn try_parse_rfc3339(s: &str) -> Optional<DateTime<FixedOffset>> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(value) => Optional::some(value),
        Err(_) => failed(s),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use optvalue_core::some;
    use quickcheck::quickcheck;

    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn parses_int() {
        init();
        assert_eq!(try_parse_int("42"), some(42));

        let failed = try_parse_int("abc");
        assert!(failed.is_none());
        assert_eq!(
            failed.reason().unwrap().to_string(),
            "could not be parsed as i32"
        );
        assert_eq!(
            failed.reason().unwrap().downcast_ref::<ParseReason>(),
            Some(&ParseReason::of::<i32>())
        );
    }

    #[test]
    fn named_helpers() {
        assert_eq!(try_parse_u8("255"), some(255));
        assert!(try_parse_u8("256").is_none());
        assert_eq!(try_parse_i64("-7"), some(-7));
        assert_eq!(try_parse_f64("1.5"), some(1.5));
        assert_eq!(try_parse_bool("true"), some(true));
        assert!(try_parse_bool("yes").is_none());
        assert_eq!(try_parse_char("x"), some('x'));
        assert!(try_parse_char("xy").is_none());
        assert_eq!(
            try_parse_u16("").reason().unwrap().to_string(),
            "could not be parsed as u16"
        );
    }

    #[test]
    fn generic_parse() {
        let addr = try_parse::<std::net::Ipv4Addr>("127.0.0.1");
        assert!(addr.has_value());
        let bad = try_parse::<std::net::Ipv4Addr>("localhost");
        assert_eq!(
            bad.reason().unwrap().to_string(),
            "could not be parsed as Ipv4Addr"
        );
    }

    #[test]
    fn dates() {
        init();
        let date = try_parse_date("2024-02-29", "%Y-%m-%d").into_value().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
        assert!(try_parse_date("2023-02-29", "%Y-%m-%d").is_none());

        let time = try_parse_datetime("2024-01-02 03:04:05", "%Y-%m-%d %H:%M:%S")
            .into_value()
            .unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (3, 4, 5));

        let stamp = try_parse_rfc3339("2024-01-02T03:04:05+02:00");
        assert_eq!(
            stamp.map(|t| t.offset().local_minus_utc()),
            some(2 * 3600)
        );
        let bad = try_parse_rfc3339("yesterday");
        assert_eq!(
            bad.reason().unwrap().to_string(),
            "could not be parsed as DateTime<FixedOffset>"
        );
    }

    quickcheck! {
        fn printed_integers_parse_back(value: i64) -> bool {
            try_parse_i64(&value.to_string()) == some(value)
        }

        fn agrees_with_from_str(s: String) -> bool {
            try_parse_u32(&s).into_option() == s.parse::<u32>().ok()
        }
    }
}
