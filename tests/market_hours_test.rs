//! Integration tests for the market-hours engine
//!
//! Exercises the built-in venue table end to end, plus caller-supplied
//! venues with unusual weekday sets.

use chrono::{Datelike, Duration, TimeZone, Utc, Weekday};
use marketfolio::prelude::*;

#[test]
fn closed_whenever_local_weekday_is_not_a_trading_day() {
    let clock = MarketClock::with_builtin();

    // Friday 2024-01-05 through Monday, hour by hour; whenever a venue's
    // local calendar says Saturday or Sunday, it must report closed no
    // matter the time of day.
    let start = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
    for hour in 0..(4 * 24) {
        let t = start + Duration::hours(hour);
        for spec in clock.exchanges() {
            let local_day = t.with_timezone(&spec.timezone).weekday();
            if !spec.weekdays.contains(&local_day) {
                assert!(
                    !clock.is_open(&spec.id, t),
                    "{} reported open at {} (local weekday {:?})",
                    spec.id,
                    t,
                    local_day
                );
            }
        }
    }
}

#[test]
fn session_boundaries_are_inclusive() {
    let clock = MarketClock::with_builtin();

    // Monday 2024-01-08; New York is UTC-5 in January.
    let open_minute = Utc.with_ymd_and_hms(2024, 1, 8, 14, 30, 0).unwrap();
    let close_minute = Utc.with_ymd_and_hms(2024, 1, 8, 21, 0, 0).unwrap();
    let before_open = Utc.with_ymd_and_hms(2024, 1, 8, 14, 29, 0).unwrap();
    let after_close = Utc.with_ymd_and_hms(2024, 1, 8, 21, 1, 0).unwrap();

    assert!(clock.is_open("NYSE", open_minute));
    assert!(clock.is_open("NYSE", close_minute));
    assert!(!clock.is_open("NYSE", before_open));
    assert!(!clock.is_open("NYSE", after_close));
}

#[test]
fn multi_session_venues_close_for_lunch() {
    let clock = MarketClock::with_builtin();

    // Tuesday 2024-01-09, Tokyo is UTC+9. Sessions are
    // 09:00-11:30 and 12:30-15:25 local.
    let morning = Utc.with_ymd_and_hms(2024, 1, 9, 0, 30, 0).unwrap(); // 09:30
    let lunch = Utc.with_ymd_and_hms(2024, 1, 9, 3, 0, 0).unwrap(); // 12:00
    let afternoon = Utc.with_ymd_and_hms(2024, 1, 9, 4, 0, 0).unwrap(); // 13:00
    let evening = Utc.with_ymd_and_hms(2024, 1, 9, 7, 0, 0).unwrap(); // 16:00

    assert!(clock.is_open("TSE", morning));
    assert!(!clock.is_open("TSE", lunch));
    assert!(clock.is_open("TSE", afternoon));
    assert!(!clock.is_open("TSE", evening));
}

#[test]
fn half_hour_timezone_offsets_resolve() {
    let clock = MarketClock::with_builtin();

    // Kolkata is UTC+5:30; the BSE opens 09:15 local.
    let at_open = Utc.with_ymd_and_hms(2024, 1, 8, 3, 45, 0).unwrap();
    let just_before = Utc.with_ymd_and_hms(2024, 1, 8, 3, 44, 0).unwrap();

    assert!(clock.is_open("BSE", at_open));
    assert_eq!(clock.local_time("BSE", at_open).unwrap(), "09:15");

    assert!(!clock.is_open("BSE", just_before));
    assert_eq!(
        clock.next_session_description("BSE", just_before).unwrap(),
        "Opens at 09:15"
    );
}

#[test]
fn daylight_saving_shifts_are_respected() {
    let clock = MarketClock::with_builtin();

    // Monday 2024-07-08: New York runs UTC-4 in July, so the 09:30 open
    // lands an hour earlier in UTC than it does in January.
    let summer_open = Utc.with_ymd_and_hms(2024, 7, 8, 13, 30, 0).unwrap();
    let winter_open_hour = Utc.with_ymd_and_hms(2024, 7, 8, 14, 30, 0).unwrap();

    assert!(clock.is_open("NYSE", summer_open));
    assert_eq!(clock.local_time("NYSE", summer_open).unwrap(), "09:30");
    assert_eq!(clock.local_time("NYSE", winter_open_hour).unwrap(), "10:30");
}

#[test]
fn next_session_rolls_to_tomorrow_after_close() {
    let clock = MarketClock::with_builtin();

    // 17:00 New York on a Monday: nothing left today.
    let evening = Utc.with_ymd_and_hms(2024, 1, 8, 22, 0, 0).unwrap();
    assert_eq!(
        clock.next_session_description("NYSE", evening).unwrap(),
        "Opens tomorrow at 09:30"
    );

    // The same wording applies on a Friday evening even though the next
    // calendar day is Saturday; the rollover does not skip non-trading days.
    let friday_evening = Utc.with_ymd_and_hms(2024, 1, 5, 22, 0, 0).unwrap();
    assert_eq!(
        clock.next_session_description("NYSE", friday_evening).unwrap(),
        "Opens tomorrow at 09:30"
    );
}

#[test]
fn custom_weekday_sets_are_honored() {
    // A Sunday-through-Thursday venue.
    let spec = ExchangeSpec::new(
        "TASE",
        "Tel Aviv Stock Exchange",
        "🇮🇱",
        "Asia/Jerusalem",
        vec![Session::new(9, 59, 17, 25).unwrap()],
        vec![
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
        ],
    )
    .unwrap();
    let clock = MarketClock::new(vec![spec]);

    // Sunday 2024-01-07, 10:00 Jerusalem (UTC+2 in January).
    let sunday = Utc.with_ymd_and_hms(2024, 1, 7, 8, 0, 0).unwrap();
    assert!(clock.is_open("TASE", sunday));

    // Friday is outside the weekday set.
    let friday = Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap();
    assert!(!clock.is_open("TASE", friday));
}

#[test]
fn unknown_exchange_degrades_to_sentinels() {
    let clock = MarketClock::with_builtin();
    let t = Utc.with_ymd_and_hms(2024, 1, 8, 15, 0, 0).unwrap();

    assert!(!clock.is_open("XXXX", t));
    assert_eq!(clock.local_time("XXXX", t), None);
    assert_eq!(clock.next_session_description("XXXX", t), None);
}

#[test]
fn overview_marks_open_and_closed_venues() {
    let clock = MarketClock::with_builtin();

    // Monday 14:30 UTC: New York and London are open, Asia-Pacific is done
    // for the day.
    let t = Utc.with_ymd_and_hms(2024, 1, 8, 14, 30, 0).unwrap();
    let overview = market_overview(&clock, t);

    let by_id = |id: &str| overview.iter().find(|s| s.id == id).unwrap();
    assert!(by_id("NYSE").is_open);
    assert!(by_id("LSE").is_open);
    assert!(!by_id("TSE").is_open);
    assert!(!by_id("ASX").is_open);

    // Closed cards carry the upcoming-session hint, open cards do not.
    assert!(by_id("NYSE").next_session.is_none());
    assert!(by_id("TSE").next_session.is_some());
}
