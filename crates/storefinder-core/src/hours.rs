//! Tri-state open/closed evaluation of raw opening-hours strings.
//!
//! Supports the `24/7` literal and semicolon-separated clauses of the form
//! `Dd[-Dd] HH:MM-HH:MM` (e.g. `Mo-Fr 08:00-18:00; Sa 09:00-17:00`).
//! Malformed clauses are skipped silently; a parse failure never propagates
//! to the caller.

use std::sync::LazyLock;

use chrono::{Datelike, Local, Timelike, Weekday};
use regex::Regex;

use crate::types::OpenStatus;

static CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-z](?:-[A-Z][a-z])?) (\d{2}):(\d{2})-(\d{2}):(\d{2})")
        .expect("valid hours regex")
});

/// Day tokens in week order, Monday first.
const DAYS: &[&str] = &["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Evaluates `opening_hours` against the current local day and time.
#[must_use]
pub fn evaluate_hours(opening_hours: Option<&str>) -> OpenStatus {
    let now = Local::now();
    let minutes = now.hour() * 60 + now.minute();
    evaluate_hours_at(opening_hours, now.weekday(), minutes)
}

/// Evaluates `opening_hours` against an explicit day and minutes past
/// midnight.
///
/// The first clause whose day range contains `day` decides the result by
/// inclusive containment of the time window; absent input, unparseable
/// clauses, or no matching day all yield [`OpenStatus::Unknown`].
#[must_use]
pub fn evaluate_hours_at(
    opening_hours: Option<&str>,
    day: Weekday,
    minutes_past_midnight: u32,
) -> OpenStatus {
    let Some(raw) = opening_hours else {
        return OpenStatus::Unknown;
    };

    if raw.to_lowercase().contains("24/7") {
        return OpenStatus::Open;
    }

    let today = day.num_days_from_monday() as usize;

    for clause in raw.split(';') {
        let Some(caps) = CLAUSE_RE.captures(clause.trim()) else {
            continue;
        };
        let Some(matches_today) = day_range_contains(&caps[1], today) else {
            // Unknown day token: malformed clause, skip.
            continue;
        };
        if !matches_today {
            continue;
        }

        let (Some(start), Some(end)) = (
            window_minutes(&caps[2], &caps[3]),
            window_minutes(&caps[4], &caps[5]),
        ) else {
            continue;
        };

        return if minutes_past_midnight >= start && minutes_past_midnight <= end {
            OpenStatus::Open
        } else {
            OpenStatus::Closed
        };
    }

    OpenStatus::Unknown
}

/// Whether `today` (0 = Monday) falls inside a day token like `Mo` or
/// `Fr-Mo`. Ranges where start > end wrap across the week boundary.
fn day_range_contains(range: &str, today: usize) -> Option<bool> {
    match range.split_once('-') {
        Some((start, end)) => {
            let s = day_index(start)?;
            let e = day_index(end)?;
            if s <= e {
                Some(today >= s && today <= e)
            } else {
                Some(today >= s || today <= e)
            }
        }
        None => Some(day_index(range)? == today),
    }
}

fn day_index(token: &str) -> Option<usize> {
    DAYS.iter().position(|d| *d == token)
}

fn window_minutes(hours: &str, minutes: &str) -> Option<u32> {
    let h: u32 = hours.parse().ok()?;
    let m: u32 = minutes.parse().ok()?;
    Some(h * 60 + m)
}
