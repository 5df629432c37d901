//! Best-effort parsing of the free-text "posted" strings the sources show.
//!
//! Each function converts a relative phrase into an absolute timestamp
//! against a caller-supplied reference time. Unparseable or empty text yields
//! `None`, never an error; a missing date is not worth losing a posting over.

use chrono::{DateTime, Duration, Utc};
use regex::Regex;

/// Parses English relative phrases: `today`, `yesterday`,
/// `N minutes/hours/days/weeks ago`.
#[must_use]
pub fn parse_relative_en(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    if lower.contains("today") {
        return Some(now);
    }
    if lower.contains("yesterday") {
        return Some(now - Duration::days(1));
    }

    let re = Regex::new(r"(\d+)\s*(minute|hour|day|week)s?\s*ago").expect("valid en date regex");
    let caps = re.captures(&lower)?;
    let n: i64 = caps[1].parse().ok()?;
    let delta = match &caps[2] {
        "minute" => Duration::minutes(n),
        "hour" => Duration::hours(n),
        "day" => Duration::days(n),
        "week" => Duration::weeks(n),
        _ => return None,
    };
    Some(now - delta)
}

/// Parses Thai relative phrases (`วันนี้` today, `เมื่อวาน` yesterday,
/// `N วัน/ชั่วโมง/นาที/สัปดาห์` ago), falling back to the English rules for
/// sources that mix locales.
#[must_use]
pub fn parse_relative_th(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains("วันนี้") {
        return Some(now);
    }
    if trimmed.contains("เมื่อวาน") {
        return Some(now - Duration::days(1));
    }

    let re = Regex::new(r"(\d+)\s*(วัน|ชั่วโมง|นาที|สัปดาห์)").expect("valid th date regex");
    if let Some(caps) = re.captures(trimmed) {
        let n: i64 = caps[1].parse().ok()?;
        let delta = match &caps[2] {
            "วัน" => Duration::days(n),
            "ชั่วโมง" => Duration::hours(n),
            "นาที" => Duration::minutes(n),
            "สัปดาห์" => Duration::weeks(n),
            _ => return None,
        };
        return Some(now - delta);
    }

    parse_relative_en(trimmed, now)
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
