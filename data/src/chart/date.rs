use chrono::{Local, NaiveDate};
use club::EvaluationRecord;

/// Resolves the two textual date formats the backend emits to a comparable
/// date.
///
/// A leading 2-char segment reads as day-month-year, a leading 4-char
/// segment as year-month-day; the len-2 check runs first and that
/// precedence is relied upon by stored data. Anything else gets one
/// generic parse attempt and then defaults to today — this function never
/// fails.
pub fn parse(raw: &str) -> NaiveDate {
    parse_opt(raw).unwrap_or_else(|| Local::now().date_naive())
}

fn parse_opt(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let parts: Vec<&str> = raw.split('-').collect();

    if parts.len() == 3 {
        let dashed = match parts[0].len() {
            2 => from_ymd(parts[2], parts[1], parts[0]),
            4 => from_ymd(parts[0], parts[1], parts[2]),
            _ => None,
        };
        if dashed.is_some() {
            return dashed;
        }
    }

    parse_generic(raw)
}

fn from_ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_generic(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%d/%m/%Y") {
        return Some(date);
    }
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }

    None
}

/// Oldest first; applied once per fetched snapshot.
pub fn sort_by_date(records: &mut [EvaluationRecord]) {
    records.sort_by_key(|record| parse(&record.date));
}
