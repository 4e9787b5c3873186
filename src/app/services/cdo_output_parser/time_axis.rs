//! Time coordinate section of `sinfo` output
//!
//! CDO prints a step count, a `RefTime/Units/Calendar` line and then a
//! *sample* of timestamps, four per row. Long axes are abbreviated with a row
//! of dots between the leading and trailing timestamps. This module collects
//! that sample and infers a regular sampling interval from it when the
//! printed timestamps allow it.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::app::models::{TimeCoordinates, TimeResolution};
use crate::config::ParserConfig;
use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

static STEPS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*(\d+)\s+steps?\b").expect("valid steps regex"));

static REFTIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"RefTime\s*=\s*(\S+(?:\s+\d{1,2}:\d{2}(?::\d{2})?)?)\s+Units\s*=\s*(\S+)\s+Calendar\s*=\s*(\S+)",
    )
    .expect("valid reftime regex")
});

static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d{1,}-\d{2}-\d{2})\s+(\d{2}:\d{2}:\d{2})").expect("valid timestamp regex")
});

/// Date arithmetic convention named in the `Calendar =` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calendar {
    /// `standard`, `gregorian`, `proleptic_gregorian`, `julian`
    Standard,
    /// `360_day`: twelve 30-day months
    Day360,
    /// `365_day` / `noleap`
    NoLeap,
    /// `366_day` / `all_leap`
    AllLeap,
}

const MONTH_DAYS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl Calendar {
    /// Map a calendar name; unknown names fall back to the standard calendar
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::to_ascii_lowercase).as_deref() {
            Some("360_day") => Calendar::Day360,
            Some("365_day") | Some("noleap") | Some("no_leap") => Calendar::NoLeap,
            Some("366_day") | Some("all_leap") => Calendar::AllLeap,
            _ => Calendar::Standard,
        }
    }

    /// Seconds since year 0 for a `YYYY-MM-DD hh:mm:ss` literal
    ///
    /// Only differences between results are meaningful.
    pub fn seconds(&self, timestamp: &str) -> Option<i64> {
        let (date, time) = timestamp.trim().split_once(char::is_whitespace)?;
        let (year, month, day) = split_date(date)?;
        let (hour, minute, second) = split_time(time.trim())?;
        if hour > 23 || minute > 59 || second > 60 {
            return None;
        }
        let day_number = self.day_number(year, month, day)?;
        day_number
            .checked_mul(SECONDS_PER_DAY)?
            .checked_add(hour * SECONDS_PER_HOUR + minute * SECONDS_PER_MINUTE + second)
    }

    /// Days since year 0; `None` for dates the calendar cannot hold
    fn day_number(&self, year: i64, month: i64, day: i64) -> Option<i64> {
        if !(1..=12).contains(&month) || day < 1 {
            return None;
        }
        let in_year = |days_per_year: i64, day_of_year: i64| {
            year.checked_mul(days_per_year)?.checked_add(day_of_year)
        };
        let month_index = (month - 1) as usize;

        match self {
            Calendar::Standard => {
                let date = NaiveDate::from_ymd_opt(
                    i32::try_from(year).ok()?,
                    month as u32,
                    day as u32,
                )?;
                Some(i64::from(date.num_days_from_ce()))
            }
            Calendar::Day360 => {
                if day > 30 {
                    return None;
                }
                in_year(360, (month - 1) * 30 + (day - 1))
            }
            Calendar::NoLeap => {
                let elapsed: i64 = MONTH_DAYS[..month_index].iter().sum();
                if day > MONTH_DAYS[month_index] {
                    return None;
                }
                in_year(365, elapsed + (day - 1))
            }
            Calendar::AllLeap => {
                let month_length = |index: usize| MONTH_DAYS[index] + i64::from(index == 1);
                let elapsed: i64 = (0..month_index).map(month_length).sum();
                if day > month_length(month_index) {
                    return None;
                }
                in_year(366, elapsed + (day - 1))
            }
        }
    }
}

fn split_date(date: &str) -> Option<(i64, i64, i64)> {
    // Years may be negative or longer than four digits
    let (sign, body) = match date.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, date),
    };
    let mut parts = body.splitn(3, '-');
    let year: i64 = parts.next()?.parse().ok()?;
    let month: i64 = parts.next()?.parse().ok()?;
    let day: i64 = parts.next()?.parse().ok()?;
    Some((sign * year, month, day))
}

fn split_time(time: &str) -> Option<(i64, i64, i64)> {
    let mut parts = time.splitn(3, ':');
    let hour: i64 = parts.next()?.parse().ok()?;
    let minute: i64 = parts.next()?.parse().ok()?;
    let second: i64 = parts.next().map_or(Some(0), |s| s.parse().ok())?;
    Some((hour, minute, second))
}

/// Infer a regular interval from sampled timestamps (in seconds)
///
/// Differences are only taken between neighbours inside one segment, since
/// an omission row separates timestamps that are not consecutive. At least
/// two differences are required and all of them must be equal. A difference
/// too large for `i64` makes the axis irregular.
pub fn infer_time_resolution(segments: &[Vec<i64>]) -> Option<TimeResolution> {
    let differences: Vec<i64> = segments
        .iter()
        .flat_map(|segment| segment.windows(2).map(|pair| pair[1].checked_sub(pair[0])))
        .collect::<Option<_>>()?;

    let (&interval, rest) = differences.split_first()?;
    if rest.is_empty() || interval <= 0 || rest.iter().any(|&d| d != interval) {
        return None;
    }

    Some(TimeResolution {
        label: interval_label(interval),
        interval_seconds: interval,
        is_regular: true,
    })
}

/// Label an interval with the coarsest unit that divides it exactly
pub fn interval_label(seconds: i64) -> String {
    let (count, unit) = if seconds % SECONDS_PER_DAY == 0 {
        (seconds / SECONDS_PER_DAY, "day")
    } else if seconds % SECONDS_PER_HOUR == 0 {
        (seconds / SECONDS_PER_HOUR, "hour")
    } else if seconds % SECONDS_PER_MINUTE == 0 {
        (seconds / SECONDS_PER_MINUTE, "minute")
    } else {
        (seconds, "second")
    };

    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Accumulates the lines of a time coordinate section
#[derive(Debug)]
pub struct TimeSectionParser<'a> {
    config: &'a ParserConfig,
    coordinates: TimeCoordinates,
    /// Printed timestamps, split wherever an omission row appears
    segments: Vec<Vec<String>>,
}

impl<'a> TimeSectionParser<'a> {
    pub fn new(config: &'a ParserConfig) -> Self {
        Self {
            config,
            coordinates: TimeCoordinates::default(),
            segments: vec![Vec::new()],
        }
    }

    /// Feed one line that belongs to the time section
    pub fn consume_line(&mut self, line: &str) {
        let trimmed = line.trim();

        if let Some(caps) = REFTIME_PATTERN.captures(trimmed) {
            self.coordinates.reftime = Some(normalise_spaces(&caps[1]));
            self.coordinates.units = Some(caps[2].to_string());
            self.coordinates.calendar = Some(caps[3].to_string());
            return;
        }

        if let Some(caps) = STEPS_PATTERN.captures(trimmed) {
            self.coordinates.steps = caps[1].parse().ok();
            return;
        }

        if self.config.is_omission_marker(trimmed) {
            self.coordinates.timestamps_omitted = true;
            if self.segments.last().is_some_and(|segment| !segment.is_empty()) {
                self.segments.push(Vec::new());
            }
            return;
        }

        let mut found = false;
        for caps in TIMESTAMP_PATTERN.captures_iter(trimmed) {
            let timestamp = format!("{} {}", &caps[1], &caps[2]);
            self.coordinates
                .first_timestamp
                .get_or_insert_with(|| timestamp.clone());
            self.coordinates.last_timestamp = Some(timestamp.clone());
            if let Some(segment) = self.segments.last_mut() {
                segment.push(timestamp);
            }
            found = true;
        }

        if !found {
            trace!("Ignoring time section line: {}", trimmed);
        }
    }

    /// Finish the section, deriving the sampling interval
    pub fn finish(mut self) -> TimeCoordinates {
        let calendar = Calendar::from_name(self.coordinates.calendar.as_deref());

        let mut numeric_segments: Vec<Vec<i64>> = Vec::new();
        for segment in &self.segments {
            let mut current = Vec::new();
            for timestamp in segment {
                match calendar.seconds(timestamp) {
                    Some(seconds) => current.push(seconds),
                    None => {
                        debug!("Unreadable timestamp '{}' under {:?} calendar", timestamp, calendar);
                        numeric_segments.push(std::mem::take(&mut current));
                    }
                }
            }
            numeric_segments.push(current);
        }

        self.coordinates.time_resolution = infer_time_resolution(&numeric_segments);
        self.coordinates
    }
}

fn normalise_spaces(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
