//! Pure time math: host-clock sampling, digital/date formatting, and
//! hand-angle calculation. Everything below the two `now`/`today` entry
//! points is a total function of its arguments, so any displayed frame can
//! be replayed from a constructed sample.

use serde::{Deserialize, Serialize};

use crate::model::DisplayFormat;

/// Wall-clock snapshot taken once per tick. Value identity only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSample {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl TimeSample {
    /// Snapshot the host clock. The only impure call on the time path.
    pub fn now() -> Self {
        let d = js_sys::Date::new_0();
        Self {
            hour: d.get_hours(),
            minute: d.get_minutes(),
            second: d.get_seconds(),
            millisecond: d.get_milliseconds(),
        }
    }
}

/// Calendar portion of a snapshot. `weekday` is Sunday-first (0-6) and
/// `month` zero-based (0-11), matching what `js_sys::Date` reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub weekday: u32,
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl CalendarDate {
    pub fn today() -> Self {
        let d = js_sys::Date::new_0();
        Self {
            weekday: d.get_day(),
            day: d.get_date(),
            month: d.get_month(),
            year: d.get_full_year(),
        }
    }
}

/// Rotation degrees for the three hands, each in [0, 360).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HandAngles {
    pub hour_deg: f64,
    pub minute_deg: f64,
    pub second_deg: f64,
}

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Digital rendering: zero-padded `HH:MM:SS` plus an AM/PM suffix in
/// twelve-hour mode. Hours 0 and 12 both render as "12".
pub fn format_digital(sample: &TimeSample, format: DisplayFormat) -> (String, Option<&'static str>) {
    match format {
        DisplayFormat::TwentyFourHour => (
            format!("{:02}:{:02}:{:02}", sample.hour, sample.minute, sample.second),
            None,
        ),
        DisplayFormat::TwelveHour => {
            let suffix = if sample.hour < 12 { "AM" } else { "PM" };
            let hour = match sample.hour % 12 {
                0 => 12,
                h => h,
            };
            (
                format!("{:02}:{:02}:{:02}", hour, sample.minute, sample.second),
                Some(suffix),
            )
        }
    }
}

/// Long-form date in fixed en-US rendering, e.g. "Friday, August 29, 2026".
/// Names come from fixed tables rather than a locale API so the output does
/// not vary with the host.
pub fn format_date(date: &CalendarDate) -> String {
    let weekday = WEEKDAYS[(date.weekday % 7) as usize];
    let month = MONTHS[(date.month % 12) as usize];
    format!("{}, {} {}, {}", weekday, month, date.day, date.year)
}

/// Hand angles for a sample: 6 deg per second, 6 deg per minute with a
/// 0.1 deg/second sweep, 30 deg per hour with a 0.5 deg/minute sweep.
pub fn compute_angles(sample: &TimeSample) -> HandAngles {
    HandAngles {
        hour_deg: (sample.hour % 12) as f64 * 30.0 + sample.minute as f64 * 0.5,
        minute_deg: sample.minute as f64 * 6.0 + sample.second as f64 * 0.1,
        second_deg: sweep_second_deg(sample),
    }
}

/// Second-hand angle alone, with the millisecond term that gives the 50ms
/// sweep driver its sub-degree steps.
pub fn sweep_second_deg(sample: &TimeSample) -> f64 {
    (sample.second as f64 + sample.millisecond as f64 / 1000.0) * 6.0
}
