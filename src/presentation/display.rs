// src/presentation/display.rs
//
// Date rendering for bookmark rows.

use std::fmt::{Display, Write};

use chrono::{DateTime, Local, TimeZone, Utc};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Relative dates stop after this many days
const RELATIVE_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPreferences {
    /// "Today", "Yesterday", "N days ago" for recent dates
    pub relative_time: bool,
    /// chrono strftime pattern for everything else
    pub date_format: String,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            relative_time: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DisplayPreferences {
    /// Formats a millisecond timestamp in the local timezone
    pub fn format_date(&self, timestamp_ms: i64) -> String {
        self.format_date_in(timestamp_ms, &Local::now())
    }

    /// Formats a millisecond timestamp relative to `now`, in `now`'s timezone
    pub fn format_date_in<Tz>(&self, timestamp_ms: i64, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(utc) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
            return String::new();
        };
        let date = utc.with_timezone(&now.timezone());

        if self.relative_time {
            let days = (now.date_naive() - date.date_naive()).num_days();
            match days {
                0 => return "Today".to_string(),
                1 => return "Yesterday".to_string(),
                d if (2..RELATIVE_WINDOW_DAYS).contains(&d) => return format!("{} days ago", d),
                _ => {}
            }
        }

        // An invalid user pattern surfaces as fmt::Error, not a panic.
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
        }
        out
    }
}
