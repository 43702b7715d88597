use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub const TIME_FORMAT: &str = "%I:%M %p";
pub const DATE_FORMAT: &str = "%A, %B %d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub time: String,
    pub date: String,
}

impl ClockFace {
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        Self {
            time: now.format(TIME_FORMAT).to_string(),
            date: now.format(DATE_FORMAT).to_string(),
        }
    }
}
