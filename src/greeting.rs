//! The greeting line displayed in the header ("Good morning, Liora")

use chrono::{Local, Timelike};

use crate::config;

/// The moodline displayed under the greeting
pub const MOODLINE: &str = "Here’s to a mindful, productive day 🌱";

/// The three parts of the day the greeting distinguishes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayPeriod {
    /// Until noon
    Morning,
    /// Noon to 5pm
    Afternoon,
    /// From 5pm on
    Evening,
}

impl DayPeriod {
    /// Classify an hour of the day (0 to 23)
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            DayPeriod::Morning
        } else if hour < 17 {
            DayPeriod::Afternoon
        } else {
            DayPeriod::Evening
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayPeriod::Morning => "Good morning",
            DayPeriod::Afternoon => "Good afternoon",
            DayPeriod::Evening => "Good evening",
        }
    }
}

/// The greeting for the current wall-clock time and the configured user name
pub fn greeting() -> String {
    greeting_at(Local::now().hour())
}

/// The greeting for a given hour. This is the testable half of [`greeting`]
pub fn greeting_at(hour: u32) -> String {
    format!("{}, {}", DayPeriod::from_hour(hour).label(), config::user_name())
}
