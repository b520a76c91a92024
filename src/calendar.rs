//! The month grid behind the calendar preview tab
//!
//! This is only the date arithmetic: a 7×6 grid of days around a given month, with weeks starting
//! on Monday. The cells before the 1st and after the last day of the month belong to the
//! neighbouring months and are flagged as such, so the view can grey them out.

use std::error::Error;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::task::Task;

/// 7 columns × 6 rows, enough for every month layout
const GRID_CELLS: usize = 42;

/// The weekday header row, in grid order
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One cell of the month grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    date: NaiveDate,
    out_of_month: bool,
}

impl DayCell {
    /// The full date this cell stands for
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The day-of-month number displayed in the cell
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns whether this cell belongs to a neighbouring month (rendered greyed out, not clickable)
    pub fn out_of_month(&self) -> bool {
        self.out_of_month
    }

    /// Returns whether this cell should get the "today" glow
    pub fn is_today(&self, today: NaiveDate) -> bool {
        !self.out_of_month && self.date == today
    }
}

/// A month of the calendar, laid out as the view renders it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthGrid {
    year: i32,
    /// 1 (January) to 12 (December)
    month: u32,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Build the grid for a given month (`month` is 1-based).
    /// Returns an error for a month that does not exist.
    pub fn new(year: i32, month: u32) -> Result<Self, Box<dyn Error>> {
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| format!("{}-{} is not a valid month", year, month))?;

        // Walk back to the Monday the grid starts on, then take 42 consecutive days
        let leading = first_of_month.weekday().num_days_from_monday() as i64;
        let grid_start = first_of_month - Duration::days(leading);

        let cells = (0..GRID_CELLS as i64)
            .map(|offset| {
                let date = grid_start + Duration::days(offset);
                DayCell {
                    date,
                    out_of_month: date.month() != month || date.year() != year,
                }
            })
            .collect();

        Ok(Self { year, month, cells })
    }

    /// The grid for the month we are currently in
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self::new(today.year(), today.month()).unwrap(/* today's month is always valid */)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The English month name, for the grid header
    pub fn month_name(&self) -> String {
        self.cells[self.cells.len() / 2].date.format("%B").to_string()
    }

    /// All 42 cells, row by row
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The 6 week rows, each 7 cells wide
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// The grid for the month before this one (the "<" arrow)
    pub fn previous(&self) -> Self {
        let (year, month) = match self.month {
            1 => (self.year - 1, 12),
            _ => (self.year, self.month - 1),
        };
        Self::new(year, month).unwrap(/* rollover keeps the month in 1..=12 */)
    }

    /// The grid for the month after this one (the ">" arrow)
    pub fn next(&self) -> Self {
        let (year, month) = match self.month {
            12 => (self.year + 1, 1),
            _ => (self.year, self.month + 1),
        };
        Self::new(year, month).unwrap(/* rollover keeps the month in 1..=12 */)
    }
}

/// The board tasks the calendar view should display, i.e. those whose
/// `add_to_calendar` flag the user ticked in the dialog
pub fn calendar_tasks(board: &Board) -> Vec<&Task> {
    board.columns().iter()
        .flat_map(|column| column.tasks())
        .filter(|task| task.add_to_calendar())
        .collect()
}
