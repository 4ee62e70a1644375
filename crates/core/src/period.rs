//! Day ranges for the `birthdays this|next week|month` command forms.

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

/// Which occurrence of the period is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodRef {
    This,
    Next,
}

impl FromStr for PeriodRef {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "this" => Ok(PeriodRef::This),
            "next" => Ok(PeriodRef::Next),
            _ => Err(()),
        }
    }
}

/// Calendar unit of the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUnit {
    Week,
    Month,
}

impl FromStr for PeriodUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(PeriodUnit::Week),
            "month" => Ok(PeriodUnit::Month),
            _ => Err(()),
        }
    }
}

/// `(start_offset, window)` in days for the requested period, suitable
/// for `ContactStore::upcoming_birthdays_from`: a day `d` falls in the
/// period iff `start_offset <= d <= start_offset + window`.
///
/// Weeks run Monday through Sunday; "this week" starts today, "this
/// month" starts today, the "next" variants cover the whole following
/// week/month.
pub fn days_range(which: PeriodRef, unit: PeriodUnit, today: NaiveDate) -> (i64, i64) {
    let weekday = i64::from(today.weekday().num_days_from_monday());
    match (which, unit) {
        (PeriodRef::This, PeriodUnit::Week) => (0, 6 - weekday),
        (PeriodRef::Next, PeriodUnit::Week) => (7 - weekday, 6),
        (PeriodRef::This, PeriodUnit::Month) => {
            let last = last_day_of_month(today.year(), today.month());
            (0, i64::from(last - today.day()))
        }
        (PeriodRef::Next, PeriodUnit::Month) => {
            let first_next = first_day_of_next_month(today);
            let start = (first_next - today).num_days();
            let last = last_day_of_month(first_next.year(), first_next.month());
            (start, i64::from(last) - 1)
        }
    }
}

fn first_day_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month always exists")
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("first of month always exists");
    (first_day_of_next_month(first) - Duration::days(1)).day()
}
