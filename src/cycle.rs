use chrono::{Datelike, NaiveDate};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LedgerError;

/// billing cycle (statement period) of a card, identified by year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BillingCycle {
    pub year: i32,
    pub month: u32,
}

impl BillingCycle {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// cycle of the calendar month containing the date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// cycle of the current calendar month
    pub fn current(time_provider: &SafeTimeProvider) -> Self {
        Self::from_date(time_provider.now().date_naive())
    }

    /// first cycle a purchase bills into; purchases on or after the closing
    /// day roll to the next cycle
    pub fn first_for_purchase(purchase_date: NaiveDate, closing_day: u8) -> Self {
        let base = Self::from_date(purchase_date);
        if purchase_date.day() >= u32::from(closing_day) {
            base.next()
        } else {
            base
        }
    }

    /// following cycle
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// whole months from `other` to `self` (negative when `self` is earlier)
    pub fn months_since(&self, other: BillingCycle) -> i64 {
        i64::from(self.year - other.year) * 12 + i64::from(self.month) - i64::from(other.month)
    }

    /// payment due date for this cycle; when the due day does not come after
    /// the closing day the due date falls in the following month
    pub fn due_date(&self, closing_day: u8, due_day: u8) -> NaiveDate {
        let base = if due_day <= closing_day { self.next() } else { *self };
        let day = u32::from(due_day).min(days_in_month(base.year, base.month));
        NaiveDate::from_ymd_opt(base.year, base.month, day)
            .expect("day clamped to month length is always valid")
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BillingCycle {
    type Err = LedgerError;

    /// parse from `yyyy-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidCycle { input: s.to_string() };

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self::new(year, month))
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
