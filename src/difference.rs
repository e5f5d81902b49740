//! Calendar difference between two dates.
//!
//! The breakdown into years, months and days is computed by borrowing
//! subtraction, while the totals come from the plain number of elapsed days.
//! The two are independent: `2000-02-28` to `2000-03-01` is 2 days either
//! way, but `2023-01-31` to `2023-03-02` is 1 month and 2 days in the
//! breakdown and 30 days in total.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::date::{Date, days_in_month};
use crate::error::{Error, Result};

/// Hours in a day. Dates carry no time of day or zone, so every day counts
/// the same.
pub const HOURS_PER_DAY: u64 = 24;

/// Difference between two dates, see [`Difference::between`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Difference {
    /// Whole years
    pub years: u32,
    /// Whole months after the years, `0..=11`
    pub months: u32,
    /// Remaining days after the months
    pub days: u32,
    /// Elapsed days
    pub total_days: u32,
    /// Elapsed weeks, rounded to hundredths
    pub total_weeks: Weeks,
    /// Elapsed hours
    pub total_hours: u64,
}

/// A number of weeks with two decimal digits, kept in hundredths.
///
/// # Example
///
/// ```
/// use diferencilo::Weeks;
///
/// let weeks = Weeks::from_days(10);
/// assert_eq!(143, weeks.hundredths());
/// assert_eq!("1.43", weeks.to_string());
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Weeks(u64);

impl Weeks {
    /// `days / 7` rounded half up to two decimals.
    ///
    /// `days * 100 / 7` never has a fraction of exactly one half, so half-up
    /// and half-to-even rounding always agree here.
    pub fn from_days(days: u32) -> Self {
        Weeks((u64::from(days) * 200 + 7) / 14)
    }
    /// Creates a value of `hundredths / 100` weeks.
    pub fn from_hundredths(hundredths: u64) -> Self {
        Weeks(hundredths)
    }
    pub fn hundredths(&self) -> u64 {
        self.0
    }
    /// Whole weeks, i.e. the integer part.
    pub fn whole(&self) -> u64 {
        self.0 / 100
    }
    /// The two fraction digits as a number in `0..=99`.
    pub fn fraction(&self) -> u64 {
        self.0 % 100
    }
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Weeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.whole(), self.fraction())
    }
}

impl Serialize for Weeks {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl Difference {
    /// Computes the difference between two dates.
    ///
    /// The order of `a` and `b` does not matter. With `include_end_date`,
    /// the later date is advanced by one day first so that both end days
    /// are counted.
    ///
    /// Returns `None` only if the later date precedes the earlier one after
    /// ordering, or if the end day cannot be advanced. Neither happens for
    /// dates that come from [`Date::from_gregorian`].
    ///
    /// # Example
    ///
    /// ```
    /// use diferencilo::{Date, Difference};
    ///
    /// let a = Date::from_gregorian(2020, 2, 29).unwrap();
    /// let b = Date::from_gregorian(2021, 3, 1).unwrap();
    ///
    /// let diff = Difference::between(b, a, false).unwrap();
    /// assert_eq!((1, 0, 1), (diff.years, diff.months, diff.days));
    /// assert_eq!(366, diff.total_days);
    /// assert_eq!("52.29", diff.total_weeks.to_string());
    /// assert_eq!(8784, diff.total_hours);
    /// ```
    pub fn between(a: Date, b: Date, include_end_date: bool) -> Option<Self> {
        let (start, end) = if a > b { (b, a) } else { (a, b) };
        let end = if include_end_date {
            end.checked_add_days(1)?
        } else {
            end
        };

        let total_days = end.jdn().checked_sub(start.jdn())?;
        let (years, months, days) = breakdown(start, end)?;

        Some(Difference {
            years,
            months,
            days,
            total_days,
            total_weeks: Weeks::from_days(total_days),
            total_hours: u64::from(total_days) * HOURS_PER_DAY,
        })
    }
}

/// Computes the difference between two ISO (`YYYY-MM-DD`) date strings.
///
/// Returns `None` if either string is empty or is not a valid date. See
/// [`try_compute`] for the reason of a failure.
///
/// # Example
///
/// ```
/// use diferencilo::compute;
///
/// let diff = compute("2023-03-02", "2023-01-31", false).unwrap();
/// assert_eq!((0, 1, 2), (diff.years, diff.months, diff.days));
/// assert_eq!(30, diff.total_days);
///
/// assert_eq!(None, compute("", "2024-01-01", false));
/// assert_eq!(None, compute("not-a-date", "2024-01-01", false));
/// ```
pub fn compute(start: &str, end: &str, include_end_date: bool) -> Option<Difference> {
    try_compute(start, end, include_end_date).ok()
}

/// Same as [`compute`], but tells which input was rejected and why.
///
/// # Example
///
/// ```
/// use diferencilo::{try_compute, Error};
/// use diferencilo::error::ParseDateError;
///
/// assert!(matches!(
///     try_compute("2024-01-01", "2023-02-29", false),
///     Err(Error::EndDate(ParseDateError::NoSuchDay { .. }))
/// ));
/// ```
pub fn try_compute(start: &str, end: &str, include_end_date: bool) -> Result<Difference> {
    let start: Date = start.parse().map_err(Error::StartDate)?;
    let end: Date = end.parse().map_err(Error::EndDate)?;
    Difference::between(start, end, include_end_date).ok_or(Error::OutOfRange)
}

// Borrowing subtraction, `start <= end`. A start day missing from the
// borrowed-from month is taken as that month's last day.
fn breakdown(start: Date, end: Date) -> Option<(u32, u32, u32)> {
    let (y0, m0, d0) = start.gregorian();
    let (y1, m1, d1) = end.gregorian();

    let mut years = y1 - y0;
    let mut months = m1 - m0;
    let mut days = d1 - d0;

    if days < 0 {
        months -= 1;
        let (y, m) = if m1 == 1 { (y1 - 1, 12) } else { (y1, m1 - 1) };
        days = d1 + (days_in_month(y, m) - d0).max(0);
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Some((
        u32::try_from(years).ok()?,
        u32::try_from(months).ok()?,
        u32::try_from(days).ok()?,
    ))
}
