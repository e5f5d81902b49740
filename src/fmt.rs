//! Formatting of a [`Difference`] for display.
//!
//! Output is English, with digit grouping and decimal separators taken from
//! a [`Style`]. The default style matches the `en-US` locale.

use crate::difference::{Difference, Weeks};

/// Separators used when formatting numbers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Style {
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

/// The combined summary of the calendar breakdown.
///
/// # Example
///
/// ```
/// use diferencilo::{compute, fmt};
///
/// let diff = compute("2020-01-15", "2021-03-20", false).unwrap();
/// assert_eq!("1 Years, 2 Months, 5 Days", fmt::summary(&diff));
/// ```
pub fn summary(diff: &Difference) -> String {
    format!(
        "{} Years, {} Months, {} Days",
        diff.years, diff.months, diff.days
    )
}

/// Groups the decimal digits of `n` by three with `separator`.
///
/// # Example
///
/// ```
/// use diferencilo::fmt;
///
/// assert_eq!("1,234,567", fmt::group_digits(1234567, ','));
/// assert_eq!("999", fmt::group_digits(999, ','));
/// ```
pub fn group_digits(n: u64, separator: char) -> String {
    let digits = n.to_string();
    let mut rt = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            rt.push(separator);
        }
        rt.push(c);
    }
    rt
}

/// Formats weeks with a grouped integer part and exactly two decimals.
///
/// # Example
///
/// ```
/// use diferencilo::{fmt, Weeks};
///
/// let weeks = Weeks::from_days(10000);
/// assert_eq!("1,428.57", fmt::weeks(weeks, &fmt::Style::default()));
/// ```
pub fn weeks(weeks: Weeks, style: &Style) -> String {
    format!(
        "{}{}{:02}",
        group_digits(weeks.whole(), style.thousands_separator),
        style.decimal_separator,
        weeks.fraction()
    )
}

/// The text panel: summary line followed by the three totals.
///
/// # Example
///
/// ```
/// use diferencilo::{compute, fmt};
///
/// let diff = compute("2023-01-01", "2024-01-01", false).unwrap();
/// assert_eq!(
///     "Total Difference: 1 Years, 0 Months, 0 Days\n\
///      Total Days: 365\n\
///      Total Weeks: 52.14\n\
///      Total Hours: 8,760\n",
///     fmt::report(&diff, &fmt::Style::default())
/// );
/// ```
pub fn report(diff: &Difference, style: &Style) -> String {
    let sep = style.thousands_separator;
    format!(
        "Total Difference: {}\nTotal Days: {}\nTotal Weeks: {}\nTotal Hours: {}\n",
        summary(diff),
        group_digits(u64::from(diff.total_days), sep),
        weeks(diff.total_weeks, style),
        group_digits(diff.total_hours, sep),
    )
}
