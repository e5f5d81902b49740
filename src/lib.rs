//! Calculate the difference between two Gregorian calendar dates.
//!
//! The result breaks the interval down into years, months and days, and also
//! gives the plain totals in days, weeks and hours.
//!
//! # Examples
//!
//! From ISO date strings with [`compute`]:
//!
//! ```
//! use diferencilo::compute;
//!
//! let diff = compute("2000-02-28", "2000-03-01", false).unwrap();
//! assert_eq!((0, 0, 2), (diff.years, diff.months, diff.days));
//! assert_eq!(2, diff.total_days);
//! assert_eq!(48, diff.total_hours);
//!
//! // Counting the end day as well
//! let diff = compute("2000-02-28", "2000-03-01", true).unwrap();
//! assert_eq!(3, diff.total_days);
//!
//! // Empty or invalid input gives no result
//! assert_eq!(None, compute("2000-02-30", "2000-03-01", false));
//! ```
//!
//! With [`Date`] values:
//!
//! ```
//! use diferencilo::{Date, Difference, fmt};
//!
//! let a = Date::from_gregorian(1900, 2, 28).unwrap();
//! let b = Date::from_gregorian(1900, 3, 1).unwrap();
//!
//! let diff = Difference::between(a, b, false).unwrap();
//! assert_eq!("0 Years, 0 Months, 1 Days", fmt::summary(&diff));
//! ```
//!
//! The order of the two dates never matters, and the breakdown is computed
//! by borrowing from the month before the end date, e.g. `2023-01-31` to
//! `2023-03-02` is 1 month and 2 days.

pub mod calculator;
pub mod config;
pub mod date;
pub mod difference;
pub mod error;
pub mod fmt;
#[cfg(feature = "cli")]
pub mod logging;

pub use calculator::{Calculator, Session};
pub use date::{Date, YearType};
pub use difference::{Difference, Weeks, compute, try_compute};
pub use error::{Error, ParseDateError};
