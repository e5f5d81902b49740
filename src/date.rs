//! Gregorian calendar date.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseDateError;

/// Earliest year accepted by [`Date::from_gregorian`]; JDN 0 falls in it.
pub const MIN_YEAR: i32 = -4713;
/// Latest year accepted by [`Date::from_gregorian`].
pub const MAX_YEAR: i32 = 1_000_000;

/// A Gregorian calendar date without time of day or timezone.
///
/// Stored as a Julian day number (JDN), so that subtracting two dates gives
/// the number of days between them and adding `1` gives the next day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if `month` and `day` do not name an existing day of
    /// `year`, or if the result date is out of supported range (before JDN
    /// 0 or after [`MAX_YEAR`]).
    ///
    /// # Example
    ///
    /// ```
    /// use diferencilo::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    ///
    /// assert_eq!(None, Date::from_gregorian(2023, 2, 29));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=days_in_month(year, month)).contains(&day) {
            return None;
        }
        Self::from_gregorian_lenient(year, month, day)
    }
    fn from_gregorian_lenient(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        u32::try_from(jdn_from_gregorian(year, month, day))
            .map(Self::from_jdn)
            .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use diferencilo::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        // i64 keeps `4 * f` in range for every u32 JDN; the year then stays
        // below 12 million.
        let jdn = i64::from(self.jdn);
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use diferencilo::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the same month and day `years` years later (or earlier, if
    /// negative).
    ///
    /// February 29 becomes March 1 when the target year is a common year.
    /// Returns `None` if the target year is before 0001 or after
    /// [`MAX_YEAR`].
    ///
    /// # Example
    ///
    /// ```
    /// use diferencilo::Date;
    ///
    /// let date = Date::from_gregorian(2024, 2, 29).unwrap();
    /// assert_eq!("2023-03-01", date.add_years(-1).unwrap().iso_gregorian());
    /// assert_eq!("2028-02-29", date.add_years(4).unwrap().iso_gregorian());
    /// ```
    pub fn add_years(&self, years: i32) -> Option<Self> {
        let (y, m, d) = self.gregorian();
        let year = y.checked_add(years).filter(|&year| year >= 1)?;
        Self::from_gregorian_lenient(year, m, d)
    }
    /// Returns the date `days` days later (or earlier, if negative), or
    /// `None` if the JDN would leave the range of `u32`.
    ///
    /// # Example
    ///
    /// ```
    /// use diferencilo::Date;
    ///
    /// let date = Date::from_gregorian(2023, 12, 31).unwrap();
    /// assert_eq!("2024-01-01", date.checked_add_days(1).unwrap().iso_gregorian());
    /// assert_eq!(None, Date::from_jdn(0).checked_add_days(-1));
    /// ```
    pub fn checked_add_days(&self, days: i32) -> Option<Self> {
        self.jdn.checked_add_signed(days).map(Self::from_jdn)
    }
}

/// # Panics
///
/// Panics if the resulting JDN does not fit in `u32`. See
/// [`Date::checked_add_days`] for a version without panic.
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        self.checked_add_days(rhs)
            .expect("overflow when adding days to date")
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        (i64::from(self.jdn) - i64::from(rhs.jdn)) as i32
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.gregorian();
        write!(f, "{:04}-{:02}-{:02}", y, m, d)
    }
}

/// Parses a strict ISO 8601 calendar date, `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use diferencilo::Date;
/// use diferencilo::error::ParseDateError;
///
/// let date: Date = "2000-02-29".parse().unwrap();
/// assert_eq!((2000, 2, 29), date.gregorian());
///
/// assert!(matches!(
///     "1900-02-29".parse::<Date>(),
///     Err(ParseDateError::NoSuchDay { .. })
/// ));
/// ```
impl FromStr for Date {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseDateError::*;
        if s.is_empty() {
            return Err(Empty);
        }
        let malformed = || Malformed(s.to_owned());
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(malformed());
        }
        let field = |begin: usize, end: usize| -> Result<i32, ParseDateError> {
            let part = s.get(begin..end).ok_or_else(malformed)?;
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse().map_err(|_| malformed())
        };
        let (year, month, day) = (field(0, 4)?, field(5, 7)?, field(8, 10)?);

        if year < 1 {
            return Err(YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(MonthOutOfRange(month));
        }
        Date::from_gregorian(year, month, day).ok_or(NoSuchDay { year, month, day })
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Returns the number of days in `month` of Gregorian `year`.
///
/// # Example
///
/// ```
/// use diferencilo::date::days_in_month;
///
/// assert_eq!(29, days_in_month(2000, 2));
/// assert_eq!(28, days_in_month(1900, 2));
/// assert_eq!(31, days_in_month(2023, 12));
/// ```
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as i32,
        _ => panic!("month {} not in 1..=12", month),
    }
}

// Day overflow carries into the next month, e.g. Feb 29 of a common year is
// Mar 1.
fn jdn_from_gregorian(year: i32, month: i32, day: i32) -> i32 {
    let (y, m, d) = (year, month, day);
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
    }

    #[test]
    fn from_gregorian_rejects_nonexistent() {
        for (y, m, d) in [
            (2023, 2, 29),
            (1900, 2, 29),
            (2021, 4, 31),
            (2021, 13, 1),
            (2021, 0, 10),
            (2021, 1, 0),
            (2021, 1, 32),
        ] {
            assert_eq!(None, Date::from_gregorian(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
        assert!(Date::from_gregorian(2000, 2, 29).is_some());
        assert!(Date::from_gregorian(2024, 2, 29).is_some());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2000, 2, 28).unwrap();
        assert_eq!((2000, 2, 29), (date + 1).gregorian());
        assert_eq!((2000, 3, 1), (date + 2).gregorian());
        assert_eq!((1999, 12, 31), (date + -59).gregorian());
        let later = Date::from_gregorian(2001, 2, 28).unwrap();
        assert_eq!(366, later - date);
        assert_eq!(-366, date - later);
    }

    #[test]
    fn year_end() {
        let date = Date::from_gregorian(9999, 12, 31).unwrap();
        assert_eq!((10000, 1, 1), (date + 1).gregorian());
    }

    #[test]
    fn supported_range() {
        assert_eq!(0, Date::from_gregorian(-4713, 11, 24).unwrap().jdn());
        assert_eq!(None, Date::from_gregorian(-4713, 11, 23));
        let last = Date::from_gregorian(MAX_YEAR, 12, 31).unwrap();
        assert_eq!((MAX_YEAR, 12, 31), last.gregorian());
        for year in [MAX_YEAR + 1, 2_000_000, -5_000_000, i32::MAX, i32::MIN] {
            assert_eq!(None, Date::from_gregorian(year, 1, 1), "{year}");
        }

        let date = Date::from_gregorian(2024, 1, 1).unwrap();
        assert_eq!(None, date.add_years(2_000_000));
        assert_eq!(None, date.add_years(i32::MAX));
        assert_eq!(None, date.add_years(i32::MIN));
        assert!(date.add_years(MAX_YEAR - 2024).is_some());
    }

    #[test]
    fn jdn_extremes() {
        let (year, month, day) = Date::from_jdn(u32::MAX).gregorian();
        assert!(year > MAX_YEAR);
        assert!((1..=12).contains(&month) && (1..=31).contains(&day));

        assert_eq!(None, Date::from_jdn(u32::MAX).checked_add_days(1));
        assert_eq!(None, Date::from_jdn(0).checked_add_days(i32::MIN));
        assert_eq!(
            Some(Date::from_jdn(u32::MAX)),
            Date::from_jdn(u32::MAX - 1).checked_add_days(1)
        );
        assert_eq!(None, Date::from_jdn(u32::MAX).add_years(1));
    }

    #[test]
    #[should_panic(expected = "overflow when adding days to date")]
    fn add_past_jdn_range() {
        let _ = Date::from_jdn(u32::MAX) + 1;
    }

    #[test]
    fn parse() {
        for s in ["2021-09-08", "0001-01-01", "9999-12-31", "2000-02-29"] {
            assert_eq!(s, s.parse::<Date>().unwrap().iso_gregorian());
        }
    }

    #[test]
    fn parse_errors() {
        use ParseDateError::*;
        let malformed =
            |s: &str| -> Result<Date, ParseDateError> { Err(Malformed(s.to_owned())) };
        for s in [
            "not-a-date",
            "2021-9-8",
            "2021/09/08",
            "21-09-08",
            "+2021-09-08",
            "2021-09-08T00:00",
            " 2021-09-08",
            "2021-0a-08",
            "2021-+9-08",
            "2é1-09-08",
        ] {
            assert_eq!(malformed(s), s.parse::<Date>(), "{s:?}");
        }
        assert_eq!(Err(Empty), "".parse::<Date>());
        assert_eq!(Err(YearOutOfRange(0)), "0000-01-01".parse::<Date>());
        assert_eq!(Err(MonthOutOfRange(13)), "2021-13-01".parse::<Date>());
        assert_eq!(Err(MonthOutOfRange(0)), "2021-00-01".parse::<Date>());
        assert_eq!(
            Err(NoSuchDay {
                year: 2023,
                month: 2,
                day: 29
            }),
            "2023-02-29".parse::<Date>()
        );
        assert_eq!(
            Err(NoSuchDay {
                year: 2021,
                month: 6,
                day: 0
            }),
            "2021-06-00".parse::<Date>()
        );
    }

    #[test]
    fn leap_years() {
        use YearType::*;
        for (year, std) in [
            (1900, Common),
            (2000, Leap),
            (2023, Common),
            (2024, Leap),
            (2100, Common),
            (2400, Leap),
        ] {
            assert_eq!(std, YearType::from_gregorian(year), "{year}");
        }
    }

    #[test]
    fn month_lengths() {
        let lengths: Vec<_> = (1..=12).map(|m| days_in_month(2023, m)).collect();
        assert_eq!(
            vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
            lengths
        );
        assert_eq!(29, days_in_month(2024, 2));
    }

    #[test]
    fn years_shift() {
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!("2020-09-08", date.add_years(-1).unwrap().iso_gregorian());
        let leap_day = Date::from_gregorian(2000, 2, 29).unwrap();
        assert_eq!("1999-03-01", leap_day.add_years(-1).unwrap().iso_gregorian());
        assert_eq!("1996-02-29", leap_day.add_years(-4).unwrap().iso_gregorian());
        let first = Date::from_gregorian(1, 6, 1).unwrap();
        assert_eq!(None, first.add_years(-1));
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
        assert_eq!(
            "0042-01-05",
            Date::from_gregorian(42, 1, 5).unwrap().to_string()
        );
    }

    #[test]
    fn serde_iso_string() {
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!("\"2021-09-08\"", serde_json::to_string(&date).unwrap());
        let back: Date = serde_json::from_str("\"2021-09-08\"").unwrap();
        assert_eq!(date, back);
        assert!(serde_json::from_str::<Date>("\"2021-02-30\"").is_err());
    }
}
