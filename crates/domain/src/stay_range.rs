// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Half-open stay intervals.
//!
//! A stay occupies the half-open range `[check_in, check_out)`: the guest
//! holds the room on the check-in night but not the check-out night. A
//! reservation ending exactly when another begins therefore never
//! conflicts.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// The ISO 8601 calendar date format used for all persisted dates.
const ISO_DATE: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parses an ISO 8601 calendar date (`2026-03-01`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// ISO 8601 date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, ISO_DATE).map_err(|e| DomainError::DateParseError {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as ISO 8601 (`2026-03-01`).
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    // The format description contains no invalid components, so
    // formatting a valid Date cannot fail.
    date.format(ISO_DATE)
        .unwrap_or_else(|_| date.to_string())
}

/// A half-open date interval `[check_in, check_out)` describing a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    /// The first occupied night.
    check_in: Date,
    /// The morning the room is vacated (exclusive).
    check_out: Date,
}

impl StayRange {
    /// Creates a new `StayRange`.
    ///
    /// # Arguments
    ///
    /// * `check_in` - The first occupied night
    /// * `check_out` - The check-out date (exclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayRange` if `check_out` does not
    /// fall strictly after `check_in`.
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, DomainError> {
        if check_in < check_out {
            Ok(Self {
                check_in,
                check_out,
            })
        } else {
            Err(DomainError::InvalidStayRange {
                check_in: format_iso_date(check_in),
                check_out: format_iso_date(check_out),
            })
        }
    }

    /// Parses a `StayRange` from ISO 8601 date strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either date fails to parse or the range is
    /// not strictly ordered.
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, DomainError> {
        Self::new(parse_iso_date(check_in)?, parse_iso_date(check_out)?)
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    /// Returns the check-out date (exclusive).
    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Returns the number of nights in the stay.
    #[must_use]
    pub fn nights(&self) -> i64 {
        i64::from(self.check_out.to_julian_day() - self.check_in.to_julian_day())
    }

    /// Returns true if two stays overlap.
    ///
    /// Half-open semantics: `[a, b)` and `[c, d)` overlap iff
    /// `a < d && c < b`. A boundary touch (one stay's check-out equal to
    /// the other's check-in) is not an overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_and_format_round_trip() {
        let date = parse_iso_date("2026-03-01").unwrap();
        assert_eq!(format_iso_date(date), "2026-03-01");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_iso_date("not-a-date").is_err());
        assert!(parse_iso_date("2026-13-01").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn test_range_must_be_strictly_ordered() {
        assert!(StayRange::new(date!(2026 - 03 - 01), date!(2026 - 03 - 03)).is_ok());
        assert!(StayRange::new(date!(2026 - 03 - 03), date!(2026 - 03 - 01)).is_err());
        // Zero-night stay is invalid
        assert!(StayRange::new(date!(2026 - 03 - 01), date!(2026 - 03 - 01)).is_err());
    }

    #[test]
    fn test_nights() {
        let stay = StayRange::new(date!(2026 - 03 - 01), date!(2026 - 03 - 03)).unwrap();
        assert_eq!(stay.nights(), 2);

        let one_night = StayRange::new(date!(2026 - 12 - 31), date!(2027 - 01 - 01)).unwrap();
        assert_eq!(one_night.nights(), 1);
    }

    #[test]
    fn test_overlap_partial() {
        let a = StayRange::new(date!(2026 - 03 - 01), date!(2026 - 03 - 03)).unwrap();
        let b = StayRange::new(date!(2026 - 03 - 02), date!(2026 - 03 - 04)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_contained() {
        let outer = StayRange::new(date!(2026 - 03 - 01), date!(2026 - 03 - 10)).unwrap();
        let inner = StayRange::new(date!(2026 - 03 - 04), date!(2026 - 03 - 05)).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_boundary_touch_is_not_overlap() {
        // Check-out on the day another stay checks in: no conflict.
        let a = StayRange::new(date!(2026 - 03 - 01), date!(2026 - 03 - 03)).unwrap();
        let b = StayRange::new(date!(2026 - 03 - 03), date!(2026 - 03 - 05)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_ranges_do_not_overlap() {
        let a = StayRange::new(date!(2026 - 03 - 01), date!(2026 - 03 - 03)).unwrap();
        let b = StayRange::new(date!(2026 - 03 - 10), date!(2026 - 03 - 12)).unwrap();
        assert!(!a.overlaps(&b));
    }
}
