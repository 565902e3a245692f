//! Closed range of calendar dates, written `"<start>..<end>"`.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Inclusive date range.
///
/// The bounds are kept exactly as written: `start > end` is a valid
/// (empty) period and is never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Why a string is not a period.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePeriodError {
    #[error("expected exactly 2 segments separated by '..', found {0}")]
    SegmentCount(usize),

    #[error("empty date segment")]
    EmptySegment,

    #[error("'{0}' is not an ISO-8601 calendar date (YYYY-MM-DD)")]
    InvalidDate(String),
}

impl Period {
    pub const SEPARATOR: &'static str = "..";

    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True if `start <= end`.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// True if `date` lies within both bounds (never for an unordered period).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Parse `"<start>..<end>"`. No whitespace is tolerated anywhere and the
    /// text must split into exactly two segments.
    pub fn parse(text: &str) -> Result<Self, ParsePeriodError> {
        let segments: Vec<&str> = text.split(Self::SEPARATOR).collect();
        if segments.len() != 2 {
            return Err(ParsePeriodError::SegmentCount(segments.len()));
        }
        let start = parse_iso_date(segments[0])?;
        let end = parse_iso_date(segments[1])?;
        Ok(Self { start, end })
    }
}

/// Strict `YYYY-MM-DD`, with the year as `NaiveDate` renders it: four
/// digits for 0..=9999, `-` and at least four digits before year 0, `+` and
/// more than four digits after 9999.
fn parse_iso_date(segment: &str) -> Result<NaiveDate, ParsePeriodError> {
    if segment.is_empty() {
        return Err(ParsePeriodError::EmptySegment);
    }
    let invalid = || ParsePeriodError::InvalidDate(segment.to_string());
    if !segment.is_ascii() {
        return Err(invalid());
    }

    let (year, rest) = segment.split_at(segment.len().checked_sub(6).ok_or_else(invalid)?);
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let rest = rest.as_bytes();
    let tail_ok = rest[0] == b'-'
        && rest[3] == b'-'
        && rest[1..3].iter().all(u8::is_ascii_digit)
        && rest[4..6].iter().all(u8::is_ascii_digit);
    let year_ok = if let Some(unsigned) = year.strip_prefix('-') {
        digits(unsigned) && unsigned.len() >= 4
    } else if let Some(unsigned) = year.strip_prefix('+') {
        digits(unsigned) && unsigned.len() > 4
    } else {
        digits(year) && year.len() == 4
    };
    if !(tail_ok && year_ok) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(segment, "%Y-%m-%d").map_err(|_| invalid())
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, Self::SEPARATOR, self.end)
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<RangeInclusive<NaiveDate>> for Period {
    fn from(range: RangeInclusive<NaiveDate>) -> Self {
        let (start, end) = range.into_inner();
        Self { start, end }
    }
}

impl From<Period> for RangeInclusive<NaiveDate> {
    fn from(p: Period) -> Self {
        p.start..=p.end
    }
}

// Serialized in its canonical text form.
impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Period::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_two_dates() {
        let p = Period::parse("2021-01-01..2021-02-01").unwrap();
        assert_eq!(p.start, date(2021, 1, 1));
        assert_eq!(p.end, date(2021, 2, 1));
    }

    #[test]
    fn test_reversed_bounds_are_kept() {
        let p = Period::parse("2021-02-01..2021-01-01").unwrap();
        assert_eq!(p.start, date(2021, 2, 1));
        assert!(!p.is_ordered());
        assert!(!p.contains(date(2021, 1, 15)));
    }

    #[test]
    fn test_three_dots_rejected() {
        assert!(Period::parse("2020-01-01...2020-02-01").is_err());
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(Period::parse("2020-01-01"), Err(ParsePeriodError::SegmentCount(1)));
        assert_eq!(
            Period::parse("2020-01-01..2020-01-02..2020-01-03"),
            Err(ParsePeriodError::SegmentCount(3)),
        );
    }

    #[test]
    fn test_empty_segments() {
        assert_eq!(Period::parse("..2020-01-01"), Err(ParsePeriodError::EmptySegment));
        assert_eq!(Period::parse("2020-01-01.."), Err(ParsePeriodError::EmptySegment));
        assert_eq!(Period::parse(".."), Err(ParsePeriodError::EmptySegment));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(Period::parse(" 2020-01-01..2020-01-02").is_err());
        assert!(Period::parse("2020-01-01 ..2020-01-02").is_err());
        assert!(Period::parse("2020-01-01..2020-01-02\n").is_err());
    }

    #[test]
    fn test_non_padded_or_invalid_dates_rejected() {
        assert!(Period::parse("2020-1-1..2020-01-02").is_err());
        assert!(Period::parse("2020-02-30..2020-03-01").is_err());
        assert!(Period::parse("20-01-01..2020-03-01").is_err());
        assert!(Period::parse("2020/01/01..2020-03-01").is_err());
    }

    #[test]
    fn test_negative_years_round_trip() {
        let p = Period::new(date(-1, 3, 4), date(2020, 1, 1));
        assert_eq!(p.to_string(), "-0001-03-04..2020-01-01");
        assert_eq!(Period::parse(&p.to_string()), Ok(p));

        let far = Period::new(NaiveDate::MIN, date(-12345, 6, 7));
        assert_eq!(Period::parse(&far.to_string()), Ok(far));
    }

    #[test]
    fn test_extended_years_round_trip() {
        let p = Period::new(date(12345, 1, 2), NaiveDate::MAX);
        assert!(p.to_string().starts_with("+12345-01-02.."));
        assert_eq!(Period::parse(&p.to_string()), Ok(p));
    }

    #[test]
    fn test_year_sign_rules() {
        assert!(Period::parse("-001-01-01..2020-01-01").is_err());
        assert!(Period::parse("+2020-01-01..2020-01-01").is_err());
        assert!(Period::parse("12345-01-01..2020-01-01").is_err());
    }

    #[test]
    fn test_display() {
        let p = Period::new(date(1999, 12, 31), date(2000, 1, 1));
        assert_eq!(p.to_string(), "1999-12-31..2000-01-01");
    }

    #[test]
    fn test_range_conversion() {
        let p: Period = (date(2020, 1, 1)..=date(2020, 1, 31)).into();
        let range: RangeInclusive<NaiveDate> = p.into();
        assert!(range.contains(&date(2020, 1, 15)));
    }

    #[test]
    fn test_serde_as_string() {
        let p = Period::new(date(2020, 1, 1), date(2020, 1, 31));
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"2020-01-01..2020-01-31\"");
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
