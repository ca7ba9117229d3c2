use crate::error::FormatMismatch;
use chrono::NaiveDate;
use core::fmt::{self, Display};
use once_cell::sync::Lazy;
use regex::Regex;

// chrono is lenient about whitespace before numbers, signs and short years; these pin each
// format down to plain ascii digits, with years exactly four long.
static SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    DateFormat::ALL
        .iter()
        .map(|format| Regex::new(format.shape()).expect("valid date shape regex"))
        .collect()
});

/// One of the textual date layouts accepted by [`DateParser`](crate::DateParser).
///
/// Formats are tried in the order of [`DateFormat::ALL`], and the first one that matches the
/// whole input wins. A string like `01-02-2024` is therefore never ambiguous: it fails
/// [`IsoDate`](DateFormat::IsoDate) (the year is not where that layout expects it) and is read as
/// [`DashedUs`](DateFormat::DashedUs), January 2nd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `YYYY-MM-DD`, e.g. `2024-01-05`
    IsoDate,
    /// `MM-DD-YYYY`, e.g. `01-05-2024`
    DashedUs,
    /// `MM/DD/YYYY`, e.g. `01/05/2024`
    SlashedUs,
    /// `MM.DD.YYYY`, e.g. `01.05.2024`
    DottedUs,
    /// `Mon DD, YYYY`, e.g. `Jan 05, 2024`
    AbbreviatedMonth,
    /// `Month DD, YYYY`, e.g. `January 05, 2024`
    FullMonth,
}

impl DateFormat {
    /// All formats, in the order they are tried.
    pub const ALL: [DateFormat; 6] = [
        DateFormat::IsoDate,
        DateFormat::DashedUs,
        DateFormat::SlashedUs,
        DateFormat::DottedUs,
        DateFormat::AbbreviatedMonth,
        DateFormat::FullMonth,
    ];

    /// The chrono strftime pattern for this format.
    pub const fn pattern(&self) -> &'static str {
        match self {
            DateFormat::IsoDate => "%Y-%m-%d",
            DateFormat::DashedUs => "%m-%d-%Y",
            DateFormat::SlashedUs => "%m/%d/%Y",
            DateFormat::DottedUs => "%m.%d.%Y",
            DateFormat::AbbreviatedMonth => "%b %d, %Y",
            DateFormat::FullMonth => "%B %d, %Y",
        }
    }

    const fn shape(&self) -> &'static str {
        match self {
            DateFormat::IsoDate => r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$",
            DateFormat::DashedUs => r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{4}$",
            DateFormat::SlashedUs => r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$",
            DateFormat::DottedUs => r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$",
            DateFormat::AbbreviatedMonth | DateFormat::FullMonth => {
                r"^[A-Za-z]+\s+[0-9]{1,2},\s+[0-9]{4}$"
            }
        }
    }

    const fn label(&self) -> &'static str {
        match self {
            DateFormat::IsoDate => "YYYY-MM-DD",
            DateFormat::DashedUs => "MM-DD-YYYY",
            DateFormat::SlashedUs => "MM/DD/YYYY",
            DateFormat::DottedUs => "MM.DD.YYYY",
            DateFormat::AbbreviatedMonth => "Mon DD, YYYY",
            DateFormat::FullMonth => "Month DD, YYYY",
        }
    }

    /// Parses `text` against this format alone. The whole string must match and the result must
    /// be a real calendar date.
    ///
    /// ```
    /// use convdate::DateFormat;
    ///
    /// assert!(DateFormat::SlashedUs.parse("02/29/2024").is_ok());
    /// assert!(DateFormat::SlashedUs.parse("02/30/2024").is_err());
    /// assert!(DateFormat::SlashedUs.parse("02/28/2024 trailing").is_err());
    /// assert!(DateFormat::SlashedUs.parse("02/28/ 2024").is_err());
    /// assert!(DateFormat::SlashedUs.parse("02/28/-2024").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - If the text is not laid out like this format, returns a [`FormatMismatch::Shape`].
    /// - If chrono can't make a date out of it, returns a [`FormatMismatch::Chrono`].
    pub fn parse(&self, text: &str) -> Result<NaiveDate, FormatMismatch> {
        if !SHAPES[*self as usize].is_match(text) {
            return Err(FormatMismatch::Shape { format: *self });
        }
        Ok(NaiveDate::parse_from_str(text, self.pattern())?)
    }

    /// Tries every format in priority order and returns the first one that matches, with the
    /// parsed date.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use convdate::DateFormat;
    ///
    /// let (format, date) = DateFormat::first_match("Jan 05, 2024").unwrap();
    /// assert_eq!(DateFormat::AbbreviatedMonth, format);
    /// assert_eq!(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), date);
    /// ```
    pub fn first_match(text: &str) -> Option<(DateFormat, NaiveDate)> {
        Self::ALL.iter().find_map(|format| match format.parse(text) {
            Ok(date) => Some((*format, date)),
            Err(e) => {
                log::trace!("format {} rejected input: {}", format, e);
                None
            }
        })
    }
}

impl Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[fixture]
    fn sample_dates() -> Vec<NaiveDate> {
        vec![
            ymd(2024, 1, 5),
            ymd(2024, 2, 29),
            ymd(1999, 12, 31),
            ymd(2000, 10, 10),
        ]
    }

    /// every date written out with every format comes back as the same date
    #[rstest]
    fn test_all_formats_round_trip(sample_dates: Vec<NaiveDate>) {
        for (format, date) in DateFormat::ALL.iter().cartesian_product(sample_dates.iter()) {
            let text = date.format(format.pattern()).to_string();
            assert_eq!(Ok(*date), format.parse(&text), "{format} on {text}");

            // an earlier format may claim the text first (e.g. `May` is both abbreviated and
            // full), but it has to agree on the date
            let (detected, parsed) = DateFormat::first_match(&text).unwrap();
            assert_eq!(*date, parsed, "{text}");
            let position = |f: &DateFormat| DateFormat::ALL.iter().position(|a| a == f);
            assert!(position(&detected) <= position(format), "{detected} after {format}");
        }
    }

    #[rstest]
    #[case("2024-01-05", DateFormat::IsoDate, ymd(2024, 1, 5))]
    #[case("01-02-2024", DateFormat::DashedUs, ymd(2024, 1, 2))]
    #[case("01/05/2024", DateFormat::SlashedUs, ymd(2024, 1, 5))]
    #[case("12.25.2023", DateFormat::DottedUs, ymd(2023, 12, 25))]
    #[case("Jan 05, 2024", DateFormat::AbbreviatedMonth, ymd(2024, 1, 5))]
    #[case("Sep 9, 2021", DateFormat::AbbreviatedMonth, ymd(2021, 9, 9))]
    fn test_first_match(
        #[case] text: &str,
        #[case] expected_format: DateFormat,
        #[case] expected_date: NaiveDate,
    ) {
        assert_eq!(
            Some((expected_format, expected_date)),
            DateFormat::first_match(text)
        );
    }

    #[rstest]
    #[case("13/01/2024")] // month 13
    #[case("01/32/2024")] // day 32
    #[case("02/30/2024")] // February 30th doesn't exist
    #[case("2023-02-29")] // not a leap year
    #[case("2024-01-05T00:00:00")] // trailing text
    #[case("2024/01/05")]
    #[case("Foo 05, 2024")]
    #[case("")]
    #[case(" 2024-01-05")] // whitespace before a number
    #[case("2024- 01-05")]
    #[case("01/05/ 2024")]
    #[case("Jan  05, 2024 ")]
    #[case("+2024-01-05")] // signed year
    #[case("02/29/-2024")]
    #[case("1-02-03")] // year shorter than four digits
    #[case("01/05/24")]
    #[case("01/05/02024")] // or longer
    #[case("2024-001-05")]
    #[case("Jan 05,2024")]
    fn test_first_match_none(#[case] text: &str) {
        assert_eq!(None, DateFormat::first_match(text));
    }

    #[test]
    fn test_shape_checked_before_chrono() {
        assert_eq!(
            Err(FormatMismatch::Shape {
                format: DateFormat::IsoDate
            }),
            DateFormat::IsoDate.parse("+2024-01-05")
        );
        assert!(matches!(
            DateFormat::IsoDate.parse("2024-02-30"),
            Err(FormatMismatch::Chrono(_))
        ));
    }

    #[test]
    fn test_shapes_line_up_with_formats() {
        for format in DateFormat::ALL {
            assert_eq!(format.shape(), SHAPES[format as usize].as_str());
        }
    }

    #[test]
    fn test_full_month_pattern() {
        assert_eq!(Ok(ymd(2024, 1, 5)), DateFormat::FullMonth.parse("January 05, 2024"));
        assert_eq!(Ok(ymd(2024, 3, 1)), DateFormat::FullMonth.parse("March 01, 2024"));
    }

    #[test]
    fn test_display() {
        let labels = DateFormat::ALL.iter().map(|f| f.to_string()).collect_vec();
        assert_eq!(
            vec![
                "YYYY-MM-DD",
                "MM-DD-YYYY",
                "MM/DD/YYYY",
                "MM.DD.YYYY",
                "Mon DD, YYYY",
                "Month DD, YYYY",
            ],
            labels
        );
    }
}
