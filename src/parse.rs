use crate::{error::DateParseError, format::DateFormat};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// A value to be read as a date: either text, or a date that has already been parsed.
///
/// Usually built implicitly through `From`, so [`DateParser::parse`] accepts `&str`, `String` and
/// [`NaiveDate`] directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// Free-form text, tried against each [`DateFormat`].
    Text(Cow<'a, str>),
    /// Already a date; passed through untouched.
    Date(NaiveDate),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for DateInput<'_> {
    fn from(text: String) -> Self {
        DateInput::Text(Cow::Owned(text))
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<&NaiveDate> for DateInput<'_> {
    fn from(date: &NaiveDate) -> Self {
        DateInput::Date(*date)
    }
}

/// Reads dates written in any of the accepted [`DateFormat`]s.
///
/// A `DateParser` only carries the options that shape the error message: the name of the field
/// being parsed, and whether digits of a rejected value are masked with `*`. Masking is on by
/// default, since the value may be something sensitive like a date of birth.
///
/// This is the parser for internal use. Dates that arrive in a client request should go through
/// [`date_from_request`](crate::request::date_from_request) instead, which reports failures as a
/// [`BadRequestParamError`](crate::BadRequestParamError).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use convdate::DateParser;
///
/// let parser = DateParser::new().field_name("start date");
/// assert_eq!(
///     NaiveDate::from_ymd_opt(2024, 1, 5),
///     parser.parse("January 05, 2024").ok()
/// );
///
/// let err = parser.parse("99/99/9999").unwrap_err();
/// assert_eq!(
///     "Start date must be in YYYY-MM-DD, MM/DD/YYYY, MM-DD-YYYY, \"MMMM DD, YYYY\" or \
///      MM.DD.YYYY format. Got date: **/**/****.",
///     err.to_string()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParser<'n> {
    field_name: Option<&'n str>,
    mask: bool,
}

impl Default for DateParser<'_> {
    fn default() -> Self {
        Self {
            field_name: None,
            mask: true,
        }
    }
}

impl<'n> DateParser<'n> {
    /// A parser with no field name and masking on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the field in error messages, e.g. `"start date"`. The name is capitalized when
    /// displayed. Without one, messages say `Date`.
    pub fn field_name(self, field_name: &'n str) -> Self {
        Self {
            field_name: Some(field_name),
            ..self
        }
    }

    /// Like [`field_name`](Self::field_name), but takes an optional name.
    pub fn maybe_field_name(self, field_name: Option<&'n str>) -> Self {
        Self { field_name, ..self }
    }

    /// Whether digits of a rejected value are replaced with `*` in the error message.
    pub fn mask(self, mask: bool) -> Self {
        Self { mask, ..self }
    }

    /// Parses `value` into a [`NaiveDate`].
    ///
    /// A [`NaiveDate`] is returned as is. Text is tried against every format in
    /// [`DateFormat::ALL`], in order, and the first full match wins.
    ///
    /// # Errors
    ///
    /// - If the text matches none of the formats, returns a [`DateParseError`] naming the field
    ///   and showing the value (masked, if this parser masks).
    pub fn parse<'v>(&self, value: impl Into<DateInput<'v>>) -> Result<NaiveDate, DateParseError> {
        self.parse_with_format(value).map(|(date, _)| date)
    }

    /// Like [`parse`](Self::parse), but also returns the [`DateFormat`] that matched. The format
    /// is `None` when `value` was already a date.
    ///
    /// ```
    /// use convdate::{DateFormat, DateParser};
    ///
    /// let (date, format) = DateParser::new().parse_with_format("12.25.2023").unwrap();
    /// assert_eq!("2023-12-25", date.to_string());
    /// assert_eq!(Some(DateFormat::DottedUs), format);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_with_format<'v>(
        &self,
        value: impl Into<DateInput<'v>>,
    ) -> Result<(NaiveDate, Option<DateFormat>), DateParseError> {
        let text = match value.into() {
            DateInput::Date(date) => return Ok((date, None)),
            DateInput::Text(text) => text,
        };

        if let Some((format, date)) = DateFormat::first_match(&text) {
            log::debug!("parsed {} as {}", self.shown(&text), format);
            return Ok((date, Some(format)));
        }

        let shown = self.shown(&text).into_owned();
        log::debug!("no date format matched {}", shown);
        Err(DateParseError::new(self.display_name(), shown))
    }

    fn display_name(&self) -> String {
        match self.field_name {
            Some(name) if !name.is_empty() => capitalize(name),
            _ => "Date".to_string(),
        }
    }

    fn shown<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.mask {
            mask_digits(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Parses `value` with a masking [`DateParser`], optionally naming the field.
///
/// ```
/// use convdate::parse_date;
///
/// let date = parse_date("01/05/2024", None).unwrap();
/// assert_eq!("2024-01-05", date.to_string());
/// ```
///
/// # Errors
///
/// See [`DateParser::parse`].
pub fn parse_date<'v>(
    value: impl Into<DateInput<'v>>,
    field_name: Option<&str>,
) -> Result<NaiveDate, DateParseError> {
    DateParser::new().maybe_field_name(field_name).parse(value)
}

/// Upper-cases the first character and lower-cases the rest: `"START date"` becomes
/// `"Start date"`.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// unicode `\d`: every decimal digit, latin or not, but not other numerals like `½`
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit regex"));

fn mask_digits(text: &str) -> Cow<'_, str> {
    DIGIT_RE.replace_all(text, "*")
}
