//! Date parsing at a request boundary.
//!
//! Use [`date_from_request`] where a date comes straight out of a client's request payload or
//! query string. Everywhere else, parse with [`DateParser`] and handle [`DateParseError`] like
//! any other value error.
//!
//! [`DateParseError`]: crate::DateParseError

use crate::{
    error::BadRequestParamError,
    parse::{DateInput, DateParser},
};
use chrono::NaiveDate;

/// Parses a date received from a client.
///
/// The value is never masked here: the caller needs it verbatim to log it, and it came from the
/// client in the first place. Parse failures become [`BadRequestParamError`], whose message is the
/// unmasked parse error and whose source is that error.
///
/// ```
/// use std::error::Error;
/// use convdate::{request::date_from_request, DateParser};
///
/// let err = date_from_request("13/40/2024", Some("start date")).unwrap_err();
/// let parse_err = DateParser::new()
///     .field_name("start date")
///     .mask(false)
///     .parse("13/40/2024")
///     .unwrap_err();
/// assert_eq!(parse_err.to_string(), err.to_string());
/// assert!(err.source().is_some());
/// ```
///
/// # Errors
///
/// - If the value matches none of the accepted formats, returns a
///   [`BadRequestParamError::Date`].
pub fn date_from_request<'v>(
    value: impl Into<DateInput<'v>>,
    field_name: Option<&str>,
) -> Result<NaiveDate, BadRequestParamError> {
    DateParser::new()
        .maybe_field_name(field_name)
        .mask(false)
        .parse(value)
        .map_err(|e| {
            log::debug!("rejecting request parameter: {}", e);
            BadRequestParamError::from(e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateParseError;
    use rstest::*;
    use std::error::Error;

    #[rstest]
    #[case("2024-01-05")]
    #[case("01/05/2024")]
    #[case("Jan 05, 2024")]
    fn test_valid_request_date(#[case] text: &str) {
        assert_eq!(
            NaiveDate::from_ymd_opt(2024, 1, 5),
            date_from_request(text, Some("start date")).ok()
        );
    }

    #[test]
    fn test_date_passes_through() {
        let date = NaiveDate::from_ymd_opt(1984, 6, 1).unwrap();
        assert_eq!(Ok(date), date_from_request(date, None));
    }

    #[rstest]
    #[case("13/40/2024", None)]
    #[case("1984-13-01", Some("date of birth"))]
    #[case("yesterday", Some("end date"))]
    fn test_invalid_request_date(#[case] text: &str, #[case] field_name: Option<&str>) {
        let expected = DateParser::new()
            .maybe_field_name(field_name)
            .mask(false)
            .parse(text)
            .unwrap_err();

        let err = date_from_request(text, field_name).unwrap_err();
        assert_eq!(BadRequestParamError::Date(expected.clone()), err);
        assert_eq!(expected.to_string(), err.to_string());

        // the parse error stays reachable for logging
        let source = err
            .source()
            .and_then(|source| source.downcast_ref::<DateParseError>());
        assert_eq!(Some(&expected), source);
    }

    #[test]
    fn test_digits_not_masked() {
        let err = date_from_request("13/40/2024", None).unwrap_err();
        assert!(err.to_string().ends_with("Got date: 13/40/2024."));
    }

    #[test]
    fn test_client_message_is_generic() {
        let err = date_from_request("13/40/2024", None).unwrap_err();
        assert!(!err.client_message().contains("13/40/2024"));
    }
}
