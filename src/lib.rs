//! # convdate
//!
//! A library for parsing loosely-formatted dates into calendar dates.
//!
//! Dates typed by people, or sent by clients that don't agree on a single layout, come in a handful
//! of shapes. This library tries each accepted [`DateFormat`] in a fixed order and returns the first
//! full match as a [`chrono::NaiveDate`]. When nothing matches, the error names the field and
//! lists the accepted formats.
//!
//! ## Examples
//!
//! Parse a date for internal use:
//!
//! ```
//! use convdate::prelude::*;
//!
//! let date = parse_date("Jan 05, 2024", Some("start date")).unwrap();
//! assert_eq!("2024-01-05", date.to_string());
//!
//! // digits of rejected values are masked by default
//! let err = parse_date("1984-13-01", Some("date of birth")).unwrap_err();
//! assert_eq!("****-**-**", err.shown_value());
//! ```
//!
//! Or, parse a date taken from a client request:
//!
//! ```
//! use convdate::prelude::*;
//!
//! let err = date_from_request("1984-13-01", Some("date of birth")).unwrap_err();
//! assert!(err.to_string().starts_with("Date of birth must be in YYYY-MM-DD"));
//! assert!(err.to_string().ends_with("Got date: 1984-13-01."));
//! ```
//!
//! ## Accepted Formats
//!
//! Tried in this order:
//!
//! | Format | Example |
//! |---|---|
//! | `YYYY-MM-DD` | `2024-01-05` |
//! | `MM-DD-YYYY` | `01-05-2024` |
//! | `MM/DD/YYYY` | `01/05/2024` |
//! | `MM.DD.YYYY` | `01.05.2024` |
//! | `Mon DD, YYYY` | `Jan 05, 2024` |
//! | `Month DD, YYYY` | `January 05, 2024` |
//!
//! Every format must match the whole string, and the result must be a real date (no month 13,
//! no February 30th).
//!
//! ## Internal Parsing vs. Request Parameters
//!
//! - [`DateParser`] / [`parse_date`] fail with a [`DateParseError`], a plain value error. Digits of
//!   the rejected value are masked with `*` unless masking is turned off.
//! - [`request::date_from_request`] never masks, and fails with a [`BadRequestParamError`], which
//!   marks the problem as the client's. Only use it where a request is being handled.
//!
//! ## Prelude
//!
//! ```
//! use convdate::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod format;
mod parse;
pub mod request;

pub use crate::error::{BadRequestParamError, DateParseError, FormatMismatch};
pub use crate::format::DateFormat;
pub use crate::parse::{parse_date, DateInput, DateParser};

/// A convenience module appropriate for glob imports (`use convdate::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::parse_date;
    #[doc(no_inline)]
    pub use crate::request::date_from_request;
    #[doc(no_inline)]
    pub use crate::BadRequestParamError;
    #[doc(no_inline)]
    pub use crate::DateFormat;
    #[doc(no_inline)]
    pub use crate::DateInput;
    #[doc(no_inline)]
    pub use crate::DateParseError;
    #[doc(no_inline)]
    pub use crate::DateParser;
    #[doc(no_inline)]
    pub use crate::FormatMismatch;
}
