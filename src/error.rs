use crate::format::DateFormat;

/// Why a single [`DateFormat`] rejected a string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatMismatch {
    /// The text is not laid out like the format, e.g. a year that isn't exactly four digits or
    /// whitespace in front of a number.
    #[error("input is not shaped like {format}")]
    Shape {
        /// The format that was tried.
        format: DateFormat,
    },

    /// The text is laid out like the format but chrono rejected it, e.g. February 30th.
    #[error("{0}")]
    Chrono(#[from] chrono::ParseError),
}

/// Returned when a string cannot be read as a date under any of the accepted
/// [`DateFormat`](crate::DateFormat)s.
///
/// The message names the field and echoes the offending value, which may have had its digits
/// masked with `*`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{name} must be in YYYY-MM-DD, MM/DD/YYYY, MM-DD-YYYY, \"MMMM DD, YYYY\" or MM.DD.YYYY format. Got date: {shown}."
)]
pub struct DateParseError {
    name: String,
    shown: String,
}

impl DateParseError {
    pub(crate) fn new(name: String, shown: String) -> Self {
        Self { name, shown }
    }

    /// The capitalized field name used in the message, e.g. `Start date`.
    pub fn field_display_name(&self) -> &str {
        &self.name
    }

    /// The value as it appears in the message, masked or not.
    pub fn shown_value(&self) -> &str {
        &self.shown
    }
}

/// A parameter received from a client could not be processed.
///
/// Not for ordinary field validation. A server handling this should answer with
/// [`client_message`](Self::client_message) and log the detailed message (and its
/// [`source`](std::error::Error::source)) on its own side.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BadRequestParamError {
    /// A date parameter matched none of the accepted formats.
    #[error("{0}")]
    Date(#[from] DateParseError),
}

impl BadRequestParamError {
    /// Generic text to send back to the client in place of the detailed message.
    pub fn client_message(&self) -> &'static str {
        "Something went wrong. Please check the request and try again."
    }
}
