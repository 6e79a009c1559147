//! Replies sent back to the host

use core::fmt;

use crate::parser::ProtocolError;

/// Error codes carried by `ERR` replies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    /// Unknown keyword
    Unknown,
    /// Line too long
    TooLong,
    /// Malformed arguments
    Malformed,
    /// Wrong `IMG` length
    BadLength,
    /// `MAP` text too long
    TextLength,
    /// Key not present on the keypad
    BadKey,
    /// Display not available (degraded mode)
    NoDisplay,
    /// Display rejected the write
    DisplayFault,
}

impl ErrorCode {
    /// Wire spelling of the code
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Unknown => "UNKNOWN",
            ErrorCode::TooLong => "TOOLONG",
            ErrorCode::Malformed => "MALFORMED",
            ErrorCode::BadLength => "BADLEN",
            ErrorCode::TextLength => "TEXTLEN",
            ErrorCode::BadKey => "BADKEY",
            ErrorCode::NoDisplay => "NODISPLAY",
            ErrorCode::DisplayFault => "DISPLAY",
        }
    }
}

impl From<ProtocolError> for ErrorCode {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::UnknownCommand => ErrorCode::Unknown,
            ProtocolError::LineTooLong => ErrorCode::TooLong,
            ProtocolError::Malformed => ErrorCode::Malformed,
            ProtocolError::BadLength => ErrorCode::BadLength,
            ProtocolError::TextTooLong => ErrorCode::TextLength,
        }
    }
}

/// A reply line (without the trailing newline)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply {
    /// `MAP` applied
    MapOk(char),
    /// `IMG` shown
    ImageOk(usize),
    /// Command rejected
    Error(ErrorCode),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::MapOk(key) => write!(f, "OK MAP {}", key),
            Reply::ImageOk(len) => write!(f, "OK IMG {}", len),
            Reply::Error(code) => write!(f, "ERR {}", code.as_str()),
        }
    }
}

impl From<ProtocolError> for Reply {
    fn from(err: ProtocolError) -> Self {
        Reply::Error(err.into())
    }
}
