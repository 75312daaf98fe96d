//! JSON Wire Protocol response status codes

use std::fmt;

/// Status code carried in every wire response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireStatus {
    Success,
    NoSuchDriver,
    NoSuchElement,
    NoSuchFrame,
    UnknownCommand,
    StaleElementReference,
    ElementNotVisible,
    InvalidElementState,
    UnknownError,
    ElementIsNotSelectable,
    JavaScriptError,
    XPathLookupError,
    Timeout,
    NoSuchWindow,
    InvalidCookieDomain,
    UnableToSetCookie,
    UnexpectedAlertOpen,
    NoAlertOpen,
    ScriptTimeout,
    InvalidElementCoordinates,
    ImeNotAvailable,
    ImeEngineActivationFailed,
    InvalidSelector,
    SessionNotCreated,
    MoveTargetOutOfBounds,
    /// A code this client does not know about
    Other(i64),
}

impl WireStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => WireStatus::Success,
            6 => WireStatus::NoSuchDriver,
            7 => WireStatus::NoSuchElement,
            8 => WireStatus::NoSuchFrame,
            9 => WireStatus::UnknownCommand,
            10 => WireStatus::StaleElementReference,
            11 => WireStatus::ElementNotVisible,
            12 => WireStatus::InvalidElementState,
            13 => WireStatus::UnknownError,
            15 => WireStatus::ElementIsNotSelectable,
            17 => WireStatus::JavaScriptError,
            19 => WireStatus::XPathLookupError,
            21 => WireStatus::Timeout,
            23 => WireStatus::NoSuchWindow,
            24 => WireStatus::InvalidCookieDomain,
            25 => WireStatus::UnableToSetCookie,
            26 => WireStatus::UnexpectedAlertOpen,
            27 => WireStatus::NoAlertOpen,
            28 => WireStatus::ScriptTimeout,
            29 => WireStatus::InvalidElementCoordinates,
            30 => WireStatus::ImeNotAvailable,
            31 => WireStatus::ImeEngineActivationFailed,
            32 => WireStatus::InvalidSelector,
            33 => WireStatus::SessionNotCreated,
            34 => WireStatus::MoveTargetOutOfBounds,
            other => WireStatus::Other(other),
        }
    }

    pub const fn code(self) -> i64 {
        match self {
            WireStatus::Success => 0,
            WireStatus::NoSuchDriver => 6,
            WireStatus::NoSuchElement => 7,
            WireStatus::NoSuchFrame => 8,
            WireStatus::UnknownCommand => 9,
            WireStatus::StaleElementReference => 10,
            WireStatus::ElementNotVisible => 11,
            WireStatus::InvalidElementState => 12,
            WireStatus::UnknownError => 13,
            WireStatus::ElementIsNotSelectable => 15,
            WireStatus::JavaScriptError => 17,
            WireStatus::XPathLookupError => 19,
            WireStatus::Timeout => 21,
            WireStatus::NoSuchWindow => 23,
            WireStatus::InvalidCookieDomain => 24,
            WireStatus::UnableToSetCookie => 25,
            WireStatus::UnexpectedAlertOpen => 26,
            WireStatus::NoAlertOpen => 27,
            WireStatus::ScriptTimeout => 28,
            WireStatus::InvalidElementCoordinates => 29,
            WireStatus::ImeNotAvailable => 30,
            WireStatus::ImeEngineActivationFailed => 31,
            WireStatus::InvalidSelector => 32,
            WireStatus::SessionNotCreated => 33,
            WireStatus::MoveTargetOutOfBounds => 34,
            WireStatus::Other(code) => code,
        }
    }

    pub fn is_success(self) -> bool {
        self == WireStatus::Success
    }
}

impl fmt::Display for WireStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireStatus::Other(code) => write!(f, "{} Unrecognized", code),
            known => write!(f, "{} {:?}", known.code(), known),
        }
    }
}
