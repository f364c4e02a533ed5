use super::option_data::OptionDataType;
use super::packet::DHCP6_HEADER_LEN;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum Error<I> {
    NomError(nom::Err<(I, nom::error::ErrorKind)>),
    MissingLabelLength,
    TruncatedLabel { declared: u8, available: usize },
    CompressedLabel(u8),
    LabelTooLong(usize),
    NonAsciiLabel,
    NameTooLong(usize),
    EmptyName,
    EmptyLabel,
    TruncatedHeader(usize),
}

impl<I> nom::error::ParseError<I> for Error<I> {
    fn from_error_kind(input: I, kind: nom::error::ErrorKind) -> Self {
        Error::NomError(nom::Err::Error((input, kind)))
    }

    fn append(_input: I, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I> fmt::Display for Error<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NomError(nom::Err::Incomplete(_)) => {
                write!(f, "incomplete input")
            }
            Error::NomError(nom::Err::Error((_, kind)))
            | Error::NomError(nom::Err::Failure((_, kind))) => {
                write!(f, "parse error: {}", kind.description())
            }
            Error::MissingLabelLength => {
                write!(f, "label length expected but buffer ended")
            }
            Error::TruncatedLabel {
                declared,
                available,
            } => write!(
                f,
                "label declares {} byte(s) but only {} remain",
                declared, available
            ),
            Error::CompressedLabel(len) => write!(
                f,
                "compression pointer 0x{:02x} is not supported",
                len
            ),
            Error::LabelTooLong(len) => {
                write!(f, "label of {} byte(s) exceeds {}", len, MAX_LABEL_LEN)
            }
            Error::NonAsciiLabel => write!(f, "label contains non-ASCII octets"),
            Error::NameTooLong(len) => write!(
                f,
                "name of {} byte(s) exceeds {} in wire format",
                len, MAX_NAME_WIRE_LEN
            ),
            Error::EmptyName => write!(f, "empty domain name"),
            Error::EmptyLabel => write!(f, "empty label"),
            Error::TruncatedHeader(len) => write!(
                f,
                "DHCPv6 header needs {} bytes, got {}",
                DHCP6_HEADER_LEN, len
            ),
        }
    }
}

pub type IResult<I, O> = nom::IResult<I, O, Error<I>>;

/// Longest label a one-byte length prefix may announce.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest domain name in wire format, terminating root label included.
pub const MAX_NAME_WIRE_LEN: usize = 255;

/// Option data that does not fit the value kind it is read or written as.
///
/// This is the only failure the codec reports. It is raised for truncated
/// buffers, malformed domain names and names that cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadDataTypeCast {
    pub data_type: OptionDataType,
    pub reason: String,
}

impl BadDataTypeCast {
    pub fn new<S: Into<String>>(data_type: OptionDataType, reason: S) -> Self {
        return Self {
            data_type,
            reason: reason.into(),
        };
    }

    /// Converts a parser failure into the public error, keeping its reason.
    pub fn from_nom<I>(
        data_type: OptionDataType,
        err: nom::Err<Error<I>>,
    ) -> Self {
        let reason = match err {
            nom::Err::Incomplete(_) => "incomplete input".to_string(),
            nom::Err::Error(e) | nom::Err::Failure(e) => e.to_string(),
        };
        return Self::new(data_type, reason);
    }

    pub fn truncated(
        data_type: OptionDataType,
        available: usize,
        required: usize,
    ) -> Self {
        return Self::new(
            data_type,
            format!(
                "truncated input: {} byte(s) available, {} required",
                available, required
            ),
        );
    }
}

impl fmt::Display for BadDataTypeCast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unable to convert {} option data: {}",
            self.data_type.name(),
            self.reason
        )
    }
}

impl std::error::Error for BadDataTypeCast {}
