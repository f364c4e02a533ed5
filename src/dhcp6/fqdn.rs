//! Domain names in the label format of RFC 1035 section 3.1.
//!
//! A name is a run of labels, each one preceded by a single length byte,
//! closed by a zero length byte (the root label):
//!
//! ```text
//! 08 'mydomain' 07 'example' 03 'com' 00
//! ```
//!
//! Compression pointers are not part of this format and are rejected.

use super::err::{
    BadDataTypeCast, Error, IResult, MAX_LABEL_LEN, MAX_NAME_WIRE_LEN,
};
use super::option_data::OptionDataType;
use nom::bytes::complete::take;
use nom::number::complete::be_u8;

/// Length bytes with both high bits set announce a compression pointer.
const COMPRESSION_MASK: u8 = 0xc0;

enum LabelState {
    ReadingLength,
    ReadingLabel(u8),
    Terminated,
}

/// Parses one domain name, returning it in absolute textual form
/// (always ending with a dot) together with the bytes that follow it.
pub fn parse_fqdn(input: &[u8]) -> IResult<&[u8], String> {
    let mut name = String::new();
    let mut raw = input;
    let mut state = LabelState::ReadingLength;

    loop {
        state = match state {
            LabelState::ReadingLength => {
                let (r, len) =
                    be_u8(raw).map_err(|_: nom::Err<Error<&[u8]>>| {
                        nom::Err::Error(Error::MissingLabelLength)
                    })?;
                raw = r;

                if len == 0 {
                    LabelState::Terminated
                } else if len & COMPRESSION_MASK == COMPRESSION_MASK {
                    return Err(nom::Err::Error(Error::CompressedLabel(len)));
                } else if len as usize > MAX_LABEL_LEN {
                    return Err(nom::Err::Error(Error::LabelTooLong(
                        len as usize,
                    )));
                } else {
                    LabelState::ReadingLabel(len)
                }
            }
            LabelState::ReadingLabel(len) => {
                let available = raw.len();
                let (r, label): (&[u8], &[u8]) = take(len)(raw)
                    .map_err(|_: nom::Err<Error<&[u8]>>| {
                        nom::Err::Error(Error::TruncatedLabel {
                            declared: len,
                            available,
                        })
                    })?;

                if !label.is_ascii() {
                    return Err(nom::Err::Error(Error::NonAsciiLabel));
                }

                name.extend(label.iter().map(|b| *b as char));
                name.push('.');
                raw = r;
                LabelState::ReadingLength
            }
            LabelState::Terminated => {
                // the root label alone still renders as "."
                if name.is_empty() {
                    name.push('.');
                }
                return Ok((raw, name));
            }
        };

        let consumed = input.len() - raw.len();
        if consumed > MAX_NAME_WIRE_LEN {
            return Err(nom::Err::Error(Error::NameTooLong(consumed)));
        }
    }
}

/// Reads the domain name at the start of `buf`.
///
/// Returns the name and the number of bytes it spans, so the caller can
/// carry on with whatever is packed after it.
pub fn read_fqdn(buf: &[u8]) -> Result<(String, usize), BadDataTypeCast> {
    let (rest, name) = parse_fqdn(buf)
        .map_err(|e| BadDataTypeCast::from_nom(OptionDataType::Fqdn, e))?;

    return Ok((name, buf.len() - rest.len()));
}

/// Appends `name` to `buf` in wire format.
///
/// A trailing dot is accepted and does not produce an extra label. The name
/// is validated before anything is written, so `buf` is left as it was on
/// error.
pub fn write_fqdn(name: &str, buf: &mut Vec<u8>) -> Result<(), BadDataTypeCast> {
    let labels = split_labels(name).map_err(|e| {
        BadDataTypeCast::new(
            OptionDataType::Fqdn,
            format!("'{}': {}", name, e),
        )
    })?;

    for label in labels {
        buf.push(label.len() as u8);
        buf.extend(label.as_bytes());
    }
    buf.push(0);

    return Ok(());
}

fn split_labels(name: &str) -> Result<Vec<&str>, Error<&str>> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }

    let relative = name.strip_suffix('.').unwrap_or(name);
    let labels: Vec<&str> = relative.split('.').collect();

    for label in &labels {
        if label.is_empty() {
            return Err(Error::EmptyLabel);
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(Error::LabelTooLong(label.len()));
        }
        if !label.is_ascii() {
            return Err(Error::NonAsciiLabel);
        }
    }

    let wire_len = labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1;
    if wire_len > MAX_NAME_WIRE_LEN {
        return Err(Error::NameTooLong(wire_len));
    }

    return Ok(labels);
}

/// Iterates over domain names packed back to back in one buffer.
///
/// Iteration ends when the buffer is exhausted or after the first error.
pub struct FqdnReader<'a> {
    raw: &'a [u8],
    failed: bool,
}

impl<'a> FqdnReader<'a> {
    pub fn new(raw: &'a [u8]) -> Self {
        return Self { raw, failed: false };
    }
}

impl<'a> Iterator for FqdnReader<'a> {
    type Item = Result<String, BadDataTypeCast>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.raw.is_empty() {
            return None;
        }

        match read_fqdn(self.raw) {
            Ok((name, len)) => {
                self.raw = &self.raw[len..];
                Some(Ok(name))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
