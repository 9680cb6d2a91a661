use alloc::format;

use super::scan::{Scanner, parse_uint};
use super::{PnmFormat, PnmHeader};
use crate::error::DecodeError;

/// Largest maxval representable in a two-byte sample.
const MAX_MAXVAL: u32 = 65535;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    ReadFormat,
    ReadWidth,
    ReadHeight,
    ReadMaxval,
    Done,
}

/// Parse the magic token, width, height and (when the format has one) maxval.
///
/// Comments between tokens are skipped by the scanner and never advance the
/// state. On success `data_offset` is the first pixel byte: for binary formats
/// the single separator after the last token is consumed as well.
pub(crate) fn parse_header(data: &[u8]) -> Result<PnmHeader, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut scanner = Scanner::new(data);
    let mut state = State::ReadFormat;
    let mut header = PnmHeader {
        format: PnmFormat::P1,
        width: 0,
        height: 0,
        maxval: 1,
        data_offset: 0,
    };

    while state != State::Done {
        let token = scanner.next_token();
        if token.is_empty() {
            return Err(match state {
                State::ReadFormat => DecodeError::UnrecognizedFormat,
                _ => DecodeError::Truncated,
            });
        }

        state = match state {
            State::ReadFormat => {
                header.format =
                    PnmFormat::from_magic(token).ok_or(DecodeError::UnrecognizedFormat)?;
                State::ReadWidth
            }
            State::ReadWidth => {
                header.width = parse_field(token, "width")?;
                State::ReadHeight
            }
            State::ReadHeight => {
                header.height = parse_field(token, "height")?;
                if header.format.has_maxval() {
                    State::ReadMaxval
                } else {
                    State::Done
                }
            }
            State::ReadMaxval => {
                let maxval = parse_field(token, "maxval")?;
                if maxval > MAX_MAXVAL {
                    return Err(DecodeError::InvalidHeader(format!(
                        "maxval {maxval} exceeds {MAX_MAXVAL}"
                    )));
                }
                header.maxval = maxval;
                State::Done
            }
            State::Done => State::Done,
        };
    }

    if !header.format.is_ascii() {
        scanner.skip_one_whitespace();
    }
    header.data_offset = scanner.position();

    log::debug!(
        "{} header: {}x{} maxval {} data at {}",
        header.format,
        header.width,
        header.height,
        header.maxval,
        header.data_offset
    );

    Ok(header)
}

fn parse_field(token: &[u8], name: &str) -> Result<u32, DecodeError> {
    parse_uint(token).ok_or_else(|| {
        DecodeError::InvalidHeader(format!(
            "{name} is not an unsigned integer: {:?}",
            alloc::string::String::from_utf8_lossy(token)
        ))
    })
}
