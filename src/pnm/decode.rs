//! Pixel payload decoders.
//!
//! Each decoder stops at `width * height` pixels or when the input runs out,
//! whichever comes first. Only whole pixels are emitted.

use alloc::vec::Vec;
use enough::Stop;

use super::sample::normalize;
use super::scan::{Scanner, parse_uint};
use super::{PnmFormat, PnmHeader};
use crate::error::DecodeError;
use crate::pixel::{Pixel, bilevel, gray};

/// Rows between cancellation checks.
const STOP_INTERVAL: usize = 16;

/// Capacity for the output buffer: the full image, unless the remaining
/// input cannot possibly hold that many pixels.
fn initial_capacity(
    format: PnmFormat,
    payload_len: usize,
    bytes_per_pixel: usize,
    expected: usize,
) -> usize {
    let most = match format {
        // One digit plus one separator per sample, the last separator optional.
        PnmFormat::P1 | PnmFormat::P2 => payload_len / 2 + 1,
        PnmFormat::P3 => payload_len / 6 + 1,
        PnmFormat::P4 => payload_len.saturating_mul(8),
        PnmFormat::P5 | PnmFormat::P6 => payload_len / bytes_per_pixel.max(1),
    };
    expected.min(most)
}

/// P1, P2 and P3: every sample is a whitespace/comment-delimited token.
///
/// A token that is not an unsigned integer ends the decode like end of input.
pub(super) fn decode_ascii(
    data: &[u8],
    header: &PnmHeader,
    expected: usize,
    stop: &dyn Stop,
) -> Result<Vec<Pixel>, DecodeError> {
    let mut scanner = Scanner::at(data, header.data_offset);
    let mut out = Vec::with_capacity(initial_capacity(
        header.format,
        scanner.remaining().len(),
        0,
        expected,
    ));
    if expected == 0 {
        return Ok(out);
    }

    let width = header.width as usize;

    for row in 0..header.height as usize {
        if row % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        for _ in 0..width {
            match next_ascii_pixel(&mut scanner, header.format, header.maxval) {
                Some(p) => out.push(p),
                None => {
                    log::trace!("{} data ended after {} pixels", header.format, out.len());
                    return Ok(out);
                }
            }
        }
    }

    Ok(out)
}

fn next_ascii_pixel(scanner: &mut Scanner<'_>, format: PnmFormat, maxval: u32) -> Option<Pixel> {
    let mut sample = || parse_uint(scanner.next_token());
    match format {
        PnmFormat::P1 => sample().map(|bit| bilevel(bit != 0)),
        PnmFormat::P3 => {
            let r = sample()?;
            let g = sample()?;
            let b = sample()?;
            Some(Pixel::new(
                normalize(r, maxval),
                normalize(g, maxval),
                normalize(b, maxval),
            ))
        }
        _ => sample().map(|v| gray(normalize(v, maxval))),
    }
}

/// P4: bits packed MSB first, each row padded to `ceil(width / 8)` bytes.
pub(super) fn decode_bilevel_packed(
    data: &[u8],
    header: &PnmHeader,
    expected: usize,
    stop: &dyn Stop,
) -> Result<Vec<Pixel>, DecodeError> {
    let payload = data.get(header.data_offset..).unwrap_or_default();
    let mut out = Vec::with_capacity(initial_capacity(header.format, payload.len(), 0, expected));
    if expected == 0 {
        return Ok(out);
    }

    let width = header.width as usize;
    let row_bytes = width.div_ceil(8);

    for (row_idx, row) in payload
        .chunks(row_bytes)
        .take(header.height as usize)
        .enumerate()
    {
        if row_idx % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        for col in 0..width {
            let Some(&byte) = row.get(col / 8) else {
                log::trace!("P4 data ended after {} pixels", out.len());
                return Ok(out);
            };
            let bit = (byte >> (7 - (col % 8))) & 1;
            out.push(bilevel(bit == 1));
        }
    }

    Ok(out)
}

/// P5 and P6: fixed-width raw samples, one or two bytes each.
pub(super) fn decode_binary(
    data: &[u8],
    header: &PnmHeader,
    expected: usize,
    stop: &dyn Stop,
) -> Result<Vec<Pixel>, DecodeError> {
    let payload = data.get(header.data_offset..).unwrap_or_default();
    let sample_width = header.sample_width();
    let sample_bytes = sample_width.bytes();
    let bytes_per_pixel = header.format.channels() * sample_bytes;
    let mut out = Vec::with_capacity(initial_capacity(
        header.format,
        payload.len(),
        bytes_per_pixel,
        expected,
    ));
    if expected == 0 {
        return Ok(out);
    }

    let row_bytes = (header.width as usize).checked_mul(bytes_per_pixel).ok_or(
        DecodeError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        },
    )?;
    let maxval = header.maxval;
    let channel = |src: &[u8]| normalize(sample_width.read(src), maxval);

    for (row_idx, row) in payload
        .chunks(row_bytes)
        .take(header.height as usize)
        .enumerate()
    {
        if row_idx % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        for px in row.chunks_exact(bytes_per_pixel) {
            out.push(match header.format {
                PnmFormat::P6 => Pixel::new(
                    channel(px),
                    channel(&px[sample_bytes..]),
                    channel(&px[2 * sample_bytes..]),
                ),
                _ => gray(channel(px)),
            });
        }
    }

    if out.len() < expected {
        log::trace!("{} data ended after {} pixels", header.format, out.len());
    }

    Ok(out)
}
