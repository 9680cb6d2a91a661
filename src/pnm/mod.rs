//! NetPBM family: P1/P4 (PBM), P2/P5 (PGM), P3/P6 (PPM).
//!
//! ASCII variants are re-tokenized sample by sample; binary variants read
//! fixed-width raw samples. Both paths share [`sample::normalize`].

mod decode;
mod header;
mod sample;
mod scan;

pub(crate) use header::parse_header;

use core::fmt;

use crate::decode::DecodedImage;
use crate::error::DecodeError;
use crate::limits::Limits;
use enough::Stop;
use sample::SampleWidth;

/// NetPBM sub-format, named after its magic token.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// ASCII bi-level (PBM).
    P1,
    /// ASCII grayscale (PGM).
    P2,
    /// ASCII RGB (PPM).
    P3,
    /// Binary bi-level, 8 pixels per byte, rows padded to a byte boundary.
    P4,
    /// Binary grayscale, 1 or 2 bytes per sample.
    P5,
    /// Binary RGB, 1 or 2 bytes per sample.
    P6,
}

impl PnmFormat {
    /// Match an exact magic token (`b"P1"` .. `b"P6"`).
    pub fn from_magic(token: &[u8]) -> Option<Self> {
        match token {
            b"P1" => Some(Self::P1),
            b"P2" => Some(Self::P2),
            b"P3" => Some(Self::P3),
            b"P4" => Some(Self::P4),
            b"P5" => Some(Self::P5),
            b"P6" => Some(Self::P6),
            _ => None,
        }
    }

    pub fn magic(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
            Self::P5 => "P5",
            Self::P6 => "P6",
        }
    }

    /// Whether pixel data is whitespace-separated ASCII text.
    pub fn is_ascii(self) -> bool {
        matches!(self, Self::P1 | Self::P2 | Self::P3)
    }

    /// Whether the header carries a maxval field. Bi-level formats do not.
    pub fn has_maxval(self) -> bool {
        !matches!(self, Self::P1 | Self::P4)
    }

    /// Samples per pixel in the source encoding.
    pub fn channels(self) -> usize {
        match self {
            Self::P3 | Self::P6 => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for PnmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.magic())
    }
}

/// Parsed header (internal).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PnmHeader {
    pub format: PnmFormat,
    pub width: u32,
    pub height: u32,
    /// 1 for bi-level formats.
    pub maxval: u32,
    /// Offset of the first pixel byte.
    pub data_offset: usize,
}

impl PnmHeader {
    pub fn sample_width(&self) -> SampleWidth {
        SampleWidth::for_maxval(self.maxval)
    }

    /// `width * height`, the pixel count of a complete decode.
    pub fn pixel_count(&self) -> Result<usize, DecodeError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(DecodeError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}

/// Decode the pixel payload described by an already parsed `header`.
pub(crate) fn decode(
    data: &[u8],
    header: &PnmHeader,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodedImage, DecodeError> {
    let expected = header.pixel_count()?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        limits.check_memory((expected as u64).saturating_mul(3))?;
    }

    stop.check()?;

    let pixels = match header.format {
        PnmFormat::P1 | PnmFormat::P2 | PnmFormat::P3 => {
            decode::decode_ascii(data, header, expected, stop)?
        }
        PnmFormat::P4 => decode::decode_bilevel_packed(data, header, expected, stop)?,
        PnmFormat::P5 | PnmFormat::P6 => decode::decode_binary(data, header, expected, stop)?,
    };

    Ok(DecodedImage::new(
        header.format,
        header.width,
        header.height,
        header.maxval,
        pixels,
    ))
}
