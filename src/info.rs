use crate::error::DecodeError;
use crate::pnm::{self, PnmFormat, PnmHeader};

/// Header information, available without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: PnmFormat,
    pub width: u32,
    pub height: u32,
    /// 1 for bi-level formats.
    pub maxval: u32,
    /// Byte offset of the first pixel byte.
    pub data_offset: usize,
}

impl ImageInfo {
    /// Parse only the header of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        pnm::parse_header(data).map(|h| Self::from_header(&h))
    }

    pub(crate) fn from_header(h: &PnmHeader) -> Self {
        Self {
            format: h.format,
            width: h.width,
            height: h.height,
            maxval: h.maxval,
            data_offset: h.data_offset,
        }
    }
}
