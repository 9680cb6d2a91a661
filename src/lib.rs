//! # netpbm-view
//!
//! NetPBM decoder: PBM, PGM and PPM, in both ASCII (P1, P2, P3) and binary
//! (P4, P5, P6) encodings, decoded to a row-major grid of 8-bit RGB pixels.
//!
//! Decoding is a pure function of the input bytes. There is no I/O and no
//! state shared between calls, so independent buffers can be decoded from
//! any number of threads.
//!
//! ## Output
//!
//! Every format is normalized to [`Pixel`] (`rgb::RGB8`):
//! - bi-level: a set bit is black (0), a clear bit is white (255)
//! - grayscale: the sample is replicated into R, G and B
//! - samples scale as `floor(sample * 255 / maxval)`; values above maxval
//!   clamp to 255 and maxval 0 yields 0
//! - maxval >= 256 means two big-endian bytes per binary sample
//!
//! ## Short input
//!
//! Pixel data that ends early is not an error: the decode returns the whole
//! pixels that were present ([`DecodedImage::is_complete`] tells the two
//! apart). Use [`DecodeRequest::strict`] to get [`DecodeError::Truncated`]
//! instead. Header fields must all be present and numeric.
//!
//! ## Usage
//!
//! ```
//! use netpbm_view::{ImageInfo, PnmFormat, decode};
//!
//! let mut data = b"P5\n2 2\n255\n".to_vec();
//! data.extend_from_slice(&[0, 127, 255, 64]);
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(&data)?;
//! assert_eq!(info.format, PnmFormat::P5);
//!
//! let image = decode(&data)?;
//! assert_eq!((image.width(), image.height()), (2, 2));
//! assert_eq!(image.pixel(1, 0).map(|p| p.g), Some(127));
//! # Ok::<(), netpbm_view::DecodeError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod info;
mod limits;
mod pixel;
mod pnm;

// Re-exports
pub use decode::{DecodeObserver, DecodeRequest, DecodedImage};
pub use enough::{Stop, Unstoppable};
pub use error::DecodeError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::Pixel;
pub use pnm::PnmFormat;

/// Decode a NetPBM buffer with no limits and lenient truncation.
pub fn decode(data: &[u8]) -> Result<DecodedImage, DecodeError> {
    DecodeRequest::new(data).decode(Unstoppable)
}

/// Parse only the header.
pub fn probe(data: &[u8]) -> Result<ImageInfo, DecodeError> {
    ImageInfo::from_bytes(data)
}
