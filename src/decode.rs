use alloc::vec::Vec;
use enough::Stop;

use crate::error::DecodeError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::pixel::Pixel;
use crate::pnm::{self, PnmFormat};

/// Decoded image: header fields plus row-major RGB pixels.
///
/// `pixels().len()` is `width * height` for a complete decode. When the input
/// ends early (and the request is not strict) it holds only the whole pixels
/// that were present; see [`is_complete`](Self::is_complete).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    format: PnmFormat,
    width: u32,
    height: u32,
    maxval: u32,
    pixels: Vec<Pixel>,
}

impl DecodedImage {
    pub(crate) fn new(
        format: PnmFormat,
        width: u32,
        height: u32,
        maxval: u32,
        pixels: Vec<Pixel>,
    ) -> Self {
        Self {
            format,
            width,
            height,
            maxval,
            pixels,
        }
    }

    pub fn format(&self) -> PnmFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Declared maxval (1 for bi-level formats).
    pub fn maxval(&self) -> u32 {
        self.maxval
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Pixel count of a complete image.
    pub fn expected_len(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether every pixel the header promised was decoded.
    pub fn is_complete(&self) -> bool {
        self.pixels.len() as u64 == self.expected_len()
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// `None` outside the image or in the missing tail of a truncated decode.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?;
        self.pixels.get(idx).copied()
    }

    /// Copy into an [`imgref::ImgVec`].
    ///
    /// Returns [`DecodeError::Truncated`] if the image is incomplete.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> Result<imgref::ImgVec<Pixel>, DecodeError> {
        if !self.is_complete() {
            return Err(DecodeError::Truncated);
        }
        Ok(imgref::ImgVec::new(
            self.pixels.clone(),
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// Optional hooks for hosts that want diagnostics from a decode.
///
/// All methods default to doing nothing.
pub trait DecodeObserver {
    /// Called once the header is parsed, before any pixel data is read.
    fn on_header(&self, _info: &ImageInfo) {}

    /// Called with the finished image, complete or not.
    fn on_finished(&self, _image: &DecodedImage) {}
}

/// Decode request builder.
///
/// ```
/// use netpbm_view::{DecodeRequest, Limits, Unstoppable};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let image = DecodeRequest::new(b"P2 2 1 3\n0 3\n")
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(image.pixels()[1].g, 255);
/// # Ok::<(), netpbm_view::DecodeError>(())
/// ```
#[derive(Clone, Copy)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    strict: bool,
    observer: Option<&'a dyn DecodeObserver>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            strict: false,
            observer: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Reject short pixel data with [`DecodeError::Truncated`] instead of
    /// returning a partial image.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_observer(mut self, observer: &'a dyn DecodeObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Parse the header and decode the pixel payload.
    pub fn decode(self, stop: impl Stop) -> Result<DecodedImage, DecodeError> {
        let header = pnm::parse_header(self.data)?;
        if let Some(observer) = self.observer {
            observer.on_header(&ImageInfo::from_header(&header));
        }

        let image = pnm::decode(self.data, &header, self.limits, &stop)?;

        log::debug!(
            "decoded {} pixels of {} ({}x{})",
            image.pixels.len(),
            image.format,
            image.width,
            image.height
        );

        if self.strict && !image.is_complete() {
            return Err(DecodeError::Truncated);
        }
        if let Some(observer) = self.observer {
            observer.on_finished(&image);
        }
        Ok(image)
    }
}
