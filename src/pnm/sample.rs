//! Sample width selection and scaling of raw samples to 8 bits.

/// Bytes per binary channel sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SampleWidth {
    One,
    /// Big-endian, used when maxval >= 256.
    Two,
}

impl SampleWidth {
    pub fn for_maxval(maxval: u32) -> Self {
        if maxval > 255 { Self::Two } else { Self::One }
    }

    #[inline]
    pub fn bytes(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Read one sample from the front of `src`, which must hold at least
    /// [`bytes`](Self::bytes) bytes.
    #[inline]
    pub fn read(self, src: &[u8]) -> u32 {
        match self {
            Self::One => u32::from(src[0]),
            Self::Two => u32::from(u16::from_be_bytes([src[0], src[1]])),
        }
    }
}

/// Scale `raw` in `[0, maxval]` to `[0, 255]`, rounding down.
///
/// Samples above `maxval` clamp to 255. A `maxval` of 0 maps everything to 0.
#[inline]
pub(crate) fn normalize(raw: u32, maxval: u32) -> u8 {
    if maxval == 0 {
        return 0;
    }
    if raw >= maxval {
        return 255;
    }
    // raw < maxval <= u32::MAX, so raw * 255 fits in u64 and the quotient is < 255
    (u64::from(raw) * 255 / u64::from(maxval)) as u8
}
