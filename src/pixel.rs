/// One decoded pixel: 8-bit R, G, B.
///
/// Every source format is normalized to this representation. Grayscale and
/// bi-level samples are replicated into all three channels.
pub type Pixel = rgb::RGB8;

/// Gray sample replicated to R, G and B.
#[inline]
pub(crate) fn gray(value: u8) -> Pixel {
    Pixel::new(value, value, value)
}

/// Bi-level sample: a set bit is black, a clear bit is white.
#[inline]
pub(crate) fn bilevel(set: bool) -> Pixel {
    if set { gray(0) } else { gray(255) }
}
