//! Packed RGB332 pixel expansion.
//!
//! One framebuffer byte encodes red(3)/green(3)/blue(2), most-significant first.
//! Expansion shifts each component into the high bits of its 8-bit channel and
//! leaves the low bits zero: a pure, lossless-upscale mapping with no rounding.

/// Expands a packed RGB332 byte to an `[r, g, b]` triplet of 8-bit channels.
///
/// Red and green land on the 8-value grid `{0x00, 0x20, ..., 0xE0}`, blue on
/// `{0x00, 0x40, 0x80, 0xC0}`.
pub const fn expand_rgb332(byte: u8) -> [u8; 3] {
    let r = byte & 0b1110_0000;
    let g = (byte & 0b0001_1100) << 3;
    let b = (byte & 0b0000_0011) << 6;
    [r, g, b]
}
