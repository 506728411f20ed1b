//! Little-endian field access at fixed byte offsets.
//!
//! Header structs are never transmuted from memory: every field is read and
//! written at its on-disk offset so no alignment padding can sneak in.

#[inline]
pub(crate) fn read_u16_le(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

#[inline]
pub(crate) fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

#[inline]
pub(crate) fn read_i32_le(data: &[u8], offset: usize) -> i32 {
    read_u32_le(data, offset) as i32
}

#[inline]
pub(crate) fn write_u16_le(data: &mut [u8], offset: usize, value: u16) {
    data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

#[inline]
pub(crate) fn write_u32_le(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[inline]
pub(crate) fn write_i32_le(data: &mut [u8], offset: usize, value: i32) {
    write_u32_le(data, offset, value as u32);
}

/// Bytes of padding after `width` 24-bit samples to reach a 4-byte boundary.
#[inline]
pub(crate) fn row_padding(width: usize) -> usize {
    (4 - (width % 4) * 3 % 4) % 4
}
