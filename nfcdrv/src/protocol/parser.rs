// nfcdrv/src/protocol/parser.rs

//! Bounds-checked readers for the fixed-layout native target records.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Copy a fixed-size array out of `data` at `idx`.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    out.copy_from_slice(slice_at(data, idx, N)?);
    Ok(out)
}

/// Read a little-endian u32 length field at `idx`.
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    Ok(u32::from_le_bytes(array_at::<4>(data, idx)?))
}

/// Read a `len(u32) + buf[capacity]` pair starting at `idx` and return
/// only the first `len` bytes of the buffer. A reported length larger than
/// the buffer capacity is rejected instead of clamped.
pub fn counted_at(data: &[u8], idx: usize, capacity: usize) -> Result<&[u8]> {
    let len = le_u32_at(data, idx)? as usize;
    if len > capacity {
        return Err(Error::InvalidLength {
            expected: capacity,
            actual: len,
        });
    }
    let buf = slice_at(data, idx + 4, capacity)?;
    Ok(&buf[..len])
}

/// Append a `len(u32) + buf[capacity]` pair, zero-padding the buffer.
pub fn push_counted(out: &mut Vec<u8>, bytes: &[u8], capacity: usize) {
    let len = bytes.len().min(capacity);
    out.extend_from_slice(&(len as u32).to_le_bytes());
    out.extend_from_slice(&bytes[..len]);
    out.resize(out.len() + (capacity - len), 0);
}
