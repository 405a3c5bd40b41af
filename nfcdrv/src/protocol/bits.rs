// nfcdrv/src/protocol/bits.rs

//! Bit-granular frames for raw ISO14443A exchanges (short frames,
//! anticollision, Crypto-1 traffic with caller-managed parity).

use crate::{Error, Result};

/// Odd parity bit for one byte, as ISO14443A transmits it.
pub fn odd_parity(byte: u8) -> u8 {
    ((byte.count_ones() + 1) % 2) as u8
}

/// Odd parity for every byte of `bytes`.
pub fn odd_parity_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| odd_parity(b)).collect()
}

/// A frame measured in bits. `bits` holds `ceil(bit_len / 8)` bytes; the
/// optional `parity` carries one parity bit (0 or 1) per byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitFrame {
    bits: Vec<u8>,
    bit_len: usize,
    parity: Option<Vec<u8>>,
}

fn bytes_for(bit_len: usize) -> usize {
    bit_len.div_ceil(8)
}

impl BitFrame {
    pub fn new(bits: Vec<u8>, bit_len: usize) -> Result<Self> {
        if bits.len() != bytes_for(bit_len) {
            return Err(Error::InvalidLength {
                expected: bytes_for(bit_len),
                actual: bits.len(),
            });
        }
        Ok(Self {
            bits,
            bit_len,
            parity: None,
        })
    }

    /// Whole-byte frame.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bits: bytes.to_vec(),
            bit_len: bytes.len() * 8,
            parity: None,
        }
    }

    pub fn with_parity(bits: Vec<u8>, bit_len: usize, parity: Vec<u8>) -> Result<Self> {
        let mut frame = Self::new(bits, bit_len)?;
        if parity.len() != frame.bits.len() {
            return Err(Error::InvalidLength {
                expected: frame.bits.len(),
                actual: parity.len(),
            });
        }
        frame.parity = Some(parity);
        Ok(frame)
    }

    /// Build a frame and compute odd parity for it, for use with
    /// `HandleParity` disabled.
    pub fn with_odd_parity(bits: Vec<u8>, bit_len: usize) -> Result<Self> {
        let parity = odd_parity_bytes(&bits);
        Self::with_parity(bits, bit_len, parity)
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn parity(&self) -> Option<&[u8]> {
        self.parity.as_deref()
    }

    /// Drop the parity component. Used when the device manages parity and
    /// whatever the transport reported carries no meaning for the caller.
    pub fn without_parity(mut self) -> Self {
        self.parity = None;
        self
    }

    pub fn into_parts(self) -> (Vec<u8>, usize, Option<Vec<u8>>) {
        (self.bits, self.bit_len, self.parity)
    }
}
