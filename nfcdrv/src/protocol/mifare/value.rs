// nfcdrv/src/protocol/mifare/value.rs

use crate::types::BlockData;
use crate::{Error, Result};

/// A MIFARE Classic value block: a signed 32-bit value stored three times
/// (plain, inverted, plain) followed by an address byte stored four times
/// (plain, inverted, plain, inverted). Writing one with WRITE formats a
/// block for INCREMENT, DECREMENT and STORE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueBlock {
    pub value: i32,
    pub address: u8,
}

impl ValueBlock {
    pub fn new(value: i32, address: u8) -> Self {
        Self { value, address }
    }

    pub fn encode(&self) -> BlockData {
        let v = self.value.to_le_bytes();
        let inv = (!self.value).to_le_bytes();
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&v);
        out[4..8].copy_from_slice(&inv);
        out[8..12].copy_from_slice(&v);
        out[12] = self.address;
        out[13] = !self.address;
        out[14] = self.address;
        out[15] = !self.address;
        BlockData::from_bytes(out)
    }

    /// Decode and verify the redundant copies.
    pub fn decode(block: &BlockData) -> Result<Self> {
        let b = block.as_bytes();
        let word = |i: usize| i32::from_le_bytes([b[i], b[i + 1], b[i + 2], b[i + 3]]);

        let value = word(0);
        if word(4) != !value || word(8) != value {
            return Err(Error::InvalidValueBlock);
        }
        let address = b[12];
        if b[13] != !address || b[14] != address || b[15] != !address {
            return Err(Error::InvalidValueBlock);
        }
        Ok(Self { value, address })
    }
}
