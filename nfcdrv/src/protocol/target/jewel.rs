// nfcdrv/src/protocol/target/jewel.rs

use crate::protocol::parser::array_at;
use crate::Result;

/// sens_res[2] id[4]
pub const RECORD_LEN: usize = 6;

/// Metadata of a selected Jewel (Topaz) target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JewelInfo {
    pub sens_res: [u8; 2],
    pub id: [u8; 4],
}

impl JewelInfo {
    pub fn decode(record: &[u8]) -> Result<Self> {
        Ok(Self {
            sens_res: array_at::<2>(record, 0)?,
            id: array_at::<4>(record, 2)?,
        })
    }

    pub fn to_record(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(RECORD_LEN);
        out.extend_from_slice(&self.sens_res);
        out.extend_from_slice(&self.id);
        out
    }
}
