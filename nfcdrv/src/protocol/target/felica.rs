// nfcdrv/src/protocol/target/felica.rs

use crate::constants::{FELICA_ID_LEN, FELICA_PAD_LEN};
use crate::protocol::parser::{array_at, byte_at, le_u32_at};
use crate::types::{Idm, Pmm, SystemCode};
use crate::Result;

/// len(u32) res_code[1] id[8] pad[8] sys_code[2]
pub const RECORD_LEN: usize = 4 + 1 + FELICA_ID_LEN + FELICA_PAD_LEN + 2;

/// Metadata of a selected FeliCa target (polling response).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FelicaInfo {
    /// Length byte of the polling response as reported by the reader
    pub len: u32,
    pub res_code: u8,
    pub idm: Idm,
    pub pmm: Pmm,
    pub system_code: SystemCode,
}

impl FelicaInfo {
    pub fn decode(record: &[u8]) -> Result<Self> {
        Ok(Self {
            len: le_u32_at(record, 0)?,
            res_code: byte_at(record, 4)?,
            idm: Idm::from_bytes(array_at::<FELICA_ID_LEN>(record, 5)?),
            pmm: Pmm::from_bytes(array_at::<FELICA_PAD_LEN>(record, 5 + FELICA_ID_LEN)?),
            system_code: SystemCode::from_be_bytes(array_at::<2>(
                record,
                5 + FELICA_ID_LEN + FELICA_PAD_LEN,
            )?),
        })
    }

    pub fn to_record(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(RECORD_LEN);
        out.extend_from_slice(&self.len.to_le_bytes());
        out.push(self.res_code);
        out.extend_from_slice(self.idm.as_bytes());
        out.extend_from_slice(self.pmm.as_bytes());
        out.extend_from_slice(&self.system_code.to_be_bytes());
        out
    }
}
