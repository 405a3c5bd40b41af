// nfcdrv/src/protocol/target/iso14443b.rs

use crate::constants::{ATQB_LEN, ISO14443B_MAX_INF_LEN};
use crate::protocol::parser::{array_at, byte_at, counted_at, push_counted};
use crate::types::Atqb;
use crate::Result;

/// atqb[12] id[4] param1..param4[4] cid[1] inf_len(u32) inf[64]
pub const RECORD_LEN: usize = ATQB_LEN + 4 + 4 + 1 + 4 + ISO14443B_MAX_INF_LEN;

const INF_OFFSET: usize = ATQB_LEN + 4 + 4 + 1;

/// Metadata of a selected ISO14443B target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iso14443bInfo {
    pub atqb: Atqb,
    pub id: [u8; 4],
    /// ATTRIB parameters 1 to 4
    pub params: [u8; 4],
    pub cid: u8,
    pub inf: Vec<u8>,
}

impl Iso14443bInfo {
    pub fn decode(record: &[u8]) -> Result<Self> {
        Ok(Self {
            atqb: Atqb::from_bytes(array_at::<ATQB_LEN>(record, 0)?),
            id: array_at::<4>(record, ATQB_LEN)?,
            params: array_at::<4>(record, ATQB_LEN + 4)?,
            cid: byte_at(record, ATQB_LEN + 8)?,
            inf: counted_at(record, INF_OFFSET, ISO14443B_MAX_INF_LEN)?.to_vec(),
        })
    }

    pub fn to_record(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(RECORD_LEN);
        out.extend_from_slice(self.atqb.as_bytes());
        out.extend_from_slice(&self.id);
        out.extend_from_slice(&self.params);
        out.push(self.cid);
        push_counted(&mut out, &self.inf, ISO14443B_MAX_INF_LEN);
        out
    }
}
