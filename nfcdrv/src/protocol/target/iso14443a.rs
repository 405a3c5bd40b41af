// nfcdrv/src/protocol/target/iso14443a.rs

use crate::constants::{MAX_ATS_LEN, MAX_UID_LEN};
use crate::protocol::parser::{array_at, byte_at, counted_at, push_counted};
use crate::types::{Atqa, Ats, Uid};
use crate::Result;

/// atqa[2] sak[1] uidlen(u32) uid[10] atslen(u32) ats[254]
pub const RECORD_LEN: usize = 2 + 1 + 4 + MAX_UID_LEN + 4 + MAX_ATS_LEN;

const UID_OFFSET: usize = 3;
const ATS_OFFSET: usize = UID_OFFSET + 4 + MAX_UID_LEN;

/// Metadata of a selected ISO14443A target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iso14443aInfo {
    pub atqa: Atqa,
    pub sak: u8,
    pub uid: Uid,
    pub ats: Ats,
}

impl Iso14443aInfo {
    /// SAK bit 6: the target speaks ISO14443-4.
    pub fn is_iso14443_4(&self) -> bool {
        self.sak & 0x20 != 0
    }

    /// SAK bit 3 with bit 2 clear: a MIFARE Classic style target.
    pub fn is_mifare_classic(&self) -> bool {
        self.sak & 0x08 != 0 && self.sak & 0x04 == 0
    }

    pub fn decode(record: &[u8]) -> Result<Self> {
        let atqa = Atqa::from_bytes(array_at::<2>(record, 0)?);
        let sak = byte_at(record, 2)?;
        let uid = Uid::try_from(counted_at(record, UID_OFFSET, MAX_UID_LEN)?)?;
        let ats = Ats::try_from(counted_at(record, ATS_OFFSET, MAX_ATS_LEN)?)?;
        Ok(Self { atqa, sak, uid, ats })
    }

    pub fn to_record(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(RECORD_LEN);
        out.extend_from_slice(self.atqa.as_bytes());
        out.push(self.sak);
        push_counted(&mut out, self.uid.as_bytes(), MAX_UID_LEN);
        push_counted(&mut out, self.ats.as_bytes(), MAX_ATS_LEN);
        out
    }
}
