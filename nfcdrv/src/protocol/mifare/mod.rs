// nfcdrv/src/protocol/mifare/mod.rs

//! MIFARE Classic command framing.
//!
//! Frames are `[command, block]` followed by the payload of the command's
//! parameter shape. Payloads are only appended when the caller supplied
//! them: an authentication issued without key and UID goes out as the bare
//! two-byte frame.

pub mod value;

pub use value::ValueBlock;

use crate::constants::{MIFARE_AUTH_UID_LEN, MIFARE_MAX_BLOCK, MIFARE_NAK_CODES};
use crate::types::{BlockData, MifareKey};
use crate::{Error, Result};
use derive_more::Display;
use std::convert::TryFrom;

/// MIFARE Classic command set.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MifareCommand {
    #[display(fmt = "AUTH_A")]
    AuthA = 0x60,
    #[display(fmt = "AUTH_B")]
    AuthB = 0x61,
    #[display(fmt = "READ")]
    Read = 0x30,
    #[display(fmt = "WRITE")]
    Write = 0xA0,
    #[display(fmt = "TRANSFER")]
    Transfer = 0xB0,
    #[display(fmt = "DECREMENT")]
    Decrement = 0xC0,
    #[display(fmt = "INCREMENT")]
    Increment = 0xC1,
    #[display(fmt = "STORE")]
    Store = 0xC2,
}

/// The parameter layout a command carries after `[command, block]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterShape {
    /// key[6] ++ uid[4]
    Auth,
    /// data[16]
    Data,
    /// value[4], little-endian signed
    Value,
}

impl MifareCommand {
    pub const ALL: [MifareCommand; 8] = [
        MifareCommand::AuthA,
        MifareCommand::AuthB,
        MifareCommand::Read,
        MifareCommand::Write,
        MifareCommand::Transfer,
        MifareCommand::Decrement,
        MifareCommand::Increment,
        MifareCommand::Store,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn shape(self) -> ParameterShape {
        match self {
            Self::AuthA | Self::AuthB => ParameterShape::Auth,
            Self::Read | Self::Write => ParameterShape::Data,
            Self::Transfer | Self::Decrement | Self::Increment | Self::Store => {
                ParameterShape::Value
            }
        }
    }
}

impl TryFrom<u8> for MifareCommand {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0x60 => Ok(Self::AuthA),
            0x61 => Ok(Self::AuthB),
            0x30 => Ok(Self::Read),
            0xA0 => Ok(Self::Write),
            0xB0 => Ok(Self::Transfer),
            0xC0 => Ok(Self::Decrement),
            0xC1 => Ok(Self::Increment),
            0xC2 => Ok(Self::Store),
            other => Err(Error::UnsupportedCommand(other)),
        }
    }
}

/// Optional parameters for a MIFARE command. Only the fields matching the
/// command's [`ParameterShape`] are encoded; the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MifareArgs {
    key: Option<MifareKey>,
    uid: Option<[u8; MIFARE_AUTH_UID_LEN]>,
    data: Option<BlockData>,
    value: Option<i32>,
}

impl MifareArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_auth(key: MifareKey, uid: [u8; MIFARE_AUTH_UID_LEN]) -> Self {
        Self::new().key(key).uid(uid)
    }

    pub fn for_data(data: BlockData) -> Self {
        Self::new().data(data)
    }

    pub fn for_value(value: i32) -> Self {
        Self::new().value(value)
    }

    pub fn key(mut self, key: MifareKey) -> Self {
        self.key = Some(key);
        self
    }

    pub fn uid(mut self, uid: [u8; MIFARE_AUTH_UID_LEN]) -> Self {
        self.uid = Some(uid);
        self
    }

    pub fn data(mut self, data: BlockData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }
}

/// Check a block number fits the single address byte.
pub fn validate_block(block: i64) -> Result<u8> {
    if !(0..=MIFARE_MAX_BLOCK).contains(&block) {
        return Err(Error::InvalidBlockNumber(block));
    }
    Ok(block as u8)
}

/// Encode a frame for an already-validated command and block.
pub fn encode_frame(command: MifareCommand, block: u8, args: &MifareArgs) -> Vec<u8> {
    let mut frame = Vec::with_capacity(18);
    frame.push(command.code());
    frame.push(block);

    match command.shape() {
        ParameterShape::Auth => {
            // Key and UID travel together or not at all.
            if let (Some(key), Some(uid)) = (args.key, args.uid) {
                frame.extend_from_slice(key.as_bytes());
                frame.extend_from_slice(&uid);
            }
        }
        ParameterShape::Data => {
            if let Some(data) = args.data {
                frame.extend_from_slice(data.as_bytes());
            }
        }
        ParameterShape::Value => {
            if let Some(value) = args.value {
                frame.extend_from_slice(&value.to_le_bytes());
            }
        }
    }

    frame
}

/// Validate a raw command code and block number, then encode. The command
/// is checked first; nothing is encoded unless both are valid.
pub fn encode(code: u8, block: i64, args: &MifareArgs) -> Result<Vec<u8>> {
    let command = MifareCommand::try_from(code)?;
    let block = validate_block(block)?;
    Ok(encode_frame(command, block, args))
}

/// Outcome of a MIFARE exchange that reached the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MifareReply {
    /// READ returned a full 16-byte block
    Block(BlockData),
    /// READ returned a payload of some other length, passed through as is
    Data(Vec<u8>),
    /// Non-read command accepted
    Ack,
    /// Tag answered with a 4-bit NAK
    Nak(u8),
}

impl MifareReply {
    pub fn is_success(&self) -> bool {
        !matches!(self, MifareReply::Nak(_))
    }

    /// Payload for READ replies.
    pub fn data(&self) -> Option<&[u8]> {
        match self {
            MifareReply::Block(block) => Some(block.as_bytes()),
            MifareReply::Data(data) => Some(data),
            _ => None,
        }
    }
}

/// Classify the bytes a tag returned for `command`.
pub fn decode_reply(command: MifareCommand, response: Vec<u8>) -> MifareReply {
    if let [code] = response.as_slice() {
        if MIFARE_NAK_CODES.contains(code) {
            return MifareReply::Nak(*code);
        }
    }

    if command != MifareCommand::Read {
        return MifareReply::Ack;
    }

    match BlockData::try_from(&response[..]) {
        Ok(block) => MifareReply::Block(block),
        Err(_) => MifareReply::Data(response),
    }
}

/// Sector holding `block` on a MIFARE Classic 1K/4K layout: 32 sectors of
/// 4 blocks followed by 8 sectors of 16 blocks.
pub fn sector_of(block: u8) -> u8 {
    if block < 128 {
        block / 4
    } else {
        32 + (block - 128) / 16
    }
}

/// First block of `sector`. Sectors past 39 do not exist.
pub fn first_block_of(sector: u8) -> Option<u8> {
    match sector {
        0..=31 => Some(sector * 4),
        32..=39 => Some(128 + (sector - 32) * 16),
        _ => None,
    }
}

/// True for the sector trailer (keys and access bits) of its sector.
pub fn is_trailer_block(block: u8) -> bool {
    if block < 128 {
        block % 4 == 3
    } else {
        block % 16 == 15
    }
}
