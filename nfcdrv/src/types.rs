// nfcdrv/src/types.rs

use crate::constants::{
    ATQB_LEN, MAX_ATS_LEN, MAX_UID_LEN, MIFARE_AUTH_UID_LEN, MIFARE_BLOCK_LEN, MIFARE_KEY_LEN,
};
use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// Modulation family. Codes are the values the hardware abstraction expects.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModulationType {
    #[display(fmt = "ISO14443A")]
    Iso14443a = 0x0,
    #[display(fmt = "ISO14443B")]
    Iso14443b = 0x1,
    #[display(fmt = "FeliCa")]
    Felica = 0x2,
    #[display(fmt = "Jewel")]
    Jewel = 0x3,
    #[display(fmt = "DEP")]
    Dep = 0x4,
}

impl ModulationType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x0 => Some(Self::Iso14443a),
            0x1 => Some(Self::Iso14443b),
            0x2 => Some(Self::Felica),
            0x3 => Some(Self::Jewel),
            0x4 => Some(Self::Dep),
            _ => None,
        }
    }
}

/// Baud rate in kbps.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaudRate {
    #[default]
    #[display(fmt = "undefined")]
    Undefined = 0x0,
    #[display(fmt = "106 kbps")]
    B106 = 0x01,
    #[display(fmt = "212 kbps")]
    B212 = 0x02,
    #[display(fmt = "424 kbps")]
    B424 = 0x03,
    #[display(fmt = "847 kbps")]
    B847 = 0x04,
}

impl BaudRate {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x0 => Some(Self::Undefined),
            0x1 => Some(Self::B106),
            0x2 => Some(Self::B212),
            0x3 => Some(Self::B424),
            0x4 => Some(Self::B847),
            _ => None,
        }
    }
}

/// A concrete modulation used to select a target: family plus baud rate.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modulation {
    #[display(fmt = "ISO14443A-106")]
    Iso14443a106,
    #[display(fmt = "ISO14443B-106")]
    Iso14443b106,
    #[display(fmt = "FeliCa-212")]
    Felica212,
    #[display(fmt = "FeliCa-424")]
    Felica424,
    #[display(fmt = "Jewel-106")]
    Jewel106,
    #[display(fmt = "Active-DEP")]
    ActiveDep,
    #[display(fmt = "Passive-DEP")]
    PassiveDep,
}

impl Modulation {
    pub const ALL: [Modulation; 7] = [
        Modulation::Iso14443a106,
        Modulation::Iso14443b106,
        Modulation::Felica212,
        Modulation::Felica424,
        Modulation::Jewel106,
        Modulation::ActiveDep,
        Modulation::PassiveDep,
    ];

    pub fn modulation_type(self) -> ModulationType {
        match self {
            Self::Iso14443a106 => ModulationType::Iso14443a,
            Self::Iso14443b106 => ModulationType::Iso14443b,
            Self::Felica212 | Self::Felica424 => ModulationType::Felica,
            Self::Jewel106 => ModulationType::Jewel,
            Self::ActiveDep | Self::PassiveDep => ModulationType::Dep,
        }
    }

    /// DEP runs at whatever rate the peers negotiate, so it reports
    /// `BaudRate::Undefined`.
    pub fn baud_rate(self) -> BaudRate {
        match self {
            Self::Iso14443a106 | Self::Iso14443b106 | Self::Jewel106 => BaudRate::B106,
            Self::Felica212 => BaudRate::B212,
            Self::Felica424 => BaudRate::B424,
            Self::ActiveDep | Self::PassiveDep => BaudRate::Undefined,
        }
    }

    /// Resolve a (family, baud rate) pair. The DEP family has a single
    /// code, so it resolves to passive DEP regardless of baud rate.
    pub fn from_parts(modulation_type: ModulationType, baud_rate: BaudRate) -> Option<Self> {
        match (modulation_type, baud_rate) {
            (ModulationType::Iso14443a, BaudRate::B106) => Some(Self::Iso14443a106),
            (ModulationType::Iso14443b, BaudRate::B106) => Some(Self::Iso14443b106),
            (ModulationType::Felica, BaudRate::B212) => Some(Self::Felica212),
            (ModulationType::Felica, BaudRate::B424) => Some(Self::Felica424),
            (ModulationType::Jewel, BaudRate::B106) => Some(Self::Jewel106),
            (ModulationType::Dep, _) => Some(Self::PassiveDep),
            _ => None,
        }
    }
}

/// ISO14443A UID (single, double or triple size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; MAX_UID_LEN],
    len: u8,
}

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The four UID bytes a MIFARE Classic authentication frame carries:
    /// the last four bytes of the UID.
    pub fn mifare_auth_uid(&self) -> Option<[u8; MIFARE_AUTH_UID_LEN]> {
        let bytes = self.as_bytes();
        if bytes.len() < MIFARE_AUTH_UID_LEN {
            return None;
        }
        let mut out = [0u8; MIFARE_AUTH_UID_LEN];
        out.copy_from_slice(&bytes[bytes.len() - MIFARE_AUTH_UID_LEN..]);
        Some(out)
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

/// ISO14443A answer-to-select.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ats(Vec<u8>);

impl Ats {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<&[u8]> for Ats {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > MAX_ATS_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_ATS_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// ISO14443A answer-to-request (SENS_RES), as transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }
}

/// ISO14443B answer-to-request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atqb([u8; ATQB_LEN]);

impl Atqb {
    pub fn from_bytes(bytes: [u8; ATQB_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ATQB_LEN] {
        &self.0
    }

    /// Pseudo-unique PICC identifier carried in ATQB bytes 1..5
    pub fn pupi(&self) -> [u8; 4] {
        [self.0[1], self.0[2], self.0[3], self.0[4]]
    }
}

/// IDm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idm([u8; 8]);

impl Idm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// PMm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pmm([u8; 8]);

impl Pmm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

/// FeliCa system code. Stored as transmitted (big-endian on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemCode(u16);

impl SystemCode {
    pub const ANY: Self = Self(0xffff);
    pub const COMMON: Self = Self(0xfe00);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

/// MIFARE Classic sector key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MifareKey([u8; MIFARE_KEY_LEN]);

impl MifareKey {
    /// Factory transport key
    pub const DEFAULT: Self = Self([0xff; MIFARE_KEY_LEN]);

    pub const fn new(bytes: [u8; MIFARE_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MIFARE_KEY_LEN] {
        &self.0
    }
}

impl Default for MifareKey {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; MIFARE_BLOCK_LEN]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; MIFARE_BLOCK_LEN] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: MIFARE_BLOCK_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}
