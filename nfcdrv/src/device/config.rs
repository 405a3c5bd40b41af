// nfcdrv/src/device/config.rs

//! Configuration options and the flag cache mirroring them.

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// Device configuration option. Codes are fixed by the hardware
/// abstraction and must not change.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigOption {
    #[display(fmt = "HANDLE_CRC")]
    HandleCrc = 0x00,
    #[display(fmt = "HANDLE_PARITY")]
    HandleParity = 0x01,
    #[display(fmt = "ACTIVATE_FIELD")]
    ActivateField = 0x10,
    #[display(fmt = "ACTIVATE_CRYPTO1")]
    ActivateCrypto1 = 0x11,
    #[display(fmt = "INFINITE_SELECT")]
    InfiniteSelect = 0x20,
    #[display(fmt = "ACCEPT_INVALID_FRAMES")]
    AcceptInvalidFrames = 0x30,
    #[display(fmt = "ACCEPT_MULTIPLE_FRAMES")]
    AcceptMultipleFrames = 0x31,
    #[display(fmt = "AUTO_ISO14443_4")]
    AutoIso14443_4 = 0x40,
    #[display(fmt = "EASY_FRAMING")]
    EasyFraming = 0x41,
    #[display(fmt = "FORCE_ISO14443_A")]
    ForceIso14443a = 0x42,
}

impl ConfigOption {
    pub const ALL: [ConfigOption; 10] = [
        ConfigOption::HandleCrc,
        ConfigOption::HandleParity,
        ConfigOption::ActivateField,
        ConfigOption::ActivateCrypto1,
        ConfigOption::InfiniteSelect,
        ConfigOption::AcceptInvalidFrames,
        ConfigOption::AcceptMultipleFrames,
        ConfigOption::AutoIso14443_4,
        ConfigOption::EasyFraming,
        ConfigOption::ForceIso14443a,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ConfigOption {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|opt| opt.code() == code)
            .ok_or(Error::InvalidConfigOption(code))
    }
}

/// Local cache of the boolean device options. Every [`ConfigOption`] maps
/// to exactly one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceFlags {
    pub handle_crc: bool,
    pub handle_parity: bool,
    pub activate_field: bool,
    pub activate_crypto1: bool,
    pub infinite_select: bool,
    pub accept_invalid_frames: bool,
    pub accept_multiple_frames: bool,
    pub auto_iso14443_4: bool,
    pub easy_framing: bool,
    pub force_iso14443a: bool,
}

impl Default for DeviceFlags {
    /// State of a freshly opened reader: CRC and parity generated by the
    /// chip, field on, ISO14443-4 and framing handled automatically.
    fn default() -> Self {
        Self {
            handle_crc: true,
            handle_parity: true,
            activate_field: true,
            activate_crypto1: false,
            infinite_select: false,
            accept_invalid_frames: false,
            accept_multiple_frames: false,
            auto_iso14443_4: true,
            easy_framing: true,
            force_iso14443a: false,
        }
    }
}

impl DeviceFlags {
    pub fn get(&self, option: ConfigOption) -> bool {
        match option {
            ConfigOption::HandleCrc => self.handle_crc,
            ConfigOption::HandleParity => self.handle_parity,
            ConfigOption::ActivateField => self.activate_field,
            ConfigOption::ActivateCrypto1 => self.activate_crypto1,
            ConfigOption::InfiniteSelect => self.infinite_select,
            ConfigOption::AcceptInvalidFrames => self.accept_invalid_frames,
            ConfigOption::AcceptMultipleFrames => self.accept_multiple_frames,
            ConfigOption::AutoIso14443_4 => self.auto_iso14443_4,
            ConfigOption::EasyFraming => self.easy_framing,
            ConfigOption::ForceIso14443a => self.force_iso14443a,
        }
    }

    pub fn set(&mut self, option: ConfigOption, value: bool) {
        let slot = match option {
            ConfigOption::HandleCrc => &mut self.handle_crc,
            ConfigOption::HandleParity => &mut self.handle_parity,
            ConfigOption::ActivateField => &mut self.activate_field,
            ConfigOption::ActivateCrypto1 => &mut self.activate_crypto1,
            ConfigOption::InfiniteSelect => &mut self.infinite_select,
            ConfigOption::AcceptInvalidFrames => &mut self.accept_invalid_frames,
            ConfigOption::AcceptMultipleFrames => &mut self.accept_multiple_frames,
            ConfigOption::AutoIso14443_4 => &mut self.auto_iso14443_4,
            ConfigOption::EasyFraming => &mut self.easy_framing,
            ConfigOption::ForceIso14443a => &mut self.force_iso14443a,
        };
        *slot = value;
    }
}
