// nfcdrv/src/constants.rs
//! Protocol constants and fixed bounds shared across the crate

/// Upper bound on targets returned by a single passive-target scan
pub const MAX_TARGET_COUNT: usize = 16;

/// Upper bound on devices returned by a single device scan
pub const MAX_DEVICE_COUNT: usize = 16;

/// ISO14443A UID buffer size (triple-size UID)
pub const MAX_UID_LEN: usize = 10;

/// ISO14443A ATS buffer size
pub const MAX_ATS_LEN: usize = 254;

/// FeliCa ID / PAD sizes
pub const FELICA_ID_LEN: usize = 8;
pub const FELICA_PAD_LEN: usize = 8;

/// ISO14443B ATQB and INF buffer sizes
pub const ATQB_LEN: usize = 12;
pub const ISO14443B_MAX_INF_LEN: usize = 64;

/// MIFARE Classic sizes
pub const MIFARE_KEY_LEN: usize = 6;
pub const MIFARE_AUTH_UID_LEN: usize = 4;
pub const MIFARE_BLOCK_LEN: usize = 16;

/// Highest addressable MIFARE block (the block number is a single byte)
pub const MIFARE_MAX_BLOCK: i64 = 255;

/// 4-bit NAK codes returned by a MIFARE Classic tag
pub const MIFARE_NAK_CODES: [u8; 4] = [0x00, 0x01, 0x04, 0x05];
