// nfcdrv/src/protocol/mod.rs

pub mod bits;
pub mod mifare;
pub mod parser;
pub mod target;

pub use bits::{BitFrame, odd_parity};
pub use mifare::{MifareArgs, MifareCommand, MifareReply, ParameterShape, ValueBlock};
pub use target::{Selection, TargetDescriptor};
