// nfcdrv/src/prelude.rs

pub use crate::device::{ConfigOption, DeviceBuilder, DeviceDescriptor, DeviceHandle, DeviceSpec};
pub use crate::protocol::{
    BitFrame, MifareArgs, MifareCommand, MifareReply, Selection, TargetDescriptor, ValueBlock,
};
pub use crate::session::{InitiatorSession, TargetSession};
pub use crate::transport::{Backend, Transport};
pub use crate::{
    Atqa, Ats, BaudRate, BlockData, Error, Idm, MifareKey, Modulation, ModulationType, Pmm,
    Result, SystemCode, Uid,
};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
