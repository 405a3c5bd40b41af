// nfcdrv/src/session/initiator.rs

use crate::constants::{MAX_TARGET_COUNT, MIFARE_BLOCK_LEN};
use crate::device::DeviceHandle;
use crate::protocol::mifare::{self, MifareArgs, MifareCommand, MifareReply, ValueBlock};
use crate::protocol::target::{self, Selection};
use crate::protocol::BitFrame;
use crate::types::{BaudRate, BlockData, MifareKey, Modulation, ModulationType};
use crate::utils::{bits_to_hex, bytes_to_hex_spaced};
use crate::{Error, Result};

/// Reader-role session over a borrowed [`DeviceHandle`].
pub struct InitiatorSession<'a> {
    device: &'a mut DeviceHandle,
    selected: Option<Modulation>,
}

impl<'a> InitiatorSession<'a> {
    pub fn new(device: &'a mut DeviceHandle) -> Self {
        Self {
            device,
            selected: None,
        }
    }

    pub fn device(&self) -> &DeviceHandle {
        self.device
    }

    /// Put the reader in initiator mode. `Ok(false)` on a disconnected
    /// handle; nothing is sent in that case.
    pub fn init(&mut self) -> Result<bool> {
        if !self.device.is_connected() {
            return Ok(false);
        }
        let ok = self.device.transport_mut()?.initiator_init()?;
        self.selected = None;
        Ok(ok)
    }

    /// Modulation of the currently selected target, if any.
    pub fn selected(&self) -> Option<Modulation> {
        self.selected
    }

    /// Select one passive target.
    ///
    /// A reader that reports no target, or whose exchange fails, yields
    /// `Selection::NotSelected`. A target that answered but whose record
    /// cannot be decoded yields `Selection::SelectedUndecoded`.
    pub fn select_tag(&mut self, modulation: Modulation, init_data: &[u8]) -> Result<Selection> {
        let transport = self.device.transport_mut()?;
        log::debug!("select {} [{}]", modulation, bytes_to_hex_spaced(init_data));

        let record = match transport.select_passive_target(modulation, init_data) {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(Selection::NotSelected),
            Err(e @ (Error::ExchangeFailed(_) | Error::Timeout)) => {
                log::debug!("select {} failed: {}", modulation, e);
                return Ok(Selection::NotSelected);
            }
            Err(e) => return Err(e),
        };

        self.selected = Some(modulation);
        Ok(target::decode_record(modulation, &record))
    }

    /// Release the selected target. `Ok(false)` when nothing is selected,
    /// without contacting the reader.
    pub fn deselect_tag(&mut self) -> Result<bool> {
        if self.selected.is_none() {
            return Ok(false);
        }
        let ok = self.device.transport_mut()?.deselect_target()?;
        self.selected = None;
        Ok(ok)
    }

    /// Scan for passive targets. At most [`MAX_TARGET_COUNT`] entries are
    /// returned, none of them `NotSelected`. Each call rescans.
    pub fn list_passive_targets(
        &mut self,
        modulation_type: ModulationType,
        baud_rate: BaudRate,
    ) -> Result<Vec<Selection>> {
        let modulation = Modulation::from_parts(modulation_type, baud_rate).ok_or_else(|| {
            Error::UnsupportedOperation(format!("{} at {}", modulation_type, baud_rate))
        })?;

        let records = self
            .device
            .transport_mut()?
            .list_passive_targets(modulation, MAX_TARGET_COUNT)?;
        log::debug!("{} {} target(s) listed", records.len(), modulation);

        Ok(records
            .iter()
            .take(MAX_TARGET_COUNT)
            .map(|record| target::decode_record(modulation, record))
            .collect())
    }

    /// Raw bit-level exchange. When the reader manages parity itself the
    /// returned frame carries no parity, whatever the transport produced.
    pub fn transceive_bits(&mut self, frame: &BitFrame) -> Result<BitFrame> {
        let handle_parity = self.device.handle_parity().ok_or(Error::NotConnected)?;
        let transport = self.device.transport_mut()?;

        log::debug!("TX bits {}", bits_to_hex(frame.bits(), frame.bit_len()));
        let rx = transport.transceive_bits(frame)?;
        log::debug!("RX bits {}", bits_to_hex(rx.bits(), rx.bit_len()));

        Ok(super::suppress_parity(rx, handle_parity))
    }

    /// Byte-level exchange. Failures propagate unchanged.
    pub fn transceive_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let transport = self.device.transport_mut()?;
        log::debug!("TX {}", bytes_to_hex_spaced(data));
        let rx = transport.transceive_bytes(data)?;
        log::debug!("RX {}", bytes_to_hex_spaced(&rx));
        Ok(rx)
    }

    /// Frame and send a MIFARE Classic command.
    ///
    /// `block` is validated before anything is sent. Parameters in `args`
    /// that the command's shape does not use are ignored, and missing ones
    /// are simply not appended.
    pub fn mifare_cmd(
        &mut self,
        command: MifareCommand,
        block: i64,
        args: &MifareArgs,
    ) -> Result<MifareReply> {
        let block = mifare::validate_block(block)?;
        let frame = mifare::encode_frame(command, block, args);
        log::debug!("{} block {}", command, block);
        let response = self.transceive_bytes(&frame)?;
        Ok(mifare::decode_reply(command, response))
    }

    /// [`mifare_cmd`](Self::mifare_cmd) from a raw command code. Unknown
    /// codes fail with `Error::UnsupportedCommand` before anything is sent.
    pub fn mifare_cmd_code(&mut self, code: u8, block: i64, args: &MifareArgs) -> Result<MifareReply> {
        let command = MifareCommand::try_from(code)?;
        self.mifare_cmd(command, block, args)
    }

    /// Authenticate `block`'s sector with key A (`use_key_b == false`) or B.
    pub fn mifare_authenticate(
        &mut self,
        block: i64,
        key: MifareKey,
        uid: [u8; 4],
        use_key_b: bool,
    ) -> Result<bool> {
        let command = if use_key_b {
            MifareCommand::AuthB
        } else {
            MifareCommand::AuthA
        };
        let reply = self.mifare_cmd(command, block, &MifareArgs::for_auth(key, uid))?;
        Ok(reply.is_success())
    }

    /// Read one 16-byte block.
    pub fn mifare_read_block(&mut self, block: i64) -> Result<BlockData> {
        match self.mifare_cmd(MifareCommand::Read, block, &MifareArgs::new())? {
            MifareReply::Block(data) => Ok(data),
            MifareReply::Data(data) => Err(Error::InvalidLength {
                expected: MIFARE_BLOCK_LEN,
                actual: data.len(),
            }),
            MifareReply::Nak(code) => Err(Error::ExchangeFailed(format!(
                "READ block {} NAK {:#x}",
                block, code
            ))),
            MifareReply::Ack => Err(Error::InvalidLength {
                expected: MIFARE_BLOCK_LEN,
                actual: 0,
            }),
        }
    }

    pub fn mifare_write_block(&mut self, block: i64, data: BlockData) -> Result<bool> {
        let reply = self.mifare_cmd(MifareCommand::Write, block, &MifareArgs::for_data(data))?;
        Ok(reply.is_success())
    }

    /// Read a block and decode it as a value block.
    pub fn mifare_read_value(&mut self, block: i64) -> Result<ValueBlock> {
        let data = self.mifare_read_block(block)?;
        ValueBlock::decode(&data)
    }

    /// Format `block` as a value block holding `value`, with the block's
    /// own number as the address byte.
    pub fn mifare_write_value(&mut self, block: i64, value: i32) -> Result<bool> {
        let address = mifare::validate_block(block)?;
        self.mifare_write_block(block, ValueBlock::new(value, address).encode())
    }
}
