// nfcdrv/src/session/target.rs

use crate::device::DeviceHandle;
use crate::protocol::BitFrame;
use crate::utils::{bits_to_hex, bytes_to_hex_spaced};
use crate::{Error, Result};

/// Card-emulation session: the reader waits for an external initiator.
pub struct TargetSession<'a> {
    device: &'a mut DeviceHandle,
}

impl<'a> TargetSession<'a> {
    pub fn new(device: &'a mut DeviceHandle) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &DeviceHandle {
        self.device
    }

    /// Enter target mode. `Ok(false)` on a disconnected handle.
    pub fn init(&mut self) -> Result<bool> {
        if !self.device.is_connected() {
            return Ok(false);
        }
        self.device.transport_mut()?.target_init()
    }

    /// Wait for a bit frame from the initiator. Parity is stripped when the
    /// reader handles it.
    pub fn receive_bits(&mut self) -> Result<BitFrame> {
        let handle_parity = self.device.handle_parity().ok_or(Error::NotConnected)?;
        let rx = self.device.transport_mut()?.receive_bits()?;
        log::debug!("RX bits {}", bits_to_hex(rx.bits(), rx.bit_len()));
        Ok(super::suppress_parity(rx, handle_parity))
    }

    pub fn receive_bytes(&mut self) -> Result<Vec<u8>> {
        let rx = self.device.transport_mut()?.receive_bytes()?;
        log::debug!("RX {}", bytes_to_hex_spaced(&rx));
        Ok(rx)
    }

    pub fn send_bits(&mut self, frame: &BitFrame) -> Result<bool> {
        let transport = self.device.transport_mut()?;
        log::debug!("TX bits {}", bits_to_hex(frame.bits(), frame.bit_len()));
        transport.send_bits(frame)
    }

    pub fn send_bytes(&mut self, data: &[u8]) -> Result<bool> {
        let transport = self.device.transport_mut()?;
        log::debug!("TX {}", bytes_to_hex_spaced(data));
        transport.send_bytes(data)
    }
}
