// nfcdrv/src/transport/traits.rs

use crate::device::{ConfigOption, DeviceDescriptor, DeviceSpec};
use crate::protocol::BitFrame;
use crate::types::Modulation;
use crate::Result;

/// Opens readers and enumerates them. One backend per driver family
/// (USB, UART, PC/SC, ...); the core never sees transport details.
pub trait Backend {
    /// Open the reader named by `spec`, or the first one that answers.
    /// Returns `Error::NoDeviceFound` when nothing responds.
    fn open(&mut self, spec: Option<&DeviceSpec>) -> Result<Box<dyn Transport>>;

    /// Scan for readers, returning at most `max` of them.
    fn list_devices(&mut self, max: usize) -> Result<Vec<DeviceDescriptor>>;
}

/// Capability surface of one open reader. All calls block until the
/// hardware answers; there is no deadline at this layer.
///
/// Exchange failures are reported as `Err` (normally
/// `Error::ExchangeFailed`) and are never retried by the caller.
pub trait Transport {
    /// Human-readable reader name
    fn name(&self) -> &str;

    /// Whether this reader generation understands `option`. Defaults to
    /// the full option set.
    fn supports_option(&self, _option: ConfigOption) -> bool {
        true
    }

    /// Apply an option. `Ok(false)` means the reader refused it.
    fn set_option(&mut self, option: ConfigOption, enable: bool) -> Result<bool>;

    /// Enter initiator (reader) mode.
    fn initiator_init(&mut self) -> Result<bool>;

    /// Enter target (card emulation) mode.
    fn target_init(&mut self) -> Result<bool>;

    /// Select one passive target. Returns the reader's native record for
    /// the target, or `None` when nothing answered.
    fn select_passive_target(
        &mut self,
        modulation: Modulation,
        init_data: &[u8],
    ) -> Result<Option<Vec<u8>>>;

    /// Scan for up to `max` passive targets, returning their native records.
    fn list_passive_targets(&mut self, modulation: Modulation, max: usize)
    -> Result<Vec<Vec<u8>>>;

    /// Release the selected target. `Ok(false)` if nothing was selected.
    fn deselect_target(&mut self) -> Result<bool>;

    fn transceive_bits(&mut self, frame: &BitFrame) -> Result<BitFrame>;

    fn transceive_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>>;

    fn receive_bits(&mut self) -> Result<BitFrame>;

    fn receive_bytes(&mut self) -> Result<Vec<u8>>;

    fn send_bits(&mut self, frame: &BitFrame) -> Result<bool>;

    fn send_bytes(&mut self, data: &[u8]) -> Result<bool>;

    /// Release the underlying resource. Called exactly once per open.
    fn close(&mut self) -> Result<()>;
}
