// nfcdrv/src/session/mod.rs

//! Role sessions. Both borrow a connected [`DeviceHandle`] mutably, so a
//! handle is driven by at most one session at a time.
//!
//! [`DeviceHandle`]: crate::device::DeviceHandle

pub mod initiator;
pub mod target;

pub use initiator::InitiatorSession;
pub use target::TargetSession;

use crate::protocol::BitFrame;

/// Drop parity from a received frame when the reader already checked it.
fn suppress_parity(frame: BitFrame, handle_parity: bool) -> BitFrame {
    if handle_parity {
        frame.without_parity()
    } else {
        frame
    }
}
