//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::{MAX_ATS_LEN, MAX_UID_LEN};
use crate::device::{DeviceHandle, DeviceSpec};
use crate::protocol::parser::push_counted;
use crate::transport::mock::{MockBackend, MockTransport};
use crate::Result;

/// Connection string the helpers register their mock reader under.
pub const MOCK_CONNSTRING: &str = "mock:0";

/// Connect a handle to a fresh mock reader. The returned MockTransport
/// shares state with the one inside the handle, for queueing replies and
/// inspecting calls.
#[doc(hidden)]
pub fn connected_mock_handle() -> Result<(DeviceHandle, MockTransport)> {
    let mock = MockTransport::new("mock PN533");
    let backend = MockBackend::new().with_device(MOCK_CONNSTRING, mock.clone());
    let handle = DeviceHandle::open(Box::new(backend), Some(&DeviceSpec::new(MOCK_CONNSTRING)))?;
    Ok((handle, mock))
}

/// Native ISO14443A record for a MIFARE-style target (ATQA 00 44, SAK 08)
/// with the given UID and ATS. Over-long fields are cut to their capacity.
#[doc(hidden)]
pub fn iso14443a_record(uid: &[u8], ats: &[u8]) -> Vec<u8> {
    let mut record = vec![0x00, 0x44, 0x08];
    push_counted(&mut record, uid, MAX_UID_LEN);
    push_counted(&mut record, ats, MAX_ATS_LEN);
    record
}
