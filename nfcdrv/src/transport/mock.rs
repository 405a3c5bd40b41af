// nfcdrv/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::device::{ConfigOption, DeviceDescriptor, DeviceSpec};
use crate::protocol::BitFrame;
use crate::transport::traits::{Backend, Transport};
use crate::types::Modulation;
use crate::{Error, Result};

/// A call the core made into the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    SetOption(ConfigOption, bool),
    InitiatorInit,
    TargetInit,
    SelectPassiveTarget(Modulation, Vec<u8>),
    ListPassiveTargets(Modulation, usize),
    DeselectTarget,
    TransceiveBits(BitFrame),
    TransceiveBytes(Vec<u8>),
    ReceiveBits,
    ReceiveBytes,
    SendBits(BitFrame),
    SendBytes(Vec<u8>),
    Close,
}

/// A queued answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Answer to set_option / init / deselect / send
    Ack(bool),
    /// Answer to select_passive_target
    Target(Option<Vec<u8>>),
    /// Answer to list_passive_targets
    Targets(Vec<Vec<u8>>),
    Bits(BitFrame),
    Bytes(Vec<u8>),
    /// Any call: fail with `Error::ExchangeFailed`
    Fail(String),
}

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<MockCall>,
    replies: VecDeque<MockReply>,
    unsupported: Vec<ConfigOption>,
    opened: usize,
    closed: usize,
}

/// Mock transport for tests. Clones share state, so a test can keep one
/// clone for assertions after handing another to a `DeviceHandle`.
///
/// Control calls (`set_option`, `*_init`, `deselect_target`, `send_*`)
/// consume a queued `Ack`/`Fail` if one is at the front and otherwise
/// acknowledge. Data calls need a queued reply and fail with
/// `Error::Timeout` when the queue is empty.
#[derive(Debug, Clone)]
pub struct MockTransport {
    name: Rc<str>,
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new(name: &str) -> Self {
        Self {
            name: Rc::from(name),
            state: Rc::default(),
        }
    }

    pub fn push_reply(&self, reply: MockReply) {
        self.state.borrow_mut().replies.push_back(reply);
    }

    /// Make `supports_option` report `option` as unknown to this reader.
    pub fn set_unsupported(&self, option: ConfigOption) {
        self.state.borrow_mut().unsupported.push(option);
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.state.borrow().calls.clone()
    }

    /// Calls excluding `Close`: what actually went to the reader.
    pub fn exchanges(&self) -> Vec<MockCall> {
        self.calls()
            .into_iter()
            .filter(|c| *c != MockCall::Close)
            .collect()
    }

    /// Byte frames sent through transceive_bytes / send_bytes, in order.
    pub fn sent_bytes(&self) -> Vec<Vec<u8>> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                MockCall::TransceiveBytes(b) | MockCall::SendBytes(b) => Some(b.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn pending_replies(&self) -> usize {
        self.state.borrow().replies.len()
    }

    pub fn open_count(&self) -> usize {
        self.state.borrow().opened
    }

    pub fn close_count(&self) -> usize {
        self.state.borrow().closed
    }

    fn record(&self, call: MockCall) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_reply(&self, call: MockCall) -> Result<MockReply> {
        self.record(call);
        match self.state.borrow_mut().replies.pop_front() {
            Some(MockReply::Fail(msg)) => Err(Error::ExchangeFailed(msg)),
            Some(reply) => Ok(reply),
            None => Err(Error::Timeout),
        }
    }

    fn control(&self, call: MockCall) -> Result<bool> {
        self.record(call);
        let mut state = self.state.borrow_mut();
        let queued = matches!(
            state.replies.front(),
            Some(MockReply::Ack(_) | MockReply::Fail(_))
        );
        if !queued {
            return Ok(true);
        }
        match state.replies.pop_front() {
            Some(MockReply::Fail(msg)) => Err(Error::ExchangeFailed(msg)),
            Some(MockReply::Ack(ok)) => Ok(ok),
            _ => Ok(true),
        }
    }
}

fn unexpected(reply: MockReply, call: &str) -> Error {
    Error::UnsupportedOperation(format!("mock: {:?} queued for {}", reply, call))
}

impl Transport for MockTransport {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports_option(&self, option: ConfigOption) -> bool {
        !self.state.borrow().unsupported.contains(&option)
    }

    fn set_option(&mut self, option: ConfigOption, enable: bool) -> Result<bool> {
        self.control(MockCall::SetOption(option, enable))
    }

    fn initiator_init(&mut self) -> Result<bool> {
        self.control(MockCall::InitiatorInit)
    }

    fn target_init(&mut self) -> Result<bool> {
        self.control(MockCall::TargetInit)
    }

    fn select_passive_target(
        &mut self,
        modulation: Modulation,
        init_data: &[u8],
    ) -> Result<Option<Vec<u8>>> {
        match self.next_reply(MockCall::SelectPassiveTarget(modulation, init_data.to_vec()))? {
            MockReply::Target(record) => Ok(record),
            other => Err(unexpected(other, "select_passive_target")),
        }
    }

    fn list_passive_targets(
        &mut self,
        modulation: Modulation,
        max: usize,
    ) -> Result<Vec<Vec<u8>>> {
        match self.next_reply(MockCall::ListPassiveTargets(modulation, max))? {
            MockReply::Targets(records) => Ok(records),
            other => Err(unexpected(other, "list_passive_targets")),
        }
    }

    fn deselect_target(&mut self) -> Result<bool> {
        self.control(MockCall::DeselectTarget)
    }

    fn transceive_bits(&mut self, frame: &BitFrame) -> Result<BitFrame> {
        match self.next_reply(MockCall::TransceiveBits(frame.clone()))? {
            MockReply::Bits(rx) => Ok(rx),
            other => Err(unexpected(other, "transceive_bits")),
        }
    }

    fn transceive_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        match self.next_reply(MockCall::TransceiveBytes(data.to_vec()))? {
            MockReply::Bytes(rx) => Ok(rx),
            other => Err(unexpected(other, "transceive_bytes")),
        }
    }

    fn receive_bits(&mut self) -> Result<BitFrame> {
        match self.next_reply(MockCall::ReceiveBits)? {
            MockReply::Bits(rx) => Ok(rx),
            other => Err(unexpected(other, "receive_bits")),
        }
    }

    fn receive_bytes(&mut self) -> Result<Vec<u8>> {
        match self.next_reply(MockCall::ReceiveBytes)? {
            MockReply::Bytes(rx) => Ok(rx),
            other => Err(unexpected(other, "receive_bytes")),
        }
    }

    fn send_bits(&mut self, frame: &BitFrame) -> Result<bool> {
        self.control(MockCall::SendBits(frame.clone()))
    }

    fn send_bytes(&mut self, data: &[u8]) -> Result<bool> {
        self.control(MockCall::SendBytes(data.to_vec()))
    }

    fn close(&mut self) -> Result<()> {
        self.record(MockCall::Close);
        self.state.borrow_mut().closed += 1;
        Ok(())
    }
}

/// Backend serving a fixed set of mock readers.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    devices: Vec<(DeviceDescriptor, MockTransport)>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reader reachable at `connstring`.
    pub fn with_device(mut self, connstring: &str, transport: MockTransport) -> Self {
        let desc = DeviceDescriptor {
            name: transport.name().to_string(),
            driver: "mock".to_string(),
            connstring: connstring.to_string(),
        };
        self.devices.push((desc, transport));
        self
    }
}

impl Backend for MockBackend {
    fn open(&mut self, spec: Option<&DeviceSpec>) -> Result<Box<dyn Transport>> {
        let found = match spec {
            Some(spec) => self
                .devices
                .iter()
                .find(|(desc, _)| desc.connstring == spec.connstring),
            None => self.devices.first(),
        };
        let (_, transport) = found.ok_or(Error::NoDeviceFound)?;
        transport.state.borrow_mut().opened += 1;
        Ok(Box::new(transport.clone()))
    }

    fn list_devices(&mut self, max: usize) -> Result<Vec<DeviceDescriptor>> {
        Ok(self
            .devices
            .iter()
            .take(max)
            .map(|(desc, _)| desc.clone())
            .collect())
    }
}
