// nfcdrv/src/device/handle.rs

use crate::constants::MAX_DEVICE_COUNT;
use crate::device::config::{ConfigOption, DeviceFlags};
use crate::device::descriptor::{DeviceDescriptor, DeviceSpec};
use crate::transport::{Backend, Transport};
use crate::{Error, Result};

/// Owned handle to one reader.
///
/// Holds at most one open transport. The transport is closed exactly once:
/// on [`disconnect`](Self::disconnect), when [`connect`](Self::connect)
/// replaces it, or when the handle is dropped.
///
/// Not thread-safe: use one handle per reader per thread. Sessions borrow
/// the handle mutably, so two sessions can never drive it at once.
pub struct DeviceHandle {
    backend: Box<dyn Backend>,
    transport: Option<Box<dyn Transport>>,
    flags: DeviceFlags,
}

impl DeviceHandle {
    /// A disconnected handle that will open readers through `backend`.
    pub fn new(backend: Box<dyn Backend>) -> Self {
        Self {
            backend,
            transport: None,
            flags: DeviceFlags::default(),
        }
    }

    /// Create a handle and connect it. Fails with `Error::NoDeviceFound`
    /// instead of handing back an unusable handle.
    pub fn open(backend: Box<dyn Backend>, spec: Option<&DeviceSpec>) -> Result<Self> {
        let mut handle = Self::new(backend);
        handle.connect(spec)?;
        Ok(handle)
    }

    /// Connect to the reader named by `spec`, or the first available one.
    /// Any previous connection is closed first, even if this one fails.
    pub fn connect(&mut self, spec: Option<&DeviceSpec>) -> Result<()> {
        self.disconnect();

        let transport = self.backend.open(spec)?;
        log::info!("connected to {}", transport.name());
        self.transport = Some(transport);
        self.flags = DeviceFlags::default();
        Ok(())
    }

    /// Close the transport. A no-op on a disconnected handle.
    pub fn disconnect(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            let name = transport.name().to_string();
            if let Err(e) = transport.close() {
                log::warn!("closing {} failed: {}", name, e);
            }
            log::info!("disconnected from {}", name);
        }
        self.flags = DeviceFlags::default();
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Set a configuration option. On acknowledgement the flag cache is
    /// updated; the return value is whether the reader acknowledged.
    pub fn configure(&mut self, option: ConfigOption, value: bool) -> Result<bool> {
        let transport = self.transport.as_deref_mut().ok_or(Error::NotConnected)?;
        if !transport.supports_option(option) {
            return Err(Error::InvalidConfigOption(option.code()));
        }

        log::debug!("{}: {} = {}", transport.name(), option, value);
        let acked = transport.set_option(option, value)?;
        if acked {
            self.flags.set(option, value);
        }
        Ok(acked)
    }

    /// [`configure`](Self::configure) from a raw option code. Unknown codes
    /// fail with `Error::InvalidConfigOption` before touching the reader.
    pub fn configure_code(&mut self, code: u8, value: bool) -> Result<bool> {
        let option = ConfigOption::try_from(code)?;
        self.configure(option, value)
    }

    pub fn name(&self) -> Option<&str> {
        self.transport.as_deref().map(|t| t.name())
    }

    /// Cached flags, or `None` when disconnected.
    pub fn flags(&self) -> Option<DeviceFlags> {
        self.transport.as_ref().map(|_| self.flags)
    }

    pub fn handle_parity(&self) -> Option<bool> {
        self.flags().map(|f| f.handle_parity)
    }

    pub fn handle_crc(&self) -> Option<bool> {
        self.flags().map(|f| f.handle_crc)
    }

    /// Whether the RF field is active.
    pub fn active(&self) -> Option<bool> {
        self.flags().map(|f| f.activate_field)
    }

    /// Scan the backend for readers. Each call rescans.
    pub fn list_devices(&mut self) -> Result<Vec<DeviceDescriptor>> {
        let mut devices = self.backend.list_devices(MAX_DEVICE_COUNT)?;
        devices.truncate(MAX_DEVICE_COUNT);
        Ok(devices)
    }

    pub(crate) fn transport_mut(&mut self) -> Result<&mut dyn Transport> {
        match self.transport.as_deref_mut() {
            Some(t) => Ok(t),
            None => Err(Error::NotConnected),
        }
    }
}

impl Drop for DeviceHandle {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl std::fmt::Debug for DeviceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceHandle")
            .field("device", &self.name())
            .field("flags", &self.flags())
            .finish()
    }
}
