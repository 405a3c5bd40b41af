// nfcdrv/src/device/builder.rs

use crate::device::config::ConfigOption;
use crate::device::descriptor::DeviceSpec;
use crate::device::handle::DeviceHandle;
use crate::transport::Backend;
use crate::{Error, Result};

/// Helper to open a reader and apply an initial set of options.
#[derive(Default)]
pub struct DeviceBuilder {
    backend: Option<Box<dyn Backend>>,
    spec: Option<DeviceSpec>,
    options: Vec<(ConfigOption, bool)>,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(mut self, backend: Box<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Open a specific reader instead of the first available one.
    pub fn with_spec(mut self, spec: DeviceSpec) -> Self {
        self.spec = Some(spec);
        self
    }

    /// Option applied right after connecting, in insertion order.
    pub fn with_option(mut self, option: ConfigOption, value: bool) -> Self {
        self.options.push((option, value));
        self
    }

    /// Connect and configure. Without a backend there is nothing to open,
    /// which is reported as `NoDeviceFound`. An option the reader does not
    /// acknowledge is an error here: the caller asked for it up front.
    pub fn connect(self) -> Result<DeviceHandle> {
        let backend = self.backend.ok_or(Error::NoDeviceFound)?;
        let mut handle = DeviceHandle::open(backend, self.spec.as_ref())?;
        for (option, value) in self.options {
            if !handle.configure(option, value)? {
                return Err(Error::ExchangeFailed(format!(
                    "{} = {} not acknowledged",
                    option, value
                )));
            }
        }
        Ok(handle)
    }
}
