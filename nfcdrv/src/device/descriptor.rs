// nfcdrv/src/device/descriptor.rs

use std::fmt;

/// Which reader to open. The connection string format belongs to the
/// backend (e.g. `"pn532_uart:/dev/ttyUSB0"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceSpec {
    pub connstring: String,
}

impl DeviceSpec {
    pub fn new(connstring: impl Into<String>) -> Self {
        Self {
            connstring: connstring.into(),
        }
    }
}

impl From<&DeviceDescriptor> for DeviceSpec {
    fn from(desc: &DeviceDescriptor) -> Self {
        Self::new(desc.connstring.clone())
    }
}

/// A reader reported by a backend scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceDescriptor {
    pub name: String,
    pub driver: String,
    pub connstring: String,
}

impl fmt::Display for DeviceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {}", self.name, self.driver, self.connstring)
    }
}
