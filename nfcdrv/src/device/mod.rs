// nfcdrv/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod descriptor;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::{ConfigOption, DeviceFlags};
pub use descriptor::{DeviceDescriptor, DeviceSpec};
pub use handle::DeviceHandle;
