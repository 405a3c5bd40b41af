// nfcdrv/src/lib.rs

//! nfcdrv
//!
//! Reader-agnostic NFC device core: connect to a reader through a
//! pluggable backend, configure it, select passive targets and exchange
//! raw or MIFARE Classic frames as initiator or emulated target.

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available to consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
