// nfcdrv/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{MockBackend, MockCall, MockReply, MockTransport};
pub use traits::{Backend, Transport};
