#[path = "../common/mod.rs"]
mod common;

use nfcdrv::device::{ConfigOption, DeviceBuilder, DeviceSpec};
use nfcdrv::transport::mock::{MockCall, MockReply};
use nfcdrv::Error;

#[test]
fn builder_connects_and_configures() {
    let (backend, _, second) = common::two_reader_backend();
    let handle = DeviceBuilder::new()
        .with_backend(Box::new(backend))
        .with_spec(DeviceSpec::new("mock:1"))
        .with_option(ConfigOption::HandleCrc, false)
        .with_option(ConfigOption::EasyFraming, false)
        .connect()
        .unwrap();

    assert_eq!(handle.name(), Some("PN532"));
    assert_eq!(handle.handle_crc(), Some(false));
    assert_eq!(
        second.exchanges(),
        vec![
            MockCall::SetOption(ConfigOption::HandleCrc, false),
            MockCall::SetOption(ConfigOption::EasyFraming, false),
        ]
    );
}

#[test]
fn builder_refused_option_is_an_error() {
    let (backend, first, _) = common::two_reader_backend();
    first.push_reply(MockReply::Ack(false));
    let res = DeviceBuilder::new()
        .with_backend(Box::new(backend))
        .with_option(ConfigOption::InfiniteSelect, true)
        .connect();
    assert!(matches!(res, Err(Error::ExchangeFailed(_))));
    assert_eq!(first.close_count(), 1);
}
