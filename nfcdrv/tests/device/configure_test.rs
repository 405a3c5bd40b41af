#[path = "../common/mod.rs"]
mod common;

use nfcdrv::device::ConfigOption;
use nfcdrv::transport::mock::{MockCall, MockReply};
use nfcdrv::Error;

#[test]
fn every_option_reaches_reader() {
    let (mut handle, mock) = common::connected();
    for option in ConfigOption::ALL {
        assert!(handle.configure(option, false).unwrap());
    }
    let sent: Vec<_> = mock
        .exchanges()
        .into_iter()
        .filter_map(|c| match c {
            MockCall::SetOption(o, _) => Some(o),
            _ => None,
        })
        .collect();
    assert_eq!(sent, ConfigOption::ALL);
    assert_eq!(handle.handle_crc(), Some(false));
    assert_eq!(handle.handle_parity(), Some(false));
    assert_eq!(handle.active(), Some(false));
}

#[test]
fn unknown_codes_never_reach_reader() {
    let (mut handle, mock) = common::connected();
    for code in [0x02u8, 0x12, 0x43, 0x7f, 0xff] {
        assert!(matches!(
            handle.configure_code(code, true),
            Err(Error::InvalidConfigOption(c)) if c == code
        ));
    }
    assert!(mock.exchanges().is_empty());
}

#[test]
fn known_codes_map_to_options() {
    let (mut handle, mock) = common::connected();
    assert!(handle.configure_code(0x00, false).unwrap());
    assert_eq!(handle.handle_crc(), Some(false));
    assert_eq!(
        mock.exchanges(),
        vec![MockCall::SetOption(ConfigOption::HandleCrc, false)]
    );
}

#[test]
fn refused_option_leaves_cache_alone() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Ack(false));
    assert!(!handle.configure(ConfigOption::ActivateField, false).unwrap());
    assert_eq!(handle.active(), Some(true));
}

#[test]
fn failed_exchange_propagates() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Fail("usb stall".into()));
    assert!(matches!(
        handle.configure(ConfigOption::HandleParity, false),
        Err(Error::ExchangeFailed(_))
    ));
    assert_eq!(handle.handle_parity(), Some(true));
}

#[test]
fn flags_reset_on_reconnect() {
    let (mut handle, _mock) = common::connected();
    handle.configure(ConfigOption::HandleParity, false).unwrap();
    handle.connect(None).unwrap();
    assert_eq!(handle.handle_parity(), Some(true));
}
