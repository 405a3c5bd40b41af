#[path = "../common/mod.rs"]
mod common;

use nfcdrv::protocol::mifare::{MifareArgs, MifareCommand, MifareReply};
use nfcdrv::session::InitiatorSession;
use nfcdrv::transport::mock::MockReply;
use nfcdrv::Error;

#[test]
fn read_frame_layout() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bytes(vec![0x11; 16]));
    let mut session = InitiatorSession::new(&mut handle);
    let reply = session
        .mifare_cmd(MifareCommand::Read, 8, &MifareArgs::new())
        .unwrap();
    assert_eq!(reply, MifareReply::Block(common::fixtures::sample_blockdata(0x11)));
    assert_eq!(mock.sent_bytes(), vec![vec![0x30, 0x08]]);
}

#[test]
fn write_frame_layout() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bytes(vec![]));
    let data = common::fixtures::sample_blockdata(0x42);
    let mut session = InitiatorSession::new(&mut handle);
    assert!(session.mifare_write_block(9, data).unwrap());

    let mut expected = vec![0xA0, 0x09];
    expected.extend_from_slice(data.as_bytes());
    assert_eq!(mock.sent_bytes(), vec![expected]);
}

#[test]
fn auth_frame_carries_key_then_uid() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bytes(vec![]));
    let key = common::fixtures::sample_key();
    let uid = common::fixtures::sample_uid4();
    let mut session = InitiatorSession::new(&mut handle);
    assert!(session.mifare_authenticate(7, key, uid, true).unwrap());

    let mut expected = vec![0x61, 0x07];
    expected.extend_from_slice(key.as_bytes());
    expected.extend_from_slice(&uid);
    assert_eq!(mock.sent_bytes(), vec![expected]);
}

#[test]
fn auth_with_key_but_no_uid_is_minimal() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bytes(vec![]));
    let args = MifareArgs::new().key(common::fixtures::sample_key());
    let mut session = InitiatorSession::new(&mut handle);
    session.mifare_cmd(MifareCommand::AuthA, 0, &args).unwrap();
    assert_eq!(mock.sent_bytes(), vec![vec![0x60, 0x00]]);
}

#[test]
fn value_commands_append_le_operand() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bytes(vec![]));
    mock.push_reply(MockReply::Bytes(vec![]));
    let mut session = InitiatorSession::new(&mut handle);
    session
        .mifare_cmd(MifareCommand::Increment, 5, &MifareArgs::for_value(0x0102_0304))
        .unwrap();
    session
        .mifare_cmd(MifareCommand::Decrement, 5, &MifareArgs::for_value(-1))
        .unwrap();
    assert_eq!(
        mock.sent_bytes(),
        vec![
            vec![0xC1, 0x05, 0x04, 0x03, 0x02, 0x01],
            vec![0xC0, 0x05, 0xff, 0xff, 0xff, 0xff],
        ]
    );
}

#[test]
fn transfer_ignores_unused_parameters() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bytes(vec![]));
    let args = MifareArgs::for_data(common::fixtures::sample_blockdata(0)).value(3);
    let mut session = InitiatorSession::new(&mut handle);
    session.mifare_cmd(MifareCommand::Transfer, 6, &args).unwrap();
    assert_eq!(mock.sent_bytes(), vec![vec![0xB0, 0x06, 0x03, 0x00, 0x00, 0x00]]);
}

#[test]
fn raw_codes_validate_command_before_block() {
    let (mut handle, mock) = common::connected();
    let mut session = InitiatorSession::new(&mut handle);
    assert!(matches!(
        session.mifare_cmd_code(0x00, 999, &MifareArgs::new()),
        Err(Error::UnsupportedCommand(0x00))
    ));
    assert!(matches!(
        session.mifare_cmd_code(0x30, 999, &MifareArgs::new()),
        Err(Error::InvalidBlockNumber(999))
    ));
    assert!(mock.exchanges().is_empty());
}

#[test]
fn boundary_blocks() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bytes(vec![0; 16]));
    mock.push_reply(MockReply::Bytes(vec![0; 16]));
    let mut session = InitiatorSession::new(&mut handle);
    session.mifare_read_block(0).unwrap();
    session.mifare_read_block(255).unwrap();
    assert!(session.mifare_read_block(256).is_err());
    assert_eq!(mock.sent_bytes(), vec![vec![0x30, 0x00], vec![0x30, 0xff]]);
}

#[test]
fn nak_and_exchange_failure() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bytes(vec![0x05]));
    mock.push_reply(MockReply::Fail("crc error".into()));
    let mut session = InitiatorSession::new(&mut handle);

    let reply = session
        .mifare_cmd(MifareCommand::Store, 4, &MifareArgs::new())
        .unwrap();
    assert_eq!(reply, MifareReply::Nak(0x05));
    assert!(!reply.is_success());

    assert!(matches!(
        session.mifare_cmd(MifareCommand::Read, 4, &MifareArgs::new()),
        Err(Error::ExchangeFailed(_))
    ));
}

#[test]
fn corrupt_value_block_is_rejected() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bytes(vec![0x01; 16]));
    let mut session = InitiatorSession::new(&mut handle);
    assert!(matches!(
        session.mifare_read_value(4),
        Err(Error::InvalidValueBlock)
    ));
}
