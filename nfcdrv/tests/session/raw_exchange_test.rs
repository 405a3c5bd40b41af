#[path = "../common/mod.rs"]
mod common;

use nfcdrv::device::ConfigOption;
use nfcdrv::protocol::BitFrame;
use nfcdrv::session::InitiatorSession;
use nfcdrv::transport::mock::{MockCall, MockReply};

#[test]
fn reqa_short_frame() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bits(BitFrame::from_bytes(&[0x44, 0x00])));
    let reqa = BitFrame::new(vec![0x26], 7).unwrap();

    let mut session = InitiatorSession::new(&mut handle);
    session.init().unwrap();
    let atqa = session.transceive_bits(&reqa).unwrap();
    assert_eq!(atqa.bits(), &[0x44, 0x00]);
    assert_eq!(atqa.bit_len(), 16);
    assert_eq!(
        mock.exchanges(),
        vec![MockCall::InitiatorInit, MockCall::TransceiveBits(reqa)]
    );
}

#[test]
fn parity_dropped_whenever_reader_handles_it() {
    let (mut handle, mock) = common::connected();
    for _ in 0..3 {
        mock.push_reply(MockReply::Bits(
            BitFrame::with_odd_parity(vec![0x08, 0xb6, 0xdd], 24).unwrap(),
        ));
    }
    let mut session = InitiatorSession::new(&mut handle);
    for _ in 0..3 {
        let rx = session
            .transceive_bits(&BitFrame::from_bytes(&[0x93, 0x70]))
            .unwrap();
        assert_eq!(rx.parity(), None);
    }
}

#[test]
fn parity_kept_after_disabling_handling() {
    let (mut handle, mock) = common::connected();
    handle.configure(ConfigOption::HandleParity, false).unwrap();
    handle.configure(ConfigOption::HandleCrc, false).unwrap();
    let answer = BitFrame::with_odd_parity(vec![0x04], 4).unwrap();
    mock.push_reply(MockReply::Bits(answer.clone()));

    let mut session = InitiatorSession::new(&mut handle);
    let rx = session
        .transceive_bits(&BitFrame::with_odd_parity(vec![0x60, 0x00, 0xf5, 0x7b], 32).unwrap())
        .unwrap();
    assert_eq!(rx, answer);
}

#[test]
fn bytes_pass_through() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bytes(vec![0x90, 0x00]));
    let mut session = InitiatorSession::new(&mut handle);
    let apdu = [0x00, 0xa4, 0x04, 0x00, 0x00];
    assert_eq!(session.transceive_bytes(&apdu).unwrap(), vec![0x90, 0x00]);
    assert_eq!(mock.sent_bytes(), vec![apdu.to_vec()]);
}
