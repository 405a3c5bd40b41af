#[path = "../common/mod.rs"]
mod common;

use nfcdrv::protocol::BitFrame;
use nfcdrv::session::TargetSession;
use nfcdrv::transport::mock::{MockCall, MockReply};
use nfcdrv::Error;

#[test]
fn emulated_tag_answers_reqa() {
    let (mut handle, mock) = common::connected();
    mock.push_reply(MockReply::Bits(
        BitFrame::with_odd_parity(vec![0x26], 7).unwrap(),
    ));
    let mut session = TargetSession::new(&mut handle);
    assert!(session.init().unwrap());

    let reqa = session.receive_bits().unwrap();
    assert_eq!((reqa.bits(), reqa.bit_len()), (&[0x26u8][..], 7));
    assert_eq!(reqa.parity(), None);

    let atqa = BitFrame::from_bytes(&[0x04, 0x00]);
    assert!(session.send_bits(&atqa).unwrap());
    assert_eq!(mock.exchanges().last(), Some(&MockCall::SendBits(atqa)));
}

#[test]
fn receive_without_initiator_times_out() {
    let (mut handle, _mock) = common::connected();
    let mut session = TargetSession::new(&mut handle);
    assert!(matches!(session.receive_bytes(), Err(Error::Timeout)));
}
