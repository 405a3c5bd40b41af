use nfcdrv::protocol::bits::{odd_parity, odd_parity_bytes};
use nfcdrv::protocol::BitFrame;
use proptest::prelude::*;

#[test]
fn known_parity_bits() {
    // 0x26 has three bits set
    assert_eq!(odd_parity(0x26), 0);
    assert_eq!(odd_parity(0x00), 1);
    assert_eq!(odd_parity_bytes(&[0x93, 0x20]), vec![1, 0]);
}

#[test]
fn frame_length_must_match_bits() {
    assert!(BitFrame::new(vec![0x26], 7).is_ok());
    assert!(BitFrame::new(vec![0x26, 0x00], 7).is_err());
    assert!(BitFrame::with_parity(vec![0x26], 8, vec![0, 1]).is_err());
}

proptest! {
    #[test]
    fn parity_makes_ones_odd(byte in any::<u8>()) {
        prop_assert_eq!((byte.count_ones() + odd_parity(byte) as u32) % 2, 1);
    }

    #[test]
    fn without_parity_keeps_payload(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        let len = bytes.len() * 8;
        let frame = BitFrame::with_odd_parity(bytes.clone(), len).unwrap();
        let stripped = frame.without_parity();
        prop_assert_eq!(stripped.bits(), &bytes[..]);
        prop_assert_eq!(stripped.bit_len(), len);
        prop_assert!(stripped.parity().is_none());
    }
}
