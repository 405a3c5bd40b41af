#[path = "../common/mod.rs"]
mod common;

use nfcdrv::protocol::mifare::{self, MifareArgs, MifareCommand, ParameterShape, ValueBlock};
use nfcdrv::Error;
use proptest::prelude::*;

#[test]
fn every_command_has_one_shape() {
    let shapes: Vec<_> = MifareCommand::ALL.iter().map(|c| c.shape()).collect();
    assert_eq!(
        shapes,
        vec![
            ParameterShape::Auth,
            ParameterShape::Auth,
            ParameterShape::Data,
            ParameterShape::Data,
            ParameterShape::Value,
            ParameterShape::Value,
            ParameterShape::Value,
            ParameterShape::Value,
        ]
    );
}

#[test]
fn full_auth_frame_is_twelve_bytes() {
    let args = MifareArgs::for_auth(common::fixtures::sample_key(), common::fixtures::sample_uid4());
    let frame = mifare::encode(0x60, 3, &args).unwrap();
    assert_eq!(frame.len(), 12);
    assert_eq!(&frame[..2], &[0x60, 0x03]);
}

#[test]
fn sector_layout_of_4k_card() {
    assert_eq!(mifare::sector_of(3), 0);
    assert_eq!(mifare::sector_of(127), 31);
    assert_eq!(mifare::sector_of(128), 32);
    assert_eq!(mifare::sector_of(255), 39);
    assert_eq!(mifare::first_block_of(32), Some(128));
    assert!(mifare::is_trailer_block(7));
    assert!(mifare::is_trailer_block(143));
    assert!(!mifare::is_trailer_block(128));
}

#[test]
fn value_block_layout() {
    let block = ValueBlock::new(1, 4).encode();
    assert_eq!(
        block.as_bytes(),
        &[
            0x01, 0x00, 0x00, 0x00, 0xfe, 0xff, 0xff, 0xff, 0x01, 0x00, 0x00, 0x00, 0x04, 0xfb,
            0x04, 0xfb,
        ]
    );
}

proptest! {
    #[test]
    fn block_accepted_iff_in_range(block in -1_000i64..1_000) {
        let res = mifare::encode(0x30, block, &MifareArgs::new());
        if (0..=255).contains(&block) {
            prop_assert_eq!(res.unwrap(), vec![0x30, block as u8]);
        } else {
            prop_assert!(matches!(res, Err(Error::InvalidBlockNumber(b)) if b == block));
        }
    }

    #[test]
    fn unknown_codes_rejected(code in any::<u8>(), block in any::<i64>()) {
        prop_assume!(MifareCommand::try_from(code).is_err());
        prop_assert!(matches!(
            mifare::encode(code, block, &MifareArgs::new()),
            Err(Error::UnsupportedCommand(c)) if c == code
        ));
    }

    #[test]
    fn value_block_decodes_what_it_encodes(value in any::<i32>(), address in any::<u8>()) {
        let vb = ValueBlock::new(value, address);
        prop_assert_eq!(ValueBlock::decode(&vb.encode()).unwrap(), vb);
    }
}
