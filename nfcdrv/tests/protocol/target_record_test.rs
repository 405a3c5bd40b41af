#[path = "../common/mod.rs"]
mod common;

use nfcdrv::protocol::target::{self, felica, iso14443a, iso14443b, Iso14443aInfo};
use nfcdrv::types::Modulation;
use nfcdrv::Selection;
use proptest::prelude::*;

#[test]
fn record_sizes() {
    assert_eq!(iso14443a::RECORD_LEN, 275);
    assert_eq!(felica::RECORD_LEN, 23);
    assert_eq!(iso14443b::RECORD_LEN, 89);
    assert_eq!(common::fixtures::iso14443a_record_uid7().len(), iso14443a::RECORD_LEN);
    assert_eq!(common::fixtures::felica_record().len(), felica::RECORD_LEN);
    assert_eq!(common::fixtures::iso14443b_record().len(), iso14443b::RECORD_LEN);
}

#[test]
fn uid_length_over_capacity_is_rejected() {
    let mut record = common::fixtures::iso14443a_record_uid7();
    record[3..7].copy_from_slice(&11u32.to_le_bytes());
    assert!(Iso14443aInfo::decode(&record).is_err());
    assert_eq!(
        target::decode_record(Modulation::Iso14443a106, &record),
        Selection::SelectedUndecoded(Modulation::Iso14443a106)
    );
}

#[test]
fn felica_system_code_is_big_endian() {
    let record = common::fixtures::felica_record();
    assert_eq!(&record[21..23], &[0x00, 0x03]);
}

#[test]
fn decoded_record_encodes_back() {
    for (modulation, record) in [
        (Modulation::Iso14443a106, common::fixtures::iso14443a_record_with_ats()),
        (Modulation::Felica212, common::fixtures::felica_record()),
        (Modulation::Iso14443b106, common::fixtures::iso14443b_record()),
        (Modulation::Jewel106, common::fixtures::jewel_record()),
    ] {
        let descriptor = target::decode_record(modulation, &record)
            .into_descriptor()
            .unwrap();
        assert_eq!(descriptor.modulation_type(), modulation.modulation_type());
        assert_eq!(descriptor.to_record(), record);
    }
}

proptest! {
    #[test]
    fn arbitrary_records_never_report_absent(
        idx in 0usize..Modulation::ALL.len(),
        record in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let modulation = Modulation::ALL[idx];
        let sel = target::decode_record(modulation, &record);
        prop_assert!(sel.is_selected());
        if let Some(d) = sel.descriptor() {
            prop_assert_eq!(d.modulation_type(), modulation.modulation_type());
        }
    }

    #[test]
    fn uid_length_within_capacity(uid in prop::collection::vec(any::<u8>(), 0..=10)) {
        let record = nfcdrv::test_support::iso14443a_record(&uid, &[]);
        let info = Iso14443aInfo::decode(&record).unwrap();
        prop_assert_eq!(info.uid.as_bytes(), &uid[..]);
    }
}
