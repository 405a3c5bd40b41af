// MIFARE Classic dump example against a scripted mock reader.

// Selects an ISO14443A target, authenticates each sector of a 1K card with
// the default key and prints its blocks. Swap the MockBackend for a real
// backend to run it against hardware. Run with RUST_LOG=debug to see the
// frames going out.

use nfcdrv::prelude::*;
use nfcdrv::protocol::mifare;
use nfcdrv::transport::mock::{MockBackend, MockReply, MockTransport};

const SECTORS: u8 = 16;

fn scripted_reader() -> MockTransport {
    let reader = MockTransport::new("scripted PN533");
    reader.push_reply(MockReply::Target(Some(nfcdrv::test_support::iso14443a_record(
        &[0xde, 0xad, 0xbe, 0xef],
        &[],
    ))));
    for sector in 0..SECTORS {
        reader.push_reply(MockReply::Bytes(Vec::new()));
        for offset in 0..4u8 {
            reader.push_reply(MockReply::Bytes(vec![sector * 4 + offset; 16]));
        }
    }
    reader
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let backend = MockBackend::new().with_device("mock:0", scripted_reader());
    let mut device = DeviceBuilder::new()
        .with_backend(Box::new(backend))
        .with_option(ConfigOption::InfiniteSelect, false)
        .connect()?;
    println!("Opened {}", device.name().unwrap_or("?"));

    let mut session = InitiatorSession::new(&mut device);
    session.init()?;

    let selection = session.select_tag(Modulation::Iso14443a106, &[])?;
    let Some(info) = selection.descriptor().and_then(|d| d.as_iso14443a()) else {
        println!("No ISO14443A target: {:?}", selection);
        return Ok(());
    };
    println!(
        "UID {} ATQA {:04X} SAK {:02X}",
        info.uid.to_hex(),
        info.atqa.as_u16(),
        info.sak
    );
    let uid = info
        .uid
        .mifare_auth_uid()
        .ok_or_else(|| anyhow::anyhow!("UID is not 4 bytes"))?;

    for sector in 0..SECTORS {
        let Some(first) = mifare::first_block_of(sector) else {
            break;
        };
        if !session.mifare_authenticate(first.into(), MifareKey::DEFAULT, uid, false)? {
            println!("Sector {:2}: authentication refused", sector);
            continue;
        }
        for block in first..first + 4 {
            let data = session.mifare_read_block(block.into())?;
            let marker = if mifare::is_trailer_block(block) { "*" } else { " " };
            println!("{:3}{} {}", block, marker, data.to_hex());
        }
    }

    session.deselect_tag()?;
    Ok(())
}
