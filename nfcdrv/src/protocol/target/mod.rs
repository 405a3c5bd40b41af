// nfcdrv/src/protocol/target/mod.rs

//! Target descriptors decoded from the reader's native per-modulation
//! records. Each family gets its own variant; there is no shared buffer to
//! reinterpret.

pub mod felica;
pub mod iso14443a;
pub mod iso14443b;
pub mod jewel;

pub use felica::FelicaInfo;
pub use iso14443a::Iso14443aInfo;
pub use iso14443b::Iso14443bInfo;
pub use jewel::JewelInfo;

use crate::types::{Modulation, ModulationType};

/// Metadata of a selected target, tagged by modulation family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetDescriptor {
    Iso14443a(Iso14443aInfo),
    Iso14443b(Iso14443bInfo),
    Felica(FelicaInfo),
    Jewel(JewelInfo),
}

impl TargetDescriptor {
    pub fn modulation_type(&self) -> ModulationType {
        match self {
            Self::Iso14443a(_) => ModulationType::Iso14443a,
            Self::Iso14443b(_) => ModulationType::Iso14443b,
            Self::Felica(_) => ModulationType::Felica,
            Self::Jewel(_) => ModulationType::Jewel,
        }
    }

    pub fn as_iso14443a(&self) -> Option<&Iso14443aInfo> {
        match self {
            Self::Iso14443a(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_felica(&self) -> Option<&FelicaInfo> {
        match self {
            Self::Felica(info) => Some(info),
            _ => None,
        }
    }

    /// Native record layout for this descriptor.
    pub fn to_record(&self) -> Vec<u8> {
        match self {
            Self::Iso14443a(info) => info.to_record(),
            Self::Iso14443b(info) => info.to_record(),
            Self::Felica(info) => info.to_record(),
            Self::Jewel(info) => info.to_record(),
        }
    }
}

/// Result of a passive-target selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A target answered and its record decoded
    Selected(TargetDescriptor),
    /// A target answered but its metadata has no decoder (DEP) or the
    /// record was malformed
    SelectedUndecoded(Modulation),
    /// No target answered
    NotSelected,
}

impl Selection {
    pub fn is_selected(&self) -> bool {
        !matches!(self, Selection::NotSelected)
    }

    pub fn descriptor(&self) -> Option<&TargetDescriptor> {
        match self {
            Selection::Selected(d) => Some(d),
            _ => None,
        }
    }

    pub fn into_descriptor(self) -> Option<TargetDescriptor> {
        match self {
            Selection::Selected(d) => Some(d),
            _ => None,
        }
    }
}

/// Decode the raw record a reader produced for a target selected with
/// `modulation`. Never reports `NotSelected`: the record exists, so a
/// target answered.
pub fn decode_record(modulation: Modulation, record: &[u8]) -> Selection {
    let decoded = match modulation.modulation_type() {
        ModulationType::Iso14443a => Iso14443aInfo::decode(record).map(TargetDescriptor::Iso14443a),
        ModulationType::Iso14443b => Iso14443bInfo::decode(record).map(TargetDescriptor::Iso14443b),
        ModulationType::Felica => FelicaInfo::decode(record).map(TargetDescriptor::Felica),
        ModulationType::Jewel => JewelInfo::decode(record).map(TargetDescriptor::Jewel),
        ModulationType::Dep => return Selection::SelectedUndecoded(modulation),
    };

    match decoded {
        Ok(descriptor) => Selection::Selected(descriptor),
        Err(e) => {
            log::warn!(
                "{} target record ({} bytes) not decodable: {}",
                modulation,
                record.len(),
                e
            );
            Selection::SelectedUndecoded(modulation)
        }
    }
}
