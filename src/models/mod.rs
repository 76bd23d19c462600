use serde::{Deserialize, Serialize};
use strum::Display;

/// Root aggregate persisted as one JSON blob.
///
/// Field names match the persisted shape (and the export file), so imports of
/// previously exported data keep working. Lists default to empty so a
/// hand-edited or partial import never poisons downstream reads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct OrgDocument {
    pub meta: Meta,
    #[serde(default)]
    pub kegiatan: Vec<Activity>,
    #[serde(default)]
    pub rapat: Vec<Meeting>,
    #[serde(default)]
    pub kas: Vec<LedgerEntry>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub(crate) struct Meta {
    pub name: String,
    pub address: String,
    pub tagline: String,
}

/// Kegiatan: an activity/event entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Activity {
    pub id: i64,
    pub title: String,
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,
    pub description: String,
}

/// Rapat: a scheduled meeting entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Meeting {
    pub id: i64,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    pub notes: String,
}

/// Kas: one cash ledger line. Append-only (no edit path), removable by id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct LedgerEntry {
    pub id: i64,
    pub date: String,
    pub desc: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Magnitude in rupiah; the sign is carried by `entry_type`.
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum EntryType {
    In,
    Out,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Settings {
    /// Plaintext by design: single local user, no server. Compared with exact
    /// string equality in `store::authenticate`.
    #[serde(rename = "adminPassword")]
    pub admin_password: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            admin_password: "admin123".to_string(),
        }
    }
}

/// Form payloads filled in by the admin UI before hitting the store.
///
/// `id: None` means create; `Some(id)` means replace-in-place.
#[derive(Clone, Debug, Default)]
pub(crate) struct ActivityForm {
    pub id: Option<i64>,
    pub title: String,
    pub date: String,
    pub description: String,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct MeetingForm {
    pub id: Option<i64>,
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub notes: String,
}

#[derive(Clone, Debug)]
pub(crate) struct LedgerEntryForm {
    pub date: String,
    pub desc: String,
    pub entry_type: EntryType,
    pub amount: i64,
}

impl OrgDocument {
    /// Built-in document used on first visit, after a reset, and whenever the
    /// persisted blob fails to parse.
    pub fn seed() -> Self {
        Self {
            meta: Meta {
                name: "Karang Taruna Karsel 10".to_string(),
                address: "RW 10 Kelurahan Karang Selatan".to_string(),
                tagline: "Muda, guyub, dan berkarya.".to_string(),
            },
            kegiatan: vec![
                Activity {
                    id: 2,
                    title: "Kerja bakti lingkungan".to_string(),
                    date: "2025-08-10".to_string(),
                    description: "Bersih-bersih selokan dan taman RW bersama warga.".to_string(),
                },
                Activity {
                    id: 1,
                    title: "Lomba 17 Agustus".to_string(),
                    date: "2025-08-17".to_string(),
                    description: "Panitia lomba kemerdekaan untuk anak-anak RW 10.".to_string(),
                },
            ],
            rapat: vec![
                Meeting {
                    id: 2,
                    title: "Rapat panitia 17an".to_string(),
                    date: "2025-08-05".to_string(),
                    time: Some("19:30".to_string()),
                    notes: "Pembagian tugas lomba dan anggaran hadiah.".to_string(),
                },
                Meeting {
                    id: 1,
                    title: "Rapat rutin bulanan".to_string(),
                    date: "2025-08-01".to_string(),
                    time: Some("20:00".to_string()),
                    notes: "Evaluasi kegiatan bulan lalu.".to_string(),
                },
            ],
            kas: vec![
                LedgerEntry {
                    id: 1,
                    date: "2025-08-01".to_string(),
                    desc: "Iuran anggota".to_string(),
                    entry_type: EntryType::In,
                    amount: 200_000,
                },
                LedgerEntry {
                    id: 2,
                    date: "2025-08-15".to_string(),
                    desc: "Beli alat kebersihan".to_string(),
                    entry_type: EntryType::Out,
                    amount: 50_000,
                },
            ],
            settings: Settings::default(),
        }
    }
}

impl Default for OrgDocument {
    fn default() -> Self {
        Self::seed()
    }
}
