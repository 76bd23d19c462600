//! Pure commands over the in-memory document.
//!
//! Nothing in this module touches the browser: callers pass the current
//! wall-clock millis in and persist the document afterwards (see
//! `state::AppState::commit`). That split keeps every rule here testable
//! with plain `cargo test`.

use crate::models::{
    Activity, ActivityForm, EntryType, LedgerEntry, LedgerEntryForm, Meeting, MeetingForm,
    OrgDocument,
};

/// Totals over the current ledger, recomputed on demand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BalanceSummary {
    pub total_in: i64,
    pub total_out: i64,
    pub balance: i64,
}

/// Next unique id for a list.
///
/// Ids are wall-clock derived (as the original data was), but bumped past the
/// current maximum so rapid successive inserts can never collide.
fn next_id(existing: impl Iterator<Item = i64>, now_ms: i64) -> i64 {
    let max = existing.max().unwrap_or(0);
    if now_ms > max {
        now_ms
    } else {
        max + 1
    }
}

/// Replace-in-place when the form carries a known id, otherwise insert a new
/// entry at the front. Returns the id the entry ended up with.
pub(crate) fn upsert_activity(doc: &mut OrgDocument, form: ActivityForm, now_ms: i64) -> i64 {
    if let Some(id) = form.id {
        if let Some(slot) = doc.kegiatan.iter_mut().find(|a| a.id == id) {
            slot.title = form.title;
            slot.date = form.date;
            slot.description = form.description;
            return id;
        }
    }

    let id = next_id(doc.kegiatan.iter().map(|a| a.id), now_ms);
    doc.kegiatan.insert(
        0,
        Activity {
            id,
            title: form.title,
            date: form.date,
            description: form.description,
        },
    );
    id
}

pub(crate) fn upsert_meeting(doc: &mut OrgDocument, form: MeetingForm, now_ms: i64) -> i64 {
    if let Some(id) = form.id {
        if let Some(slot) = doc.rapat.iter_mut().find(|m| m.id == id) {
            slot.title = form.title;
            slot.date = form.date;
            slot.time = form.time;
            slot.notes = form.notes;
            return id;
        }
    }

    let id = next_id(doc.rapat.iter().map(|m| m.id), now_ms);
    doc.rapat.insert(
        0,
        Meeting {
            id,
            title: form.title,
            date: form.date,
            time: form.time,
            notes: form.notes,
        },
    );
    id
}

/// Ledger entries are append-only: always a fresh id, always at the front.
pub(crate) fn add_ledger_entry(doc: &mut OrgDocument, form: LedgerEntryForm, now_ms: i64) -> i64 {
    let id = next_id(doc.kas.iter().map(|e| e.id), now_ms);
    doc.kas.insert(
        0,
        LedgerEntry {
            id,
            date: form.date,
            desc: form.desc,
            entry_type: form.entry_type,
            amount: form.amount,
        },
    );
    id
}

pub(crate) fn delete_activity(doc: &mut OrgDocument, id: i64) {
    doc.kegiatan.retain(|a| a.id != id);
}

pub(crate) fn delete_meeting(doc: &mut OrgDocument, id: i64) {
    doc.rapat.retain(|m| m.id != id);
}

pub(crate) fn delete_ledger_entry(doc: &mut OrgDocument, id: i64) {
    doc.kas.retain(|e| e.id != id);
}

pub(crate) fn compute_balance(doc: &OrgDocument) -> BalanceSummary {
    let mut total_in = 0;
    let mut total_out = 0;
    for e in &doc.kas {
        match e.entry_type {
            EntryType::In => total_in += e.amount,
            EntryType::Out => total_out += e.amount,
        }
    }
    BalanceSummary {
        total_in,
        total_out,
        balance: total_in - total_out,
    }
}

/// Case-sensitive equality against the stored plaintext password.
pub(crate) fn authenticate(doc: &OrgDocument, password: &str) -> bool {
    password == doc.settings.admin_password
}

/// Direct overwrite; callers are already in admin mode, no old-password check.
pub(crate) fn change_admin_password(doc: &mut OrgDocument, new_password: &str) {
    doc.settings.admin_password = new_password.to_string();
}

/// Pretty-printed snapshot of the full document (the JSON export file).
pub(crate) fn export_json(doc: &OrgDocument) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

/// Parse an imported blob. Successful parse is the only validation: the
/// document is replaced wholesale and absent lists fall back to empty via
/// `#[serde(default)]` on the model.
pub(crate) fn parse_document(text: &str) -> serde_json::Result<OrgDocument> {
    serde_json::from_str(text)
}

/// CSV table of the ledger. The description is double-quoted; embedded quotes
/// are left as-is, matching the exported format consumers already expect.
pub(crate) fn export_ledger_csv(doc: &OrgDocument) -> String {
    let mut out = String::from("Tanggal,Deskripsi,Tipe,Nominal\n");
    for e in &doc.kas {
        out.push_str(&format!(
            "{},\"{}\",{},{}\n",
            e.date, e.desc, e.entry_type, e.amount
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_doc() -> OrgDocument {
        OrgDocument {
            kegiatan: vec![],
            rapat: vec![],
            kas: vec![],
            ..OrgDocument::seed()
        }
    }

    fn activity_form(title: &str) -> ActivityForm {
        ActivityForm {
            id: None,
            title: title.to_string(),
            date: "2025-01-01".to_string(),
            description: "D".to_string(),
        }
    }

    #[test]
    fn upsert_without_id_inserts_at_front_with_fresh_id() {
        let mut doc = empty_doc();
        let a = upsert_activity(&mut doc, activity_form("A"), 1_000);
        let b = upsert_activity(&mut doc, activity_form("B"), 2_000);

        assert_ne!(a, b);
        assert_eq!(doc.kegiatan.len(), 2);
        assert_eq!(doc.kegiatan[0].title, "B");
        assert_eq!(doc.kegiatan[1].title, "A");
    }

    #[test]
    fn upsert_with_existing_id_replaces_in_place() {
        let mut doc = empty_doc();
        upsert_activity(&mut doc, activity_form("first"), 1_000);
        let target = upsert_activity(&mut doc, activity_form("second"), 2_000);
        upsert_activity(&mut doc, activity_form("third"), 3_000);

        let form = ActivityForm {
            id: Some(target),
            title: "second v2".to_string(),
            date: "2025-02-02".to_string(),
            description: "edited".to_string(),
        };
        let id = upsert_activity(&mut doc, form, 4_000);

        assert_eq!(id, target);
        assert_eq!(doc.kegiatan.len(), 3);
        // Position preserved: "second" sat in the middle after "third" arrived.
        assert_eq!(doc.kegiatan[1].id, target);
        assert_eq!(doc.kegiatan[1].title, "second v2");
        assert_eq!(doc.kegiatan[1].date, "2025-02-02");
    }

    #[test]
    fn upsert_with_unknown_id_falls_back_to_insert() {
        let mut doc = empty_doc();
        let form = ActivityForm {
            id: Some(999),
            ..activity_form("ghost")
        };
        let id = upsert_activity(&mut doc, form, 5_000);

        assert_ne!(id, 999);
        assert_eq!(doc.kegiatan.len(), 1);
        assert_eq!(doc.kegiatan[0].id, id);
    }

    #[test]
    fn upsert_sequence_keeps_ids_unique() {
        let mut doc = empty_doc();
        // Same clock value every time: the monotonic bump must still hand out
        // distinct ids.
        for i in 0..5 {
            upsert_activity(&mut doc, activity_form(&format!("a{i}")), 42);
        }

        let mut ids: Vec<i64> = doc.kegiatan.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn upsert_meeting_mirrors_activity_lifecycle() {
        let mut doc = empty_doc();
        let form = MeetingForm {
            id: None,
            title: "Rapat".to_string(),
            date: "2025-03-01".to_string(),
            time: Some("19:00".to_string()),
            notes: "n".to_string(),
        };
        let id = upsert_meeting(&mut doc, form.clone(), 1_000);
        assert_eq!(doc.rapat[0].id, id);

        let edited = MeetingForm {
            id: Some(id),
            time: None,
            notes: "edited".to_string(),
            ..form
        };
        upsert_meeting(&mut doc, edited, 2_000);
        assert_eq!(doc.rapat.len(), 1);
        assert_eq!(doc.rapat[0].time, None);
        assert_eq!(doc.rapat[0].notes, "edited");
    }

    #[test]
    fn balance_of_empty_ledger_is_zero() {
        let doc = empty_doc();
        assert_eq!(compute_balance(&doc), BalanceSummary::default());
    }

    #[test]
    fn balance_of_seed_ledger_matches_totals() {
        let doc = OrgDocument::seed();
        let b = compute_balance(&doc);
        assert_eq!(b.total_in, 200_000);
        assert_eq!(b.total_out, 50_000);
        assert_eq!(b.balance, 150_000);
    }

    #[test]
    fn delete_ledger_entry_unknown_id_is_a_noop() {
        let mut doc = OrgDocument::seed();
        let before = doc.kas.clone();
        delete_ledger_entry(&mut doc, 12_345);
        assert_eq!(doc.kas, before);
    }

    #[test]
    fn delete_removes_only_the_matching_id() {
        let mut doc = empty_doc();
        let keep = upsert_activity(&mut doc, activity_form("keep"), 1_000);
        let drop = upsert_activity(&mut doc, activity_form("drop"), 2_000);

        delete_activity(&mut doc, drop);
        assert_eq!(doc.kegiatan.len(), 1);
        assert_eq!(doc.kegiatan[0].id, keep);

        delete_meeting(&mut doc, 1); // empty list, still fine
        assert!(doc.rapat.is_empty());
    }

    #[test]
    fn add_ledger_entry_always_inserts_at_front() {
        let mut doc = OrgDocument::seed();
        let form = LedgerEntryForm {
            date: "2025-09-01".to_string(),
            desc: "Donasi".to_string(),
            entry_type: EntryType::In,
            amount: 75_000,
        };
        let id = add_ledger_entry(&mut doc, form, i64::MAX - 1);
        assert_eq!(doc.kas[0].id, id);
        assert_eq!(doc.kas.len(), 3);
        assert_eq!(compute_balance(&doc).balance, 225_000);
    }

    #[test]
    fn authenticate_is_exact_and_case_sensitive() {
        let doc = OrgDocument::seed();
        assert!(authenticate(&doc, "admin123"));
        assert!(!authenticate(&doc, "wrong"));
        assert!(!authenticate(&doc, "Admin123"));
        assert!(!authenticate(&doc, ""));
    }

    #[test]
    fn change_admin_password_overwrites_directly() {
        let mut doc = OrgDocument::seed();
        change_admin_password(&mut doc, "rahasia");
        assert!(!authenticate(&doc, "admin123"));
        assert!(authenticate(&doc, "rahasia"));
    }

    #[test]
    fn export_import_round_trips_deep_equal() {
        let mut doc = OrgDocument::seed();
        upsert_activity(&mut doc, activity_form("extra"), 9_000);

        let json = export_json(&doc).expect("document should serialize");
        let back = parse_document(&json).expect("exported document should parse");
        assert_eq!(back, doc);
    }

    #[test]
    fn parse_document_rejects_garbage() {
        assert!(parse_document("not json at all").is_err());
        assert!(parse_document("{\"kegiatan\": 3}").is_err());
    }

    #[test]
    fn parse_document_tolerates_missing_lists() {
        // Imports are trusted after a successful parse; absent lists read as
        // empty rather than breaking downstream pages.
        let doc = parse_document(r#"{"meta":{"name":"X","address":"","tagline":""}}"#)
            .expect("partial document should parse");
        assert!(doc.kas.is_empty());
        assert!(doc.kegiatan.is_empty());
        assert_eq!(doc.settings.admin_password, "admin123");
    }

    #[test]
    fn csv_export_matches_seed_ledger() {
        let csv = export_ledger_csv(&OrgDocument::seed());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Tanggal,Deskripsi,Tipe,Nominal",
                "2025-08-01,\"Iuran anggota\",in,200000",
                "2025-08-15,\"Beli alat kebersihan\",out,50000",
            ]
        );
    }

    #[test]
    fn csv_export_of_empty_ledger_is_header_only() {
        let doc = empty_doc();
        assert_eq!(export_ledger_csv(&doc), "Tanggal,Deskripsi,Tipe,Nominal\n");
    }

    #[test]
    fn document_wire_shape_is_stable() {
        let json = export_json(&OrgDocument::seed()).expect("should serialize");
        let v: serde_json::Value = serde_json::from_str(&json).expect("should re-parse");
        assert_eq!(v["settings"]["adminPassword"], "admin123");
        assert_eq!(v["kas"][0]["type"], "in");
        assert_eq!(v["kas"][0]["desc"], "Iuran anggota");
        assert!(v["kegiatan"][0]["description"].is_string());
    }
}
