//! Integration tests for the full store lifecycle.
//!
//! Tests: Draft → JobStore → PersistenceSlot → fresh JobStore (restart)
//!
//! Verifies:
//! - A reopened store reproduces the exact collection, in order
//! - Export blobs survive a restart and re-import
//! - The file slot behaves like the in-memory slot end to end

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jobtrackr_core::{JobDraft, Status, StatusFilter};

    use crate::slot::{InMemorySlot, JsonFileSlot};
    use crate::store::JobStore;

    fn draft(company: &str, title: &str, date: &str, status: &str) -> JobDraft {
        JobDraft {
            company_name: company.to_owned(),
            job_title: title.to_owned(),
            date_applied: date.to_owned(),
            status: status.to_owned(),
        }
    }

    fn populate(store: &mut JobStore) {
        store
            .create(&draft("Acme Corp", "Backend Engineer", "2026-01-05", "applied"))
            .unwrap();
        store
            .create(&draft("Globex", "Platform Engineer", "2026-01-12", "interview"))
            .unwrap();
        store
            .create(&draft("Initech", "SRE", "2026-02-02", "offer"))
            .unwrap();
    }

    #[test]
    fn reopening_over_the_same_slot_reproduces_the_collection() {
        let slot = Arc::new(InMemorySlot::new());

        let mut store = JobStore::open(Arc::clone(&slot));
        populate(&mut store);
        let before = store.records().to_vec();
        drop(store);

        let reopened = JobStore::open(Arc::clone(&slot));
        assert_eq!(reopened.records(), before.as_slice());
        assert_eq!(reopened.filter(), StatusFilter::All);
    }

    #[test]
    fn file_slot_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let slot = JsonFileSlot::in_dir(dir.path());

        let mut store = JobStore::open(slot.clone());
        populate(&mut store);
        store
            .create(&draft("Umbrella", "Data Engineer", "2026-02-20", "rejected"))
            .unwrap();
        let before = store.records().to_vec();
        drop(store);

        let reopened = JobStore::open(slot);
        assert_eq!(reopened.records(), before.as_slice());
        assert_eq!(reopened.records()[0].company_name, "Umbrella");
        assert_eq!(reopened.statistics().total, 4);
    }

    #[test]
    fn export_from_one_store_imports_into_another() {
        let mut source = JobStore::open(InMemorySlot::new());
        populate(&mut source);
        let blob = source.export_all().unwrap();

        let target_slot = Arc::new(InMemorySlot::new());
        let mut target = JobStore::open(Arc::clone(&target_slot));
        target
            .create(&draft("Old Corp", "Analyst", "2025-12-01", "applied"))
            .unwrap();

        let count = target.import_all(&blob).unwrap();
        assert_eq!(count, 3);
        assert_eq!(target.records(), source.records());
        // The slot mirrors the overwrite immediately.
        assert_eq!(target_slot.snapshot(), source.records());
    }

    #[test]
    fn full_edit_session_persists_each_step() {
        let slot = Arc::new(InMemorySlot::new());
        let mut store = JobStore::open(Arc::clone(&slot));

        let created = store
            .create(&draft("Acme Corp", "Backend Engineer", "2026-01-05", "applied"))
            .unwrap();
        assert_eq!(slot.snapshot().len(), 1);

        let mut edit = JobDraft::from_record(&created);
        edit.status = "interview".to_owned();
        store.update(&created.id, &edit).unwrap().unwrap();
        assert_eq!(slot.snapshot()[0].status, Status::Interview);

        store.remove(&created.id).unwrap();
        assert!(slot.snapshot().is_empty());
    }
}
