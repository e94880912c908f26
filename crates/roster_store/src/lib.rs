//! Team roster store for the dashboard.
//!
//! This crate owns the canonical, ordered member collection and mirrors
//! it to a persistent slot on every mutation. Mutations are staged on a
//! copy and only committed once the slot write succeeds, so a failed
//! write never changes what the caller sees.

mod slot;

pub use slot::{FileSlot, MemorySlot, StorageError, StorageSlot};

use core_types::{Member, MemberPatch, NewMember, seed_members};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from the roster store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Member not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Configuration for where the roster is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Slot key (default: teamMembers)
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: "teamMembers".to_string(),
        }
    }
}

/// Where the roster came from when the store was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the slot.
    Persisted,
    /// The slot was empty; seed data was used.
    Seeded,
    /// The slot held unparsable data; seed data was used instead.
    Recovered,
    /// The slot could not be read; seed data was used instead.
    Unavailable,
}

/// Handle returned by [`MemberStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&[Member])>;

/// Serialize a roster into the persisted layout.
pub fn encode(members: &[Member]) -> Result<String> {
    Ok(serde_json::to_string(members)?)
}

/// Parse a roster from the persisted layout.
pub fn decode(json: &str) -> Result<Vec<Member>> {
    Ok(serde_json::from_str(json)?)
}

/// Ordered member collection mirrored to a [`StorageSlot`].
pub struct MemberStore<S: StorageSlot> {
    slot: S,
    members: Vec<Member>,
    next_id: u64,
    source: LoadSource,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: StorageSlot> MemberStore<S> {
    /// Load the roster from `slot`, falling back to seed data.
    ///
    /// Opening never fails: an unreadable slot or unparsable contents fall
    /// back to the seed roster, reported through [`MemberStore::load_source`].
    /// The loaded roster is written back once; a failure of that write is
    /// logged and the store still opens with the loaded roster.
    pub fn open(slot: S) -> Self {
        let (members, source) = match slot.read() {
            Ok(None) => (seed_members(), LoadSource::Seeded),
            Ok(Some(json)) => match decode(&json) {
                Ok(members) => (members, LoadSource::Persisted),
                Err(e) => {
                    warn!(error = %e, "persisted roster is unreadable, using seed data");
                    (seed_members(), LoadSource::Recovered)
                }
            },
            Err(e) => {
                warn!(error = %e, "roster slot could not be read, using seed data");
                (seed_members(), LoadSource::Unavailable)
            }
        };

        let mut store = Self {
            slot,
            next_id: next_numeric_id(&members),
            members,
            source,
            subscribers: Vec::new(),
            next_subscription: 0,
        };

        let loaded = store.members.clone();
        if let Err(e) = store.persist(&loaded) {
            warn!(error = %e, "failed to write roster on open");
        }

        info!(count = store.members.len(), source = ?source, "roster store opened");
        store
    }

    /// Current roster snapshot, in insertion order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// How the roster was obtained when the store opened.
    pub fn load_source(&self) -> LoadSource {
        self.source
    }

    /// The backing slot.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Get a member by ID.
    pub fn get_by_id(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Create a member from form input and append it.
    pub fn add(&mut self, input: NewMember) -> Result<Member> {
        let member = Member::from_new(self.next_id.to_string(), input);

        let mut staged = self.members.clone();
        staged.push(member.clone());
        self.commit(staged)?;

        self.next_id += 1;
        Ok(member)
    }

    /// Merge `patch` into the member with `id`.
    pub fn update(&mut self, id: &str, patch: &MemberPatch) -> Result<Member> {
        let index = self.position(id)?;

        let mut staged = self.members.clone();
        patch.apply(&mut staged[index]);
        let member = staged[index].clone();
        self.commit(staged)?;

        Ok(member)
    }

    /// Remove the member with `id`, returning the removed record.
    pub fn delete(&mut self, id: &str) -> Result<Member> {
        let index = self.position(id)?;

        let mut staged = self.members.clone();
        let removed = staged.remove(index);
        self.commit(staged)?;

        Ok(removed)
    }

    /// Register a callback invoked with the new roster after every mutation.
    pub fn subscribe(&mut self, callback: impl Fn(&[Member]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drop a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub, _)| *sub != id);
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn commit(&mut self, staged: Vec<Member>) -> Result<()> {
        self.persist(&staged)?;
        self.members = staged;

        for (_, subscriber) in &self.subscribers {
            subscriber(&self.members);
        }
        Ok(())
    }

    fn persist(&mut self, members: &[Member]) -> Result<()> {
        let json = encode(members)?;
        self.slot.write(&json)?;
        debug!(count = members.len(), bytes = json.len(), "roster persisted");
        Ok(())
    }
}

/// One past the largest numeric id; non-numeric ids are skipped.
fn next_numeric_id(members: &[Member]) -> u64 {
    members
        .iter()
        .filter_map(|m| m.id.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{MemberStatus, derive_avatar};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    fn seeded_store() -> MemberStore<MemorySlot> {
        MemberStore::open(MemorySlot::new())
    }

    #[test]
    fn test_open_empty_slot_uses_seed() {
        let store = seeded_store();

        assert_eq!(store.load_source(), LoadSource::Seeded);
        assert_eq!(store.members(), seed_members().as_slice());

        // Seed is written back on open
        let persisted = decode(store.slot().contents().unwrap()).unwrap();
        assert_eq!(persisted, seed_members());
    }

    #[test]
    fn test_open_reads_persisted_roster() {
        let roster = vec![Member::from_new("42".to_string(), NewMember::new("Solo", "s@x.io", "Dev"))];
        let slot = MemorySlot::with_contents(encode(&roster).unwrap());

        let store = MemberStore::open(slot);

        assert_eq!(store.load_source(), LoadSource::Persisted);
        assert_eq!(store.members(), roster.as_slice());
    }

    #[test]
    fn test_open_corrupt_slot_recovers_with_seed() {
        let store = MemberStore::open(MemorySlot::with_contents("{not json"));

        assert_eq!(store.load_source(), LoadSource::Recovered);
        assert_eq!(store.members().len(), 10);
        assert!(decode(store.slot().contents().unwrap()).is_ok());
    }

    struct BrokenSlot;

    impl StorageSlot for BrokenSlot {
        fn read(&self) -> std::result::Result<Option<String>, StorageError> {
            Err(StorageError::Backend("denied".to_string()))
        }

        fn write(&mut self, _contents: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError::Backend("denied".to_string()))
        }
    }

    #[test]
    fn test_open_unreadable_slot_uses_seed() {
        let mut store = MemberStore::open(BrokenSlot);

        assert_eq!(store.load_source(), LoadSource::Unavailable);
        assert_eq!(store.members().len(), 10);
        assert!(matches!(
            store.delete("1"),
            Err(StoreError::Storage(StorageError::Backend(_)))
        ));
        assert!(store.get_by_id("1").is_some());
    }

    #[test]
    fn test_open_survives_failed_write_back() {
        let store = MemberStore::open(MemorySlot::new().with_capacity(0));

        assert_eq!(store.members().len(), 10);
        assert!(store.slot().contents().is_none());
    }

    #[test]
    fn test_add_assigns_next_id_and_avatar() {
        let mut store = seeded_store();

        let added = store
            .add(NewMember::new("grace brewster hopper", "grace@navy.mil", "Admiral"))
            .unwrap();

        assert_eq!(added.id, "11");
        assert_eq!(added.avatar, "GH");
        assert_eq!(added.status, MemberStatus::Active);
        assert_eq!(store.get_by_id("11"), Some(&added));
        assert_eq!(store.members().last(), Some(&added));
    }

    #[test]
    fn test_add_avatar_matches_derived_initials() {
        let mut store = seeded_store();

        for name in ["a", "Bo Li", "élodie  martin", "x y z"] {
            let added = store.add(NewMember::new(name, "e@x.io", "Role")).unwrap();
            let found = store.get_by_id(&added.id).unwrap();
            assert_eq!(found.avatar, derive_avatar(name));
        }
    }

    #[test]
    fn test_add_persists_whole_roster() {
        let mut store = seeded_store();

        store.add(NewMember::new("New Person", "n@x.io", "QA")).unwrap();

        let persisted = decode(store.slot().contents().unwrap()).unwrap();
        assert_eq!(persisted, store.members());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = seeded_store();

        let first = store.add(NewMember::new("One", "1@x.io", "R")).unwrap();
        store.delete(&first.id).unwrap();
        let second = store.add(NewMember::new("Two", "2@x.io", "R")).unwrap();

        assert_eq!(first.id, "11");
        assert_eq!(second.id, "12");
    }

    #[test]
    fn test_non_numeric_ids_ignored_for_next_id() {
        let roster = vec![
            Member::from_new("abc".to_string(), NewMember::new("A", "a@x.io", "R")),
            Member::from_new("3".to_string(), NewMember::new("B", "b@x.io", "R")),
        ];
        let mut store = MemberStore::open(MemorySlot::with_contents(encode(&roster).unwrap()));

        let added = store.add(NewMember::new("C", "c@x.io", "R")).unwrap();

        assert_eq!(added.id, "4");
    }

    #[test]
    fn test_next_numeric_id_empty_roster() {
        assert_eq!(next_numeric_id(&[]), 1);
    }

    #[test]
    fn test_update_changes_only_role() {
        let mut store = seeded_store();
        let before = store.get_by_id("4").unwrap().clone();

        let updated = store.update("4", &MemberPatch::role("X")).unwrap();

        assert_eq!(updated.role, "X");
        assert_eq!(updated, Member { role: "X".to_string(), ..before });
        assert_eq!(store.get_by_id("4"), Some(&updated));
    }

    #[test]
    fn test_update_missing_id_is_reported_and_changes_nothing() {
        let mut store = seeded_store();
        let before = store.members().to_vec();
        let persisted_before = store.slot().contents().map(str::to_string);

        let err = store.update("999", &MemberPatch::role("X")).unwrap_err();

        assert!(matches!(err, StoreError::NotFound(ref id) if id == "999"));
        assert_eq!(store.members(), before.as_slice());
        assert_eq!(store.slot().contents().map(str::to_string), persisted_before);
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let mut store = seeded_store();
        let added = store.add(NewMember::new("Temp", "t@x.io", "R")).unwrap();

        let removed = store.delete(&added.id).unwrap();

        assert_eq!(removed, added);
        assert!(store.get_by_id(&added.id).is_none());
        assert_eq!(store.members().len(), 10);
    }

    #[test]
    fn test_delete_missing_id_is_reported() {
        let mut store = seeded_store();

        assert!(matches!(store.delete("nope"), Err(StoreError::NotFound(_))));
        assert_eq!(store.members().len(), 10);
    }

    #[test]
    fn test_failed_write_keeps_in_memory_state() {
        let roster = vec![Member::from_new("1".to_string(), NewMember::new("A", "a@x.io", "R"))];
        let json = encode(&roster).unwrap();
        let slot = MemorySlot::with_contents(json.clone()).with_capacity(json.len());
        let mut store = MemberStore::open(slot);

        let err = store.add(NewMember::new("Bee Cee", "b@x.io", "R")).unwrap_err();

        assert!(matches!(
            err,
            StoreError::Storage(StorageError::QuotaExceeded { .. })
        ));
        assert_eq!(store.members(), roster.as_slice());
        assert_eq!(store.slot().contents(), Some(json.as_str()));

        // The id was not consumed by the failed add
        store.delete("1").unwrap();
        let added = store.add(NewMember::new("D", "d@x.io", "R")).unwrap();
        assert_eq!(added.id, "2");
    }

    #[test]
    fn test_subscribers_see_committed_snapshot() {
        let mut store = seeded_store();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sub = {
            let seen = seen.clone();
            store.subscribe(move |members| seen.borrow_mut().push(members.len()))
        };

        store.add(NewMember::new("A", "a@x.io", "R")).unwrap();
        store.delete("1").unwrap();
        let _ = store.delete("1");
        store.unsubscribe(sub);
        store.add(NewMember::new("B", "b@x.io", "R")).unwrap();

        assert_eq!(*seen.borrow(), vec![11, 10]);
    }

    #[test]
    fn test_roundtrip_preserves_order_and_values() {
        let mut members = seed_members();
        members.reverse();
        members[0].status = MemberStatus::Inactive;
        members[1].teams.clear();

        let decoded = decode(&encode(&members).unwrap()).unwrap();

        assert_eq!(decoded, members);
    }

    #[test]
    fn test_file_backed_store_reopens() {
        let temp = tempdir().unwrap();
        let config = StoreConfig::default();

        {
            let mut store = MemberStore::open(FileSlot::in_dir(temp.path(), &config));
            store.add(NewMember::new("Kept Member", "k@x.io", "R")).unwrap();
            store.delete("2").unwrap();
        }

        let store = MemberStore::open(FileSlot::in_dir(temp.path(), &config));

        assert_eq!(store.load_source(), LoadSource::Persisted);
        assert_eq!(store.members().len(), 10);
        assert!(store.get_by_id("2").is_none());
        assert_eq!(store.get_by_id("11").map(|m| m.avatar.as_str()), Some("KM"));
    }
}
