//! Browser-side roster: the member store over `localStorage`.

use core_types::{Member, MemberPatch, NewMember};
use roster_store::{
    LoadSource, MemberStore, MemorySlot, StorageError, StorageSlot, StoreConfig, StoreError,
    SubscriptionId,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

/// Slot stored under one `localStorage` key.
pub struct BrowserSlot {
    storage: web_sys::Storage,
    key: String,
}

impl BrowserSlot {
    /// Bind to the window's local storage, if the browser exposes it.
    pub fn open(config: &StoreConfig) -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .ok_or_else(|| StorageError::Backend("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Backend("localStorage unavailable".to_string()))?;

        Ok(Self {
            storage,
            key: config.storage_key.clone(),
        })
    }
}

impl StorageSlot for BrowserSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        self.storage.get_item(&self.key).map_err(js_error)
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        self.storage.set_item(&self.key, contents).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Backend(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

type Store = MemberStore<Box<dyn StorageSlot>>;

/// Shared handle to the page's single member store.
///
/// Handles compare equal when they point at the same store.
#[derive(Clone)]
pub struct RosterHandle(Rc<RefCell<Store>>);

impl PartialEq for RosterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl RosterHandle {
    /// Open the roster from local storage.
    ///
    /// If local storage cannot be used the roster lives in memory for this
    /// page view only.
    pub fn open(config: &StoreConfig) -> Self {
        let slot: Box<dyn StorageSlot> = match BrowserSlot::open(config) {
            Ok(slot) => Box::new(slot),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Local storage unavailable, roster will not persist: {e}").into(),
                );
                Box::new(MemorySlot::new())
            }
        };

        Self(Rc::new(RefCell::new(MemberStore::open(slot))))
    }

    pub fn snapshot(&self) -> Vec<Member> {
        self.0.borrow().members().to_vec()
    }

    pub fn load_source(&self) -> LoadSource {
        self.0.borrow().load_source()
    }

    pub fn get(&self, id: &str) -> Option<Member> {
        self.0.borrow().get_by_id(id).cloned()
    }

    pub fn add(&self, input: NewMember) -> Result<Member, StoreError> {
        self.0.borrow_mut().add(input)
    }

    pub fn update(&self, id: &str, patch: &MemberPatch) -> Result<Member, StoreError> {
        self.0.borrow_mut().update(id, patch)
    }

    pub fn delete(&self, id: &str) -> Result<Member, StoreError> {
        self.0.borrow_mut().delete(id)
    }

    pub fn subscribe(&self, callback: impl Fn(&[Member]) + 'static) -> SubscriptionId {
        self.0.borrow_mut().subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.0.borrow_mut().unsubscribe(id);
    }
}
