use crate::utils::storage as storage_utils;
use std::sync::Arc;

/// The two credential slots this client persists. Nothing else is stored
/// locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenSlot {
    Admin,
    Employee,
}

impl TokenSlot {
    pub fn storage_key(self) -> &'static str {
        match self {
            TokenSlot::Admin => "adminToken",
            TokenSlot::Employee => "employeeToken",
        }
    }
}

/// Narrow interface over token storage so flows can distinguish "explicit
/// rejection clears the token" from "transport failure keeps it" without
/// reaching into `localStorage` directly.
pub trait TokenStore: Send + Sync {
    fn get(&self, slot: TokenSlot) -> Option<String>;
    fn set(&self, slot: TokenSlot, token: &str);
    fn clear(&self, slot: TokenSlot);
}

pub type SharedTokens = Arc<dyn TokenStore>;

/// `localStorage`-backed store used in the browser. Resolves the window on
/// every call; absence of storage degrades to "no token".
#[derive(Clone, Copy, Default)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn get(&self, slot: TokenSlot) -> Option<String> {
        let storage = storage_utils::local_storage().ok()?;
        storage.get_item(slot.storage_key()).ok().flatten()
    }

    fn set(&self, slot: TokenSlot, token: &str) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.set_item(slot.storage_key(), token);
        }
    }

    fn clear(&self, slot: TokenSlot) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(slot.storage_key());
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use memory::MemoryTokens;


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemoryTokens::default();
        assert!(store.get(TokenSlot::Admin).is_none());
        store.set(TokenSlot::Admin, "tok-a");
        store.set(TokenSlot::Employee, "tok-e");
        assert_eq!(store.get(TokenSlot::Admin).as_deref(), Some("tok-a"));
        store.clear(TokenSlot::Admin);
        assert!(store.get(TokenSlot::Admin).is_none());
        assert_eq!(store.get(TokenSlot::Employee).as_deref(), Some("tok-e"));
    }

    #[test]
    fn slots_map_to_distinct_storage_keys() {
        assert_eq!(TokenSlot::Admin.storage_key(), "adminToken");
        assert_eq!(TokenSlot::Employee.storage_key(), "employeeToken");
    }
}
