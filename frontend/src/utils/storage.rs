use web_sys::{window, Storage};

use crate::error::StoreError;
use crate::state::theme::PreferenceStore;

/// One `localStorage` slot.
pub struct LocalStore {
    key: &'static str,
}

impl LocalStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Result<Storage, StoreError> {
        window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|_| StoreError::Unavailable)?
            .ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(self.key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(self.key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
