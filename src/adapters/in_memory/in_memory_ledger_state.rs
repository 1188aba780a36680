// In memory implementation of the LedgerState port.
//
// Purpose
// - Stand in for the host-managed world state in handler tests and local
//   serving. The real store sits behind the host's contract runtime.
//
// Responsibilities
// - Keep key/value pairs in memory; a repeated put overwrites.
// - Reject the empty key, which a host store reports as an invalid key.
// - Simulate an unavailable store through the offline toggle.

use crate::core::ports::{LedgerState, LedgerStateError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryLedgerState {
    inner: RwLock<HashMap<String, Vec<u8>>>,
    offline: AtomicBool,
}

impl InMemoryLedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), LedgerStateError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(LedgerStateError::Backend("ledger state offline".to_string()));
        }
        Ok(())
    }

    fn check_key(key: &str) -> Result<(), LedgerStateError> {
        if key.is_empty() {
            return Err(LedgerStateError::InvalidKey("empty key".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl LedgerState for InMemoryLedgerState {
    async fn put_state(&self, key: &str, value: &[u8]) -> Result<(), LedgerStateError> {
        self.check_available()?;
        Self::check_key(key)?;
        let mut guard = self.inner.write().await;
        guard.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerStateError> {
        self.check_available()?;
        Self::check_key(key)?;
        let guard = self.inner.read().await;
        Ok(guard.get(key).cloned())
    }
}
