// 🗄️ Receipt Store - Identity → Receipt
// UUID keys, shared in-memory map, no persistence

use crate::error::ReceiptError;
use crate::receipt::Receipt;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// ReceiptStore - put/get by opaque key
///
/// Implementations must make a `put` visible to every later `get` with the
/// returned key, and must never hand out the same key twice.
pub trait ReceiptStore: Send + Sync {
    /// Store a receipt under a freshly generated key and return the key
    fn put(&self, receipt: Receipt) -> String;

    /// Fetch a receipt, or `UnknownKey`
    fn get(&self, key: &str) -> Result<Arc<Receipt>, ReceiptError>;

    /// Number of stored receipts
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store; clones share the same map
#[derive(Clone, Default)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<String, Arc<Receipt>>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, receipt: Receipt) -> String {
        let receipt = Arc::new(receipt);
        let mut receipts = self.receipts.write();

        loop {
            let key = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = receipts.entry(key.clone()) {
                slot.insert(receipt);
                return key;
            }
        }
    }

    fn get(&self, key: &str) -> Result<Arc<Receipt>, ReceiptError> {
        self.receipts
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| ReceiptError::UnknownKey(key.to_string()))
    }

    fn len(&self) -> usize {
        self.receipts.read().len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
