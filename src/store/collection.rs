use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::{Result, Store, SubscriberId};
use crate::domain::common::Identifiable;

/// Where `append` places new entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Most-recent-first; the transaction list relies on this ordering.
    Head,
    Tail,
}

/// Typed, ordered view over a single store key.
pub struct Collection<T> {
    store: Arc<Store>,
    key: &'static str,
    position: InsertPosition,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Identifiable,
{
    pub fn new(store: Arc<Store>, key: &'static str, position: InsertPosition) -> Self {
        Self {
            store,
            key,
            position,
            _entity: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Current snapshot; a missing key reads as an empty collection.
    pub fn read(&self) -> Result<Vec<T>> {
        match self.store.read_raw(self.key)? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn append(&self, entity: T) -> Result<()> {
        let position = self.position;
        self.mutate(move |entries| {
            match position {
                InsertPosition::Head => entries.insert(0, entity),
                InsertPosition::Tail => entries.push(entity),
            }
            true
        })?;
        Ok(())
    }

    /// Replaces the whole collection (bulk sample-data loading).
    pub fn replace_all(&self, entities: Vec<T>) -> Result<()> {
        let payload = serde_json::to_string(&entities)?;
        self.store.write_raw(self.key, &payload)
    }

    /// Applies `patch` to the matching entry in place. Returns `false` when
    /// the id is absent.
    pub fn update_by_id<F>(&self, id: Uuid, patch: F) -> Result<bool>
    where
        F: FnOnce(&mut T),
    {
        self.mutate(move |entries| match entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                patch(entry);
                true
            }
            None => false,
        })
    }

    /// Removes the matching entry. Removing an absent id is a no-op, not an
    /// error.
    pub fn remove_by_id(&self, id: Uuid) -> Result<bool> {
        self.mutate(move |entries| {
            let before = entries.len();
            entries.retain(|e| e.id() != id);
            entries.len() != before
        })
    }

    /// Change notification for this collection's key.
    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.store.subscribe(self.key, callback)
    }

    fn mutate<F>(&self, apply: F) -> Result<bool>
    where
        F: FnOnce(&mut Vec<T>) -> bool,
    {
        self.store.update_raw(self.key, |current| {
            let mut entries: Vec<T> = match current {
                Some(payload) => serde_json::from_str(payload)?,
                None => Vec::new(),
            };
            if apply(&mut entries) {
                Ok(Some(serde_json::to_string(&entries)?))
            } else {
                Ok(None)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::transaction::{Transaction, TransactionKind};
    use crate::store::memory::MemoryBackend;
    use crate::store::TRANSACTIONS_KEY;

    fn collection() -> Collection<Transaction> {
        let store = Store::new(Box::new(MemoryBackend::new()));
        Collection::new(store, TRANSACTIONS_KEY, InsertPosition::Head)
    }

    fn txn(amount: f64) -> Transaction {
        Transaction::new(TransactionKind::Expense, amount, "Food", "", "2024-06-01")
    }

    #[test]
    fn missing_key_reads_as_empty() {
        assert!(collection().read().unwrap().is_empty());
    }

    #[test]
    fn append_at_head_keeps_newest_first() {
        let col = collection();
        let first = txn(1.0);
        let second = txn(2.0);
        let second_id = second.id;
        col.append(first).unwrap();
        col.append(second).unwrap();

        let entries = col.read().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second_id);
    }

    #[test]
    fn append_then_read_contains_entity_exactly_once() {
        let col = collection();
        let entity = txn(7.0);
        let id = entity.id;
        col.append(entity).unwrap();
        let entries = col.read().unwrap();
        assert_eq!(entries.iter().filter(|e| e.id == id).count(), 1);
    }

    #[test]
    fn update_by_id_patches_in_place() {
        let col = collection();
        let entity = txn(7.0);
        let id = entity.id;
        col.append(entity).unwrap();

        assert!(col.update_by_id(id, |e| e.amount = 9.0).unwrap());
        assert_eq!(col.read().unwrap()[0].amount, 9.0);
        assert!(!col.update_by_id(Uuid::new_v4(), |_| {}).unwrap());
    }

    #[test]
    fn remove_by_id_is_a_no_op_for_missing_ids() {
        let col = collection();
        let entity = txn(7.0);
        let id = entity.id;
        col.append(entity).unwrap();

        assert!(!col.remove_by_id(Uuid::new_v4()).unwrap());
        assert_eq!(col.read().unwrap().len(), 1);
        assert!(col.remove_by_id(id).unwrap());
        assert!(col.read().unwrap().is_empty());
    }

    #[test]
    fn replace_all_swaps_the_snapshot() {
        let col = collection();
        col.append(txn(1.0)).unwrap();
        col.replace_all(vec![txn(5.0), txn(6.0)]).unwrap();
        let entries = col.read().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].amount, 5.0);
    }

    #[test]
    fn mutations_notify_subscribers_once_each() {
        let col = collection();
        static NOTIFIED: AtomicUsize = AtomicUsize::new(0);
        let id = col.subscribe(|_| {
            NOTIFIED.fetch_add(1, Ordering::SeqCst);
        });

        col.append(txn(1.0)).unwrap();
        col.replace_all(vec![txn(2.0)]).unwrap();
        // Removing a missing id commits nothing and must stay silent.
        col.remove_by_id(Uuid::new_v4()).unwrap();
        assert_eq!(NOTIFIED.load(Ordering::SeqCst), 2);

        col.store.unsubscribe(id);
        col.append(txn(3.0)).unwrap();
        assert_eq!(NOTIFIED.load(Ordering::SeqCst), 2);
    }
}
