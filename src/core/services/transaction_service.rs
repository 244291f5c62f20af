//! Business logic helpers for recording and listing transactions.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::core::Tracker;
use crate::domain::transaction::{Transaction, TransactionKind};

/// Provides validated CRUD helpers for the transaction collection.
pub struct TransactionService;

impl TransactionService {
    /// Validates and records a transaction at the head of the list, returning
    /// its identifier. Nothing is written when validation fails.
    pub fn add(
        tracker: &Tracker,
        kind: TransactionKind,
        amount: f64,
        category: &str,
        description: &str,
        date: &str,
    ) -> ServiceResult<Uuid> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ServiceError::Invalid("Category is required".into()));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ServiceError::Invalid(
                "Amount must be a positive number".into(),
            ));
        }
        let txn = Transaction::new(kind, amount, category, description, date);
        let id = txn.id;
        tracker.transactions().append(txn)?;
        tracing::debug!(%id, %kind, "transaction recorded");
        Ok(id)
    }

    /// Removes by id; an absent id is a quiet no-op.
    pub fn remove(tracker: &Tracker, id: Uuid) -> ServiceResult<bool> {
        Ok(tracker.transactions().remove_by_id(id)?)
    }

    pub fn list(tracker: &Tracker) -> ServiceResult<Vec<Transaction>> {
        Ok(tracker.transactions().read()?)
    }

    /// List-view filter: optional kind plus case-insensitive search over
    /// description and category.
    pub fn list_filtered(
        tracker: &Tracker,
        kind: Option<TransactionKind>,
        search: &str,
    ) -> ServiceResult<Vec<Transaction>> {
        let needle = search.trim().to_lowercase();
        let mut entries = tracker.transactions().read()?;
        entries.retain(|txn| {
            let kind_matches = kind.map_or(true, |k| txn.kind == k);
            let search_matches = needle.is_empty()
                || txn.description.to_lowercase().contains(&needle)
                || txn.category.to_lowercase().contains(&needle);
            kind_matches && search_matches
        });
        Ok(entries)
    }
}
