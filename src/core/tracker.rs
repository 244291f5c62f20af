use std::sync::Arc;

use crate::core::services::sample_data;
use crate::domain::budget::BudgetCategory;
use crate::domain::goal::SavingsGoal;
use crate::domain::transaction::Transaction;
use crate::store::collection::{Collection, InsertPosition};
use crate::store::memory::MemoryBackend;
use crate::store::{Result, Store, StoreBackend, BUDGETS_KEY, GOALS_KEY, TRANSACTIONS_KEY};

/// Facade that binds an injected store backend to the three persisted
/// collections.
pub struct Tracker {
    store: Arc<Store>,
    transactions: Collection<Transaction>,
    budgets: Collection<BudgetCategory>,
    goals: Collection<SavingsGoal>,
}

impl Tracker {
    pub fn new(backend: Box<dyn StoreBackend>) -> Self {
        let store = Store::new(backend);
        Self {
            transactions: Collection::new(
                Arc::clone(&store),
                TRANSACTIONS_KEY,
                InsertPosition::Head,
            ),
            budgets: Collection::new(Arc::clone(&store), BUDGETS_KEY, InsertPosition::Tail),
            goals: Collection::new(Arc::clone(&store), GOALS_KEY, InsertPosition::Tail),
            store,
        }
    }

    /// Tracker over an ephemeral in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn transactions(&self) -> &Collection<Transaction> {
        &self.transactions
    }

    pub fn budgets(&self) -> &Collection<BudgetCategory> {
        &self.budgets
    }

    pub fn goals(&self) -> &Collection<SavingsGoal> {
        &self.goals
    }

    pub fn has_any_data(&self) -> Result<bool> {
        Ok(!self.transactions.read()?.is_empty()
            || !self.budgets.read()?.is_empty()
            || !self.goals.read()?.is_empty())
    }

    /// Bulk-loads the demo seed set, replacing all three collections.
    pub fn load_sample_data(&self) -> Result<()> {
        let seed = sample_data::sample_set();
        self.transactions.replace_all(seed.transactions)?;
        self.budgets.replace_all(seed.budgets)?;
        self.goals.replace_all(seed.goals)?;
        tracing::info!("sample data loaded");
        Ok(())
    }
}
