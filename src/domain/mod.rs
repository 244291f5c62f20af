//! Domain models for transactions, budget categories, and savings goals.

pub mod budget;
pub mod catalog;
pub mod common;
pub mod goal;
pub mod transaction;

pub use budget::BudgetCategory;
pub use catalog::{CategoryColor, EXPENSE_CATEGORIES, FALLBACK_COLOR, INCOME_CATEGORIES};
pub use common::{Identifiable, NamedEntity};
pub use goal::SavingsGoal;
pub use transaction::{Transaction, TransactionKind};
