pub mod budget_service;
pub mod goal_service;
pub mod sample_data;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use goal_service::GoalService;
pub use transaction_service::TransactionService;

use crate::errors::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Invalid(String),
}
