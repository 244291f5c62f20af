//! Business logic helpers for budget categories.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::core::Tracker;
use crate::domain::budget::BudgetCategory;
use crate::domain::catalog;

/// Provides validated create/remove/list helpers for budgets.
pub struct BudgetService;

impl BudgetService {
    /// Creates a budget category, rejecting duplicate names. The display
    /// color is resolved from the expense catalog at write time.
    pub fn create(tracker: &Tracker, name: &str, limit: f64) -> ServiceResult<BudgetCategory> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::Invalid("Category name is required".into()));
        }
        if !limit.is_finite() || limit <= 0.0 {
            return Err(ServiceError::Invalid(
                "Limit must be a positive number".into(),
            ));
        }
        let budgets = tracker.budgets().read()?;
        if budgets.iter().any(|budget| budget.name == name) {
            return Err(ServiceError::Invalid(format!(
                "Budget category `{name}` already exists"
            )));
        }
        let budget = BudgetCategory::new(name, limit, catalog::expense_color(name));
        tracker.budgets().append(budget.clone())?;
        tracing::debug!(id = %budget.id, name, "budget category created");
        Ok(budget)
    }

    pub fn remove(tracker: &Tracker, id: Uuid) -> ServiceResult<bool> {
        Ok(tracker.budgets().remove_by_id(id)?)
    }

    pub fn list(tracker: &Tracker) -> ServiceResult<Vec<BudgetCategory>> {
        Ok(tracker.budgets().read()?)
    }
}
