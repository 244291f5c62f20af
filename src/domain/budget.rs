use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, NamedEntity};

/// A monthly spending guardrail for one category name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategory {
    pub id: Uuid,
    /// Unique among budgets at creation time (checked at write, not at rest).
    pub name: String,
    pub limit: f64,
    pub color: String,
    /// Legacy stored figure kept for payload compatibility. Displays always
    /// recompute live spending from matching transactions.
    #[serde(default)]
    pub spent: f64,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, limit: f64, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            limit,
            color: color.into(),
            spent: 0.0,
        }
    }
}

impl Identifiable for BudgetCategory {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for BudgetCategory {
    fn name(&self) -> &str {
        &self.name
    }
}
