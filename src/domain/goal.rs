use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, NamedEntity};

/// Default accent color for newly created goals.
pub const DEFAULT_GOAL_COLOR: &str = "#22c55e";

/// A savings target with a deadline and a running contributed amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    /// Starts at zero and grows through contributions.
    pub current_amount: f64,
    /// Calendar date string, nominally `YYYY-MM-DD`.
    pub deadline: String,
    pub color: String,
}

impl SavingsGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        deadline: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            deadline: deadline.into(),
            color: color.into(),
        }
    }

    pub fn with_current_amount(mut self, amount: f64) -> Self {
        self.current_amount = amount;
        self
    }
}

impl Identifiable for SavingsGoal {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for SavingsGoal {
    fn name(&self) -> &str {
        &self.name
    }
}
