//! Business logic helpers for savings goals.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::core::Tracker;
use crate::domain::goal::{SavingsGoal, DEFAULT_GOAL_COLOR};

/// Provides validated create/contribute/remove helpers for goals.
pub struct GoalService;

impl GoalService {
    /// Creates a goal with a zero starting amount.
    pub fn create(
        tracker: &Tracker,
        name: &str,
        target_amount: f64,
        deadline: &str,
    ) -> ServiceResult<SavingsGoal> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::Invalid("Goal name is required".into()));
        }
        if !target_amount.is_finite() || target_amount <= 0.0 {
            return Err(ServiceError::Invalid(
                "Target amount must be a positive number".into(),
            ));
        }
        if deadline.trim().is_empty() {
            return Err(ServiceError::Invalid("Target date is required".into()));
        }
        let goal = SavingsGoal::new(name, target_amount, deadline.trim(), DEFAULT_GOAL_COLOR);
        tracker.goals().append(goal.clone())?;
        tracing::debug!(id = %goal.id, name, "savings goal created");
        Ok(goal)
    }

    /// Adds funds to a goal; the running amount only ever grows here.
    pub fn contribute(tracker: &Tracker, id: Uuid, amount: f64) -> ServiceResult<()> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ServiceError::Invalid(
                "Amount must be a positive number".into(),
            ));
        }
        let updated = tracker
            .goals()
            .update_by_id(id, |goal| goal.current_amount += amount)?;
        if !updated {
            return Err(ServiceError::Invalid("Savings goal not found".into()));
        }
        Ok(())
    }

    pub fn remove(tracker: &Tracker, id: Uuid) -> ServiceResult<bool> {
        Ok(tracker.goals().remove_by_id(id)?)
    }

    pub fn list(tracker: &Tracker) -> ServiceResult<Vec<SavingsGoal>> {
        Ok(tracker.goals().read()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_starts_at_zero_with_default_color() {
        let tracker = Tracker::in_memory();
        let goal = GoalService::create(&tracker, "Emergency Fund", 5000.0, "2025-12-31").unwrap();
        assert_eq!(goal.current_amount, 0.0);
        assert_eq!(goal.color, DEFAULT_GOAL_COLOR);
    }

    #[test]
    fn create_validates_every_required_field() {
        let tracker = Tracker::in_memory();
        assert!(GoalService::create(&tracker, " ", 5000.0, "2025-12-31").is_err());
        assert!(GoalService::create(&tracker, "Fund", 0.0, "2025-12-31").is_err());
        assert!(GoalService::create(&tracker, "Fund", -1.0, "2025-12-31").is_err());
        assert!(GoalService::create(&tracker, "Fund", 5000.0, "").is_err());
        assert!(GoalService::list(&tracker).unwrap().is_empty());
    }

    #[test]
    fn contributions_accumulate_in_place() {
        let tracker = Tracker::in_memory();
        let goal = GoalService::create(&tracker, "Vacation", 2000.0, "2025-12-31").unwrap();
        GoalService::contribute(&tracker, goal.id, 450.0).unwrap();
        GoalService::contribute(&tracker, goal.id, 50.0).unwrap();

        let goals = GoalService::list(&tracker).unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].current_amount, 500.0);
    }

    #[test]
    fn contribute_rejects_bad_amounts_and_unknown_goals() {
        let tracker = Tracker::in_memory();
        let goal = GoalService::create(&tracker, "Vacation", 2000.0, "2025-12-31").unwrap();
        assert!(GoalService::contribute(&tracker, goal.id, 0.0).is_err());
        assert!(GoalService::contribute(&tracker, goal.id, -10.0).is_err());

        let err = GoalService::contribute(&tracker, Uuid::new_v4(), 10.0)
            .expect_err("unknown goal must fail");
        assert!(matches!(err, ServiceError::Invalid(ref message) if message.contains("not found")));
    }
}
