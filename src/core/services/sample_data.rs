//! Demo seed set offered when every collection is empty.

use chrono::{Duration, Local, NaiveDate};

use crate::domain::budget::BudgetCategory;
use crate::domain::catalog;
use crate::domain::goal::{SavingsGoal, DEFAULT_GOAL_COLOR};
use crate::domain::transaction::{Transaction, TransactionKind};

/// One snapshot per collection, ready for `replace_all`.
pub struct SampleSet {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<BudgetCategory>,
    pub goals: Vec<SavingsGoal>,
}

pub fn sample_set() -> SampleSet {
    sample_set_on(Local::now().date_naive())
}

pub fn sample_set_on(today: NaiveDate) -> SampleSet {
    let day = |offset: i64| (today + Duration::days(offset)).format("%Y-%m-%d").to_string();
    SampleSet {
        transactions: vec![
            Transaction::new(
                TransactionKind::Income,
                3500.0,
                "Salary",
                "Monthly salary",
                day(0),
            ),
            Transaction::new(
                TransactionKind::Expense,
                1200.0,
                "Bills & Utilities",
                "Rent payment",
                day(0),
            ),
            Transaction::new(
                TransactionKind::Expense,
                45.50,
                "Food & Dining",
                "Grocery shopping",
                day(-1),
            ),
            Transaction::new(
                TransactionKind::Expense,
                25.0,
                "Transportation",
                "Gas station",
                day(-2),
            ),
        ],
        budgets: vec![
            BudgetCategory::new("Food & Dining", 400.0, catalog::expense_color("Food & Dining")),
            BudgetCategory::new(
                "Transportation",
                200.0,
                catalog::expense_color("Transportation"),
            ),
            BudgetCategory::new("Entertainment", 150.0, catalog::expense_color("Entertainment")),
        ],
        goals: vec![
            SavingsGoal::new("Emergency Fund", 5000.0, day(90), DEFAULT_GOAL_COLOR)
                .with_current_amount(1250.0),
            SavingsGoal::new("Vacation", 2000.0, day(180), "#3b82f6")
                .with_current_amount(450.0),
        ],
    }
}
