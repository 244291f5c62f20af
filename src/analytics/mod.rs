//! Derived dashboard aggregates.
//!
//! Every function here is pure: it takes a snapshot of the persisted
//! collections and computes monthly totals, budget utilization, or goal
//! progress without touching the store. The `*_for`/`*_on` variants accept an
//! explicit reference month or date; the short names evaluate against "now".

use chrono::{Local, NaiveDate};

use crate::domain::budget::BudgetCategory;
use crate::domain::goal::SavingsGoal;
use crate::domain::transaction::{Transaction, TransactionKind};

/// `YYYY-MM` key for a calendar date.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Month key for the local calendar date at call time.
pub fn current_month() -> String {
    month_key(Local::now().date_naive())
}

/// Lexical month-prefix comparison, not a calendar-aware range check. Strings
/// too short (or cut mid-character) fail the match, so an unparseable date
/// counts as outside every month rather than breaking the aggregate.
pub fn falls_in_month(date: &str, month: &str) -> bool {
    date.get(..7) == Some(month)
}

/// True iff the date's `YYYY-MM` prefix equals the current month key.
pub fn is_current_month(date: &str) -> bool {
    falls_in_month(date, &current_month())
}

/// Income/expense totals for one month of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub income_count: usize,
    pub expense_count: usize,
}

pub fn monthly_totals(transactions: &[Transaction]) -> MonthlyTotals {
    monthly_totals_for(transactions, &current_month())
}

pub fn monthly_totals_for(transactions: &[Transaction], month: &str) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();
    for txn in transactions.iter().filter(|t| falls_in_month(&t.date, month)) {
        match txn.kind {
            TransactionKind::Income => {
                totals.income += txn.amount;
                totals.income_count += 1;
            }
            TransactionKind::Expense => {
                totals.expenses += txn.amount;
                totals.expense_count += 1;
            }
        }
    }
    totals.balance = totals.income - totals.expenses;
    totals
}

/// Live spending for a category name within a month. The single place where
/// the name link between transactions and budgets is resolved.
pub fn spent_for_category_in_month(
    transactions: &[Transaction],
    category: &str,
    month: &str,
) -> f64 {
    transactions
        .iter()
        .filter(|t| {
            t.kind == TransactionKind::Expense
                && t.category == category
                && falls_in_month(&t.date, month)
        })
        .map(|t| t.amount)
        .sum()
}

/// Classification labels for a budget's spending level. The 50–80% band is
/// intentionally unlabeled and maps to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    OnTrack,
    NearLimit,
    OverBudget,
}

/// One budget's derived monthly figures.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUsage {
    pub spent: f64,
    /// Display percentage, clamped to `[0, 100]`.
    pub percentage: f64,
    /// May be negative when over budget.
    pub remaining: f64,
    pub status: Option<BudgetStatus>,
}

pub fn budget_usage(budget: &BudgetCategory, transactions: &[Transaction]) -> BudgetUsage {
    budget_usage_for(budget, transactions, &current_month())
}

pub fn budget_usage_for(
    budget: &BudgetCategory,
    transactions: &[Transaction],
    month: &str,
) -> BudgetUsage {
    let spent = spent_for_category_in_month(transactions, &budget.name, month);
    let ratio = if budget.limit > 0.0 {
        spent / budget.limit * 100.0
    } else {
        0.0
    };
    BudgetUsage {
        spent,
        percentage: ratio.clamp(0.0, 100.0),
        remaining: budget.limit - spent,
        // Classification uses the unclamped ratio.
        status: classify_budget(ratio),
    }
}

fn classify_budget(ratio: f64) -> Option<BudgetStatus> {
    if ratio >= 100.0 {
        Some(BudgetStatus::OverBudget)
    } else if ratio >= 80.0 {
        Some(BudgetStatus::NearLimit)
    } else if ratio < 50.0 {
        Some(BudgetStatus::OnTrack)
    } else {
        None
    }
}

/// Effective status of a goal. `Completed` is checked before `Overdue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    Completed,
    Overdue,
    Upcoming,
}

/// One goal's derived figures.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    /// Display percentage, clamped to `[0, 100]`.
    pub percentage: f64,
    /// Whole calendar days until the deadline, negative once past it.
    /// `None` when the deadline string does not parse.
    pub days_remaining: Option<i64>,
    pub remaining_amount: f64,
    pub status: Option<GoalStatus>,
}

pub fn goal_progress(goal: &SavingsGoal) -> GoalProgress {
    goal_progress_on(goal, Local::now().date_naive())
}

pub fn goal_progress_on(goal: &SavingsGoal, today: NaiveDate) -> GoalProgress {
    let ratio = if goal.target_amount > 0.0 {
        goal.current_amount / goal.target_amount * 100.0
    } else {
        0.0
    };
    // Midnight-to-midnight day counting: tomorrow is 1, today 0, yesterday -1.
    let days_remaining = NaiveDate::parse_from_str(&goal.deadline, "%Y-%m-%d")
        .ok()
        .map(|deadline| (deadline - today).num_days());
    let status = if ratio >= 100.0 {
        Some(GoalStatus::Completed)
    } else {
        match days_remaining {
            Some(days) if days < 0 => Some(GoalStatus::Overdue),
            Some(days) if days <= 30 => Some(GoalStatus::Upcoming),
            _ => None,
        }
    };
    GoalProgress {
        percentage: ratio.clamp(0.0, 100.0),
        days_remaining,
        remaining_amount: goal.target_amount - goal.current_amount,
        status,
    }
}

/// Spending across all budgets against the combined limit.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUtilization {
    pub total_limit: f64,
    pub total_spent: f64,
    /// Rounded to the nearest integer; 0 when no limits exist.
    pub percentage: u32,
}

pub fn total_budget_utilization(
    budgets: &[BudgetCategory],
    transactions: &[Transaction],
) -> BudgetUtilization {
    total_budget_utilization_for(budgets, transactions, &current_month())
}

pub fn total_budget_utilization_for(
    budgets: &[BudgetCategory],
    transactions: &[Transaction],
    month: &str,
) -> BudgetUtilization {
    let total_limit: f64 = budgets.iter().map(|b| b.limit).sum();
    let total_spent: f64 = budgets
        .iter()
        .map(|b| spent_for_category_in_month(transactions, &b.name, month))
        .sum();
    let percentage = if total_limit > 0.0 {
        (total_spent / total_limit * 100.0).round() as u32
    } else {
        0
    };
    BudgetUtilization {
        total_limit,
        total_spent,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::goal::DEFAULT_GOAL_COLOR;

    const MONTH: &str = "2024-06";

    fn expense(amount: f64, category: &str, date: &str) -> Transaction {
        Transaction::new(TransactionKind::Expense, amount, category, "", date)
    }

    fn income(amount: f64, date: &str) -> Transaction {
        Transaction::new(TransactionKind::Income, amount, "Salary", "", date)
    }

    fn goal(target: f64, current: f64, deadline: &str) -> SavingsGoal {
        SavingsGoal::new("Goal", target, deadline, DEFAULT_GOAL_COLOR).with_current_amount(current)
    }

    #[test]
    fn month_filter_is_lexical_on_the_prefix() {
        assert!(falls_in_month("2024-06-15", MONTH));
        assert!(falls_in_month("2024-06-garbage", MONTH));
        assert!(!falls_in_month("2024-07-01", MONTH));
        assert!(!falls_in_month("garbage", MONTH));
        assert!(!falls_in_month("", MONTH));
        assert!(!falls_in_month("24-6-15", MONTH));
    }

    #[test]
    fn month_filter_never_panics_on_multibyte_input() {
        assert!(!falls_in_month("żółć-06", MONTH));
    }

    #[test]
    fn empty_transactions_yield_zero_totals() {
        let totals = monthly_totals_for(&[], MONTH);
        assert_eq!(totals, MonthlyTotals::default());
    }

    #[test]
    fn balance_is_income_minus_expenses_even_when_negative() {
        let txns = vec![
            income(100.0, "2024-06-01"),
            expense(175.0, "Shopping", "2024-06-02"),
        ];
        let totals = monthly_totals_for(&txns, MONTH);
        assert_eq!(totals.income, 100.0);
        assert_eq!(totals.expenses, 175.0);
        assert_eq!(totals.balance, -75.0);
        assert_eq!(totals.income_count, 1);
        assert_eq!(totals.expense_count, 1);
    }

    #[test]
    fn only_current_month_transactions_are_counted() {
        // Scenario D: two transactions in different months.
        let txns = vec![income(500.0, "2024-06-10"), income(900.0, "2024-05-10")];
        let totals = monthly_totals_for(&txns, MONTH);
        assert_eq!(totals.income, 500.0);
        assert_eq!(totals.income_count, 1);
    }

    #[test]
    fn unparseable_dates_are_excluded_not_fatal() {
        let txns = vec![income(500.0, "2024-06-10"), income(900.0, "not-a-date")];
        let totals = monthly_totals_for(&txns, MONTH);
        assert_eq!(totals.income, 500.0);
    }

    #[test]
    fn over_budget_scenario_clamps_display_percentage() {
        // Scenario A: limit 100, spent 120.
        let budget = BudgetCategory::new("Food", 100.0, "#ef4444");
        let txns = vec![expense(120.0, "Food", "2024-06-15")];
        let usage = budget_usage_for(&budget, &txns, MONTH);
        assert_eq!(usage.spent, 120.0);
        assert_eq!(usage.percentage, 100.0);
        assert_eq!(usage.remaining, -20.0);
        assert_eq!(usage.status, Some(BudgetStatus::OverBudget));
    }

    #[test]
    fn budget_status_bands_leave_the_middle_unlabeled() {
        let budget = BudgetCategory::new("Food", 100.0, "#ef4444");
        let usage_at = |spent: f64| {
            let txns = vec![expense(spent, "Food", "2024-06-15")];
            budget_usage_for(&budget, &txns, MONTH).status
        };
        assert_eq!(usage_at(49.99), Some(BudgetStatus::OnTrack));
        assert_eq!(usage_at(50.0), None);
        assert_eq!(usage_at(65.0), None);
        assert_eq!(usage_at(79.99), None);
        assert_eq!(usage_at(80.0), Some(BudgetStatus::NearLimit));
        assert_eq!(usage_at(99.99), Some(BudgetStatus::NearLimit));
        assert_eq!(usage_at(100.0), Some(BudgetStatus::OverBudget));
    }

    #[test]
    fn zero_spending_is_on_track_with_full_remaining() {
        let budget = BudgetCategory::new("Food", 100.0, "#ef4444");
        let usage = budget_usage_for(&budget, &[], MONTH);
        assert_eq!(usage.spent, 0.0);
        assert_eq!(usage.percentage, 0.0);
        assert_eq!(usage.remaining, 100.0);
        assert_eq!(usage.status, Some(BudgetStatus::OnTrack));
    }

    #[test]
    fn non_positive_limit_forces_zero_percentage() {
        let budget = BudgetCategory::new("Food", 0.0, "#ef4444");
        let txns = vec![expense(50.0, "Food", "2024-06-15")];
        let usage = budget_usage_for(&budget, &txns, MONTH);
        assert_eq!(usage.percentage, 0.0);
        assert_eq!(usage.spent, 50.0);
        assert_eq!(usage.remaining, -50.0);
    }

    #[test]
    fn budget_matching_ignores_income_and_other_categories() {
        let budget = BudgetCategory::new("Food", 100.0, "#ef4444");
        let txns = vec![
            expense(30.0, "Food", "2024-06-01"),
            expense(40.0, "Shopping", "2024-06-01"),
            income(500.0, "2024-06-01"),
            expense(25.0, "Food", "2024-05-28"),
        ];
        let usage = budget_usage_for(&budget, &txns, MONTH);
        assert_eq!(usage.spent, 30.0);
    }

    #[test]
    fn completed_goal_outranks_imminent_deadline() {
        // Scenario B: target met with the deadline a day away.
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let progress = goal_progress_on(&goal(1000.0, 1000.0, "2024-06-16"), today);
        assert_eq!(progress.status, Some(GoalStatus::Completed));
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.days_remaining, Some(1));
    }

    #[test]
    fn completed_goal_outranks_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let progress = goal_progress_on(&goal(1000.0, 1200.0, "2024-01-01"), today);
        assert_eq!(progress.status, Some(GoalStatus::Completed));
        assert_eq!(progress.percentage, 100.0);
    }

    #[test]
    fn past_deadline_goal_is_overdue() {
        // Scenario C: deadline yesterday, 20% funded.
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let progress = goal_progress_on(&goal(1000.0, 200.0, "2024-06-14"), today);
        assert_eq!(progress.status, Some(GoalStatus::Overdue));
        assert_eq!(progress.days_remaining, Some(-1));
        assert_eq!(progress.percentage, 20.0);
        assert_eq!(progress.remaining_amount, 800.0);
    }

    #[test]
    fn goal_within_thirty_days_is_upcoming() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let upcoming = goal_progress_on(&goal(1000.0, 200.0, "2024-07-15"), today);
        assert_eq!(upcoming.days_remaining, Some(30));
        assert_eq!(upcoming.status, Some(GoalStatus::Upcoming));

        let distant = goal_progress_on(&goal(1000.0, 200.0, "2024-07-16"), today);
        assert_eq!(distant.days_remaining, Some(31));
        assert_eq!(distant.status, None);

        let due_today = goal_progress_on(&goal(1000.0, 200.0, "2024-06-15"), today);
        assert_eq!(due_today.days_remaining, Some(0));
        assert_eq!(due_today.status, Some(GoalStatus::Upcoming));
    }

    #[test]
    fn zero_target_goal_reports_zero_progress() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let progress = goal_progress_on(&goal(0.0, 50.0, "2024-07-01"), today);
        assert_eq!(progress.percentage, 0.0);
        assert_ne!(progress.status, Some(GoalStatus::Completed));
    }

    #[test]
    fn unparseable_deadline_degrades_to_no_day_count() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let progress = goal_progress_on(&goal(1000.0, 200.0, "soon"), today);
        assert_eq!(progress.days_remaining, None);
        assert_eq!(progress.status, None);

        // Completion still wins without a parseable deadline.
        let done = goal_progress_on(&goal(1000.0, 1000.0, "soon"), today);
        assert_eq!(done.status, Some(GoalStatus::Completed));
    }

    #[test]
    fn total_utilization_rounds_and_guards_empty_budgets() {
        let budgets = vec![
            BudgetCategory::new("Food", 400.0, "#ef4444"),
            BudgetCategory::new("Transportation", 200.0, "#f97316"),
        ];
        let txns = vec![
            expense(45.5, "Food", "2024-06-03"),
            expense(25.0, "Transportation", "2024-06-04"),
            expense(99.0, "Unbudgeted", "2024-06-05"),
        ];
        let util = total_budget_utilization_for(&budgets, &txns, MONTH);
        assert_eq!(util.total_limit, 600.0);
        assert_eq!(util.total_spent, 70.5);
        // 70.5 / 600 = 11.75% -> 12.
        assert_eq!(util.percentage, 12);

        let empty = total_budget_utilization_for(&[], &txns, MONTH);
        assert_eq!(empty.total_limit, 0.0);
        assert_eq!(empty.percentage, 0);
    }

    #[test]
    fn aggregates_are_idempotent_on_a_snapshot() {
        let budgets = vec![BudgetCategory::new("Food", 400.0, "#ef4444")];
        let txns = vec![expense(45.5, "Food", "2024-06-03"), income(500.0, "2024-06-01")];
        assert_eq!(
            monthly_totals_for(&txns, MONTH),
            monthly_totals_for(&txns, MONTH)
        );
        assert_eq!(
            budget_usage_for(&budgets[0], &txns, MONTH),
            budget_usage_for(&budgets[0], &txns, MONTH)
        );
        assert_eq!(
            total_budget_utilization_for(&budgets, &txns, MONTH),
            total_budget_utilization_for(&budgets, &txns, MONTH)
        );
    }
}
