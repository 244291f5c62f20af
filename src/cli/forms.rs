//! Interactive entry forms. Each form gathers input, then hands everything to
//! the matching service; validation failures surface to the caller as
//! transient error messages without any write having occurred.

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use uuid::Uuid;

use crate::core::services::{
    BudgetService, GoalService, ServiceError, ServiceResult, TransactionService,
};
use crate::core::Tracker;
use crate::domain::catalog;
use crate::domain::goal::SavingsGoal;
use crate::domain::transaction::TransactionKind;

fn prompt_failed(err: dialoguer::Error) -> ServiceError {
    ServiceError::Invalid(format!("Input aborted: {err}"))
}

pub fn transaction_form(tracker: &Tracker) -> ServiceResult<Uuid> {
    let theme = ColorfulTheme::default();
    let kind_index = Select::with_theme(&theme)
        .with_prompt("Transaction type")
        .items(&["Expense", "Income"])
        .default(0)
        .interact()
        .map_err(prompt_failed)?;
    let kind = if kind_index == 1 {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };

    let amount: f64 = Input::with_theme(&theme)
        .with_prompt("Amount")
        .interact_text()
        .map_err(prompt_failed)?;

    let names: Vec<&str> = catalog::catalog_for(kind)
        .iter()
        .map(|entry| entry.name)
        .collect();
    let category_index = Select::with_theme(&theme)
        .with_prompt("Category")
        .items(&names)
        .default(0)
        .interact()
        .map_err(prompt_failed)?;

    let description: String = Input::with_theme(&theme)
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_failed)?;

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let date: String = Input::with_theme(&theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(today)
        .interact_text()
        .map_err(prompt_failed)?;

    TransactionService::add(
        tracker,
        kind,
        amount,
        names[category_index],
        &description,
        &date,
    )
}

pub fn budget_form(tracker: &Tracker) -> ServiceResult<()> {
    let theme = ColorfulTheme::default();
    let name: String = Input::with_theme(&theme)
        .with_prompt("Category name (e.g. Food & Dining)")
        .interact_text()
        .map_err(prompt_failed)?;
    let limit: f64 = Input::with_theme(&theme)
        .with_prompt("Monthly limit")
        .interact_text()
        .map_err(prompt_failed)?;
    BudgetService::create(tracker, &name, limit)?;
    Ok(())
}

pub fn goal_form(tracker: &Tracker) -> ServiceResult<()> {
    let theme = ColorfulTheme::default();
    let name: String = Input::with_theme(&theme)
        .with_prompt("Goal name (e.g. Emergency Fund)")
        .interact_text()
        .map_err(prompt_failed)?;
    let target: f64 = Input::with_theme(&theme)
        .with_prompt("Target amount")
        .interact_text()
        .map_err(prompt_failed)?;
    let deadline: String = Input::with_theme(&theme)
        .with_prompt("Target date (YYYY-MM-DD)")
        .interact_text()
        .map_err(prompt_failed)?;
    GoalService::create(tracker, &name, target, &deadline)?;
    Ok(())
}

pub fn contribute_form(tracker: &Tracker, goal: &SavingsGoal) -> ServiceResult<()> {
    let theme = ColorfulTheme::default();
    let amount: f64 = Input::with_theme(&theme)
        .with_prompt(format!("Amount to add to {}", goal.name))
        .interact_text()
        .map_err(prompt_failed)?;
    GoalService::contribute(tracker, goal.id, amount)
}
