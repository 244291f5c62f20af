//! Interactive terminal front end: dashboard, list views with filters, and
//! the create/delete/contribute actions.

pub mod forms;
pub mod output;

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::analytics;
use crate::config::{Config, ConfigManager};
use crate::core::services::{
    BudgetService, GoalService, ServiceError, ServiceResult, TransactionService,
};
use crate::core::Tracker;
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::store::json_backend::JsonBackend;

/// Runs the interactive session against the on-disk store.
pub fn run() -> ServiceResult<()> {
    let tracker = open_tracker()?;
    let manager = ConfigManager::new().map_err(ServiceError::from)?;
    let mut config = manager.load().map_err(ServiceError::from)?;

    if !tracker.has_any_data().map_err(ServiceError::from)? && offer_sample_data()? {
        tracker.load_sample_data().map_err(ServiceError::from)?;
        output::success("Sample data loaded! Explore the app features.");
    }

    loop {
        let choice = select(
            "Budget Tracker",
            &[
                "Dashboard",
                "Transactions",
                "Budgets",
                "Goals",
                "Settings",
                "Load sample data",
                "Quit",
            ],
        )?;
        let result = match choice {
            0 => render_dashboard(&tracker, &config),
            1 => transactions_menu(&tracker, &config),
            2 => budgets_menu(&tracker, &config),
            3 => goals_menu(&tracker, &config),
            4 => settings_menu(&manager, &mut config),
            5 => tracker
                .load_sample_data()
                .map_err(ServiceError::from)
                .map(|()| output::success("Sample data loaded! Explore the app features.")),
            _ => return Ok(()),
        };
        // Validation failures are transient notifications, not session enders.
        match result {
            Err(ServiceError::Invalid(message)) => output::error(message),
            other => other?,
        }
    }
}

/// Prints the dashboard once against the on-disk store (the scriptable path).
pub fn run_dashboard() -> ServiceResult<()> {
    let tracker = open_tracker()?;
    let config = ConfigManager::new()
        .and_then(|manager| manager.load())
        .map_err(ServiceError::from)?;
    render_dashboard(&tracker, &config)
}

fn open_tracker() -> ServiceResult<Tracker> {
    let backend = JsonBackend::new_default().map_err(ServiceError::from)?;
    Ok(Tracker::new(Box::new(backend)))
}

fn offer_sample_data() -> ServiceResult<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("No data yet. Load sample data?")
        .default(false)
        .interact()
        .map_err(|err| ServiceError::Invalid(format!("Input aborted: {err}")))
}

fn select(prompt: &str, items: &[&str]) -> ServiceResult<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|err| ServiceError::Invalid(format!("Input aborted: {err}")))
}

fn render_dashboard(tracker: &Tracker, config: &Config) -> ServiceResult<()> {
    let transactions = tracker.transactions().read().map_err(ServiceError::from)?;
    let budgets = tracker.budgets().read().map_err(ServiceError::from)?;
    let goals = tracker.goals().read().map_err(ServiceError::from)?;

    let totals = analytics::monthly_totals(&transactions);
    let utilization = analytics::total_budget_utilization(&budgets, &transactions);

    output::section("This Month");
    let balance = output::format_currency(totals.balance, config);
    let balance = if totals.balance >= 0.0 {
        balance.green()
    } else {
        balance.red()
    };
    println!("Balance   {balance}");
    println!(
        "Income    {} ({} transactions)",
        output::format_currency(totals.income, config),
        totals.income_count
    );
    println!(
        "Expenses  {} ({} transactions)",
        output::format_currency(totals.expenses, config),
        totals.expense_count
    );
    println!(
        "Budget used  {}% ({} of {})",
        utilization.percentage,
        output::format_currency(utilization.total_spent, config),
        output::format_currency(utilization.total_limit, config)
    );

    output::section("Budget Categories");
    if budgets.is_empty() {
        println!("No budgets set up yet");
    } else {
        for budget in &budgets {
            let usage = analytics::budget_usage(budget, &transactions);
            print!(
                "{:<20} {} {} / {}",
                budget.name,
                output::progress_bar(usage.percentage, 20),
                output::format_currency(usage.spent, config),
                output::format_currency(budget.limit, config)
            );
            if let Some(badge) = output::budget_badge(usage.status) {
                print!("  {badge}");
            }
            println!();
        }
    }

    output::section("Savings Goals");
    if goals.is_empty() {
        println!("No savings goals yet");
    } else {
        for goal in &goals {
            let progress = analytics::goal_progress(goal);
            print!(
                "{:<20} {} {} / {}  target {}",
                goal.name,
                output::progress_bar(progress.percentage, 20),
                output::format_currency(goal.current_amount, config),
                output::format_currency(goal.target_amount, config),
                output::format_date(&goal.deadline, config)
            );
            if let Some(badge) = output::goal_badge(&progress) {
                print!("  {badge}");
            }
            println!();
        }
    }
    println!();
    Ok(())
}

fn transactions_menu(tracker: &Tracker, config: &Config) -> ServiceResult<()> {
    loop {
        render_transactions(&TransactionService::list(tracker)?, config);
        match select(
            "Transactions",
            &["Add transaction", "Search / filter", "Delete transaction", "Back"],
        )? {
            0 => match forms::transaction_form(tracker) {
                Ok(_) => output::success("Transaction added successfully"),
                Err(ServiceError::Invalid(message)) => output::error(message),
                Err(err) => return Err(err),
            },
            1 => {
                let kind = match select("Show", &["All", "Income", "Expenses"])? {
                    1 => Some(TransactionKind::Income),
                    2 => Some(TransactionKind::Expense),
                    _ => None,
                };
                let search: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Search")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|err| ServiceError::Invalid(format!("Input aborted: {err}")))?;
                render_transactions(
                    &TransactionService::list_filtered(tracker, kind, &search)?,
                    config,
                );
            }
            2 => {
                let entries = TransactionService::list(tracker)?;
                if let Some(index) = pick(
                    "Delete which transaction?",
                    entries.iter().map(|t| transaction_label(t, config)).collect(),
                )? {
                    TransactionService::remove(tracker, entries[index].id)?;
                    output::success("Transaction deleted");
                }
            }
            _ => return Ok(()),
        }
    }
}

fn render_transactions(entries: &[Transaction], config: &Config) {
    output::section("Transactions");
    if entries.is_empty() {
        println!("No transactions yet");
        return;
    }
    for txn in entries {
        println!("{}", transaction_label(txn, config));
    }
}

fn transaction_label(txn: &Transaction, config: &Config) -> String {
    let amount = output::format_currency(txn.amount, config);
    let amount = match txn.kind {
        TransactionKind::Income => format!("+{amount}").green().to_string(),
        TransactionKind::Expense => format!("-{amount}").red().to_string(),
    };
    let description = if txn.description.is_empty() {
        String::new()
    } else {
        format!(" — {}", txn.description)
    };
    format!(
        "{}  {:<18} {}{}",
        output::format_date(&txn.date, config),
        txn.category,
        amount,
        description
    )
}

fn budgets_menu(tracker: &Tracker, config: &Config) -> ServiceResult<()> {
    loop {
        let budgets = BudgetService::list(tracker)?;
        let transactions = TransactionService::list(tracker)?;
        output::section("Budget Categories");
        if budgets.is_empty() {
            println!("No budgets set up yet. Create budget categories to track your spending limits.");
        } else {
            for budget in &budgets {
                let usage = analytics::budget_usage(budget, &transactions);
                print!(
                    "{:<20} {} spent {} / {}, {} remaining",
                    budget.name,
                    output::progress_bar(usage.percentage, 20),
                    output::format_currency(usage.spent, config),
                    output::format_currency(budget.limit, config),
                    output::format_currency(usage.remaining, config)
                );
                if let Some(badge) = output::budget_badge(usage.status) {
                    print!("  {badge}");
                }
                println!();
            }
        }

        match select("Budgets", &["Add budget", "Delete budget", "Back"])? {
            0 => match forms::budget_form(tracker) {
                Ok(()) => output::success("Budget category created successfully"),
                Err(ServiceError::Invalid(message)) => output::error(message),
                Err(err) => return Err(err),
            },
            1 => {
                if let Some(index) = pick(
                    "Delete which budget?",
                    budgets.iter().map(|b| b.name.clone()).collect(),
                )? {
                    BudgetService::remove(tracker, budgets[index].id)?;
                    output::success("Budget category deleted");
                }
            }
            _ => return Ok(()),
        }
    }
}

fn goals_menu(tracker: &Tracker, config: &Config) -> ServiceResult<()> {
    loop {
        let goals = GoalService::list(tracker)?;
        output::section("Savings Goals");
        if goals.is_empty() {
            println!("No savings goals yet. Set financial goals to stay motivated.");
        } else {
            for goal in &goals {
                let progress = analytics::goal_progress(goal);
                print!(
                    "{:<20} {} {} / {} ({}% complete), target {}",
                    goal.name,
                    output::progress_bar(progress.percentage, 20),
                    output::format_currency(goal.current_amount, config),
                    output::format_currency(goal.target_amount, config),
                    progress.percentage.round(),
                    output::format_date(&goal.deadline, config)
                );
                if let Some(badge) = output::goal_badge(&progress) {
                    print!("  {badge}");
                }
                println!();
            }
        }

        match select(
            "Goals",
            &["Add goal", "Contribute to goal", "Delete goal", "Back"],
        )? {
            0 => match forms::goal_form(tracker) {
                Ok(()) => output::success("Savings goal created successfully"),
                Err(ServiceError::Invalid(message)) => output::error(message),
                Err(err) => return Err(err),
            },
            1 => {
                if let Some(index) = pick(
                    "Contribute to which goal?",
                    goals.iter().map(|g| g.name.clone()).collect(),
                )? {
                    match forms::contribute_form(tracker, &goals[index]) {
                        Ok(()) => output::success("Contribution added successfully"),
                        Err(ServiceError::Invalid(message)) => output::error(message),
                        Err(err) => return Err(err),
                    }
                }
            }
            2 => {
                if let Some(index) = pick(
                    "Delete which goal?",
                    goals.iter().map(|g| g.name.clone()).collect(),
                )? {
                    GoalService::remove(tracker, goals[index].id)?;
                    output::success("Savings goal deleted");
                }
            }
            _ => return Ok(()),
        }
    }
}

/// Edits display preferences in place and persists them.
fn settings_menu(manager: &ConfigManager, config: &mut Config) -> ServiceResult<()> {
    output::section("Settings");
    println!("Locale    {}", config.locale);
    println!("Currency  {} ({})", config.currency, config.currency_symbol());

    match select("Settings", &["Change currency", "Change locale", "Back"])? {
        0 => {
            let codes = ["USD", "EUR", "GBP", "JPY"];
            let index = select("Currency", &codes)?;
            config.currency = codes[index].to_string();
        }
        1 => {
            let locales = ["en-US", "en-GB", "de-DE"];
            let index = select("Locale", &locales)?;
            config.locale = locales[index].to_string();
        }
        _ => return Ok(()),
    }
    manager.save(config).map_err(ServiceError::from)?;
    output::success("Settings saved");
    Ok(())
}

/// Single-choice picker over entity labels; `None` when the list is empty or
/// the user cancels.
fn pick(prompt: &str, mut labels: Vec<String>) -> ServiceResult<Option<usize>> {
    if labels.is_empty() {
        output::info("Nothing to select");
        return Ok(None);
    }
    labels.push("Cancel".into());
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|err| ServiceError::Invalid(format!("Input aborted: {err}")))?;
    if index + 1 == labels.len() {
        Ok(None)
    } else {
        Ok(Some(index))
    }
}
