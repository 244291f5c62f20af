//! Terminal rendering helpers: currency/date formatting, progress bars, and
//! the colored status badges the dashboard uses.

use chrono::NaiveDate;
use colored::Colorize;

use crate::analytics::{BudgetStatus, GoalProgress, GoalStatus};
use crate::config::Config;

/// `$1,234.56` formatting; negatives render as `-$20.00`. The symbol comes
/// from the configured currency.
pub fn format_currency(amount: f64, config: &Config) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;
    format!(
        "{sign}{}{}.{fraction:02}",
        config.currency_symbol(),
        group_thousands(units)
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `Jun 15, 2024` (or `15 Jun 2024` outside en-US) for parseable dates, the
/// raw string otherwise.
pub fn format_date(date: &str, config: &Config) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) if config.month_first_dates() => format!(
            "{} {}, {}",
            parsed.format("%b"),
            parsed.format("%-d"),
            parsed.format("%Y")
        ),
        Ok(parsed) => format!(
            "{} {} {}",
            parsed.format("%-d"),
            parsed.format("%b"),
            parsed.format("%Y")
        ),
        Err(_) => date.to_string(),
    }
}

/// Text progress bar for a clamped percentage.
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn budget_badge(status: Option<BudgetStatus>) -> Option<String> {
    match status? {
        BudgetStatus::OverBudget => Some("Over Budget".red().bold().to_string()),
        BudgetStatus::NearLimit => Some("Near Limit".yellow().to_string()),
        BudgetStatus::OnTrack => Some("On Track".green().to_string()),
    }
}

pub fn goal_badge(progress: &GoalProgress) -> Option<String> {
    match progress.status? {
        GoalStatus::Completed => Some("Completed!".green().bold().to_string()),
        GoalStatus::Overdue => Some("Overdue".red().bold().to_string()),
        GoalStatus::Upcoming => progress
            .days_remaining
            .map(|days| format!("{days} days left").yellow().to_string()),
    }
}

pub fn section(title: &str) {
    println!();
    println!("{}", format!("=== {} ===", title.trim()).bold());
}

pub fn success(message: impl std::fmt::Display) {
    println!("{} {message}", "[✓]".green());
}

pub fn error(message: impl std::fmt::Display) {
    eprintln!("{} {message}", "[x]".red());
}

pub fn info(message: impl std::fmt::Display) {
    println!("{} {message}", "[i]".blue());
}
