//! Fixed category taxonomies used to populate pickers and resolve display
//! colors. Reference data only: any string is accepted as a category.

use crate::domain::transaction::TransactionKind;

/// A `(name, hex color)` catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryColor {
    pub name: &'static str,
    pub color: &'static str,
}

/// Neutral gray used when a name has no catalog match.
pub const FALLBACK_COLOR: &str = "#6b7280";

pub const EXPENSE_CATEGORIES: &[CategoryColor] = &[
    CategoryColor { name: "Food & Dining", color: "#ef4444" },
    CategoryColor { name: "Transportation", color: "#f97316" },
    CategoryColor { name: "Shopping", color: "#eab308" },
    CategoryColor { name: "Entertainment", color: "#22c55e" },
    CategoryColor { name: "Bills & Utilities", color: "#3b82f6" },
    CategoryColor { name: "Healthcare", color: "#8b5cf6" },
    CategoryColor { name: "Education", color: "#06b6d4" },
    CategoryColor { name: "Other", color: "#6b7280" },
];

pub const INCOME_CATEGORIES: &[CategoryColor] = &[
    CategoryColor { name: "Salary", color: "#22c55e" },
    CategoryColor { name: "Freelance", color: "#3b82f6" },
    CategoryColor { name: "Investment", color: "#8b5cf6" },
    CategoryColor { name: "Gift", color: "#f59e0b" },
    CategoryColor { name: "Other", color: "#6b7280" },
];

/// Catalog backing the picker for the given transaction kind.
pub fn catalog_for(kind: TransactionKind) -> &'static [CategoryColor] {
    match kind {
        TransactionKind::Expense => EXPENSE_CATEGORIES,
        TransactionKind::Income => INCOME_CATEGORIES,
    }
}

/// Display color for a category name, falling back to neutral gray.
pub fn color_for(kind: TransactionKind, name: &str) -> &'static str {
    catalog_for(kind)
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Color for a budget category, resolved against the expense catalog.
pub fn expense_color(name: &str) -> &'static str {
    color_for(TransactionKind::Expense, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_their_color() {
        assert_eq!(expense_color("Food & Dining"), "#ef4444");
        assert_eq!(color_for(TransactionKind::Income, "Salary"), "#22c55e");
    }

    #[test]
    fn unknown_names_fall_back_to_gray() {
        assert_eq!(expense_color("Ferrets"), FALLBACK_COLOR);
        assert_eq!(color_for(TransactionKind::Income, ""), FALLBACK_COLOR);
    }
}
