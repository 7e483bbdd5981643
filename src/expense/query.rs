//! The filtered and sorted projection of the collection shown in the
//! expense list.

use std::cmp::Ordering;

use crate::expense::core::Expense;

/// The key used to order the expense list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey {
    /// Most recent date first.
    Date,
    /// Largest amount first.
    Amount,
    /// Leave the filtered order unchanged.
    Unsorted,
}

impl SortKey {
    /// Parse the `sort` query parameter. Unknown keys leave the list
    /// unsorted rather than failing the request.
    pub fn parse(key: &str) -> Self {
        match key {
            "date" => SortKey::Date,
            "amount" => SortKey::Amount,
            _ => SortKey::Unsorted,
        }
    }
}

/// The expenses to display: filtered to `category_filter` when it is
/// non-empty (empty means all categories), then sorted by `sort_key`.
///
/// Sorting is stable, so expenses with equal keys keep their relative
/// order from the input.
pub fn filtered_sorted(
    expenses: &[Expense],
    category_filter: &str,
    sort_key: SortKey,
) -> Vec<Expense> {
    let mut selected: Vec<Expense> = expenses
        .iter()
        .filter(|expense| category_filter.is_empty() || expense.category == category_filter)
        .cloned()
        .collect();

    match sort_key {
        SortKey::Amount => selected.sort_by(|a, b| {
            b.amount
                .partial_cmp(&a.amount)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Date => selected.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Unsorted => {}
    }

    selected
}

/// Every category that appears in the collection, in first-occurrence
/// order, for the filter dropdown.
pub fn distinct_categories(expenses: &[Expense]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();

    for expense in expenses {
        if !categories.contains(&expense.category) {
            categories.push(expense.category.clone());
        }
    }

    categories
}

#[cfg(test)]
mod query_tests {
    use time::{Date, macros::date};

    use crate::expense::core::Expense;

    use super::{SortKey, distinct_categories, filtered_sorted};

    fn create_test_expense(id: i64, amount: f64, category: &str, date: Date) -> Expense {
        Expense {
            id,
            amount,
            category: category.to_owned(),
            description: String::new(),
            date,
        }
    }

    fn test_expenses() -> Vec<Expense> {
        vec![
            create_test_expense(1, 12.5, "food", date!(2024 - 03 - 01)),
            create_test_expense(2, 40.0, "transport", date!(2024 - 03 - 15)),
            create_test_expense(3, 40.0, "food", date!(2024 - 02 - 10)),
            create_test_expense(4, 7.0, "food", date!(2024 - 03 - 20)),
        ]
    }

    #[test]
    fn empty_filter_sorts_all_by_amount_descending() {
        let expenses = test_expenses();

        let got = filtered_sorted(&expenses, "", SortKey::Amount);

        let amounts: Vec<f64> = got.iter().map(|expense| expense.amount).collect();
        assert_eq!(amounts, vec![40.0, 40.0, 12.5, 7.0]);
    }

    #[test]
    fn equal_amounts_keep_their_relative_order() {
        let expenses = test_expenses();

        let got = filtered_sorted(&expenses, "", SortKey::Amount);

        // Expenses 2 and 3 tie on amount; 2 comes first in the input.
        assert_eq!(got[0].id, 2);
        assert_eq!(got[1].id, 3);
    }

    #[test]
    fn sorts_by_date_most_recent_first() {
        let expenses = test_expenses();

        let got = filtered_sorted(&expenses, "", SortKey::Date);

        let ids: Vec<i64> = got.iter().map(|expense| expense.id).collect();
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }

    #[test]
    fn filters_by_exact_category() {
        let expenses = test_expenses();

        let got = filtered_sorted(&expenses, "food", SortKey::Date);

        assert_eq!(got.len(), 3);
        assert!(got.iter().all(|expense| expense.category == "food"));
    }

    #[test]
    fn filter_and_date_sort_returns_the_single_match() {
        let expenses = vec![
            create_test_expense(1, 12.5, "food", date!(2024 - 03 - 01)),
            create_test_expense(2, 40.0, "transport", date!(2024 - 03 - 15)),
        ];

        let got = filtered_sorted(&expenses, "food", SortKey::Date);

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, 1);
    }

    #[test]
    fn unknown_sort_key_leaves_the_filtered_order_unchanged() {
        let expenses = test_expenses();

        let got = filtered_sorted(&expenses, "", SortKey::parse("payee"));

        let ids: Vec<i64> = got.iter().map(|expense| expense.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn distinct_categories_keep_first_occurrence_order() {
        let expenses = test_expenses();

        let got = distinct_categories(&expenses);

        assert_eq!(got, vec!["food".to_owned(), "transport".to_owned()]);
    }
}
