//! Expense aggregation for the header total and the charts.
//!
//! These are pure functions recomputed from the current collection on
//! every request; the data sets are small enough that nothing is cached.

use time::{Date, Month};

use crate::expense::Expense;

/// The sum of all amounts. Non-finite amounts count as zero so the total
/// is always a number.
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(Expense::amount_or_zero).sum()
}

/// Amounts summed per category, keyed by the exact category string.
///
/// Buckets appear in first-occurrence order and only for categories that
/// occur in the collection; nothing is zero-filled.
pub fn by_category(expenses: &[Expense]) -> Vec<(String, f64)> {
    group_amounts(expenses, |expense| expense.category.clone())
}

/// Amounts summed per calendar month, keyed by the short English month
/// name of the expense date.
///
/// Buckets appear in first-occurrence order, not calendar order. The bar
/// chart inherits whatever order the collection produces.
pub fn by_month(expenses: &[Expense]) -> Vec<(String, f64)> {
    group_amounts(expenses, |expense| month_label(expense.date).to_owned())
}

fn group_amounts(expenses: &[Expense], key_of: impl Fn(&Expense) -> String) -> Vec<(String, f64)> {
    let mut buckets: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        let key = key_of(expense);
        match buckets.iter_mut().find(|(label, _)| *label == key) {
            Some((_, sum)) => *sum += expense.amount_or_zero(),
            None => buckets.push((key, expense.amount_or_zero())),
        }
    }

    buckets
}

/// The three-letter month name of `date`, e.g. "Jan".
pub(crate) fn month_label(date: Date) -> &'static str {
    match date.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
