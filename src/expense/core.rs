//! Defines the core expense record and its serialized form.

use serde::{Deserialize, Deserializer, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The ID of an expense record.
///
/// IDs are derived from the creation time in milliseconds, so they are
/// unique within a tracker and never reused after a deletion.
pub type ExpenseId = i64;

/// `YYYY-MM-DD`, the format used by HTML date inputs and the durable slot.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A single recorded spend event.
///
/// To create an `Expense`, pass [ExpenseFields] to
/// [ExpenseRepository::insert](crate::ExpenseRepository::insert), which
/// assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// How much money was spent, in dollars.
    ///
    /// A slot written by an older version of the app may hold the amount
    /// as a string, or not at all. Such amounts load as a non-finite
    /// value which counts as zero wherever amounts are summed, see
    /// [Expense::amount_or_zero].
    #[serde(default = "missing_amount", deserialize_with = "lenient_amount")]
    pub amount: f64,
    /// The label used to bucket this expense for aggregation.
    ///
    /// Stored exactly as entered; capitalization is applied for display
    /// only.
    pub category: String,
    /// A text description of what the expense was for. May be empty.
    pub description: String,
    /// When the money was spent.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl Expense {
    pub(crate) fn from_fields(id: ExpenseId, fields: ExpenseFields) -> Self {
        Self {
            id,
            amount: fields.amount,
            category: fields.category,
            description: fields.description,
            date: fields.date,
        }
    }

    /// The amount as a value that is safe to sum: non-finite amounts
    /// count as zero so an unparsable stored amount never poisons an
    /// aggregate.
    pub fn amount_or_zero(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount
        } else {
            0.0
        }
    }
}

/// The full field set of an expense, minus its identity.
///
/// This is what the validated form submits; the repository pairs it with
/// an ID on insert and keeps the existing ID on replace.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFields {
    /// How much money was spent, in dollars.
    pub amount: f64,
    /// The label used to bucket this expense for aggregation.
    pub category: String,
    /// A text description of what the expense was for. May be empty.
    pub description: String,
    /// When the money was spent.
    pub date: Date,
}

fn missing_amount() -> f64 {
    f64::NAN
}

/// Accept a JSON number, a numeric string, or null for the amount field.
///
/// Anything that does not parse as a number becomes NaN rather than a
/// deserialization error so that one bad amount does not make the whole
/// slot unreadable.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<RawAmount>::deserialize(deserializer)? {
        Some(RawAmount::Number(amount)) => amount,
        Some(RawAmount::Text(text)) => text.trim().parse().unwrap_or(f64::NAN),
        None => f64::NAN,
    })
}
