//! Tracks whether the expense form is creating or updating, and routes
//! submissions accordingly.

use time::Date;

use crate::{
    Error,
    expense::core::{Expense, ExpenseFields},
    expense::repository::ExpenseRepository,
};

/// Whether an expense is currently being edited.
///
/// While editing, the session holds a snapshot of the expense as it was
/// when the edit began. The snapshot's ID decides which record a
/// submission replaces; its other fields only seed the form draft
/// (last write wins, there is no conflict detection).
#[derive(Debug, Clone, PartialEq, Default)]
enum EditSession {
    /// No edit in flight; submissions create new expenses.
    #[default]
    Idle,
    /// Submissions replace the expense with this snapshot's ID.
    Editing(Expense),
}

/// Routes form submissions to create-or-update based on the edit session,
/// and produces the working draft the form is rendered from.
#[derive(Debug, Default)]
pub struct EditCoordinator {
    session: EditSession,
}

/// The outcome of a form submission.
#[derive(Debug, PartialEq)]
pub enum Submitted {
    /// A new expense was created.
    Created(Expense),
    /// An existing expense was replaced.
    Updated(Expense),
}

/// The working values used to pre-populate the expense form.
#[derive(Debug, PartialEq)]
pub struct ExpenseDraft {
    /// The amount input value. Empty when creating.
    pub amount: String,
    /// The selected category. Empty when creating.
    pub category: String,
    /// The description input value.
    pub description: String,
    /// The date input value. Today when creating.
    pub date: Date,
}

impl EditCoordinator {
    /// Start editing `expense`, replacing any edit already in flight.
    /// Only one edit session exists at a time.
    pub fn begin_edit(&mut self, expense: Expense) {
        self.session = EditSession::Editing(expense);
    }

    /// Abandon the current edit session, if any.
    pub fn cancel(&mut self) {
        self.session = EditSession::Idle;
    }

    /// The snapshot being edited, or `None` when idle.
    pub fn editing(&self) -> Option<&Expense> {
        match &self.session {
            EditSession::Editing(expense) => Some(expense),
            EditSession::Idle => None,
        }
    }

    /// The values to pre-populate the form with: the snapshot's fields
    /// while editing, otherwise empty fields and today's date.
    pub fn draft(&self, today: Date) -> ExpenseDraft {
        match &self.session {
            EditSession::Idle => ExpenseDraft {
                amount: String::new(),
                category: String::new(),
                description: String::new(),
                date: today,
            },
            EditSession::Editing(expense) => ExpenseDraft {
                amount: if expense.amount.is_finite() {
                    format!("{:.2}", expense.amount)
                } else {
                    String::new()
                },
                category: expense.category.clone(),
                description: expense.description.clone(),
                date: expense.date,
            },
        }
    }

    /// Apply a validated form submission to `repository`.
    ///
    /// Creates a new expense while idle; replaces the snapshot's record
    /// while editing and then returns to idle. A failed replace leaves
    /// the session in place so the user can retry or cancel.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingExpense] if the edited expense has
    /// been deleted since the edit began, or a store error if the save
    /// fails.
    pub fn submit(
        &mut self,
        fields: ExpenseFields,
        repository: &mut ExpenseRepository,
    ) -> Result<Submitted, Error> {
        match &self.session {
            EditSession::Idle => repository.insert(fields).map(Submitted::Created),
            EditSession::Editing(expense) => {
                let updated = repository.replace(expense.id, fields)?;
                self.session = EditSession::Idle;

                Ok(Submitted::Updated(updated))
            }
        }
    }
}
