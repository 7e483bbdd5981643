//! The expense domain: the record itself, the repository that owns the
//! collection, the edit session, and the pages and endpoints that serve
//! them.

mod core;
mod delete_endpoint;
mod edit_endpoint;
mod expenses_page;
mod form;
mod list_endpoint;
mod query;
mod repository;
mod session;
mod submit_endpoint;

pub use core::{Expense, ExpenseFields, ExpenseId};
pub use query::{SortKey, distinct_categories, filtered_sorted};
pub use repository::ExpenseRepository;
pub use session::{EditCoordinator, ExpenseDraft, Submitted};

pub(crate) use delete_endpoint::delete_expense_endpoint;
pub(crate) use edit_endpoint::{begin_edit_endpoint, cancel_edit_endpoint};
pub(crate) use expenses_page::get_expenses_page;
pub(crate) use list_endpoint::list_expenses_endpoint;
pub(crate) use submit_endpoint::submit_expense_endpoint;
