//! Defines the main page: the expense form, the filterable list and the
//! charts.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    app_state::ExpenseTracker,
    chart::{ChartPanel, build_charts, charts_script, charts_view, total},
    endpoints,
    expense::{
        core::Expense,
        form::expense_form,
        query::{SortKey, distinct_categories, filtered_sorted},
        session::ExpenseDraft,
    },
    html::{HeadElement, base, capitalize_first, format_currency, format_date},
    navigation,
    timezone::local_today,
};

/// The state needed to display the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// The tracker holding the expense collection and the edit session.
    pub tracker: Arc<Mutex<ExpenseTracker>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            tracker: state.tracker.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The filter and sort controls of the list, from the query string.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Only show expenses with this category. Empty means all.
    #[serde(default)]
    category: String,
    /// Sort the list by "date" or "amount".
    #[serde(default = "default_sort")]
    sort: String,
}

fn default_sort() -> String {
    "date".to_owned()
}

/// Display the expenses page: form, filtered list and charts.
pub async fn get_expenses_page(
    State(state): State<ExpensesPageState>,
    Query(params): Query<ListParams>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let tracker = state
        .tracker
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire tracker lock: {error}"))
        .map_err(|_| Error::TrackerLockError)?;

    let expenses = tracker.expenses.list();
    let draft = tracker.editor.draft(today);
    let editing = tracker.editor.editing().is_some();
    let rows = filtered_sorted(expenses, &params.category, SortKey::parse(&params.sort));
    let categories = distinct_categories(expenses);
    let charts = (!expenses.is_empty()).then(|| build_charts(expenses));
    let running_total = total(expenses);

    Ok(expenses_view(
        running_total,
        &draft,
        editing,
        &params,
        &categories,
        &rows,
        charts.as_ref().map(|charts| charts.as_slice()),
    )
    .into_response())
}

/// Renders the whole page around the header, the three cards and the
/// chart scripts.
fn expenses_view(
    running_total: f64,
    draft: &ExpenseDraft,
    editing: bool,
    params: &ListParams,
    categories: &[String],
    rows: &[Expense],
    charts: Option<&[ChartPanel]>,
) -> Markup {
    let content = html!(
        (navigation::header(running_total))

        main class="page"
        {
            div class="card-grid"
            {
                section class="card"
                {
                    h2 { @if editing { "Edit Expense" } @else { "Quick Add" } }

                    (expense_form(draft, editing))
                }

                section class="card"
                {
                    h2 { "Recent Expenses" }

                    (list_controls(params, categories))

                    @if rows.is_empty() {
                        p class="empty-state" { "No expenses found" }
                    } @else {
                        ul class="expense-list"
                        {
                            @for expense in rows {
                                (expense_row(expense))
                            }
                        }
                    }
                }

                section class="card"
                {
                    @if let Some(charts) = charts {
                        (charts_view(charts))
                    } @else {
                        p class="empty-state"
                        {
                            "Charts will show up here once you add some expenses."
                        }
                    }
                }
            }
        }
    );

    let scripts = match charts {
        Some(charts) => vec![
            HeadElement::ScriptLink(
                "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js".to_owned(),
            ),
            charts_script(charts),
        ],
        None => Vec::new(),
    };

    base("Expenses", &scripts, &content)
}

/// The category filter and sort dropdowns. Changing either submits the
/// form and reloads the page with the new query string.
fn list_controls(params: &ListParams, categories: &[String]) -> Markup {
    html!(
        form method="get" action=(endpoints::EXPENSES_VIEW) class="list-controls"
        {
            div
            {
                label for="category-filter" { "Filter by Category" }

                select
                    id="category-filter"
                    name="category"
                    class="input"
                    onchange="this.form.submit()"
                {
                    option value="" { "All Categories" }

                    @for category in categories {
                        option value=(category) selected[*category == params.category]
                        {
                            (capitalize_first(category))
                        }
                    }
                }
            }

            div
            {
                label for="sort-by" { "Sort by" }

                select id="sort-by" name="sort" class="input" onchange="this.form.submit()"
                {
                    option value="date" selected[params.sort == "date"] { "Date" }
                    option value="amount" selected[params.sort == "amount"] { "Amount" }
                }
            }
        }
    )
}

/// One expense in the list with its edit and delete controls.
fn expense_row(expense: &Expense) -> Markup {
    html!(
        li class="expense-row"
        {
            div class="expense-details"
            {
                span class="expense-amount" { (format_currency(expense.amount_or_zero())) }
                span class="expense-category" { (capitalize_first(&expense.category)) }

                @if !expense.description.is_empty() {
                    p class="expense-description" { (expense.description) }
                }

                p class="expense-date" { (format_date(expense.date)) }
            }

            div class="expense-actions"
            {
                a
                    href=(endpoints::format_endpoint(endpoints::EDIT_EXPENSE_VIEW, expense.id))
                    class="btn-icon"
                {
                    "Edit"
                }

                button
                    type="button"
                    class="btn-icon btn-danger"
                    hx-delete=(endpoints::format_endpoint(endpoints::DELETE_EXPENSE, expense.id))
                    hx-target-error="#alert-container"
                {
                    "Delete"
                }
            }
        }
    )
}
