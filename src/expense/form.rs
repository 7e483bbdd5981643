//! The expense form: field validation and the maud view.
//!
//! Validation happens here, before anything reaches the repository. The
//! repository trusts the field shapes it is given.

use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    endpoints,
    expense::core::{DATE_FORMAT, ExpenseFields},
    expense::session::ExpenseDraft,
    html::capitalize_first,
};

/// The closed set of category labels offered by the form.
///
/// Stored categories outside this set (e.g. from an imported slot) are
/// still displayed and filterable; they just gain an extra option while
/// being edited.
pub const CATEGORIES: [&str; 6] = [
    "food",
    "transport",
    "utilities",
    "entertainment",
    "shopping",
    "other",
];

/// The raw values of the expense form.
///
/// All fields arrive as strings so that validation errors are ours to
/// report instead of a generic unprocessable-entity response from the
/// form extractor.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// The amount input value.
    #[serde(default)]
    pub amount: String,
    /// The selected category.
    #[serde(default)]
    pub category: String,
    /// The description input value.
    #[serde(default)]
    pub description: String,
    /// The date input value, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
}

impl ExpenseForm {
    /// Check the submitted values and convert them into the field set the
    /// repository accepts.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the amount is not a non-negative number,
    /// - or [Error::EmptyCategory] if no category was selected,
    /// - or [Error::InvalidDate] if the date is not a valid `YYYY-MM-DD` date.
    pub fn validate(self) -> Result<ExpenseFields, Error> {
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| Error::InvalidAmount(self.amount.clone()))?;

        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(Error::EmptyCategory);
        }

        let date = Date::parse(self.date.trim(), DATE_FORMAT)
            .map_err(|_| Error::InvalidDate(self.date.clone()))?;

        Ok(ExpenseFields {
            amount,
            category: self.category,
            description: self.description,
            date,
        })
    }
}

/// The form fields and submit button, pre-populated from `draft`.
///
/// While editing, the submit button reads "Update Expense" and a cancel
/// button abandons the session.
pub(crate) fn expense_form(draft: &ExpenseDraft, editing: bool) -> Markup {
    let has_custom_category =
        !draft.category.is_empty() && !CATEGORIES.contains(&draft.category.as_str());

    html! {
        form
            hx-post=(endpoints::EXPENSES_API)
            hx-target-error="#alert-container"
            class="expense-form"
        {
            div
            {
                label for="amount" { "Amount" }

                input
                    type="number"
                    name="amount"
                    id="amount"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    value=(draft.amount)
                    required
                    class="input";
            }

            div
            {
                label for="category" { "Category" }

                select name="category" id="category" required class="input"
                {
                    option value="" { "Select a category" }

                    @for category in CATEGORIES {
                        @if category == draft.category {
                            option value=(category) selected { (capitalize_first(category)) }
                        } @else {
                            option value=(category) { (capitalize_first(category)) }
                        }
                    }

                    @if has_custom_category {
                        option value=(draft.category) selected { (capitalize_first(&draft.category)) }
                    }
                }
            }

            div
            {
                label for="description" { "Description" }

                input
                    type="text"
                    name="description"
                    id="description"
                    placeholder="What was this for?"
                    value=(draft.description)
                    class="input";
            }

            div
            {
                label for="date" { "Date" }

                input
                    type="date"
                    name="date"
                    id="date"
                    value=(draft.date)
                    required
                    class="input";
            }

            button type="submit" class="btn btn-primary"
            {
                @if editing { "Update Expense" } @else { "Add Expense" }
            }

            @if editing {
                button
                    type="button"
                    class="btn btn-secondary"
                    hx-post=(endpoints::CANCEL_EDIT)
                    hx-target-error="#alert-container"
                {
                    "Cancel"
                }
            }
        }
    }
}


#[cfg(test)]
mod form_view_tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::expense::session::ExpenseDraft;

    use super::expense_form;

    fn render_form(draft: &ExpenseDraft, editing: bool) -> Html {
        Html::parse_fragment(&expense_form(draft, editing).into_string())
    }

    fn empty_draft() -> ExpenseDraft {
        ExpenseDraft {
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            date: date!(2024 - 03 - 20),
        }
    }

    #[test]
    fn create_mode_has_add_button_and_no_cancel() {
        let html = render_form(&empty_draft(), false);

        let button_selector = Selector::parse("button").unwrap();
        let labels: Vec<String> = html
            .select(&button_selector)
            .map(|button| button.text().collect::<String>().trim().to_owned())
            .collect();

        assert_eq!(labels, vec!["Add Expense"]);
    }

    #[test]
    fn edit_mode_has_update_and_cancel_buttons() {
        let draft = ExpenseDraft {
            amount: "12.50".to_owned(),
            category: "food".to_owned(),
            description: "lunch".to_owned(),
            date: date!(2024 - 03 - 01),
        };

        let html = render_form(&draft, true);

        let button_selector = Selector::parse("button").unwrap();
        let labels: Vec<String> = html
            .select(&button_selector)
            .map(|button| button.text().collect::<String>().trim().to_owned())
            .collect();
        assert_eq!(labels, vec!["Update Expense", "Cancel"]);

        let amount_selector = Selector::parse("input[name=amount]").unwrap();
        let amount = html.select(&amount_selector).next().unwrap();
        assert_eq!(amount.value().attr("value"), Some("12.50"));

        let selected_selector = Selector::parse("option[selected]").unwrap();
        let selected = html.select(&selected_selector).next().unwrap();
        assert_eq!(selected.value().attr("value"), Some("food"));
    }

    #[test]
    fn date_input_uses_iso_format() {
        let html = render_form(&empty_draft(), false);

        let date_selector = Selector::parse("input[name=date]").unwrap();
        let date_input = html.select(&date_selector).next().unwrap();

        assert_eq!(date_input.value().attr("value"), Some("2024-03-20"));
    }

    #[test]
    fn offers_every_category() {
        let html = render_form(&empty_draft(), false);

        let option_selector = Selector::parse("select[name=category] option").unwrap();
        let count = html.select(&option_selector).count();

        // The six categories plus the "Select a category" placeholder.
        assert_eq!(count, 7);
    }
}
