//! The page header showing the app name and the running total.

use maud::{Markup, html};

use crate::html::format_currency;

/// The header bar with the brand link and the total of all expenses.
///
/// The total reflects the full collection, not the filtered list below
/// it.
pub fn header(total: f64) -> Markup {
    html!(
        header class="app-header"
        {
            div class="app-header-inner"
            {
                a href="/" class="brand" { "Cents" }

                span class="header-total" { "Total: " (format_currency(total)) }
            }
        }
    )
}

#[cfg(test)]
mod header_tests {
    use scraper::{Html, Selector};

    use super::header;

    #[test]
    fn shows_the_formatted_total() {
        let markup = header(52.5);

        let html = Html::parse_fragment(&markup.into_string());
        let total_selector = Selector::parse(".header-total").unwrap();
        let total = html
            .select(&total_selector)
            .next()
            .expect("want a total in the header");

        assert_eq!(total.text().collect::<String>(), "Total: $52.50");
    }
}
