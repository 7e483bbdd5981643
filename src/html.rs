//! Shared HTML building blocks: the page shell and display formatting
//! helpers used across views.

use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};
use time::Date;
use unicode_segmentation::UnicodeSegmentation;

use crate::chart::month_label;

/// An extra element to place in the page `<head>`.
pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

/// The shared page shell: head, scripts, body and the alert container
/// that htmx error responses are swapped into.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Cents" }
                link href="/static/main.css" rel="stylesheet";

                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/response-targets.js" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body hx-ext="response-targets"
            {
                (content)

                // Alert container for error responses to htmx requests.
                div id="alert-container" {}
            }
        }
    }
}

/// Send `markup` as an HTML response with the given status code.
#[inline]
pub fn render(status_code: StatusCode, markup: Markup) -> Response {
    (status_code, markup).into_response()
}

/// A full error page with a large status header, a description and a
/// suggested fix. Used for the 404 and 500 pages.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="error-page"
        {
            h1 { (header) }

            p class="error-description" { (description) }

            p class="error-fix" { (fix) }

            a href="/" class="btn btn-primary" { "Back to your expenses" }
        }
    );

    base(title, &[], &content)
}

/// Format a dollar amount with two decimals, e.g. `$1,234.50`.
pub fn format_currency(number: f64) -> String {
    static CURRENCY_FMT: OnceLock<Formatter> = OnceLock::new();

    let formatter = CURRENCY_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    if number == 0.0 {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    }

    let mut formatted = formatter.fmt_string(number);

    // numfmt omits the last trailing zero, so we must add it ourselves.
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted.len() < 3 || formatted.as_bytes()[formatted.len() - 3] != b'.' {
        formatted.push('0');
    }

    formatted
}

/// Uppercase the first grapheme of `text`, leaving the rest as entered.
/// Categories are stored lowercase but displayed capitalized.
pub fn capitalize_first(text: &str) -> String {
    let mut graphemes = text.graphemes(true);

    match graphemes.next() {
        Some(first) => first.to_uppercase() + graphemes.as_str(),
        None => String::new(),
    }
}

/// Format a date for the expense list, e.g. "Mar 1, 2024".
pub fn format_date(date: Date) -> String {
    format!("{} {}, {}", month_label(date), date.day(), date.year())
}

#[cfg(test)]
mod html_tests {
    use time::macros::date;

    use super::{capitalize_first, format_currency, format_date};

    #[test]
    fn formats_currency_with_two_decimals() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(12.34), "$12.34");
        assert_eq!(format_currency(1234.5), "$1,234.50");
    }

    #[test]
    fn capitalizes_the_first_letter_only() {
        assert_eq!(capitalize_first("food"), "Food");
        assert_eq!(capitalize_first("dining out"), "Dining out");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn formats_dates_with_short_month_names() {
        assert_eq!(format_date(date!(2024 - 03 - 01)), "Mar 1, 2024");
        assert_eq!(format_date(date!(2023 - 12 - 25)), "Dec 25, 2023");
    }
}
