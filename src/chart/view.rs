//! Chart generation and rendering for the expenses page.
//!
//! Builds ECharts option JSON for the category pie and the monthly bar
//! chart, along with the HTML containers and the initialization script
//! they need.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    chart::aggregation::{by_category, by_month},
    expense::Expense,
    html::{HeadElement, capitalize_first},
};

/// A chart with its HTML container ID and ECharts configuration.
pub(crate) struct ChartPanel {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Build the chart pair for the expenses page.
pub(crate) fn build_charts(expenses: &[Expense]) -> [ChartPanel; 2] {
    [
        ChartPanel {
            id: "category-chart",
            options: category_chart(expenses).to_string(),
        },
        ChartPanel {
            id: "monthly-chart",
            options: monthly_chart(expenses).to_string(),
        },
    ]
}

/// Renders the HTML containers the charts are drawn into.
pub(crate) fn charts_view(charts: &[ChartPanel]) -> Markup {
    html!(
        div class="chart-grid"
        {
            @for chart in charts {
                div id=(chart.id) class="chart" {}
            }
        }
    )
}

/// Generates the JavaScript that initializes the charts, with responsive
/// resizing and dark mode support.
pub(crate) fn charts_script(charts: &[ChartPanel]) -> HeadElement {
    let init_scripts = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chart = echarts.init(document.getElementById("{}"));
                    chart.setOption({});

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        chart.setTheme(darkModeMediaQuery.matches ? 'dark' : 'default');
                    }};
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    HeadElement::ScriptSource(PreEscaped(format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{init_scripts}\n}});"
    )))
}

/// A pie of the amount spent per category, labels capitalized for
/// display.
fn category_chart(expenses: &[Expense]) -> Chart {
    let buckets: Vec<(String, f64)> = by_category(expenses)
        .into_iter()
        .map(|(category, amount)| (capitalize_first(&category), amount))
        .collect();
    let data: Vec<(f64, &str)> = buckets
        .iter()
        .map(|(label, amount)| (*amount, label.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().left("center"))
        .series(Pie::new().name("Expenses").radius("60%").data(data))
}

/// A bar chart of the amount spent per month.
///
/// The bars follow the order the months occur in the collection, which
/// is newest-expense first, not calendar order.
fn monthly_chart(expenses: &[Expense]) -> Chart {
    let mut labels = Vec::new();
    let mut values = Vec::new();
    for (label, amount) in by_month(expenses) {
        labels.push(label);
        values.push(amount);
    }

    Chart::new()
        .title(Title::new().text("Monthly Expenses"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name("Monthly Expenses").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
