use crate::modules::analytics::core::summary::{AnalyticsItem, AnalyticsSummary};
use crate::shared::web::html::{ErrorBanner, Section, page};
use axum::response::Html;
use dioxus::prelude::*;

/// Raw filter values echoed back into the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFilter<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

pub fn summary_page(
    filter: SummaryFilter<'_>,
    summary: Option<&AnalyticsSummary>,
    error: Option<&str>,
) -> Html<String> {
    let start = filter.start;
    let end = filter.end;
    let body = rsx! {
        section { class: "card",
            header { class: "card-header", h1 { "Summary" } }
            div { class: "card-body",
                ErrorBanner { message: error.map(str::to_string) }
                form { class: "filters", method: "get", action: "/summary",
                    label { class: "field",
                        span { "Start" }
                        input { class: "input", r#type: "date", name: "start", value: "{start}" }
                    }
                    label { class: "field",
                        span { "End" }
                        input { class: "input", r#type: "date", name: "end", value: "{end}" }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Apply" }
                    a { class: "btn", href: "/summary", "Clear" }
                }
            }
        }
        if let Some(summary) = summary {
            {results(summary)}
        }
    };
    page("Summary", Some(Section::Summary), body)
}

fn results(summary: &AnalyticsSummary) -> Element {
    let total = summary.total_shifts_all;
    rsx! {
        section { class: "card results",
            div { class: "card-body",
                p { strong { "Total shifts (all employees): {total}" } }
                table {
                    thead {
                        tr {
                            th { "Employee" }
                            th { "Total shifts" }
                        }
                    }
                    tbody {
                        for item in summary.items.iter() {
                            {result_row(item)}
                        }
                    }
                }
            }
        }
    }
}

fn result_row(item: &AnalyticsItem) -> Element {
    let name = &item.employee_name;
    let id = item.employee_id;
    let total = item.total_shifts;
    rsx! {
        tr {
            td { "{name} (ID {id})" }
            td { "{total}" }
        }
    }
}
