use crate::modules::employees::core::employee::Employee;
use crate::modules::schedule::core::calendar::{
    CalendarDay, CalendarPosition, PlacedShift, ViewMode, WEEKDAY_LABELS, format_day_month_year,
};
use crate::modules::schedule::core::shift::ShiftKind;
use crate::modules::schedule::use_cases::save_shift::handler::ShiftForm;
use crate::modules::schedule::use_cases::view_calendar::handler::CalendarPage;
use crate::shared::core::primitives::format_iso;
use crate::shared::web::html::{ErrorBanner, Section, link, page};
use axum::response::Html;
use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

fn position_link(path: &str, position: CalendarPosition) -> String {
    let [(view_key, view), (at_key, at)] = position.query_pairs();
    link(path, &[(view_key, view.as_str()), (at_key, at.as_str())])
}

pub fn calendar_link(position: CalendarPosition) -> String {
    position_link("/schedule", position)
}

fn editor_link(path: &str, position: CalendarPosition, on: NaiveDate) -> String {
    let [(view_key, view), (at_key, at)] = position.query_pairs();
    let on = format_iso(on);
    link(
        path,
        &[("on", on.as_str()), (view_key, view.as_str()), (at_key, at.as_str())],
    )
}

fn position_fields(position: CalendarPosition) -> Element {
    let view = position.mode.as_str();
    let at = format_iso(position.reference);
    rsx! {
        input { r#type: "hidden", name: "view", value: "{view}" }
        input { r#type: "hidden", name: "at", value: "{at}" }
    }
}

fn delete_form(id: i64, position: CalendarPosition) -> Element {
    rsx! {
        form { class: "inline", method: "post", action: "/schedule/{id}/delete",
            {position_fields(position)}
            button { class: "btn danger", r#type: "submit", "Delete" }
        }
    }
}

fn mode_link(position: CalendarPosition, mode: ViewMode, label: &str) -> Element {
    let class = if mode == position.mode { "btn active" } else { "btn" };
    let href = calendar_link(position.with_mode(mode));
    rsx! { a { class: "{class}", href: "{href}", "{label}" } }
}

fn toolbar(position: CalendarPosition, today: NaiveDate) -> Element {
    let previous = calendar_link(position.previous());
    let current = calendar_link(position.with_reference(today));
    let next = calendar_link(position.next());
    let title = position.title();
    rsx! {
        header { class: "card-header",
            div { class: "toolbar",
                div { class: "nav",
                    a { class: "btn", href: "{previous}", "«" }
                    a { class: "btn", href: "{current}", "Today" }
                    a { class: "btn", href: "{next}", "»" }
                }
                div { class: "view",
                    {mode_link(position, ViewMode::Month, "Month")}
                    {mode_link(position, ViewMode::Week, "Week")}
                    strong { "{title}" }
                }
            }
            div { class: "legend",
                for kind in ShiftKind::ALL {
                    {legend_chip(kind)}
                }
            }
        }
    }
}

fn legend_chip(kind: ShiftKind) -> Element {
    let class = kind.css_class();
    let label = kind.label();
    rsx! { span { class: "chip {class}", "{label}" } }
}

fn chip(placed: &PlacedShift) -> Element {
    let class = placed.shift.css_class();
    let label = &placed.shift.shift;
    rsx! { span { class: "chip {class}", "{label}" } }
}

fn calendar_item(placed: &PlacedShift, position: CalendarPosition) -> Element {
    let name = placed.display_name();
    let initials = placed.initials();
    let href = editor_link(
        &format!("/schedule/{}/edit", placed.shift.id),
        position,
        placed.shift.date,
    );
    rsx! {
        a { class: "cal-item", title: "{name}", href: "{href}",
            span { class: "avatar", "{initials}" }
            {chip(placed)}
            if let Some(note) = placed.shift.note.as_deref() {
                span { class: "cal-note", "{note}" }
            }
        }
    }
}

fn day_cell(day: &CalendarDay, position: CalendarPosition) -> Element {
    let mut class = String::from("cal-cell");
    if day.outside_month {
        class.push_str(" other-month");
    }
    if day.is_today {
        class.push_str(" today");
    }
    let date_class = if day.is_today { "cal-date is-today" } else { "cal-date" };
    let add = editor_link("/schedule/new", position, day.date);
    let number = day.date.day();
    rsx! {
        div { class: "{class}",
            div { class: "cal-cell-head",
                a { class: "btn", title: "Add shift", href: "{add}", "+" }
                span { class: "{date_class}", "{number}" }
            }
            div { class: "cal-items",
                for placed in day.shifts.iter() {
                    {calendar_item(placed, position)}
                }
            }
        }
    }
}

fn listing_row(placed: &PlacedShift, position: CalendarPosition) -> Element {
    let date = format_day_month_year(placed.shift.date);
    let name = placed.display_name();
    let note = placed.shift.note.as_deref().unwrap_or("\u{2014}");
    let edit = editor_link(
        &format!("/schedule/{}/edit", placed.shift.id),
        position,
        placed.shift.date,
    );
    rsx! {
        tr {
            td { "{date}" }
            td { {chip(placed)} }
            td { "{name}" }
            td { class: "muted", "{note}" }
            td { class: "actions",
                a { class: "btn", href: "{edit}", "Edit" }
                {delete_form(placed.shift.id, position)}
            }
        }
    }
}

fn listing(shifts: &[PlacedShift], position: CalendarPosition) -> Element {
    if shifts.is_empty() {
        return rsx! { p { class: "empty", "No shifts yet. Click a calendar cell to add one." } };
    }
    rsx! {
        table {
            thead {
                tr {
                    th { "Date" }
                    th { "Shift" }
                    th { "Employee" }
                    th { "Note" }
                    th {}
                }
            }
            tbody {
                for placed in shifts.iter() {
                    {listing_row(placed, position)}
                }
            }
        }
    }
}

pub fn calendar_page(calendar: &CalendarPage) -> Html<String> {
    let position = calendar.position;
    let body = rsx! {
        section { class: "card",
            {toolbar(position, calendar.today)}
            div { class: "card-body",
                div { class: "cal-grid cal-head",
                    for label in WEEKDAY_LABELS {
                        div { class: "cal-cell head", "{label}" }
                    }
                }
                div { class: "cal-grid cal-body",
                    for day in calendar.days.iter() {
                        {day_cell(day, position)}
                    }
                }
            }
        }
        section { class: "card",
            header { class: "card-header", h2 { "Shifts" } }
            div { class: "card-body", {listing(&calendar.listing, position)} }
        }
    };
    page("Schedule", Some(Section::Schedule), body)
}

/// Data for the add/edit shift page.
pub struct ShiftEditor<'a> {
    pub editing: Option<i64>,
    pub position: CalendarPosition,
    pub form: &'a ShiftForm,
    pub employees: &'a [Employee],
    pub error: Option<&'a str>,
}

fn employee_option(employee: &Employee, selected: &str) -> Element {
    let value = employee.id.to_string();
    let label = format!("{} ({})", employee.name, employee.role);
    if value == selected {
        rsx! { option { value: "{value}", selected: "selected", "{label}" } }
    } else {
        rsx! { option { value: "{value}", "{label}" } }
    }
}

fn shift_option(kind: ShiftKind, selected: &str) -> Element {
    let label = kind.label();
    if label.eq_ignore_ascii_case(selected) {
        rsx! { option { selected: "selected", "{label}" } }
    } else {
        rsx! { option { "{label}" } }
    }
}

pub fn editor_page(editor: &ShiftEditor<'_>) -> Html<String> {
    let form = editor.form;
    let (heading, action, submit) = match editor.editing {
        Some(id) => ("Edit shift", format!("/schedule/{id}"), "Update"),
        None => ("Schedule shift", "/schedule".to_string(), "Save"),
    };
    let date_label = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
        .map(|date| date.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|_| form.date.clone());
    let date = &form.date;
    let note = &form.note;
    let employee_id = form.employee_id.trim();
    let shift = form.shift.trim();
    let cancel = calendar_link(editor.position);
    let body = rsx! {
        section { class: "card",
            header { class: "card-header", h1 { "{heading}" } }
            div { class: "card-body",
                ErrorBanner { message: editor.error.map(str::to_string) }
                p { class: "muted",
                    strong { "Date:" }
                    " {date_label}"
                }
                form { class: "form-grid", method: "post", action: "{action}",
                    input { r#type: "hidden", name: "date", value: "{date}" }
                    {position_fields(editor.position)}
                    label { class: "field",
                        span { "Employee" }
                        select { class: "input", name: "employee_id",
                            option { value: "", "Select employee" }
                            for employee in editor.employees.iter() {
                                {employee_option(employee, employee_id)}
                            }
                        }
                    }
                    label { class: "field",
                        span { "Shift" }
                        select { class: "input", name: "shift",
                            option { value: "", "Select shift" }
                            for kind in ShiftKind::ALL {
                                {shift_option(kind, shift)}
                            }
                        }
                    }
                    label { class: "field",
                        span { "Note (optional)" }
                        input {
                            class: "input",
                            name: "note",
                            placeholder: "e.g., covering morning shift",
                            value: "{note}",
                        }
                    }
                    div { class: "actions",
                        a { class: "btn", href: "{cancel}", "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "{submit}" }
                    }
                }
                if let Some(id) = editor.editing {
                    {delete_form(id, editor.position)}
                }
            }
        }
    };
    page(heading, Some(Section::Schedule), body)
}
