use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::use_cases::save_employee::handler::EmployeeForm;
use crate::shared::web::html::{ErrorBanner, Section, page};
use axum::response::Html;
use dioxus::prelude::*;

pub fn list_page(employees: &[Employee], form: &EmployeeForm, error: Option<&str>) -> Html<String> {
    let name = form.name.clone();
    let role = form.role.clone();
    let body = rsx! {
        section { class: "card",
            header { class: "card-header", h1 { "Employees" } }
            div { class: "card-body",
                ErrorBanner { message: error.map(str::to_string) }
                form { class: "filters", method: "post", action: "/employees",
                    input { class: "input", name: "name", placeholder: "Name", value: "{name}" }
                    input { class: "input", name: "role", placeholder: "Role", value: "{role}" }
                    button { class: "btn btn-primary", r#type: "submit", "Add" }
                }
            }
        }
        section { class: "card",
            div { class: "card-body", {employee_table(employees)} }
        }
    };
    page("Employees", Some(Section::Employees), body)
}

fn employee_table(employees: &[Employee]) -> Element {
    if employees.is_empty() {
        return rsx! { p { class: "empty", "No employees yet. Add one above." } };
    }
    rsx! {
        table {
            thead {
                tr {
                    th { "ID" }
                    th { "Name" }
                    th { "Role" }
                    th {}
                }
            }
            tbody {
                for employee in employees.iter() {
                    {employee_row(employee)}
                }
            }
        }
    }
}

fn employee_row(employee: &Employee) -> Element {
    let id = employee.id;
    let name = &employee.name;
    let role = &employee.role;
    rsx! {
        tr {
            td { "{id}" }
            td { "{name}" }
            td { "{role}" }
            td { class: "actions",
                a { class: "btn", href: "/employees/{id}/edit", "Edit" }
                form { class: "inline", method: "post", action: "/employees/{id}/delete",
                    button { class: "btn danger", r#type: "submit", "Delete" }
                }
            }
        }
    }
}

pub fn edit_page(id: i64, form: &EmployeeForm, error: Option<&str>) -> Html<String> {
    let name = form.name.clone();
    let role = form.role.clone();
    let body = rsx! {
        section { class: "card",
            header { class: "card-header", h1 { "Edit employee #{id}" } }
            div { class: "card-body",
                ErrorBanner { message: error.map(str::to_string) }
                form { class: "form-grid", method: "post", action: "/employees/{id}",
                    label { class: "field",
                        span { "Name" }
                        input { class: "input", name: "name", value: "{name}" }
                    }
                    label { class: "field",
                        span { "Role" }
                        input { class: "input", name: "role", value: "{role}" }
                    }
                    div { class: "actions",
                        a { class: "btn", href: "/employees", "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "Update" }
                    }
                }
            }
        }
    };
    page("Edit employee", Some(Section::Employees), body)
}
