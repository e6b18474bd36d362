use axum::response::Html;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Employees,
    Schedule,
    Summary,
}

impl Section {
    const ALL: [Section; 3] = [Section::Employees, Section::Schedule, Section::Summary];

    fn href(self) -> &'static str {
        match self {
            Section::Employees => "/employees",
            Section::Schedule => "/schedule",
            Section::Summary => "/summary",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Section::Employees => "Employees",
            Section::Schedule => "Schedule",
            Section::Summary => "Summary",
        }
    }
}

/// `path?k=v&...` with form-encoded values.
pub fn link(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();
    format!("{path}?{query}")
}

#[component]
pub fn ErrorBanner(#[props(!optional)] message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "alert", role: "alert", "{message}" }
        }
    }
}

#[component]
fn Navbar(#[props(!optional)] active: Option<Section>) -> Element {
    rsx! {
        nav { class: "navbar",
            span { class: "brand", "Shift Admin" }
            ul {
                for section in Section::ALL {
                    li { {nav_link(section, active == Some(section))} }
                }
            }
        }
    }
}

fn nav_link(section: Section, is_active: bool) -> Element {
    let href = section.href();
    let label = section.label();
    if is_active {
        rsx! { a { href: "{href}", class: "active", "{label}" } }
    } else {
        rsx! { a { href: "{href}", "{label}" } }
    }
}

#[component]
fn Layout(
    page_title: String,
    #[props(!optional)] active: Option<Section>,
    children: Element,
) -> Element {
    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{page_title}" }
                style { dangerous_inner_html: STYLES }
            }
            body {
                Navbar { active: active }
                main { class: "page", {children} }
            }
        }
    }
}

/// Renders `body` inside the shared layout as a complete document.
pub fn page(title: &str, active: Option<Section>, body: Element) -> Html<String> {
    let page_title = format!("{title} · Shift Admin");
    let markup = dioxus_ssr::render_element(rsx! {
        Layout { page_title: page_title, active: active, {body} }
    });
    Html(format!("<!DOCTYPE html>{markup}"))
}

const STYLES: &str = r#"
body { margin:0; font-family: system-ui, sans-serif; color:#111827; background:#f8fafc; }
.navbar { display:flex; align-items:center; gap:24px; padding:12px 24px; background:#fff; border-bottom:1px solid #e5e7eb; }
.navbar ul { display:flex; gap:16px; list-style:none; margin:0; padding:0; }
.navbar a { color:#374151; text-decoration:none; }
.navbar a.active { color:#2563eb; font-weight:700; }
.brand { font-weight:700; }
.page { max-width:1000px; margin:0 auto; padding:16px; display:grid; gap:16px; }
.card { background:#fff; border:1px solid #e5e7eb; border-radius:12px; }
.card-header { padding:12px 16px; border-bottom:1px solid #f1f5f9; }
.card-body { padding:16px; }
.toolbar { display:flex; align-items:center; justify-content:space-between; gap:12px; }
.nav, .view, .actions, .filters { display:flex; gap:8px; align-items:center; }
.btn { display:inline-block; padding:4px 10px; border:1px solid #e5e7eb; border-radius:6px; background:#fff; color:#111827; text-decoration:none; cursor:pointer; font-size:14px; }
.btn-primary { background:#2563eb; border-color:#2563eb; color:#fff; }
.btn.active { border-color:#2563eb; color:#2563eb; }
.danger { color:#b91c1c; }
.inline { display:inline; }
.alert { padding:8px 12px; border-radius:8px; background:#fee2e2; color:#991b1b; }
.muted { color:#6b7280; }
.empty { color:#6b7280; font-style:italic; }
.legend { display:flex; gap:12px; flex-wrap:wrap; margin-top:8px; font-size:12px; color:#6b7280; }
.cal-grid { display:grid; grid-template-columns:repeat(7,1fr); gap:8px; }
.cal-cell { min-height:120px; border:1px solid #e5e7eb; border-radius:10px; padding:6px; background:#fff; }
.cal-cell.head { min-height:auto; text-align:center; font-weight:600; background:#f8fafc; }
.cal-cell.other-month { opacity:.55; }
.cal-cell.today { box-shadow: inset 0 0 0 2px #2563eb44; }
.cal-cell-head { display:flex; align-items:center; justify-content:space-between; }
.cal-date { font-size:12px; color:#6b7280; }
.cal-date.is-today { color:#2563eb; font-weight:700; }
.cal-item { display:flex; align-items:center; gap:6px; padding:3px 6px; border-radius:6px; color:inherit; text-decoration:none; }
.avatar { width:18px; height:18px; line-height:18px; border-radius:50%; background:#f3f4f6; text-align:center; font-size:10px; font-weight:700; }
.cal-note { font-size:11px; color:#6b7280; overflow:hidden; text-overflow:ellipsis; white-space:nowrap; }
.chip { display:inline-block; padding:2px 8px; border-radius:999px; background:#eef2ff; color:#3730a3; font-size:11px; font-weight:700; }
.chip.is-day { background:#DCFCE7; color:#166534; }
.chip.is-morning { background:#FEF3C7; color:#92400E; }
.chip.is-afternoon { background:#FFEDD5; color:#9A3412; }
.chip.is-evening { background:#DBEAFE; color:#1E40AF; }
.chip.is-night { background:#EDE9FE; color:#5B21B6; }
.form-grid { display:grid; gap:12px; }
.field { display:grid; gap:6px; }
.input { padding:6px 8px; border:1px solid #d1d5db; border-radius:6px; }
table { border-collapse:collapse; width:100%; }
th, td { border:1px solid #e5e7eb; padding:8px; text-align:left; }
thead { background:#f5f5f5; }
"#;
