//! Destinations for the remaining menu entries. The screens themselves are
//! owned by other teams; these routes exist so navigation has somewhere to
//! land.

use dioxus::prelude::*;

#[component]
fn SectionPlaceholder(title: &'static str) -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "{title}" }
            }
            div { class: "card",
                div { class: "card-body",
                    p { class: "text-muted", "Sección en construcción." }
                }
            }
        }
    }
}

#[component]
pub fn Companies() -> Element {
    rsx! { SectionPlaceholder { title: "Compañías" } }
}

#[component]
pub fn Offices() -> Element {
    rsx! { SectionPlaceholder { title: "Oficinas" } }
}

#[component]
pub fn Periods() -> Element {
    rsx! { SectionPlaceholder { title: "Periodos de Pago" } }
}

#[component]
pub fn Employees() -> Element {
    rsx! { SectionPlaceholder { title: "Empleados" } }
}

#[component]
pub fn Users() -> Element {
    rsx! { SectionPlaceholder { title: "Usuarios" } }
}
