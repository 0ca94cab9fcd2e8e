use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Tablero" }
                p { class: "page-subtitle", "Administración de cultura y desarrollo." }
            }
            div { class: "dashboard-grid",
                Link {
                    to: Route::Incidents {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Incidencias" }
                    p { class: "dashboard-card-desc",
                        "Consulta, registra y da mantenimiento al catálogo de incidencias."
                    }
                }
                Link {
                    to: Route::Employees {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Empleados" }
                    p { class: "dashboard-card-desc",
                        "Plantilla de empleados por compañía y oficina."
                    }
                }
            }
        }
    }
}
