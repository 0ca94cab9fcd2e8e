use dioxus::prelude::*;
use types::{IncidentDraft, STATUS_ACTIVE};

/// Active/inactive pill for the status column.
#[component]
pub fn StatusBadge(status: u8) -> Element {
    let active = status == STATUS_ACTIVE;

    rsx! {
        span {
            class: if active { "badge badge-active" } else { "badge badge-inactive" },
            if active { "Activo" } else { "Inactivo" }
        }
    }
}

/// The three editable incident fields, bound to the shared draft signal.
#[component]
pub fn IncidentFormFields(draft: Signal<IncidentDraft>) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "incident_code", "Código" }
            input {
                id: "incident_code",
                class: "form-input",
                r#type: "text",
                placeholder: "p. ej. INC-001",
                value: "{draft.read().incident_code}",
                oninput: move |e| draft.write().incident_code = e.value(),
            }
        }
        div { class: "form-group",
            label { class: "form-label", r#for: "incident_name", "Nombre" }
            input {
                id: "incident_name",
                class: "form-input",
                r#type: "text",
                placeholder: "p. ej. Falta injustificada",
                value: "{draft.read().incident_name}",
                oninput: move |e| draft.write().incident_name = e.value(),
            }
        }
        div { class: "form-group",
            label { class: "form-label", r#for: "incident_status", "Status" }
            select {
                id: "incident_status",
                class: "form-input",
                value: "{draft.read().incident_status}",
                onchange: move |e| {
                    if let Ok(status) = e.value().parse() {
                        draft.write().incident_status = status;
                    }
                },
                option { value: "1", "Activo" }
                option { value: "0", "Inactivo" }
            }
        }
    }
}
