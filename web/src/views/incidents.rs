use crate::use_toast;
use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use types::{Incident, IncidentDraft, ListQuery, UpdateIncident};

use super::components::{IncidentFormFields, StatusBadge};

/// Quiet window after the last keystroke before the search text is sent.
const DEBOUNCE_MS: u32 = 500;

#[component]
pub fn Incidents() -> Element {
    let mut incidents = use_signal(Vec::<Incident>::new);
    let mut loading = use_signal(|| true);

    let mut query = use_signal(ListQuery::default);
    let mut debounced_search = use_signal(String::new);
    let mut debounce_timer = use_signal(|| None::<Task>);

    // Only changes of the page number should re-trigger the fetch effect;
    // raw search edits go through the debounce first.
    let page = use_memo(move || query.read().page);
    let search_term = use_memo(move || query.read().search.clone());

    let mut total_pages = use_signal(|| 1u32);
    let mut total = use_signal(|| 0u64);

    let mut show_modal = use_signal(|| false);
    let mut is_edit = use_signal(|| false);
    let mut current = use_signal(|| None::<Incident>);

    let mut delete_id = use_signal(|| None::<String>);
    let mut show_confirm_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let mut toast = use_toast();

    // Trailing-edge debounce: each keystroke cancels the pending timer and
    // starts a new one.
    use_effect(move || {
        let term = search_term();
        if let Some(timer) = debounce_timer.write().take() {
            timer.cancel();
        }
        if term == *debounced_search.peek() {
            return;
        }
        let timer = spawn(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            debounced_search.set(term);
        });
        debounce_timer.set(Some(timer));
    });

    let fetch_incidents = move || {
        spawn(async move {
            loading.set(true);
            let page = query.peek().page;
            let search = debounced_search.peek().clone();
            match api::list_incidents(page, search).await {
                Ok(result) => {
                    incidents.set(result.data);
                    total_pages.set(result.total_pages);
                    total.set(result.total);
                }
                Err(error) => {
                    // Rows from the last successful load stay on screen;
                    // the toast carries the failure.
                    toast.server_error(&error);
                }
            }
            loading.set(false);
        });
    };

    use_effect(move || {
        let _page = page();
        let _term = debounced_search.read();
        fetch_incidents();
    });

    let open_create = move |_| {
        is_edit.set(false);
        current.set(None);
        show_modal.set(true);
    };

    let mut open_edit = move |incident: Incident| {
        is_edit.set(true);
        current.set(Some(incident));
        show_modal.set(true);
    };

    rsx! {
        div {
            div { class: "page-header",
                h2 { class: "page-title", "Incidencias" }
                div { class: "page-header-actions",
                    input {
                        class: "form-input search-input",
                        r#type: "text",
                        placeholder: "Buscar incidencia...",
                        value: "{query.read().search}",
                        oninput: move |e| query.write().set_search(e.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: open_create,
                        "Nueva Incidencia"
                    }
                }
            }

            div { class: "table-container",
                table {
                    thead {
                        tr {
                            th { class: "col-code", "Código" }
                            th { "Nombre" }
                            th { class: "col-status", "Status" }
                            th { class: "col-actions", "Acciones" }
                        }
                    }
                    tbody {
                        if loading() {
                            tr {
                                td { colspan: "4", class: "table-note", "Cargando..." }
                            }
                        } else if incidents.read().is_empty() {
                            tr {
                                td { colspan: "4", class: "table-note", "No se encontraron incidencias." }
                            }
                        } else {
                            for incident in incidents.read().iter() {
                                {
                                    let row = incident.clone();
                                    let row_id = incident.id.clone();
                                    rsx! {
                                        tr { key: "{incident.id}",
                                            td { class: "cell-mono", "{incident.incident_code}" }
                                            td { class: "cell-name", "{incident.incident_name}" }
                                            td {
                                                StatusBadge { status: incident.incident_status }
                                            }
                                            td { class: "cell-actions",
                                                button {
                                                    class: "btn btn-ghost",
                                                    onclick: move |_| open_edit(row.clone()),
                                                    "Editar"
                                                }
                                                button {
                                                    class: "btn btn-ghost btn-danger-text",
                                                    onclick: move |_| {
                                                        delete_id.set(Some(row_id.clone()));
                                                        show_confirm_delete.set(true);
                                                    },
                                                    "Eliminar"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "list-footer",
                span { class: "text-muted", "Total: {total} incidencias" }
                div { class: "pager",
                    span { "Página {page} de {total_pages}" }
                    button {
                        class: "btn btn-outline",
                        disabled: !query.read().has_prev(),
                        onclick: move |_| query.write().prev_page(),
                        "Anterior"
                    }
                    button {
                        class: "btn btn-outline",
                        disabled: !query.read().has_next(total_pages()),
                        onclick: move |_| {
                            let bound = total_pages();
                            query.write().next_page(bound);
                        },
                        "Siguiente"
                    }
                }
            }

            if show_modal() {
                IncidentModal {
                    edit: is_edit(),
                    current: current(),
                    on_close: move |_| show_modal.set(false),
                    on_saved: move |_| {
                        show_modal.set(false);
                        fetch_incidents();
                    },
                }
            }

            if show_confirm_delete() {
                DeleteConfirmModal {
                    deleting: deleting(),
                    on_close: move |_| {
                        show_confirm_delete.set(false);
                        delete_id.set(None);
                    },
                    on_confirm: move |_| {
                        if *deleting.peek() {
                            return;
                        }
                        let Some(id) = delete_id.peek().clone() else {
                            return;
                        };
                        spawn(async move {
                            deleting.set(true);
                            match api::delete_incident(id).await {
                                Ok(()) => {
                                    toast.success("Incidencia eliminada con éxito.");
                                    delete_id.set(None);
                                    show_confirm_delete.set(false);
                                    fetch_incidents();
                                }
                                // The prompt stays open and keeps its target
                                // so the same confirm can be retried.
                                Err(error) => toast.server_error(&error),
                            }
                            deleting.set(false);
                        });
                    },
                }
            }
        }
    }
}

/// Shared create/edit modal. Create starts from a blank draft with status
/// active; edit seeds the draft from the selected record and retains its id
/// for the update call.
#[component]
fn IncidentModal(
    edit: bool,
    current: Option<Incident>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut toast = use_toast();
    let edit_id = current.as_ref().map(|i| i.id.clone());
    let initial = current
        .as_ref()
        .map(IncidentDraft::from)
        .unwrap_or_default();
    let draft = use_signal(move || initial.clone());
    let mut saving = use_signal(|| false);

    let can_submit = {
        let d = draft.read();
        !d.incident_code.trim().is_empty() && !d.incident_name.trim().is_empty()
    };

    let submit = move |_| {
        // Not re-entrant: a second submit is a no-op until the first resolves.
        if *saving.peek() {
            return;
        }
        let fields = draft.peek().clone();
        let target = edit.then(|| edit_id.clone()).flatten();
        if edit && target.is_none() {
            return;
        }
        spawn(async move {
            saving.set(true);
            let result = match target {
                Some(id) => api::update_incident(UpdateIncident { id, draft: fields }).await,
                None => api::create_incident(fields).await,
            };
            match result {
                Ok(()) => {
                    if edit {
                        toast.success("Incidencia actualizada con éxito.");
                    } else {
                        toast.success("Incidencia creada con éxito.");
                    }
                    on_saved.call(());
                }
                // Modal stays open, draft intact, so the user can retry.
                Err(error) => toast.server_error(&error),
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title",
                        if edit { "Editar Incidencia" } else { "Nueva Incidencia" }
                    }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    IncidentFormFields { draft }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: !can_submit || saving(),
                        onclick: submit,
                        if saving() {
                            "Guardando..."
                        } else if edit {
                            "Guardar Cambios"
                        } else {
                            "Crear Incidencia"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DeleteConfirmModal(
    deleting: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !deleting { on_close.call(()) },
            div { class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "¿Eliminar esta incidencia?" }
                }
                div { class: "modal-body",
                    p { "Esta acción no se puede deshacer. La incidencia se eliminará permanentemente." }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: deleting,
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: deleting,
                        onclick: move |_| on_confirm.call(()),
                        if deleting { "Eliminando..." } else { "Eliminar" }
                    }
                }
            }
        }
    }
}
