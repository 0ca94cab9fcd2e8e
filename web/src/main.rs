use std::sync::Arc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use types::{AccessPolicy, RoleMatrix};

mod views;

use views::{
    Companies, Dashboard, Employees, Incidents, Login, NavigationBar, Offices, Periods, Users,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/companies")]
        Companies {},
        #[route("/offices")]
        Offices {},
        #[route("/periods")]
        Periods {},
        #[route("/incidents")]
        Incidents {},
        #[route("/employees")]
        Employees {},
        #[route("/users")]
        Users {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init().await?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

/// Role-gating policy handed to the views through context so tests can
/// swap the matrix out.
#[derive(Clone)]
pub struct PolicyContext(pub Arc<dyn AccessPolicy>);

impl PolicyContext {
    pub fn can_access(&self, role: &str, scope: &str, resource: &str) -> bool {
        self.0.can_access(role, scope, resource)
    }
}

pub fn use_policy() -> PolicyContext {
    use_context::<PolicyContext>()
}

#[component]
fn App() -> Element {
    use_context_provider(|| PolicyContext(Arc::new(RoleMatrix)));

    rsx! {
        document::Title { "Gestión de Cultura y Desarrollo" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Layout for every authenticated screen: navigation bar on top, the
/// routed page below, toasts floating over both.
#[component]
fn Shell() -> Element {
    use_context_provider(ToastState::new);

    rsx! {
        div { class: "app-shell",
            NavigationBar {}
            main { class: "main-content",
                Outlet::<Route> {}
            }
            ToastViewport {}
        }
    }
}

const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notification state - use `use_toast()` to access.
#[derive(Clone, Copy)]
pub struct ToastState {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Surface a failed server call, preferring the message the backend
    /// attached over the transport error's own rendering.
    pub fn server_error(&mut self, error: &ServerFnError) {
        let message = match error {
            ServerFnError::ServerError { message, .. } => message.clone(),
            other => other.to_string(),
        };
        self.push(ToastKind::Error, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        self.toasts.write().push(Toast { id, kind, message });

        let mut toasts = self.toasts;
        spawn(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.write().retain(|t| t.id != id);
        });
    }
}

pub fn use_toast() -> ToastState {
    use_context::<ToastState>()
}

#[component]
fn ToastViewport() -> Element {
    let mut state = use_toast();
    let toasts = state.toasts.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: if toast.kind == ToastKind::Error { "toast toast-error" } else { "toast toast-success" },
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| state.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
