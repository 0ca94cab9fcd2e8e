use dioxus::prelude::*;

/// Landing page after logout. Sessions are issued by the corporate portal,
/// which sets the `token` cookie before sending the browser back here.
#[component]
pub fn Login() -> Element {
    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Gestión de Cultura y Desarrollo" }
                    p { class: "login-subtitle", "Inicia sesión desde el portal corporativo para continuar." }
                }
                a { href: "/", class: "btn btn-primary login-btn", "Ir al tablero" }
            }
        }
    }
}
