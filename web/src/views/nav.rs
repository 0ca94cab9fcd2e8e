use crate::{Route, use_policy};
use dioxus::document;
use dioxus::prelude::*;
use types::{
    CurrentUser, PERIOD_COOKIE_NAME, Period, ROLE_COOKIE_NAME, SESSION_COOKIE_MAX_AGE_SECS,
};

/// Fixed menu of destinations; each entry is gated by
/// `can_access(role, "menu", resource)`.
fn menu_entries() -> [(&'static str, &'static str, Route); 6] {
    [
        ("companies", "Compañías", Route::Companies {}),
        ("offices", "Oficinas", Route::Offices {}),
        ("periods", "Periodos de Pago", Route::Periods {}),
        ("incidents", "Incidentes", Route::Incidents {}),
        ("employees", "Empleados", Route::Employees {}),
        ("users", "Usuarios", Route::Users {}),
    ]
}

/// Mirror a derived session value into a short-lived cookie other pages
/// read for gating and display.
fn set_mirror_cookie(name: &str, value: &str) {
    document::eval(&mirror_cookie_js(name, value));
}

fn mirror_cookie_js(name: &str, value: &str) -> String {
    // Backend-supplied values can carry quotes; they must survive the
    // single-quoted JS literal.
    let value = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
        "var secure = location.protocol === 'https:' ? '; secure' : ''; \
         document.cookie = '{name}={value}; path=/; max-age={SESSION_COOKIE_MAX_AGE_SECS}; samesite=lax' + secure;"
    )
}

#[component]
pub fn NavigationBar() -> Element {
    let mut user = use_signal(|| None::<CurrentUser>);
    let mut period = use_signal(|| None::<Period>);
    let policy = use_policy();

    use_effect(move || {
        spawn(async move {
            match api::get_current_user().await {
                Ok(Some(current)) => {
                    set_mirror_cookie(ROLE_COOKIE_NAME, &current.role);
                    user.set(Some(current));
                }
                // Failures mean "not signed in", never an error dialog.
                Ok(None) | Err(_) => user.set(None),
            }
        });
    });

    use_effect(move || {
        spawn(async move {
            match api::get_current_period().await {
                Ok(Some(current)) => {
                    set_mirror_cookie(PERIOD_COOKIE_NAME, &current.period_name);
                    period.set(Some(current));
                }
                Ok(None) | Err(_) => period.set(None),
            }
        });
    });

    let role = user.read().as_ref().map(|u| u.role.clone()).unwrap_or_default();
    let greeting = user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "...".to_string());

    rsx! {
        header { class: "topbar",
            div { class: "topbar-brand",
                Link { to: Route::Dashboard {}, class: "topbar-home", "Inicio" }
                span { class: "topbar-title", "Gestión de Cultura y Desarrollo" }
                span { class: "topbar-sep", "|" }
                if let Some(p) = period.read().as_ref() {
                    span { class: "topbar-period",
                        span { class: "topbar-period-name", "{p.period_name}" }
                        span { class: "topbar-period-range", "({p.date_range()})" }
                    }
                } else {
                    span { class: "text-muted", "Sin periodo actual" }
                }
            }
            div { class: "topbar-actions",
                span { class: "topbar-greeting",
                    "Hola "
                    strong { "{greeting}" }
                }
                details { class: "nav-menu",
                    summary { class: "nav-menu-trigger", "Menú" }
                    div { class: "nav-menu-items",
                        for (resource, label, route) in menu_entries() {
                            if policy.can_access(&role, "menu", resource) {
                                Link { to: route, class: "nav-menu-link", "{label}" }
                            }
                        }
                    }
                }
                // Full-page POST; the logout route always answers with a
                // redirect to /login, even when the session was already gone.
                form {
                    class: "nav-logout",
                    action: "/api/auth/logout",
                    method: "post",
                    button {
                        r#type: "submit",
                        class: "nav-logout-btn",
                        title: "Cerrar sesión",
                        "Salir"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_cookie_js_escapes_single_quotes() {
        let js = mirror_cookie_js(ROLE_COOKIE_NAME, "d'Artagnan");
        assert!(js.contains("'rol=d\\'Artagnan; path=/;"));
    }

    #[test]
    fn mirror_cookie_js_escapes_backslashes_before_quotes() {
        let js = mirror_cookie_js(ROLE_COOKIE_NAME, "a\\'b");
        assert!(js.contains("'rol=a\\\\\\'b; path=/;"));
    }

    #[test]
    fn mirror_cookie_js_sets_session_attributes() {
        let js = mirror_cookie_js(PERIOD_COOKIE_NAME, "Agosto 2026");
        assert!(js.contains("max-age=86400"));
        assert!(js.contains("samesite=lax"));
        assert!(js.contains("location.protocol === 'https:'"));
    }
}
