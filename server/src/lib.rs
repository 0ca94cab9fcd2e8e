mod auth_routes;
mod backend;
mod config;

use axum::Router;
use axum::http::HeaderMap;
use dioxus::fullstack::FullstackContext;
use secrecy::SecretString;
use types::{Result, TOKEN_COOKIE_NAME, err};

use crate::auth_routes::auth_router;
pub use crate::backend::BACKEND;
pub use crate::config::CONFIG;

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

pub async fn init() -> Result<Router> {
    tracing::info!(backend = %CONFIG.backend_url, "incidencias frontend starting");
    Ok(auth_router())
}

/// Extract the backend bearer token from the request's `token` cookie.
///
/// The cookie is issued by the external identity service; this app only
/// reads it and forwards it to the backend.
pub async fn bearer_token() -> Result<SecretString> {
    let headers: HeaderMap = FullstackContext::extract()
        .await
        .map_err(|_| err!("no hay una petición activa"))?;

    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| err!("Sesión no válida. Inicia sesión de nuevo."))?;

    token_from_cookie_header(cookie_header)
        .ok_or_else(|| err!("Sesión no válida. Inicia sesión de nuevo."))
}

fn token_from_cookie_header(header: &str) -> Option<SecretString> {
    for cookie_str in header.split(';') {
        let cookie_str = cookie_str.trim();
        if let Some(value) = cookie_str.strip_prefix(&format!("{TOKEN_COOKIE_NAME}=")) {
            if value.is_empty() {
                return None;
            }
            return Some(value.to_string().into());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn finds_token_among_other_cookies() {
        let header = "rol=admin; token=abc123; periodo=Quincena%2011";
        let token = token_from_cookie_header(header).unwrap();
        assert_eq!(token.expose_secret(), "abc123");
    }

    #[test]
    fn missing_token_is_none() {
        assert!(token_from_cookie_header("rol=admin; periodo=Q11").is_none());
        assert!(token_from_cookie_header("").is_none());
    }

    #[test]
    fn empty_token_value_is_none() {
        assert!(token_from_cookie_header("token=; rol=admin").is_none());
    }

    #[test]
    fn does_not_match_suffixed_names() {
        assert!(token_from_cookie_header("csrf_token=xyz").is_none());
    }
}
