use axum::{
    Router,
    response::{IntoResponse, Redirect},
    routing::post,
};
use cookie::{Cookie, SameSite};
use types::{PERIOD_COOKIE_NAME, ROLE_COOKIE_NAME, TOKEN_COOKIE_NAME};

pub fn auth_router() -> Router {
    Router::new().route("/api/auth/logout", post(logout))
}

fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::ZERO)
        .build()
}

async fn logout() -> impl IntoResponse {
    tracing::info!("logout requested");
    logout_response()
}

/// Clears the session cookies and sends the browser to the login page,
/// whatever state the session was in.
fn logout_response() -> axum::response::Response {
    let mut response = Redirect::to("/login").into_response();
    for name in [TOKEN_COOKIE_NAME, ROLE_COOKIE_NAME, PERIOD_COOKIE_NAME] {
        if let Ok(value) = expired_cookie(name).to_string().parse() {
            response
                .headers_mut()
                .append(axum::http::header::SET_COOKIE, value);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_cookie_zeroes_max_age() {
        let rendered = expired_cookie(TOKEN_COOKIE_NAME).to_string();
        assert!(rendered.starts_with("token=;"));
        assert!(rendered.contains("Max-Age=0"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("SameSite=Lax"));
    }

    #[test]
    fn logout_redirects_to_login_and_expires_every_session_cookie() {
        let response = logout_response();

        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get(axum::http::header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/login")
        );

        let cleared: Vec<_> = response
            .headers()
            .get_all(axum::http::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        assert_eq!(cleared.len(), 3);
        for name in [TOKEN_COOKIE_NAME, ROLE_COOKIE_NAME, PERIOD_COOKIE_NAME] {
            assert!(cleared.iter().any(|c| c.starts_with(&format!("{name}=;"))));
        }
    }
}
