use std::sync::LazyLock;

use reqwest::{Client, Method, RequestBuilder, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use types::{
    CurrentUser, DeleteIncident, IncidentDraft, IncidentPage, PAGE_SIZE, Period, Result,
    UpdateIncident,
};

use crate::config::CONFIG;

pub static BACKEND: LazyLock<BackendClient> =
    LazyLock::new(|| BackendClient::new(CONFIG.backend_url.clone()));

/// Fallback messages shown when the backend fails without a usable
/// `message` field of its own.
const LIST_FALLBACK: &str = "No se pudieron obtener las incidencias.";
const SAVE_FALLBACK: &str = "Error al guardar la incidencia.";
const DELETE_FALLBACK: &str = "Error al eliminar la incidencia.";
const SESSION_FALLBACK: &str = "Sesión no disponible.";

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull the backend's structured `message` out of a non-success body, or
/// fall back to the fixed per-operation text.
fn error_message(body: &[u8], fallback: &str) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn list_params(page: u32, search: &str) -> [(&'static str, String); 3] {
    [
        ("page", page.to_string()),
        ("pageSize", PAGE_SIZE.to_string()),
        ("search", search.to_string()),
    ]
}

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self, fallback: &str) -> Result<T>;
    async fn try_send_ack(self, fallback: &str) -> Result<()>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self, fallback: &str) -> Result<T> {
        let body = send_checked(self, fallback).await?;
        match serde_json::from_slice(&body) {
            Ok(parsed) => Ok(parsed),
            Err(error) => {
                tracing::warn!(?error, "failed to parse backend response");
                Err(fallback.into())
            }
        }
    }

    /// Like `try_send`, but the success body is an ack we don't care about.
    async fn try_send_ack(self, fallback: &str) -> Result<()> {
        send_checked(self, fallback).await.map(|_| ())
    }
}

async fn send_checked(request: RequestBuilder, fallback: &str) -> Result<Vec<u8>> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(?error, "backend request failed");
            return Err(fallback.into());
        }
    };

    let status = response.status();
    let body = match response.bytes().await {
        Ok(body) => body.to_vec(),
        Err(error) => {
            tracing::warn!(?error, "failed to read backend response body");
            return Err(fallback.into());
        }
    };

    if !status.is_success() {
        tracing::warn!(%status, "backend returned an error");
        return Err(error_message(&body, fallback).into());
    }

    Ok(body)
}

/// HTTP client for the incidents microservice. The bearer token is
/// per-request: it belongs to the browser session, not the process.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn request(&self, method: Method, path: &str, token: &SecretString) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|_| types::err!("invalid backend path: {path}"))?;

        Ok(self
            .client
            .request(method, url)
            .bearer_auth(token.expose_secret()))
    }

    pub async fn current_user(&self, token: &SecretString) -> Result<CurrentUser> {
        #[derive(Deserialize)]
        struct MeResponse {
            user: CurrentUser,
        }

        let response: MeResponse = self
            .request(Method::GET, "auth/me", token)?
            .try_send(SESSION_FALLBACK)
            .await?;
        Ok(response.user)
    }

    pub async fn current_period(&self, token: &SecretString) -> Result<Period> {
        self.request(Method::GET, "periods/current", token)?
            .try_send(SESSION_FALLBACK)
            .await
    }

    pub async fn list_incidents(
        &self,
        token: &SecretString,
        page: u32,
        search: &str,
    ) -> Result<IncidentPage> {
        self.request(Method::GET, "incidents", token)?
            .query(&list_params(page, search))
            .try_send(LIST_FALLBACK)
            .await
    }

    pub async fn create_incident(&self, token: &SecretString, draft: &IncidentDraft) -> Result<()> {
        self.request(Method::POST, "incidents", token)?
            .json(draft)
            .try_send_ack(SAVE_FALLBACK)
            .await
    }

    pub async fn update_incident(&self, token: &SecretString, update: &UpdateIncident) -> Result<()> {
        self.request(Method::PUT, "incidents", token)?
            .json(update)
            .try_send_ack(SAVE_FALLBACK)
            .await
    }

    pub async fn delete_incident(&self, token: &SecretString, id: &str) -> Result<()> {
        self.request(Method::DELETE, "incidents", token)?
            .json(&DeleteIncident { id: id.to_string() })
            .try_send_ack(DELETE_FALLBACK)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_carry_fixed_page_size() {
        let params = list_params(1, "INC-");
        assert_eq!(params[0], ("page", "1".to_string()));
        assert_eq!(params[1], ("pageSize", "10".to_string()));
        assert_eq!(params[2], ("search", "INC-".to_string()));
    }

    #[test]
    fn structured_message_wins_over_fallback() {
        let body = r#"{"message": "El código ya existe."}"#.as_bytes();
        assert_eq!(error_message(body, SAVE_FALLBACK), "El código ya existe.");
    }

    #[test]
    fn blank_message_falls_back() {
        assert_eq!(
            error_message(br#"{"message": "  "}"#, SAVE_FALLBACK),
            SAVE_FALLBACK
        );
        assert_eq!(
            error_message(br#"{"message": null}"#, SAVE_FALLBACK),
            SAVE_FALLBACK
        );
    }

    #[test]
    fn unparseable_body_falls_back() {
        assert_eq!(
            error_message(b"<html>502 Bad Gateway</html>", LIST_FALLBACK),
            LIST_FALLBACK
        );
        assert_eq!(error_message(b"", DELETE_FALLBACK), DELETE_FALLBACK);
    }
}
