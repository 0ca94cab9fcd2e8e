use dioxus::prelude::*;
use types::{CurrentUser, IncidentDraft, IncidentPage, Period, UpdateIncident};

/// Identity lookup. Any failure (no cookie, backend down, expired token)
/// is reported as absence so the navigation bar can degrade to
/// placeholders instead of erroring.
#[post("/api/auth/me")]
pub async fn get_current_user() -> ServerFnResult<Option<CurrentUser>> {
    let Ok(token) = server::bearer_token().await else {
        return Ok(None);
    };
    Ok(server::BACKEND.current_user(&token).await.ok())
}

/// Active payroll period, with the same absence-on-failure policy as
/// [`get_current_user`].
#[post("/api/periods/current")]
pub async fn get_current_period() -> ServerFnResult<Option<Period>> {
    let Ok(token) = server::bearer_token().await else {
        return Ok(None);
    };
    Ok(server::BACKEND.current_period(&token).await.ok())
}

#[post("/api/incidents/list")]
pub async fn list_incidents(page: u32, search: String) -> ServerFnResult<IncidentPage> {
    let token = server::bearer_token().await?;
    Ok(server::BACKEND.list_incidents(&token, page, &search).await?)
}

#[post("/api/incidents/create")]
pub async fn create_incident(draft: IncidentDraft) -> ServerFnResult<()> {
    let token = server::bearer_token().await?;
    server::BACKEND.create_incident(&token, &draft).await?;
    Ok(())
}

#[post("/api/incidents/update")]
pub async fn update_incident(update: UpdateIncident) -> ServerFnResult<()> {
    let token = server::bearer_token().await?;
    server::BACKEND.update_incident(&token, &update).await?;
    Ok(())
}

#[post("/api/incidents/delete")]
pub async fn delete_incident(id: String) -> ServerFnResult<()> {
    let token = server::bearer_token().await?;
    server::BACKEND.delete_incident(&token, &id).await?;
    Ok(())
}
