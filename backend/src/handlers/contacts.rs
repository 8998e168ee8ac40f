//! HTTP handlers for the contact form

use axum::{extract::State, http::StatusCode, Json};
use shared::models::ContactMessage;

use crate::error::AppResult;
use crate::services::contact::CreateContactInput;
use crate::services::ContactService;
use crate::AppState;

/// Submit a contact message
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<CreateContactInput>,
) -> AppResult<(StatusCode, Json<ContactMessage>)> {
    let service = ContactService::new(state.db);
    let message = service.submit(input).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// List contact messages
pub async fn list_contacts(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let service = ContactService::new(state.db);
    Ok(Json(service.list().await?))
}
