use crate::dtos::{AddNameRequest, AddNameResponse, NamesResponse};
use crate::models::{GuestName, NameRecord};
use crate::startup::AppState;
use crate::utils::JsonBody;
use axum::{extract::State, Json};
use metrics::counter;
use service_core::error::AppError;

/// Sign the guestbook. Blank names are rejected before the store is touched.
pub async fn add_name(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddNameRequest>,
) -> Result<Json<AddNameResponse>, AppError> {
    let name = GuestName::parse(&payload.name)?;

    state.store.insert(NameRecord::from(name.clone())).await?;

    counter!("guestbook_names_added_total").increment(1);
    tracing::info!(name = %name, "Name added");

    Ok(Json(AddNameResponse::added(name.into_inner())))
}

pub async fn list_names(State(state): State<AppState>) -> Result<Json<NamesResponse>, AppError> {
    let records = state.store.list().await?;

    tracing::debug!(count = records.len(), "Listing names");

    Ok(Json(NamesResponse {
        names: records.into_iter().map(|record| record.name).collect(),
    }))
}
