use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::{
    model::WaitlistEntry,
    web::{
        types::{
            DataParsingError, DeserWaitlistSignup, ValidWaitlistSignup, WaitlistSignupCreated,
        },
        WebResult,
    },
    AppState,
};

/// Any body that can't be read as a JSON object is treated like an invalid email,
/// the rejection details only go to the logs.
#[tracing::instrument(name = "Adding a new waitlist signup", skip(app_state, payload))]
pub async fn waitlist_signup(
    State(app_state): State<AppState>,
    payload: Result<Json<DeserWaitlistSignup>, JsonRejection>,
) -> WebResult<(StatusCode, Json<WaitlistSignupCreated>)> {
    let Json(signup) = payload.map_err(|rej| {
        debug!("{:<20} - {}", "payload rejected", rej.body_text());
        DataParsingError::InvalidPayload
    })?;
    let signup = ValidWaitlistSignup::try_from(signup)?;

    // Check and insert happen atomically in the store, a duplicate comes back as an error.
    let entry = app_state.model_mgr.create_waitlist_entry(signup.email.as_ref())?;
    info!("{:<20} - id: {}", "waitlist signup", entry.id);

    Ok((
        StatusCode::CREATED,
        Json(WaitlistSignupCreated::new(entry.email)),
    ))
}

#[tracing::instrument(name = "Listing waitlist signups", skip(app_state))]
pub async fn waitlist_list(
    State(app_state): State<AppState>,
) -> WebResult<Json<Vec<WaitlistEntry>>> {
    let entries = app_state.model_mgr.list_waitlist_entries()?;
    Ok(Json(entries))
}
