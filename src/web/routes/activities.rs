use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::models::Activity;
use crate::services::signup_service;
use crate::store::{ActivityStore, StoreError};

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    email: String,
}

pub async fn list_activities_handler(
    State(store): State<ActivityStore>,
) -> Json<IndexMap<String, Activity>> {
    Json(store.all())
}

pub async fn signup_handler(
    Path(name): Path<String>,
    Query(q): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    signup_service::sign_up(&store, &name, &q.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %name, email = %q.email, error = %e, "signup rejected");
            error_response(e)
        })
}

pub async fn unregister_handler(
    Path(name): Path<String>,
    Query(q): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    signup_service::unregister(&store, &name, &q.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %name, email = %q.email, error = %e, "unregister rejected");
            error_response(e)
        })
}

fn error_response(e: StoreError) -> (StatusCode, Json<Value>) {
    let (status, reason) = match e {
        StoreError::ActivityNotFound => (StatusCode::NOT_FOUND, "activity_not_found"),
        StoreError::AlreadySignedUp => (StatusCode::BAD_REQUEST, "already_signed_up"),
        StoreError::NotSignedUp => (StatusCode::NOT_FOUND, "not_signed_up"),
    };
    (status, Json(serde_json::json!({ "error": reason })))
}
