use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::models::Activity;
use crate::registry::{ActivityRegistry, RegistryError};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

fn reject(error: RegistryError) -> (StatusCode, Json<Value>) {
    let status = match error {
        RegistryError::NotFound => StatusCode::NOT_FOUND,
        RegistryError::AlreadySignedUp | RegistryError::NotSignedUp => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": error.to_string() })))
}

pub async fn list_activities_handler(
    State(registry): State<ActivityRegistry>,
) -> Json<IndexMap<String, Activity>> {
    Json(registry.list().await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    registry
        .signup(&activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            reject(e)
        })?;

    info!(activity = %activity_name, email = %query.email, "signup ok");
    Ok(Json(json!({
        "message": format!("{} added to {}", query.email, activity_name)
    })))
}

pub async fn remove_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    registry
        .remove(&activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "remove rejected");
            reject(e)
        })?;

    info!(activity = %activity_name, email = %query.email, "remove ok");
    Ok(Json(json!({
        "message": format!("{} removed from {}", query.email, activity_name)
    })))
}
