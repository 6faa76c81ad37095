//! Nutrition-profile routes.
//!
//! The server recomputes calorie and macro targets from the submitted
//! biometrics; client-supplied target values are never stored. The
//! `userId` path segment on reads is accepted and ignored: the store
//! is single-tenant and holds at most one profile.

use crate::error::{ApiError, INVALID_DATA};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lifehub_core::metrics::nutrition;
use lifehub_core::model::profile;
use lifehub_core::NutritionProfile;
use log::debug;
use serde_json::Value;
use uuid::Uuid;

pub const NOT_FOUND: &str = "Perfil não encontrado";

pub async fn save(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<NutritionProfile>), ApiError> {
    let Json(raw) = payload.map_err(|rejection| {
        debug!("event=payload_rejected module=profile reason=malformed_body detail={rejection}");
        ApiError::Invalid(INVALID_DATA)
    })?;
    let biometrics = profile::validate(&raw).map_err(|err| {
        debug!("event=payload_rejected module=profile reason={err}");
        ApiError::Invalid(INVALID_DATA)
    })?;

    let plan = nutrition::plan(&biometrics);
    let stored = state
        .repo()
        .set_nutrition_profile(NutritionProfile::assemble(Uuid::new_v4(), biometrics, plan))
        .clone();
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(_user_id): Path<String>,
) -> Result<Json<NutritionProfile>, ApiError> {
    let stored = state
        .repo()
        .nutrition_profile()
        .cloned()
        .ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(stored))
}
