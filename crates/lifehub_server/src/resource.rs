//! Uniform REST resource over one entity kind.
//!
//! # Responsibility
//! - Expose list/get/create/update/delete for every kind through one
//!   generic handler set, mounted per kind under `/api/<plural>`.
//! - Map expected outcomes to statuses: 200/201/204, 400 for rejected
//!   payloads, 404 for unknown ids.
//!
//! # Invariants
//! - Query parameters on list endpoints are accepted syntactically and
//!   ignored: the store is single-tenant and the full collection is
//!   always returned, so callers filter client-side.
//! - A syntactically invalid id reads as not-found, never as a server
//!   error.

use crate::error::{ApiError, INVALID_DATA};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use lifehub_core::{
    Collection, Entity, EntryId, Finance, Meal, Repository, Study, Task, ValidationError, Workout,
};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Wiring an entity kind needs to be served as a REST resource.
pub trait ApiResource: Entity + Serialize + Send + Sync + 'static {
    /// Localized not-found message for this kind.
    const NOT_FOUND: &'static str;

    fn validate(raw: &Value) -> Result<Self::Fields, ValidationError>;
    fn collection(repo: &Repository) -> &Collection<Self>;
    fn collection_mut(repo: &mut Repository) -> &mut Collection<Self>;
}

/// Builds the five-route router for one kind.
pub fn router<R: ApiResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/{id}",
            get(fetch::<R>).put(replace::<R>).delete(remove::<R>),
        )
}

async fn list<R: ApiResource>(State(state): State<AppState>) -> Json<Vec<R>> {
    Json(R::collection(&state.repo()).list())
}

async fn fetch<R: ApiResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<R>, ApiError> {
    let id = parse_id::<R>(&id)?;
    let record = R::collection(&state.repo())
        .get(id)
        .ok_or(ApiError::NotFound(R::NOT_FOUND))?;
    Ok(Json(record))
}

async fn create<R: ApiResource>(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), ApiError> {
    let fields = validated_fields::<R>(payload)?;
    let record = R::collection_mut(&mut state.repo()).create(fields);
    Ok((StatusCode::CREATED, Json(record)))
}

async fn replace<R: ApiResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<R>, ApiError> {
    let fields = validated_fields::<R>(payload)?;
    let id = parse_id::<R>(&id)?;
    let record = R::collection_mut(&mut state.repo())
        .update(id, fields)
        .ok_or(ApiError::NotFound(R::NOT_FOUND))?;
    Ok(Json(record))
}

async fn remove<R: ApiResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id::<R>(&id)?;
    if R::collection_mut(&mut state.repo()).delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(R::NOT_FOUND))
    }
}

fn parse_id<R: ApiResource>(id: &str) -> Result<EntryId, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound(R::NOT_FOUND))
}

fn validated_fields<R: ApiResource>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<R::Fields, ApiError> {
    let Json(raw) = payload.map_err(|rejection| {
        debug!(
            "event=payload_rejected module=resource kind={} reason=malformed_body detail={rejection}",
            R::KIND
        );
        ApiError::Invalid(INVALID_DATA)
    })?;
    R::validate(&raw).map_err(|err| {
        debug!(
            "event=payload_rejected module=resource kind={} reason={err}",
            R::KIND
        );
        ApiError::Invalid(INVALID_DATA)
    })
}

impl ApiResource for Finance {
    const NOT_FOUND: &'static str = "Transação não encontrada";

    fn validate(raw: &Value) -> Result<Self::Fields, ValidationError> {
        lifehub_core::model::finance::validate(raw)
    }

    fn collection(repo: &Repository) -> &Collection<Self> {
        &repo.finances
    }

    fn collection_mut(repo: &mut Repository) -> &mut Collection<Self> {
        &mut repo.finances
    }
}

impl ApiResource for Workout {
    const NOT_FOUND: &'static str = "Treino não encontrado";

    fn validate(raw: &Value) -> Result<Self::Fields, ValidationError> {
        lifehub_core::model::workout::validate(raw)
    }

    fn collection(repo: &Repository) -> &Collection<Self> {
        &repo.workouts
    }

    fn collection_mut(repo: &mut Repository) -> &mut Collection<Self> {
        &mut repo.workouts
    }
}

impl ApiResource for Meal {
    const NOT_FOUND: &'static str = "Refeição não encontrada";

    fn validate(raw: &Value) -> Result<Self::Fields, ValidationError> {
        lifehub_core::model::meal::validate(raw)
    }

    fn collection(repo: &Repository) -> &Collection<Self> {
        &repo.meals
    }

    fn collection_mut(repo: &mut Repository) -> &mut Collection<Self> {
        &mut repo.meals
    }
}

impl ApiResource for Task {
    const NOT_FOUND: &'static str = "Tarefa não encontrada";

    fn validate(raw: &Value) -> Result<Self::Fields, ValidationError> {
        lifehub_core::model::task::validate(raw)
    }

    fn collection(repo: &Repository) -> &Collection<Self> {
        &repo.tasks
    }

    fn collection_mut(repo: &mut Repository) -> &mut Collection<Self> {
        &mut repo.tasks
    }
}

impl ApiResource for Study {
    const NOT_FOUND: &'static str = "Estudo não encontrado";

    fn validate(raw: &Value) -> Result<Self::Fields, ValidationError> {
        lifehub_core::model::study::validate(raw)
    }

    fn collection(repo: &Repository) -> &Collection<Self> {
        &repo.studies
    }

    fn collection_mut(repo: &mut Repository) -> &mut Collection<Self> {
        &mut repo.studies
    }
}
