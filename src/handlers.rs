//! HTTP handlers for the Person resource
//!
//! Each endpoint is one linear flow: decode, validate, map, call the
//! repository, map back, respond. Every failure short-circuits to a specific
//! status and stable message; nothing is retried and no request affects
//! another.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    Json,
};
use tracing::{error, info, warn};

use crate::error::{Error, Result};
use crate::ids::PersonId;
use crate::models::Person;
use crate::state::AppState;

/// GET /person — list every person.
///
/// An empty collection yields `200 []`, never a null body.
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Person>>> {
    info!("find_all");

    let documents = state.repository.find_all().await.map_err(|err| {
        error!(operation = "find_all", %err, "failed to fetch people");
        Error::Internal(err.to_string())
    })?;

    let people = state.mapper.documents_to_dtos(&documents).map_err(|err| {
        error!(operation = "find_all", %err, "failed to map people");
        Error::Internal(err.to_string())
    })?;

    Ok(Json(people))
}

/// GET /person/{id} — fetch one person.
///
/// A malformed id behaves as not-found: this path advertises no 4xx for bad
/// ids, so an unparsable id simply cannot match anything.
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>> {
    info!(%id, "find_by_id");

    let person_id: PersonId = id.parse().map_err(|err| {
        warn!(%id, %err, "unparsable person id treated as not found");
        Error::PersonNotFound
    })?;

    let document = state
        .repository
        .find_by_id(&person_id)
        .await
        .map_err(|err| {
            error!(operation = "find_by_id", %id, %err, "failed to fetch person");
            Error::Internal(err.to_string())
        })?
        .ok_or_else(|| {
            warn!(%id, "person not found");
            Error::PersonNotFound
        })?;

    let person = state.mapper.document_to_dto(&document).map_err(|err| {
        error!(operation = "find_by_id", %id, %err, "failed to map person");
        Error::Internal(err.to_string())
    })?;

    Ok(Json(person))
}

/// POST /person — create a person.
///
/// Any incoming id is ignored; the response carries the freshly assigned one.
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<Person>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>)> {
    let Json(person) = body.map_err(|err| {
        error!(operation = "create", %err, "undecodable request body");
        Error::MalformedBody
    })?;

    info!(name = %person.name, "create");

    person.validate().map_err(|err| {
        error!(operation = "create", %err, "invalid request body");
        Error::InvalidBody(err)
    })?;

    let document = state.mapper.dto_to_document(&person).map_err(|err| {
        error!(operation = "create", %err, "failed to map person");
        Error::Internal(err.to_string())
    })?;

    let created = state.repository.create(document).await.map_err(|err| {
        error!(operation = "create", %err, "failed to insert person");
        Error::CreateFailed(err)
    })?;

    let person = state.mapper.document_to_dto(&created).map_err(|err| {
        error!(operation = "create", %err, "failed to map created person");
        Error::Internal(err.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(person)))
}

/// PUT /person/{id} — overwrite a person's fields.
///
/// The body's id is ignored; the path id wins. A malformed path id is 422
/// here (but 400 on delete), an asymmetry kept for compatibility.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<Person>, JsonRejection>,
) -> Result<Json<Person>> {
    let Json(mut person) = body.map_err(|err| {
        error!(operation = "update", %id, %err, "undecodable request body");
        Error::MalformedBody
    })?;

    info!(%id, "update");

    person.validate().map_err(|err| {
        error!(operation = "update", %id, %err, "invalid request body");
        Error::InvalidBody(err)
    })?;

    let person_id: PersonId = id.parse().map_err(|err| {
        error!(%id, %err, "unparsable person id");
        Error::MalformedId(err)
    })?;
    person.id = Some(person_id);

    let document = state.mapper.dto_to_document(&person).map_err(|err| {
        error!(operation = "update", %id, %err, "failed to map person");
        Error::Internal(err.to_string())
    })?;

    let matched = state.repository.update(&document).await.map_err(|err| {
        error!(operation = "update", %id, %err, "failed to update person");
        Error::UpdateFailed(err)
    })?;

    if matched == 0 {
        warn!(%id, "person not found");
        return Err(Error::PersonNotFound);
    }

    let person = state.mapper.document_to_dto(&document).map_err(|err| {
        error!(operation = "update", %id, %err, "failed to map updated person");
        Error::Internal(err.to_string())
    })?;

    Ok(Json(person))
}

/// DELETE /person/{id} — remove a person.
///
/// Returns 204 with an empty body. A malformed id is 400 here, and a storage
/// failure is also reported as 400; both kept for compatibility.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, [(header::HeaderName, &'static str); 1])> {
    let person_id: PersonId = id.parse().map_err(|err| {
        error!(%id, %err, "unparsable person id");
        Error::InvalidId(err)
    })?;

    info!(%id, "delete");

    let deleted = state.repository.delete(&person_id).await.map_err(|err| {
        error!(operation = "delete", %id, %err, "failed to delete person");
        Error::DeleteFailed(err)
    })?;

    if deleted == 0 {
        warn!(%id, "person not found");
        return Err(Error::PersonNotFound);
    }

    Ok((
        StatusCode::NO_CONTENT,
        [(header::CONTENT_TYPE, "application/json")],
    ))
}
