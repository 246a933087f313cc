mod body;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_macros::debug_handler;
use serde::Serialize;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{NoteRequest, NoteResponse},
    service::NoteService,
};

use body::JsonBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        get_all_notes,
        create_note,
        get_one_note,
        update_note,
        delete_note
    ),
    components(schemas(NoteResponse, NoteRequest)),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

pub fn router(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/api/notes", get(get_all_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_one_note).put(update_note).delete(delete_note),
        )
        .with_state(service)
}

pub async fn openapi_json() -> Response {
    (StatusCode::OK, Json(ApiDoc::openapi())).into_response()
}

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!("failed to serialize response body: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to serialize response",
            )
                .into_response()
        }
    }
}

fn not_found(id: &str) -> Response {
    tracing::warn!("note {id} not found");
    (StatusCode::NOT_FOUND, "Note not found").into_response()
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    let notes = service.get_all_notes().await;
    json_response(StatusCode::OK, &notes)
}

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = NoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse,
            headers(("Location" = String, description = "Path of the created note"))),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    JsonBody(payload): JsonBody<NoteRequest>,
) -> Response {
    let (id, note) = service.create_note(payload).await;

    let mut response = json_response(StatusCode::CREATED, &note);
    if let (StatusCode::CREATED, Ok(location)) = (
        response.status(),
        HeaderValue::from_str(&format!("/api/notes/{id}")),
    ) {
        response.headers_mut().insert(header::LOCATION, location);
    }

    response
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note key")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 404, description = "Note not found")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_one_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Response {
    match service.get_one_note(&id).await {
        Some(note) => json_response(StatusCode::OK, &note),
        None => not_found(&id),
    }
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note key")
    ),
    request_body = NoteRequest,
    responses(
        (status = 204, description = "Note replaced successfully"),
        (status = 400, description = "Malformed JSON body"),
        (status = 404, description = "Note not found")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<NoteRequest>,
) -> Response {
    match service.update_note(&id, payload).await {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(&id),
    }
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note key")
    ),
    responses(
        (status = 204, description = "Note deleted successfully"),
        (status = 404, description = "Note not found")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Response {
    if service.delete_note(&id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(&id)
    }
}
