//! HTTP API layer for the todo service.
//!
//! # Design
//! Thin glue between routes and [`Store`] operations. The store is built by
//! the caller and handed to [`app`], so tests construct their own handle and
//! drive the router in-process (no listener) while the binary wires the same
//! router to a TCP socket.
//!
//! Request bodies are read as `serde_json::Value` and fields are extracted
//! with explicit type checks: a missing or wrong-typed field is treated the
//! same as an absent one rather than failing deserialization. That keeps the
//! store's validation (non-empty text on create, ignore-what-isn't-there on
//! update) as the single source of truth for what is and isn't accepted.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, put},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

use todo_store::{Store, StoreError, Todo, TodoPatch};

/// Shared handle to the process-wide store.
pub type Db = Arc<RwLock<Store>>;

/// Builds the router over an externally constructed store handle.
///
/// The `/api/todos/completed` route is registered alongside the `{id}`
/// capture; the static segment takes precedence, so DELETE on `completed`
/// never parses as an id.
pub fn app(db: Db) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo))
        .route("/api/todos/completed", delete(clear_completed))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

/// Serves the API on `listener` with a fresh empty store.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app(Db::default())).await
}

/// Store error carried out of a handler, mapped to a status and a JSON
/// `{"error": message}` body.
struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            StoreError::TextRequired => StatusCode::BAD_REQUEST,
            StoreError::NotFound => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Builds a [`TodoPatch`] from a PUT body, ignoring wrong-typed fields.
fn patch_from(body: &Value) -> TodoPatch {
    TodoPatch {
        text: body.get("text").and_then(Value::as_str).map(str::to_owned),
        done: body.get("done").and_then(Value::as_bool),
    }
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list().to_vec())
}

async fn create_todo(
    State(db): State<Db>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let text = body.get("text").and_then(Value::as_str);
    let todo = db.write().await.add(text)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Result<Json<Todo>, ApiError> {
    let todo = db.write().await.update(id, patch_from(&body))?;
    Ok(Json(todo))
}

async fn clear_completed(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.write().await.clear_completed().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_from_reads_both_fields() {
        let body = json!({"text": "New", "done": true});
        let patch = patch_from(&body);
        assert_eq!(patch.text.as_deref(), Some("New"));
        assert_eq!(patch.done, Some(true));
    }

    #[test]
    fn patch_from_empty_body_is_all_none() {
        let patch = patch_from(&json!({}));
        assert!(patch.text.is_none());
        assert!(patch.done.is_none());
    }

    #[test]
    fn patch_from_ignores_wrong_typed_fields() {
        let body = json!({"text": 5, "done": "yes"});
        let patch = patch_from(&body);
        assert!(patch.text.is_none());
        assert!(patch.done.is_none());
    }

    #[test]
    fn text_required_maps_to_400_with_error_body() {
        let response = ApiError(StoreError::TextRequired).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError(StoreError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
