//! Person collection handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use people_directory_core::{NewPerson, Person, PersonId};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::store::Removal;

/// Body of a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponse {
    pub message: String,
    pub updated_list: Vec<Person>,
}

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_item: Person,
    pub updated_list: Vec<Person>,
}

/// List every person in insertion order.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.store().list().await)
}

/// Create a person with a server-assigned ID.
#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewPerson>, JsonRejection>,
) -> Result<Json<CreateResponse>> {
    let Json(new) = payload?;

    let (person, updated_list) = state.store().insert(new).await;
    info!(id = %person.id, "Person created");

    Ok(Json(CreateResponse {
        message: "Item added successfully".to_string(),
        updated_list,
    }))
}

/// Delete the person with the given ID.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let person_id = PersonId::parse(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    match state.store().remove(&person_id).await {
        Removal::Removed { person, remaining } => {
            info!(id = %person_id, "Person deleted");
            Ok(Json(DeleteResponse {
                message: format!("User with ID {person_id} was deleted"),
                deleted_item: person,
                updated_list: remaining,
            }))
        }
        Removal::NotFound { current } => Err(ApiError::PersonNotFound {
            id,
            current_list: current,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::state::AppState;
    use crate::store::PersonStore;

    fn state() -> AppState {
        AppState::with_store(ServerConfig::default(), PersonStore::new())
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = crate::app(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn get_root() -> Request<Body> {
        Request::builder().uri("/").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_list_starts_empty() {
        let state = state();
        let (status, body) = send(&state, get_root()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_returns_updated_list() {
        let state = state();
        let (status, body) = send(
            &state,
            post_json(r#"{"first_name":"Ada","last_name":"Lovelace","role":"admin"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Item added successfully");
        let list = body["updated_list"].as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["first_name"], "Ada");
        assert!(!list[0]["id"].as_str().unwrap().is_empty());

        let (_, listed) = send(&state, get_root()).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let state = state();
        let (status, body) = send(&state, post_json(r#"{"first_name":"Ada"}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
        assert!(state.store().list().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let state = state();
        let (_, created) = send(
            &state,
            post_json(r#"{"first_name":"Ada","last_name":"Lovelace","role":"admin"}"#),
        )
        .await;
        let id = created["updated_list"][0]["id"].as_str().unwrap().to_owned();

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/{id}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&state, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], format!("User with ID {id} was deleted"));
        assert_eq!(body["deleted_item"]["id"], id.as_str());
        assert_eq!(body["updated_list"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_delete_unknown_is_bad_request() {
        let state = state();
        let request = Request::builder()
            .method("DELETE")
            .uri("/does-not-exist")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&state, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User not found. Operation failed");
        assert_eq!(body["current_list"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(&state(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("ok".to_string()));
    }
}
