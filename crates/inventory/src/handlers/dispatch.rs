//! Request dispatch boundary.
//!
//! Selects the handler for a gateway request, runs it, and converts every
//! failure (including a panic inside a handler) into a response envelope.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;

use inventory_core::api::{select_route, ApiError, Envelope, GatewayRequest, Route};

use crate::state::AppState;

use super::items::{create_item, delete_item, get_item, list_items, update_item};

/// Handle one gateway request. Always returns a well-formed envelope.
pub async fn dispatch(state: &AppState, request: &GatewayRequest) -> Envelope {
    let method = request.method();
    let path = request.path.as_deref().unwrap_or_default();

    let outcome = AssertUnwindSafe(route_request(state, request))
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| Err(ApiError::Unhandled(panic_message(panic))));

    match outcome {
        Ok(envelope) => {
            tracing::debug!(%method, %path, status = envelope.status_code, "Request handled");
            envelope
        }
        Err(error) => {
            let status = error.status_code();
            if status >= 500 {
                tracing::error!(%method, %path, status, error = %error, "Request failed");
            } else {
                tracing::warn!(%method, %path, status, error = %error, "Request rejected");
            }
            error.to_envelope()
        }
    }
}

async fn route_request(state: &AppState, request: &GatewayRequest) -> Result<Envelope, ApiError> {
    let route = select_route(request, &state.collection_path)?;
    let repo = state.repo.as_ref();
    let path_parameters = request.path_parameters.as_ref();
    let body = request.body.as_deref();

    match route {
        Route::DeleteItem => delete_item(repo, path_parameters).await,
        Route::GetItem => get_item(repo, path_parameters).await,
        Route::CreateItem => create_item(repo, body).await,
        Route::UpdateItem => update_item(repo, path_parameters, body).await,
        Route::ListItems => list_items(repo).await,
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;

    use inventory_core::item::{Attributes, Item};
    use inventory_core::storage::{ItemRepository, Result};

    use crate::config::Config;

    /// Repository that panics on every call.
    struct PanickingRepository;

    #[async_trait]
    impl ItemRepository for PanickingRepository {
        async fn get_item(&self, _id: &str) -> Result<Option<Item>> {
            panic!("corrupted handle")
        }

        async fn scan_items(&self) -> Result<Vec<Item>> {
            panic!("corrupted handle")
        }

        async fn put_item(&self, _item: &Item) -> Result<()> {
            panic!("corrupted handle")
        }

        async fn update_item(&self, _id: &str, _changes: &Attributes) -> Result<Attributes> {
            panic!("corrupted handle")
        }

        async fn delete_item(&self, _id: &str) -> Result<()> {
            panic!("corrupted handle")
        }
    }

    fn message(envelope: &Envelope) -> serde_json::Value {
        envelope.body_json().unwrap()["message"].clone()
    }

    #[tokio::test]
    async fn test_create_then_read_round_trip() {
        let state = AppState::default();

        let created = dispatch(
            &state,
            &GatewayRequest::new("POST", "/items").with_body(r#"{"name":"widget"}"#),
        )
        .await;
        assert_eq!(created.status_code, 201);
        let id = created.body_json().unwrap()["id"]
            .as_str()
            .unwrap()
            .to_string();

        let fetched = dispatch(
            &state,
            &GatewayRequest::new("GET", format!("/items/{id}")).with_path_id(&id),
        )
        .await;

        assert_eq!(fetched.status_code, 200);
        assert_eq!(
            fetched.body_json().unwrap(),
            json!({"id": id, "name": "widget"})
        );
    }

    #[tokio::test]
    async fn test_get_with_path_id_on_collection_path_reads_single_item() {
        let state = AppState::default();

        let envelope = dispatch(
            &state,
            &GatewayRequest::new("GET", "/items").with_path_id("unknown-id"),
        )
        .await;

        assert_eq!(envelope.status_code, 404);
        assert_eq!(message(&envelope), "Item not found");
    }

    #[tokio::test]
    async fn test_missing_path_id_is_400() {
        let state = AppState::default();

        for method in ["DELETE", "PUT", "PATCH"] {
            let envelope = dispatch(
                &state,
                &GatewayRequest::new(method, "/items").with_body("{}"),
            )
            .await;
            assert_eq!(envelope.status_code, 400, "method {method}");
            assert_eq!(message(&envelope), "Missing item ID");
        }
    }

    #[tokio::test]
    async fn test_unsupported_route_is_405() {
        let state = AppState::default();

        let envelope = dispatch(&state, &GatewayRequest::new("OPTIONS", "/items")).await;

        assert_eq!(envelope.status_code, 405);
        assert_eq!(message(&envelope), "Method or path not supported");
    }

    #[tokio::test]
    async fn test_empty_event_is_405() {
        let state = AppState::default();

        let envelope = dispatch(&state, &GatewayRequest::default()).await;

        assert_eq!(envelope.status_code, 405);
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let state = AppState::default();

        let envelope = dispatch(
            &state,
            &GatewayRequest::new("POST", "/items").with_body("{oops"),
        )
        .await;

        assert_eq!(envelope.status_code, 400);
        assert_eq!(message(&envelope), "Invalid request body");
    }

    #[tokio::test]
    async fn test_panicking_handler_becomes_500() {
        let state = AppState::with_repository(Arc::new(PanickingRepository), &Config::default());

        let envelope = dispatch(&state, &GatewayRequest::new("GET", "/items")).await;

        assert_eq!(envelope.status_code, 500);
        assert_eq!(message(&envelope), "Internal Server Error");
        assert_eq!(envelope.headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_panic_message_extraction() {
        assert_eq!(panic_message(Box::new("boom")), "boom");
        assert_eq!(panic_message(Box::new("boom".to_string())), "boom");
        assert_eq!(panic_message(Box::new(42)), "handler panicked");
    }
}
