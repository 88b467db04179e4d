use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        gateway::{gateway, invoke},
        health::livez,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Item traffic has no dedicated routes: everything not matched below falls
/// back to the gateway handler, which applies the item routing rules. That
/// includes other methods on the operational paths.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/livez", get(livez))
        .route("/invoke", post(invoke))
        .method_not_allowed_fallback(gateway)
        .fallback(gateway)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Vec<u8>) {
        let body = body
            .map(|b| Body::from(b.to_string()))
            .unwrap_or_else(Body::empty);
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(body)
            .unwrap();

        let (status, _, bytes) = send_request(app, request).await;
        (status, bytes)
    }

    async fn send_request(
        app: &Router,
        request: Request<Body>,
    ) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let cors = response
            .headers()
            .get("access-control-allow-origin")
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, cors, bytes.to_vec())
    }

    fn json_body(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let (status, _) = send(&app, "GET", "/livez", None).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_items_empty() {
        let app = create_app(AppState::default());

        let (status, body) = send(&app, "GET", "/items", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!([]));
    }

    #[tokio::test]
    async fn test_create_and_get_item() {
        let app = create_app(AppState::default());

        let (status, body) = send(&app, "POST", "/items", Some(r#"{"name":"widget"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        let created = json_body(&body);
        assert_eq!(created["message"], "Item created");
        let id = created["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "GET", &format!("/items/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!({"id": id, "name": "widget"}));
    }

    #[tokio::test]
    async fn test_get_unknown_item() {
        let app = create_app(AppState::default());

        let (status, body) = send(&app, "GET", "/items/unknown-id", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json_body(&body), json!({"message": "Item not found"}));
    }

    #[tokio::test]
    async fn test_patch_then_get_reflects_change() {
        let app = create_app(AppState::default());
        let (_, body) = send(&app, "POST", "/items", Some(r#"{"name":"widget"}"#)).await;
        let id = json_body(&body)["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            "PATCH",
            &format!("/items/{id}"),
            Some(r#"{"name":"widget2"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json_body(&body),
            json!({"message": format!("Item {id} updated")})
        );

        let (_, body) = send(&app, "GET", &format!("/items/{id}"), None).await;
        assert_eq!(json_body(&body)["name"], "widget2");
    }

    #[tokio::test]
    async fn test_put_updates_too() {
        let app = create_app(AppState::default());
        send(&app, "POST", "/items", Some(r#"{"id":"a","qty":1}"#)).await;

        let (status, _) = send(&app, "PUT", "/items/a", Some(r#"{"qty":2}"#)).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, "GET", "/items/a", None).await;
        assert_eq!(json_body(&body), json!({"id": "a", "qty": 2}));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let app = create_app(AppState::default());
        send(&app, "POST", "/items", Some(r#"{"id":"a"}"#)).await;

        let (status, body) = send(&app, "DELETE", "/items/a", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, _) = send(&app, "DELETE", "/items/a", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", "/items/a", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_options_is_not_supported() {
        let app = create_app(AppState::default());

        let (status, body) = send(&app, "OPTIONS", "/items", None).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            json_body(&body),
            json!({"message": "Method or path not supported"})
        );
    }

    #[tokio::test]
    async fn test_missing_id_in_path() {
        let app = create_app(AppState::default());

        let (status, body) = send(&app, "DELETE", "/items", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body), json!({"message": "Missing item ID"}));
    }

    #[tokio::test]
    async fn test_invoke_returns_raw_envelope() {
        let app = create_app(AppState::default());
        let event = json!({
            "httpMethod": "POST",
            "path": "/items",
            "pathParameters": null,
            "body": "{\"id\":\"sku-9\",\"name\":\"widget\"}"
        });

        let (status, body) = send(&app, "POST", "/invoke", Some(&event.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        let envelope = json_body(&body);
        assert_eq!(envelope["statusCode"], 201);
        assert_eq!(envelope["headers"]["Access-Control-Allow-Origin"], "*");
        let inner: Value = serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
        assert_eq!(inner, json!({"message": "Item created", "id": "sku-9"}));

        let event = json!({
            "httpMethod": "DELETE",
            "path": "/items/sku-9",
            "pathParameters": {"id": "sku-9"}
        });
        let (_, body) = send(&app, "POST", "/invoke", Some(&event.to_string())).await;
        let envelope = json_body(&body);
        assert_eq!(envelope["statusCode"], 204);
        assert_eq!(envelope["body"], "{}");
    }

    #[tokio::test]
    async fn test_other_methods_on_operational_paths_use_item_rules() {
        let app = create_app(AppState::default());

        for (method, uri, status, message) in [
            ("DELETE", "/invoke", StatusCode::BAD_REQUEST, "Missing item ID"),
            ("PUT", "/livez", StatusCode::BAD_REQUEST, "Missing item ID"),
            ("DELETE", "/livez", StatusCode::BAD_REQUEST, "Missing item ID"),
            (
                "GET",
                "/invoke",
                StatusCode::METHOD_NOT_ALLOWED,
                "Method or path not supported",
            ),
        ] {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap();

            let (actual, cors, body) = send_request(&app, request).await;

            assert_eq!(actual, status, "{method} {uri}");
            assert_eq!(cors.as_deref(), Some("*"), "{method} {uri}");
            assert_eq!(json_body(&body), json!({"message": message}));
        }
    }

    #[tokio::test]
    async fn test_non_utf8_body_is_invalid_request_body() {
        let app = create_app(AppState::default());
        let request = Request::builder()
            .method("POST")
            .uri("/items")
            .body(Body::from(vec![0xff, 0xfe, 0x7b]))
            .unwrap();

        let (status, cors, body) = send_request(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(cors.as_deref(), Some("*"));
        assert_eq!(json_body(&body), json!({"message": "Invalid request body"}));

        let (_, list) = send(&app, "GET", "/items", None).await;
        assert_eq!(json_body(&list), json!([]));
    }

    #[tokio::test]
    async fn test_invoke_without_content_type() {
        let app = create_app(AppState::default());
        let event = json!({"httpMethod": "GET", "path": "/items"});
        let request = Request::builder()
            .method("POST")
            .uri("/invoke")
            .body(Body::from(event.to_string()))
            .unwrap();

        let (status, _, body) = send_request(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        let envelope = json_body(&body);
        assert_eq!(envelope["statusCode"], 200);
        assert_eq!(envelope["body"], "[]");
    }

    #[tokio::test]
    async fn test_invoke_malformed_event_is_invalid_request_body() {
        let app = create_app(AppState::default());

        for event in [r#"{"httpMethod":"GET","pathParameters":"abc"}"#, "not json", ""] {
            let (status, body) = send(&app, "POST", "/invoke", Some(event)).await;

            assert_eq!(status, StatusCode::OK, "event {event:?}");
            let envelope = json_body(&body);
            assert_eq!(envelope["statusCode"], 400);
            assert_eq!(envelope["headers"]["Access-Control-Allow-Origin"], "*");
            assert_eq!(envelope["body"], r#"{"message":"Invalid request body"}"#);
        }
    }
}
