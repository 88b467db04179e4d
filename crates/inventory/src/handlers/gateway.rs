//! HTTP adapters around the dispatch boundary.
//!
//! `gateway` turns a plain HTTP request into a gateway request and the
//! resulting envelope back into an HTTP response. `invoke` accepts a raw
//! gateway event as JSON and returns the envelope untouched, the way a
//! function runtime would.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use inventory_core::api::{extract_path_parameters, ApiError, Envelope, GatewayRequest};

use crate::{handlers::dispatch, state::AppState};

/// Fallback handler: every verb on every path goes through the router rules.
pub async fn gateway(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path();

    let body = match String::from_utf8(body.to_vec()) {
        Ok(body) => body,
        Err(e) => {
            let error = ApiError::InvalidBody(e.to_string());
            tracing::warn!(
                %method,
                %path,
                status = error.status_code(),
                error = %error,
                "Request rejected"
            );
            return envelope_to_response(error.to_envelope());
        }
    };

    let mut request = GatewayRequest::new(method.as_str(), path)
        .with_path_parameters(extract_path_parameters(&state.collection_path, path));
    if !body.is_empty() {
        request = request.with_body(body);
    }

    envelope_to_response(dispatch(&state, &request).await)
}

/// POST /invoke - dispatch a raw gateway event.
///
/// An event that does not decode is answered with a 400 envelope.
pub async fn invoke(State(state): State<AppState>, body: Bytes) -> Json<Envelope> {
    let request = match serde_json::from_slice::<GatewayRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            let error = ApiError::from(e);
            tracing::warn!(
                status = error.status_code(),
                error = %error,
                "Invalid gateway event"
            );
            return Json(error.to_envelope());
        }
    };

    Json(dispatch(&state, &request).await)
}

/// Convert an envelope into an HTTP response.
///
/// A 204 is sent without a body, as HTTP requires.
pub fn envelope_to_response(envelope: Envelope) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = Response::builder().status(status);
    for (name, value) in &envelope.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let body = if status == StatusCode::NO_CONTENT {
        Body::empty()
    } else {
        Body::from(envelope.body)
    };

    builder.body(body).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build response");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    })
}
