//! Gateway-facing request and response types plus the routing rules.

mod error;
mod http_mapping;
mod request;
mod response;
mod route;

pub use error::ApiError;
pub use http_mapping::api_error_to_status_code;
pub use request::{GatewayRequest, PathParameters};
pub use response::{build_response, Envelope, CONTENT_TYPE_JSON};
pub use route::{extract_path_parameters, select_route, Route, DEFAULT_COLLECTION_PATH};
