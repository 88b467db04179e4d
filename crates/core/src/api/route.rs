use crate::item::ID_ATTRIBUTE;

use super::{ApiError, GatewayRequest, PathParameters};

/// Literal path of the items collection.
pub const DEFAULT_COLLECTION_PATH: &str = "/items";

/// The handler selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    DeleteItem,
    GetItem,
    CreateItem,
    UpdateItem,
    ListItems,
}

/// Selects the handler for a request. First matching rule wins:
///
/// 1. `DELETE` -> [`Route::DeleteItem`]
/// 2. `GET` with path parameters -> [`Route::GetItem`]
/// 3. `POST` -> [`Route::CreateItem`]
/// 4. `PUT` / `PATCH` -> [`Route::UpdateItem`]
/// 5. `GET` on the collection path -> [`Route::ListItems`]
///
/// Rule 2 is checked before rule 5, so a `GET` carrying path parameters is a
/// single-item read even when its path is the collection path.
///
/// # Examples
///
/// ```
/// use inventory_core::api::{select_route, GatewayRequest, Route};
///
/// let request = GatewayRequest::new("GET", "/items");
/// assert_eq!(select_route(&request, "/items"), Ok(Route::ListItems));
/// ```
pub fn select_route(request: &GatewayRequest, collection_path: &str) -> Result<Route, ApiError> {
    let method = request.method();

    if method == "DELETE" {
        return Ok(Route::DeleteItem);
    }
    if method == "GET" && request.has_path_parameters() {
        return Ok(Route::GetItem);
    }
    if method == "POST" {
        return Ok(Route::CreateItem);
    }
    if method == "PUT" || method == "PATCH" {
        return Ok(Route::UpdateItem);
    }
    if method == "GET" && request.path.as_deref() == Some(collection_path) {
        return Ok(Route::ListItems);
    }

    Err(ApiError::UnsupportedRoute)
}

/// Derives path parameters from a raw URL path.
///
/// Matches `{collection_path}/{id}` with a single, non-empty, percent-decoded
/// segment. Any other shape yields `None`.
pub fn extract_path_parameters(collection_path: &str, path: &str) -> Option<PathParameters> {
    let segment = path
        .strip_prefix(collection_path)?
        .strip_prefix('/')
        .filter(|segment| !segment.is_empty() && !segment.contains('/'))?;

    let id = urlencoding::decode(segment).ok()?.into_owned();

    Some(PathParameters::from([(ID_ATTRIBUTE.to_string(), id)]))
}
