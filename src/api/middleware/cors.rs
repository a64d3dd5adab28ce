//! Cross-origin policy for the expense endpoints.

use tower_http::cors::{Any, CorsLayer};

/// Allows any origin, method and request header.
///
/// Browser clients served from a different host (e.g. a dev server on
/// another port) call the expense API directly.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
