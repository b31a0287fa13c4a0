use axum::{
    http::{header, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{livez, readyz},
        todos::{create_todo, delete_todo, list_todos, method_not_allowed, not_found, update_todo},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Requests carry no timeout: a statement queued on the SQLite connection
/// runs to completion even if the client gives up.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // One method per path; anything else gets a JSON 405
    let todo_routes = Router::new()
        .route("/create", post(create_todo).fallback(method_not_allowed))
        .route("/update", put(update_todo).fallback(method_not_allowed))
        .route("/delete", delete(delete_todo).fallback(method_not_allowed))
        .route("/getall", get(list_todos).fallback(method_not_allowed))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/todo", todo_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
