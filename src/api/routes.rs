//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, HealthResponse};
use super::state::AppState;
use super::v1::{
    self, CreateTodoRequest, ErrorResponse, MessageResponse, TodoResponse, UpdateTodoRequest,
};
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todos API",
        version = "0.1.0",
        description = "Create, list, update and clear todo items",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        v1::list_todos,
        v1::get_todo,
        v1::create_todo,
        v1::update_todo,
        v1::delete_todo,
        v1::clear_completed_todos,
        v1::clear_all_todos,
    ),
    components(
        schemas(
            HealthResponse,
            TodoResponse,
            CreateTodoRequest,
            UpdateTodoRequest,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "todos", description = "Todo management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
///
/// `/api/v1/todos/clear-completed` is a static segment, so it wins over the
/// `{id}` capture for `PUT`.
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    // Todo routes (generic over Database)
    let todo_routes = routes!(D => {
        get "/api/v1/todos" => v1::list_todos,
        post "/api/v1/todos" => v1::create_todo,
        delete "/api/v1/todos" => v1::clear_all_todos,
        put "/api/v1/todos/clear-completed" => v1::clear_completed_todos,
        get "/api/v1/todos/{id}" => v1::get_todo,
        put "/api/v1/todos/{id}" => v1::update_todo,
        delete "/api/v1/todos/{id}" => v1::delete_todo,
    });

    system_routes
        .merge(todo_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
