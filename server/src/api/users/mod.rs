pub mod list;
pub mod register;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /users endpoints (mounted at /users)
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list::list_users).post(register::create_user))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_users, register::create_user),
    components(schemas(
        list::UsersResponse,
        register::CreateUserRequest,
        register::UserExistsResponse,
    ))
)]
pub struct ApiDoc;
