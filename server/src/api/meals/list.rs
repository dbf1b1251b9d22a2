use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Meal;
use crate::schema::meals;
use crate::session::SessionUser;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/meals",
    tag = "meals",
    responses(
        (status = 200, description = "All of the caller's meals", body = [Meal]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn list_meals(
    SessionUser(user_id): SessionUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let meals: Vec<Meal> = match meals::table
        .filter(meals::user_id.eq(user_id))
        .select(Meal::as_select())
        .load(&mut conn)
    {
        Ok(meals) => meals,
        Err(e) => {
            tracing::error!("Failed to fetch meals: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch meals".to_string(),
                }),
            )
                .into_response();
        }
    };

    // The list is a bare array, not wrapped in an object
    (StatusCode::OK, Json(meals)).into_response()
}
