use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Meal;
use crate::schema::meals;
use crate::session::SessionUser;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/meals/{id}",
    tag = "meals",
    params(
        ("id" = Uuid, Path, description = "Meal ID")
    ),
    responses(
        (status = 200, description = "Meals matching the id within the caller's scope", body = [Meal]),
        (status = 404, description = "Meal not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn get_meal(
    SessionUser(user_id): SessionUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Existence is decided by id alone; the fetch below stays scoped to the
    // caller, so another session's meal yields 200 with an empty array.
    let exists = match meals::table
        .filter(meals::id.eq(id))
        .select(meals::id)
        .first::<Uuid>(&mut conn)
        .optional()
    {
        Ok(record) => record.is_some(),
        Err(e) => {
            tracing::error!("Failed to check meal existence: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch meal".to_string(),
                }),
            )
                .into_response();
        }
    };

    if !exists {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Meal not found".to_string(),
            }),
        )
            .into_response();
    }

    let matches: Vec<Meal> = match meals::table
        .filter(meals::id.eq(id))
        .filter(meals::user_id.eq(user_id))
        .select(Meal::as_select())
        .load(&mut conn)
    {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("Failed to fetch meal: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch meal".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(matches)).into_response()
}
