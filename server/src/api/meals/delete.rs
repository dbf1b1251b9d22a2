use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
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
    delete,
    path = "/meals/{id}",
    tag = "meals",
    params(
        ("id" = Uuid, Path, description = "Meal ID")
    ),
    responses(
        (status = 200, description = "Meal deleted; a no-op when the meal belongs to another session"),
        (status = 404, description = "Meal not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_meal(
    SessionUser(user_id): SessionUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Existence is decided by id alone; the delete below stays scoped to the caller
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
                    error: "Failed to delete meal".to_string(),
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

    // Hard delete. Zero affected rows means the meal belongs to another
    // session; that still answers 200.
    match diesel::delete(
        meals::table
            .filter(meals::id.eq(id))
            .filter(meals::user_id.eq(user_id)),
    )
    .execute(&mut conn)
    {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::error!("Failed to delete meal: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete meal".to_string(),
                }),
            )
                .into_response()
        }
    }
}
