use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::meals;
use crate::session::SessionUser;
use crate::types::MealContent;
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
    put,
    path = "/meals/{id}",
    tag = "meals",
    params(
        ("id" = Uuid, Path, description = "Meal ID")
    ),
    request_body = MealContent,
    responses(
        (status = 200, description = "Meal replaced; a no-op when the meal belongs to another session"),
        (status = 404, description = "Meal not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn update_meal(
    SessionUser(user_id): SessionUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    Json(request): Json<MealContent>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Existence is decided by id alone; the write below stays scoped to the caller
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
                    error: "Failed to update meal".to_string(),
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

    // Full replace. Zero affected rows means the meal belongs to another
    // session; the call still reports success.
    let result = diesel::update(
        meals::table
            .filter(meals::id.eq(id))
            .filter(meals::user_id.eq(user_id)),
    )
    .set((
        meals::name.eq(&request.name),
        meals::description.eq(&request.description),
        meals::is_on_diet.eq(request.is_on_diet),
        meals::date.eq(request.date.timestamp_millis()),
    ))
    .execute(&mut conn);

    match result {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::error!("Failed to update meal: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update meal".to_string(),
                }),
            )
                .into_response()
        }
    }
}
