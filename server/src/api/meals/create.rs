use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewMeal;
use crate::schema::meals;
use crate::session::SessionUser;
use crate::types::MealContent;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/meals",
    tag = "meals",
    request_body(content = MealContent, example = json!({"name": "Breakfast", "description": "Oats and fruit", "isOnDiet": true, "date": "2024-01-10T08:00:00Z"})),
    responses(
        (status = 201, description = "Meal recorded"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn create_meal(
    SessionUser(user_id): SessionUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<MealContent>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let new_meal = NewMeal {
        user_id,
        name: &request.name,
        description: &request.description,
        is_on_diet: request.is_on_diet,
        date: request.date.timestamp_millis(),
    };

    match diesel::insert_into(meals::table)
        .values(&new_meal)
        .execute(&mut conn)
    {
        Ok(_) => StatusCode::CREATED.into_response(),
        Err(e) => {
            tracing::error!("Failed to create meal: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create meal".to_string(),
                }),
            )
                .into_response()
        }
    }
}
