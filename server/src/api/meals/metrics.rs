use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::meals;
use crate::session::SessionUser;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealMetrics {
    pub total_meals: i64,
    pub total_meals_on_diet: i64,
    pub total_meals_off_diet: i64,
    pub best_on_diet_sequence: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MetricsResponse {
    pub metrics: MealMetrics,
}

/// Longest run of consecutive on-diet meals: one pass, reset on any
/// off-diet meal, track the maximum.
fn best_on_diet_sequence(flags: &[bool]) -> i64 {
    let mut best = 0;
    let mut current = 0;

    for &on_diet in flags {
        if on_diet {
            current += 1;
        } else {
            current = 0;
        }
        best = best.max(current);
    }

    best
}

#[utoipa::path(
    get,
    path = "/meals/metrics",
    tag = "meals",
    responses(
        (status = 200, description = "Aggregate metrics over the caller's meals", body = MetricsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn meal_metrics(
    SessionUser(user_id): SessionUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // The streak is defined over meals ordered by date, newest first
    let flags: Vec<bool> = match meals::table
        .filter(meals::user_id.eq(user_id))
        .order(meals::date.desc())
        .select(meals::is_on_diet)
        .load(&mut conn)
    {
        Ok(flags) => flags,
        Err(e) => {
            tracing::error!("Failed to fetch meal metrics: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch metrics".to_string(),
                }),
            )
                .into_response();
        }
    };

    let total_meals = flags.len() as i64;
    let total_meals_on_diet = flags.iter().filter(|&&on_diet| on_diet).count() as i64;

    let metrics = MealMetrics {
        total_meals,
        total_meals_on_diet,
        total_meals_off_diet: total_meals - total_meals_on_diet,
        best_on_diet_sequence: best_on_diet_sequence(&flags),
    };

    (StatusCode::OK, Json(MetricsResponse { metrics })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_resets_on_off_diet_meal() {
        let flags = [true, true, false, true, true, true, false];
        assert_eq!(best_on_diet_sequence(&flags), 3);
    }

    #[test]
    fn test_streak_no_meals() {
        assert_eq!(best_on_diet_sequence(&[]), 0);
    }

    #[test]
    fn test_streak_all_on_diet() {
        assert_eq!(best_on_diet_sequence(&[true; 5]), 5);
    }

    #[test]
    fn test_streak_all_off_diet() {
        assert_eq!(best_on_diet_sequence(&[false, false, false]), 0);
    }

    #[test]
    fn test_streak_run_at_the_end_counts() {
        assert_eq!(best_on_diet_sequence(&[false, true, true]), 2);
    }

    #[test]
    fn test_streak_single_meal() {
        assert_eq!(best_on_diet_sequence(&[true]), 1);
    }
}
