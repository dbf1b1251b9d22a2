pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod metrics;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /meals endpoints (mounted at /meals)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_meals).post(create::create_meal))
        .route("/metrics", get(metrics::meal_metrics))
        .route(
            "/{id}",
            get(get::get_meal)
                .put(update::update_meal)
                .delete(delete::delete_meal),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_meals,
        create::create_meal,
        metrics::meal_metrics,
        get::get_meal,
        update::update_meal,
        delete::delete_meal
    ),
    components(schemas(
        crate::types::MealContent,
        metrics::MetricsResponse,
        metrics::MealMetrics,
    ))
)]
pub struct ApiDoc;
