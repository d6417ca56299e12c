use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use tracing::info;

use crate::{
    error::AppResult,
    models::{RecommendationRequest, RecommendationResponse},
    restock,
};

// ── POST /recommendation/restock ──────────────────────────────────────────────

pub async fn restock_recommendation(
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RecommendationResponse>)> {
    let Json(payload) = payload?;

    let response = restock::compute_recommendation(
        payload.product_name.as_ref(),
        payload.current_stock.as_ref(),
    );

    info!(
        product_name = %restock::render(Some(&response.product_name)),
        current_stock = %response.current_stock,
        restock = restock::needs_restock(&response.current_stock),
        "Computed restock recommendation"
    );

    Ok((StatusCode::OK, Json(response)))
}
