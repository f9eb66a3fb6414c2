use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::sizing::SizingResult;
use crate::services::{irradiance_service, sizing};
use crate::shared_state::SharedState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SizingQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Plot size in square metres
    pub land_area_sqm: f64,
    /// Share of the plot panels may cover, 0–100
    pub coverage_percent: f64,
}

/// GET /api/sizing
/// Panel sizing estimate for a plot
///
/// Fetches the site's reference-year irradiance average, then sizes the array:
/// panel count, rated capacity and installed cost.
#[utoipa::path(
    get,
    path = "/api/sizing",
    params(SizingQuery),
    responses(
        (status = 200, description = "Sizing estimate", body = SizingResult),
        (status = 400, description = "Non-numeric or non-positive land area / coverage"),
        (status = 502, description = "Irradiance provider failure")
    )
)]
pub async fn get_sizing_estimate(
    State(state): State<SharedState>,
    Query(query): Query<SizingQuery>,
) -> impl IntoResponse {
    // Query strings can smuggle NaN past the type layer; a non-numeric or
    // non-positive plot must produce no result at all.
    if !query.land_area_sqm.is_finite()
        || !query.coverage_percent.is_finite()
        || query.land_area_sqm <= 0.0
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Land area and coverage must be numeric, with a positive land area."})),
        )
            .into_response();
    }

    match irradiance_service::fetch_average_irradiance(
        &state.http,
        &state.config.providers.irradiance_base_url,
        query.latitude,
        query.longitude,
    )
    .await
    {
        Ok(average_irradiance) => {
            let result = sizing::size_installation(
                query.land_area_sqm,
                query.coverage_percent,
                average_irradiance,
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => {
            eprintln!(
                "[IRRADIANCE] fetch for ({}, {}) failed: {}",
                query.latitude, query.longitude, e
            );
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": "Error fetching solar data. Please try again."})),
            )
                .into_response()
        }
    }
}
