use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::weather::InstallationForecast;
use crate::services::weather_service;
use crate::shared_state::SharedState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ForecastQuery {
    pub latitude: f64,
    pub longitude: f64,
}

/// GET /api/forecast
/// Installation forecast for a location
///
/// Fetches the provider's daily weather series for the coordinates and returns
/// the days suitable for installation work plus the recommended seven-day
/// window, when one exists. The suitable-day list is complete; clients that
/// show a short preview truncate on their side.
#[utoipa::path(
    get,
    path = "/api/forecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Suitable days and recommended window", body = InstallationForecast),
        (status = 400, description = "Malformed coordinates"),
        (status = 502, description = "Weather provider failure")
    )
)]
pub async fn get_installation_forecast(
    State(state): State<SharedState>,
    Query(query): Query<ForecastQuery>,
) -> impl IntoResponse {
    match weather_service::installation_forecast(
        &state.http,
        &state.config.providers.forecast_base_url,
        query.latitude,
        query.longitude,
    )
    .await
    {
        Ok(forecast) => (StatusCode::OK, Json(forecast)).into_response(),
        Err(e) => {
            eprintln!(
                "[FORECAST] fetch for ({}, {}) failed: {}",
                query.latitude, query.longitude, e
            );
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": "Error fetching weather forecast. Please try again."})),
            )
                .into_response()
        }
    }
}
