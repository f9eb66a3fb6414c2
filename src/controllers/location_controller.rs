use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::location::PlaceCandidate;
use crate::services::geocoding_service;
use crate::shared_state::SharedState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PlaceSearchQuery {
    /// Free-text place name
    pub query: String,
}

/// GET /api/locations/search
/// Search for a place by name
///
/// Alternate location source: a selected candidate's coordinates feed the
/// forecast and sizing endpoints exactly like a device location fix.
#[utoipa::path(
    get,
    path = "/api/locations/search",
    params(PlaceSearchQuery),
    responses(
        (status = 200, description = "Matching place candidates", body = Vec<PlaceCandidate>),
        (status = 502, description = "Geocoding provider failure")
    )
)]
pub async fn search_locations(
    State(state): State<SharedState>,
    Query(query): Query<PlaceSearchQuery>,
) -> impl IntoResponse {
    let name = query.query.trim();
    if name.is_empty() {
        // Nothing typed yet — no provider round trip for an empty box
        return Json(Vec::<PlaceCandidate>::new()).into_response();
    }

    match geocoding_service::search_places(
        &state.http,
        &state.config.providers.geocoding_base_url,
        name,
    )
    .await
    {
        Ok(candidates) => Json(candidates).into_response(),
        Err(e) => {
            eprintln!("[GEOCODE] search {:?} failed: {}", name, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": "Error searching locations. Please try again."})),
            )
                .into_response()
        }
    }
}
