use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Domain types ────────────────────────────────────────────────────────────

/// A place matched by the search provider. Selecting a candidate feeds its
/// coordinates into the same pipeline as a device location fix.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlaceCandidate {
    pub name: String,
    pub region: Option<String>,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

// ─── Open-Meteo geocoding wire types ─────────────────────────────────────────

/// The provider omits `results` entirely when nothing matches.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    /// First-level administrative area (state/province)
    pub admin1: Option<String>,
}
