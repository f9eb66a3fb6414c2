use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Domain types ────────────────────────────────────────────────────────────

/// Result of the panel sizing calculation. Computed fresh on each request,
/// never stored.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SizingResult {
    /// Whole panels that fit on the usable area
    pub panel_count: u64,
    /// Rated DC capacity of the array (kW)
    pub total_power_kw: f64,
    /// Installed cost estimate (₹)
    pub estimated_cost_inr: f64,
    /// Site average irradiance fed into the estimate (kWh/m²/day)
    pub average_irradiance_kwh_m2_day: f64,
}

// ─── NASA POWER wire types ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PowerApiResponse {
    pub properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
pub struct PowerProperties {
    pub parameter: PowerParameter,
}

/// Daily all-sky surface shortwave downward irradiance, keyed by YYYYMMDD.
#[derive(Debug, Deserialize)]
pub struct PowerParameter {
    #[serde(rename = "ALLSKY_SFC_SW_DWN")]
    pub all_sky_surface_shortwave: HashMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_api_response_deserializes() {
        // Trimmed capture of a NASA POWER daily point payload
        let payload = r#"{
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [73.8, 18.5, 555.0]},
            "properties": {
                "parameter": {
                    "ALLSKY_SFC_SW_DWN": {
                        "20220101": 4.37,
                        "20220102": 4.51,
                        "20220103": -999.0
                    }
                }
            }
        }"#;

        let parsed: PowerApiResponse = serde_json::from_str(payload).unwrap();
        let daily = &parsed.properties.parameter.all_sky_surface_shortwave;
        assert_eq!(daily.len(), 3);
        assert_eq!(daily["20220102"], 4.51);
    }
}
