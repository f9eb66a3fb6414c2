use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Domain types ────────────────────────────────────────────────────────────

/// One day of the provider's daily series, normalized to the units the
/// selector works in: hours of sunshine and millimetres of precipitation.
///
/// Immutable once produced by the weather consumer. A day whose provider
/// values were null carries NaN in the affected field — it keeps its position
/// in the series but can never pass the strict suitability comparisons.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailyWeatherRecord {
    pub date: NaiveDate,
    pub sunshine_hours: f64,
    pub precipitation_mm: f64,
}

/// Recommended installation span: seven calendar days inclusive of `start`.
/// The end date is calendar arithmetic — it is not required to appear in the
/// forecast series, nor to qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct RecommendedWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Output of the installation window scan.
///
/// `suitable_days` is the complete filtered list in series order; clients
/// that show only the first few entries truncate on their side.
#[derive(Debug, Serialize, ToSchema)]
pub struct InstallationForecast {
    pub suitable_days: Vec<DailyWeatherRecord>,
    pub recommended_window: Option<RecommendedWindow>,
}

// ─── Open-Meteo wire types ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DailyForecastResponse {
    pub daily: DailyBlock,
}

/// Parallel daily arrays, aligned by index to `time`. Individual values may
/// be null for days the provider could not resolve.
#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<NaiveDate>,
    pub sunshine_duration: Vec<Option<f64>>, // seconds
    pub precipitation_sum: Vec<Option<f64>>, // mm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_forecast_response_deserializes() {
        // Trimmed capture of an Open-Meteo daily forecast payload
        let payload = r#"{
            "latitude": 18.5,
            "longitude": 73.8,
            "timezone": "Asia/Kolkata",
            "daily_units": {"sunshine_duration": "s", "precipitation_sum": "mm"},
            "daily": {
                "time": ["2026-08-01", "2026-08-02", "2026-08-03"],
                "sunshine_duration": [28800.0, null, 36000.0],
                "precipitation_sum": [1.2, 7.5, null]
            }
        }"#;

        let parsed: DailyForecastResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.daily.time.len(), 3);
        assert_eq!(parsed.daily.time[0], NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(parsed.daily.sunshine_duration[0], Some(28800.0));
        assert_eq!(parsed.daily.sunshine_duration[1], None);
        assert_eq!(parsed.daily.precipitation_sum[2], None);
    }
}
