/// Daily forecast consumer: one Open-Meteo request per invocation, converted
/// to the normalized series the installation window selector scans.
use crate::error::ProviderError;
use crate::models::weather::{DailyBlock, DailyForecastResponse, DailyWeatherRecord, InstallationForecast};
use crate::services::installation_window;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Fetch the daily series for a coordinate pair and run the window scan.
/// Single attempt; a provider failure surfaces to the caller unchanged.
pub async fn installation_forecast(
    client: &reqwest::Client,
    base_url: &str,
    latitude: f64,
    longitude: f64,
) -> Result<InstallationForecast, ProviderError> {
    let series = fetch_daily_series(client, base_url, latitude, longitude).await?;
    Ok(installation_window::select_installation_window(&series))
}

pub async fn fetch_daily_series(
    client: &reqwest::Client,
    base_url: &str,
    latitude: f64,
    longitude: f64,
) -> Result<Vec<DailyWeatherRecord>, ProviderError> {
    let url = format!(
        "{}/v1/forecast?latitude={}&longitude={}&daily=precipitation_sum,sunshine_duration&timezone=auto",
        base_url, latitude, longitude
    );

    #[cfg(feature = "verbose_log")]
    println!("[FORECAST] GET {}", url);

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(ProviderError::Http(response.status().as_u16()));
    }

    let payload: DailyForecastResponse = response.json().await?;
    Ok(series_from_daily(payload.daily))
}

/// Zip the provider's parallel arrays into the domain series, keeping index
/// alignment. Sunshine arrives in seconds and is converted to hours here; a
/// null value keeps its slot but becomes NaN, which the strict suitability
/// comparisons always reject.
fn series_from_daily(daily: DailyBlock) -> Vec<DailyWeatherRecord> {
    daily
        .time
        .iter()
        .enumerate()
        .map(|(i, &date)| DailyWeatherRecord {
            date,
            sunshine_hours: daily
                .sunshine_duration
                .get(i)
                .copied()
                .flatten()
                .map_or(f64::NAN, |seconds| seconds / SECONDS_PER_HOUR),
            precipitation_mm: daily
                .precipitation_sum
                .get(i)
                .copied()
                .flatten()
                .unwrap_or(f64::NAN),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn sunshine_seconds_convert_to_hours() {
        let daily = DailyBlock {
            time: vec![date("2026-08-01"), date("2026-08-02")],
            sunshine_duration: vec![Some(28800.0), Some(21600.0)],
            precipitation_sum: vec![Some(1.2), Some(0.0)],
        };

        let series = series_from_daily(daily);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].sunshine_hours, 8.0);
        assert_eq!(series[1].sunshine_hours, 6.0);
        assert_eq!(series[0].precipitation_mm, 1.2);
    }

    #[test]
    fn null_values_keep_their_slot_as_nan() {
        let daily = DailyBlock {
            time: vec![date("2026-08-01"), date("2026-08-02"), date("2026-08-03")],
            sunshine_duration: vec![Some(28800.0), None, Some(36000.0)],
            precipitation_sum: vec![None, Some(2.0), Some(0.5)],
        };

        let series = series_from_daily(daily);
        assert_eq!(series.len(), 3, "null values must not shorten the series");
        assert!(series[0].precipitation_mm.is_nan());
        assert!(series[1].sunshine_hours.is_nan());
        assert_eq!(series[2].sunshine_hours, 10.0);
    }

    #[test]
    fn ragged_arrays_pad_with_nan_instead_of_truncating() {
        // A malformed payload with short value arrays must not shift the
        // series indices the window scan depends on
        let daily = DailyBlock {
            time: vec![date("2026-08-01"), date("2026-08-02")],
            sunshine_duration: vec![Some(28800.0)],
            precipitation_sum: vec![],
        };

        let series = series_from_daily(daily);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].sunshine_hours, 8.0);
        assert!(series[1].sunshine_hours.is_nan());
        assert!(series[0].precipitation_mm.is_nan());
    }

    #[test]
    fn empty_payload_gives_empty_series() {
        let daily = DailyBlock {
            time: vec![],
            sunshine_duration: vec![],
            precipitation_sum: vec![],
        };
        assert!(series_from_daily(daily).is_empty());
    }
}
