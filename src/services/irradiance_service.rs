/// Irradiance consumer: one NASA POWER daily point request over a fixed
/// reference year, reduced to the single site average the sizing calculator
/// treats as an opaque scalar.
use std::collections::HashMap;

use crate::error::ProviderError;
use crate::models::sizing::PowerApiResponse;

const POWER_PARAMETER: &str = "ALLSKY_SFC_SW_DWN";

/// Fixed query window: one full reference year of daily values.
const RANGE_START: &str = "20220101";
const RANGE_END: &str = "20221231";

pub async fn fetch_average_irradiance(
    client: &reqwest::Client,
    base_url: &str,
    latitude: f64,
    longitude: f64,
) -> Result<f64, ProviderError> {
    let url = format!(
        "{}/api/temporal/daily/point?parameters={}&community=RE&longitude={}&latitude={}&start={}&end={}&format=JSON",
        base_url, POWER_PARAMETER, longitude, latitude, RANGE_START, RANGE_END
    );

    #[cfg(feature = "verbose_log")]
    println!("[IRRADIANCE] GET {}", url);

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(ProviderError::Http(response.status().as_u16()));
    }

    let payload: PowerApiResponse = response.json().await?;
    average_irradiance(&payload.properties.parameter.all_sky_surface_shortwave)
}

/// Mean of every daily value in the provider's date→value map, normalized to
/// kWh/m²/day. An empty map cannot be averaged and is reported as a provider
/// failure rather than letting NaN reach a result field.
fn average_irradiance(daily: &HashMap<String, f64>) -> Result<f64, ProviderError> {
    if daily.is_empty() {
        return Err(ProviderError::NoData);
    }
    let sum: f64 = daily.values().sum();
    Ok(sum / daily.len() as f64 / 1000.0)
}
