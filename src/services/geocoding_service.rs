/// Places search consumer: free-text query to the Open-Meteo geocoding API,
/// mapped to candidates whose coordinates feed the same pipeline as a device
/// location fix.
use crate::error::ProviderError;
use crate::models::location::{GeocodingResponse, PlaceCandidate};

/// Candidates requested per query; the picker shows a short list.
const RESULT_LIMIT: u8 = 5;

pub async fn search_places(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
) -> Result<Vec<PlaceCandidate>, ProviderError> {
    let url = format!("{}/v1/search", base_url);

    #[cfg(feature = "verbose_log")]
    println!("[GEOCODE] GET {} name={}", url, query);

    let count = RESULT_LIMIT.to_string();
    let response = client
        .get(&url)
        .query(&[
            ("name", query),
            ("count", count.as_str()),
            ("language", "en"),
            ("format", "json"),
        ])
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(ProviderError::Http(response.status().as_u16()));
    }

    let payload: GeocodingResponse = response.json().await?;
    Ok(candidates_from_response(payload))
}

/// No `results` key means no matches, not a failure.
fn candidates_from_response(payload: GeocodingResponse) -> Vec<PlaceCandidate> {
    payload
        .results
        .unwrap_or_default()
        .into_iter()
        .map(|result| PlaceCandidate {
            name: result.name,
            region: result.admin1,
            country: result.country,
            latitude: result.latitude,
            longitude: result.longitude,
        })
        .collect()
}
