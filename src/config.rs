use serde::Deserialize;

fn default_port() -> u16 {
    3000
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_irradiance_base_url() -> String {
    "https://power.larc.nasa.gov".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Base URLs of the external data providers. Overridable so integration
/// environments can point the consumers at a stand-in server.
#[derive(Debug, Deserialize, Clone)]
pub struct ProvidersConfig {
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    #[serde(default = "default_irradiance_base_url")]
    pub irradiance_base_url: String,
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: default_forecast_base_url(),
            irradiance_base_url: default_irradiance_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file. A missing file is not an error:
    /// the built-in defaults point at the real provider endpoints.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                println!("[CONFIG] {} not found, using built-in defaults", path);
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.providers.forecast_base_url, "https://api.open-meteo.com");
        assert_eq!(config.providers.irradiance_base_url, "https://power.larc.nasa.gov");
        assert_eq!(
            config.providers.geocoding_base_url,
            "https://geocoding-api.open-meteo.com"
        );
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: Config = serde_json::from_str(
            r#"{"server": {"port": 8080}, "providers": {"forecast_base_url": "http://localhost:9000"}}"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.providers.forecast_base_url, "http://localhost:9000");
        // Unspecified provider URLs keep their defaults
        assert_eq!(config.providers.irradiance_base_url, "https://power.larc.nasa.gov");
    }
}
