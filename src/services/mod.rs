pub mod amortization;
pub mod geocoding_service;
pub mod installation_window;
pub mod irradiance_service;
pub mod sizing;
pub mod weather_service;
