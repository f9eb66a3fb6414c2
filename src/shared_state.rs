use crate::config::Config;

/// State handed to every handler. Configuration is immutable after startup
/// and the HTTP client is shared so connections to the providers are pooled.
///
/// There is no mutable runtime state: every result is computed fresh from the
/// request inputs and nothing is kept between invocations.
#[derive(Clone)]
pub struct SharedState {
    pub config: Config,
    pub http: reqwest::Client,
}

impl SharedState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}
