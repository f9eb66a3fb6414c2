use std::fmt;

/// Errors that can arise when fetching or decoding external provider data.
///
/// Every provider call is a single attempt: a failure here is reported to the
/// caller of the current request and nothing is retried or cached.
#[derive(Debug)]
pub enum ProviderError {
    /// Non-2xx HTTP response from the provider.
    Http(u16),
    /// The request never completed (DNS, connect, timeout).
    Network(reqwest::Error),
    /// The response body could not be deserialized.
    Parse(String),
    /// The provider answered but the payload carried no usable values.
    NoData,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(code) => write!(f, "HTTP error: {}", code),
            ProviderError::Network(err) => write!(f, "Network error: {}", err),
            ProviderError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ProviderError::NoData => write!(f, "Provider returned no usable data"),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Network(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::Parse(err.to_string())
        } else {
            ProviderError::Network(err)
        }
    }
}
