use serde::Serialize;
use utoipa::ToSchema;

/// A display language the client can render the app in. The service only
/// publishes the catalog; translation strings live with the display layer.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DisplayLanguage {
    /// BCP 47 language code
    pub code: String,
    /// Native-script label for the language picker
    pub label: String,
}
