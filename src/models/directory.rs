use serde::Serialize;
use utoipa::ToSchema;

/// An installer from the fixed company directory.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InstallerCompany {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub contact: String,
    pub email: String,
    pub rating: f64,
    pub image_url: String,
}
