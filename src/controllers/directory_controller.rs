use axum::{response::IntoResponse, Json};

use crate::catalog;
use crate::models::directory::InstallerCompany;
use crate::models::language::DisplayLanguage;

/// GET /api/installers
/// List the installer company directory
#[utoipa::path(
    get,
    path = "/api/installers",
    responses(
        (status = 200, description = "Fixed installer directory", body = Vec<InstallerCompany>)
    )
)]
pub async fn list_installers() -> impl IntoResponse {
    Json(catalog::installers()).into_response()
}

/// GET /api/languages
/// List the display languages the client can offer
#[utoipa::path(
    get,
    path = "/api/languages",
    responses(
        (status = 200, description = "Supported display languages", body = Vec<DisplayLanguage>)
    )
)]
pub async fn list_languages() -> impl IntoResponse {
    Json(catalog::display_languages()).into_response()
}
