use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::directory_controller::{list_installers, list_languages};
use crate::controllers::forecast_controller::get_installation_forecast;
use crate::controllers::loan_controller::{list_loan_schemes, quote_emi};
use crate::controllers::location_controller::search_locations;
use crate::controllers::sizing_controller::get_sizing_estimate;
use crate::shared_state::SharedState;

/// Build the `/api/*` sub-router. One screen of the client maps to one small
/// group of routes; a single `.with_state(shared)` covers every handler.
pub fn api_routes(shared: SharedState) -> Router {
    Router::new()
        .route("/forecast", get(get_installation_forecast))
        .route("/sizing", get(get_sizing_estimate))
        .route("/loans/schemes", get(list_loan_schemes))
        .route("/loans/emi", post(quote_emi))
        .route("/installers", get(list_installers))
        .route("/languages", get(list_languages))
        .route("/locations/search", get(search_locations))
        .with_state(shared)
}
