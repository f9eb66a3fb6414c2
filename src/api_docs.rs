use utoipa::OpenApi;

use crate::controllers::{
    directory_controller, forecast_controller, loan_controller, location_controller,
    sizing_controller,
};
use crate::models::{directory, language, loan, location, sizing, weather};

#[derive(OpenApi)]
#[openapi(
    paths(
        forecast_controller::get_installation_forecast,
        sizing_controller::get_sizing_estimate,
        loan_controller::list_loan_schemes,
        loan_controller::quote_emi,
        directory_controller::list_installers,
        directory_controller::list_languages,
        location_controller::search_locations
    ),
    components(
        schemas(
            weather::DailyWeatherRecord,
            weather::RecommendedWindow,
            weather::InstallationForecast,
            sizing::SizingResult,
            loan::LoanScheme,
            loan::EmiRequest,
            loan::EmiQuote,
            directory::InstallerCompany,
            language::DisplayLanguage,
            location::PlaceCandidate
        )
    ),
    tags(
        (name = "solar-advisor", description = "Solar installation advisor API")
    )
)]
pub struct ApiDoc;
