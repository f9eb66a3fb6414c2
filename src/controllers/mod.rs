pub mod directory_controller;
pub mod forecast_controller;
pub mod loan_controller;
pub mod location_controller;
pub mod sizing_controller;
