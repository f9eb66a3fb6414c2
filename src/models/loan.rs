use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A financing scheme from the fixed catalog. Reference data, no lifecycle.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoanScheme {
    pub id: u32,
    pub name: String,
    pub annual_interest_rate_percent: f64,
    pub max_tenure_years: u32,
    /// Largest principal the scheme covers (₹)
    pub max_amount_inr: f64,
    pub description: String,
}

/// Request body for an EMI quote.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EmiRequest {
    /// Catalog id of the scheme whose rate applies
    pub scheme_id: u32,
    /// Principal to amortize (₹)
    pub principal: f64,
    pub tenure_years: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmiQuote {
    pub scheme_id: u32,
    pub scheme_name: String,
    pub annual_interest_rate_percent: f64,
    pub number_of_payments: f64,
    /// Fixed monthly installment (₹), unrounded — display formatting is the
    /// client's concern
    pub monthly_installment_inr: f64,
}
