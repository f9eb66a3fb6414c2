use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::catalog;
use crate::models::loan::{EmiQuote, EmiRequest, LoanScheme};
use crate::services::amortization;

/// GET /api/loans/schemes
/// List the financing scheme catalog
#[utoipa::path(
    get,
    path = "/api/loans/schemes",
    responses(
        (status = 200, description = "Fixed financing scheme catalog", body = Vec<LoanScheme>)
    )
)]
pub async fn list_loan_schemes() -> impl IntoResponse {
    Json(catalog::loan_schemes()).into_response()
}

/// POST /api/loans/emi
/// Quote the monthly installment for a scheme
///
/// Amortizes the principal at the named scheme's rate over the requested
/// tenure. The quote is unrounded; display formatting is the client's concern.
#[utoipa::path(
    post,
    path = "/api/loans/emi",
    request_body = EmiRequest,
    responses(
        (status = 200, description = "Monthly installment quote", body = EmiQuote),
        (status = 400, description = "Non-positive principal or tenure"),
        (status = 404, description = "Unknown scheme id")
    )
)]
pub async fn quote_emi(Json(request): Json<EmiRequest>) -> impl IntoResponse {
    let Some(scheme) = catalog::loan_scheme_by_id(request.scheme_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Scheme not found"})),
        )
            .into_response();
    };

    if !request.principal.is_finite()
        || !request.tenure_years.is_finite()
        || request.principal <= 0.0
        || request.tenure_years <= 0.0
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Principal and tenure must be positive numbers."})),
        )
            .into_response();
    }

    let monthly_installment_inr = amortization::monthly_installment(
        request.principal,
        scheme.annual_interest_rate_percent,
        request.tenure_years,
    );

    let quote = EmiQuote {
        scheme_id: scheme.id,
        scheme_name: scheme.name.clone(),
        annual_interest_rate_percent: scheme.annual_interest_rate_percent,
        number_of_payments: request.tenure_years * 12.0,
        monthly_installment_inr,
    };
    (StatusCode::OK, Json(quote)).into_response()
}
