/// Equated monthly installment for a principal amortized at a fixed annual
/// rate over a tenure in years.
///
/// EMI = P·r·(1+r)^n / ((1+r)^n − 1), with r the monthly rate and n the
/// number of monthly payments.
pub fn monthly_installment(principal: f64, annual_rate_percent: f64, tenure_years: f64) -> f64 {
    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    let payments = tenure_years * 12.0;

    // (1+r)^n − 1 is zero at r = 0: an interest-free loan is the principal
    // spread evenly over the payments. No catalog scheme currently carries a
    // zero rate, but the singularity is guarded regardless.
    if monthly_rate == 0.0 {
        return principal / payments;
    }

    let growth = (1.0 + monthly_rate).powf(payments);
    principal * monthly_rate * growth / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_lakh_at_typical_home_finance_terms() {
        // ₹10,00,000 at 7.5% over 10 years: monthly rate 0.00625, 120
        // payments, standard tables give ≈ ₹11,870.2
        let emi = monthly_installment(1_000_000.0, 7.5, 10.0);
        assert!(
            (emi - 11_870.2).abs() < 0.5,
            "expected ≈11870.2, got {:.2}",
            emi
        );
    }

    #[test]
    fn zero_rate_spreads_principal_evenly() {
        let emi = monthly_installment(1_200_000.0, 0.0, 10.0);
        assert_eq!(emi, 10_000.0);
        assert!(emi.is_finite());
    }

    #[test]
    fn higher_rate_costs_more_per_month() {
        let low = monthly_installment(1_000_000.0, 6.9, 10.0);
        let high = monthly_installment(1_000_000.0, 8.0, 10.0);
        assert!(high > low);
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let a = monthly_installment(1_500_000.0, 6.9, 12.0);
        let b = monthly_installment(1_500_000.0, 6.9, 12.0);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
