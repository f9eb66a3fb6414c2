/// Panel count, array capacity and installed cost from land area, coverage
/// and the site's average irradiance. Deterministic and pure; the only
/// rounding is the floor on whole panels.
use crate::models::sizing::SizingResult;

/// Nominal module footprint (m²).
pub const PANEL_AREA_SQM: f64 = 1.7;

/// Module efficiency fraction. Matches the rest of the module datasheet set
/// but does not enter the output math today.
#[allow(dead_code)]
pub const PANEL_EFFICIENCY: f64 = 0.2;

/// Rated DC output per module (W).
pub const PANEL_POWER_WATTS: f64 = 400.0;

/// Installed cost per rated watt (₹).
pub const COST_PER_WATT_INR: f64 = 70.0;

pub fn size_installation(
    land_area_sqm: f64,
    coverage_percent: f64,
    average_irradiance_kwh_m2_day: f64,
) -> SizingResult {
    let usable_area_sqm = land_area_sqm * (coverage_percent / 100.0);
    let panel_count = (usable_area_sqm / PANEL_AREA_SQM).floor() as u64;
    let total_power_watts = panel_count as f64 * PANEL_POWER_WATTS;

    SizingResult {
        panel_count,
        total_power_kw: total_power_watts / 1000.0,
        estimated_cost_inr: total_power_watts * COST_PER_WATT_INR,
        average_irradiance_kwh_m2_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_covered_thousand_square_metre_plot() {
        // 1000 m² at 50% coverage: 500 m² usable, floor(500 / 1.7) = 294
        let result = size_installation(1000.0, 50.0, 5.0);
        assert_eq!(result.panel_count, 294);
        assert_eq!(result.total_power_kw, 117.6);
        assert_eq!(result.estimated_cost_inr, 8_232_000.0);
        assert_eq!(result.average_irradiance_kwh_m2_day, 5.0);
    }

    #[test]
    fn panel_count_floors_not_rounds() {
        // 3.3 m² usable holds one panel, not two
        let result = size_installation(3.3, 100.0, 5.0);
        assert_eq!(result.panel_count, 1);
        // Below one panel footprint nothing fits
        let result = size_installation(1.6, 100.0, 5.0);
        assert_eq!(result.panel_count, 0);
        assert_eq!(result.total_power_kw, 0.0);
        assert_eq!(result.estimated_cost_inr, 0.0);
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let a = size_installation(742.5, 63.0, 4.82);
        let b = size_installation(742.5, 63.0, 4.82);
        assert_eq!(a.panel_count, b.panel_count);
        assert_eq!(a.total_power_kw.to_bits(), b.total_power_kw.to_bits());
        assert_eq!(a.estimated_cost_inr.to_bits(), b.estimated_cost_inr.to_bits());
    }
}
