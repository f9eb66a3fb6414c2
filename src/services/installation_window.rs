/// Installation window selection over a daily weather series.
///
/// Two outputs from one linear scan:
///  1. the ordered list of days suitable for panel installation work
///  2. the best seven-calendar-day window to schedule the job in
///
/// A day qualifies when it offers strictly more than MIN_SUNSHINE_HOURS of
/// sunshine and strictly less than MAX_PRECIPITATION_MM of rain. The window
/// search accumulates sunshine over runs of qualifying days and closes a
/// candidate week whenever the absolute series index reaches a boundary
/// (index % 7 == 6). The boundary follows the outer series, not the run, so a
/// week can close holding fewer than seven qualifying days — that behavior is
/// load-bearing for which week wins and is pinned by the tests below.
use chrono::{Days, NaiveDate};

use crate::models::weather::{DailyWeatherRecord, InstallationForecast, RecommendedWindow};

/// A day must offer strictly more than this many hours of sunshine.
pub const MIN_SUNSHINE_HOURS: f64 = 6.0;

/// A day must receive strictly less than this many millimetres of rain.
pub const MAX_PRECIPITATION_MM: f64 = 5.0;

/// Whether a single day is viable for installation work.
pub fn is_suitable(day: &DailyWeatherRecord) -> bool {
    day.sunshine_hours > MIN_SUNSHINE_HOURS && day.precipitation_mm < MAX_PRECIPITATION_MM
}

/// Week accumulation state carried through the scan: the run currently being
/// summed and the best closed week seen so far, each as (start date, sunshine
/// hours total).
#[derive(Default)]
struct WindowScan {
    current: Option<(NaiveDate, f64)>,
    best: Option<(NaiveDate, f64)>,
}

/// Scan a chronologically ordered series and produce the suitable-day list
/// plus the recommended window, if any candidate week ever closed.
pub fn select_installation_window(series: &[DailyWeatherRecord]) -> InstallationForecast {
    let mut suitable_days = Vec::new();
    let mut scan = WindowScan::default();

    for (index, day) in series.iter().enumerate() {
        // Non-qualifying days neither advance nor reset the accumulator;
        // only the index boundary below can close a week.
        if !is_suitable(day) {
            continue;
        }
        suitable_days.push(day.clone());

        match scan.current.take() {
            // A qualifying day opens a new run. The boundary check lives on
            // the accumulate arm only, so an opening day never closes its own
            // week even when its index sits on a boundary.
            None => scan.current = Some((day.date, day.sunshine_hours)),
            Some((start, total)) => {
                let total = total + day.sunshine_hours;
                if index % 7 == 6 {
                    // Close the week and retire the run. A qualifying day
                    // right after this one starts a brand-new accumulator.
                    if total > scan.best.map_or(0.0, |(_, best_total)| best_total) {
                        scan.best = Some((start, total));
                    }
                } else {
                    scan.current = Some((start, total));
                }
            }
        }
    }

    let recommended_window = scan.best.map(|(start, _)| RecommendedWindow {
        start,
        // Seven calendar days inclusive of the start, whether or not the
        // trailing days appear in the series or qualify.
        end: start + Days::new(6),
    });

    InstallationForecast {
        suitable_days,
        recommended_window,
    }
}
