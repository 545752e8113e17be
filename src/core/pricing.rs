use crate::domain::model::FeeSchedule;

/// Fee for a stay of `elapsed_minutes`, tiered:
///
/// - up to 15 minutes: `first_15_min`
/// - up to 30 minutes: `first_30_min`
/// - up to 60 minutes: `first_hour`
/// - beyond: `first_hour` plus one `per_additional_hour` for every started
///   hour past the first.
///
/// Tier bounds are inclusive, so an exactly-15-minute stay takes the cheaper
/// tier. Minutes are fractional (measured wall-clock time, not simulated).
/// Long stays are deliberately priced by the hour; the schedule's `full_day`
/// rate is not applied as a cap.
pub fn compute_fee(elapsed_minutes: f64, fees: &FeeSchedule) -> f64 {
    if elapsed_minutes <= 15.0 {
        return fees.first_15_min;
    }
    if elapsed_minutes <= 30.0 {
        return fees.first_30_min;
    }
    if elapsed_minutes <= 60.0 {
        return fees.first_hour;
    }

    let additional_hours = ((elapsed_minutes - 60.0) / 60.0).ceil();
    fees.first_hour + additional_hours * fees.per_additional_hour
}
