use chrono::NaiveDate;
use tracing::warn;

use crate::error::{BookingError, Result};
use crate::models::BookingFormState;
use crate::pricing::duration::compute_hours;
use crate::pricing::quote::parse_pax;
use crate::pricing::rules::PricingRules;

/// A booking form that passed every submission gate.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBooking {
    pub date: NaiveDate,
    pub pax: u32,
    pub duration_hours: f64,
}

/// Check the pax field against the hall limits.
pub fn validate_pax(input: &str, rules: &PricingRules) -> Result<u32> {
    let pax = match parse_pax(input) {
        Some(n) if n > 0 => n,
        _ => return Err(BookingError::InvalidPax),
    };

    if pax < rules.min_pax as i64 {
        return Err(BookingError::BelowMinPax { min: rules.min_pax });
    }
    if pax > rules.max_pax as i64 {
        return Err(BookingError::AboveMaxPax { max: rules.max_pax });
    }

    // Bounded by max_pax above.
    Ok(pax as u32)
}

fn require(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        Err(BookingError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Run the submission gates in order: time window, required fields, pax.
pub fn validate_submission(form: &BookingFormState, rules: &PricingRules) -> Result<ValidatedBooking> {
    let result = check_gates(form, rules);
    if let Err(e) = &result {
        warn!(error = %e, "booking submission rejected");
    }
    result
}

fn check_gates(form: &BookingFormState, rules: &PricingRules) -> Result<ValidatedBooking> {
    // Time window
    let has_times = !form.start_time.trim().is_empty() && !form.end_time.trim().is_empty();
    let duration_hours = compute_hours(&form.start_time, &form.end_time);
    if has_times && duration_hours <= 0.0 {
        return Err(BookingError::InvalidTimeWindow);
    }

    // Required fields
    require(&form.name, "name")?;
    require(&form.phone, "phone")?;
    require(&form.email, "email")?;
    require(&form.event_type, "event type")?;
    require(&form.date, "date")?;
    require(&form.start_time, "start time")?;
    require(&form.end_time, "end time")?;

    let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(form.date.clone()))?;

    // Guest count
    let pax = validate_pax(&form.pax, rules)?;

    Ok(ValidatedBooking {
        date,
        pax,
        duration_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> BookingFormState {
        BookingFormState {
            date: "2025-03-15".to_string(),
            start_time: "18:00".to_string(),
            end_time: "22:00".to_string(),
            name: "Asha Menon".to_string(),
            phone: "0501234567".to_string(),
            email: "asha@example.com".to_string(),
            event_type: "Wedding".to_string(),
            pax: "50".to_string(),
            queries: String::new(),
        }
    }

    #[test]
    fn test_complete_form_passes() {
        let booking = validate_submission(&complete_form(), &PricingRules::default()).unwrap();
        assert_eq!(booking.pax, 50);
        assert_eq!(booking.duration_hours, 4.0);
        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
    }

    #[test]
    fn test_unparseable_times_fail_time_gate() {
        let mut form = complete_form();
        form.end_time = "late".to_string();
        let err = validate_submission(&form, &PricingRules::default());
        assert!(matches!(err, Err(BookingError::InvalidTimeWindow)));
    }

    #[test]
    fn test_equal_times_pass_time_gate() {
        let mut form = complete_form();
        form.end_time = form.start_time.clone();
        let booking = validate_submission(&form, &PricingRules::default()).unwrap();
        assert_eq!(booking.duration_hours, 24.0);
    }

    #[test]
    fn test_missing_fields_reported() {
        let mut form = complete_form();
        form.email = "  ".to_string();
        assert!(matches!(
            validate_submission(&form, &PricingRules::default()),
            Err(BookingError::MissingField("email"))
        ));

        let mut form = complete_form();
        form.start_time.clear();
        assert!(matches!(
            validate_submission(&form, &PricingRules::default()),
            Err(BookingError::MissingField("start time"))
        ));
    }

    #[test]
    fn test_invalid_date() {
        let mut form = complete_form();
        form.date = "15/03/2025".to_string();
        assert!(matches!(
            validate_submission(&form, &PricingRules::default()),
            Err(BookingError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_pax_errors_are_distinguished() {
        let rules = PricingRules::default();
        assert!(matches!(validate_pax("", &rules), Err(BookingError::InvalidPax)));
        // zero guests is not a number of guests at all
        assert!(matches!(validate_pax("0", &rules), Err(BookingError::InvalidPax)));
        assert!(matches!(validate_pax("many", &rules), Err(BookingError::InvalidPax)));
        assert!(matches!(
            validate_pax("10", &rules),
            Err(BookingError::BelowMinPax { min: 30 })
        ));
        assert!(matches!(
            validate_pax("500", &rules),
            Err(BookingError::AboveMaxPax { max: 200 })
        ));
    }
}
