use assert_float_eq::assert_float_absolute_eq;

use hall_booking_rs::error::BookingError;
use hall_booking_rs::models::{CustomSelection, MenuItem};
use hall_booking_rs::pricing::{
    build_selection, compute_hours, compute_quote, validate_pax, MenuChoice, PricingRules,
    DEPOSIT_RATE, OVERTIME_LIMIT_HOURS, OVERTIME_RATE_PER_HOUR,
};

#[test]
fn test_total_and_deposit_invariants() {
    let rules = PricingRules::default();
    let cases = [
        (65.0, 30, 2.0),
        (75.0, 120, 3.0),
        (85.0, 200, 6.5),
        (55.25, 45, 24.0),
        (100.0, 0, 4.0),
    ];

    for (per_pax, pax, hours) in cases {
        let quote = compute_quote(&rules, per_pax, pax, hours);
        let overtime = (hours - OVERTIME_LIMIT_HOURS).max(0.0) * OVERTIME_RATE_PER_HOUR;

        assert_eq!(quote.menu_subtotal, per_pax * pax as f64);
        assert_eq!(quote.overtime_charge, overtime);
        assert_eq!(quote.final_total, quote.menu_subtotal + quote.overtime_charge);
        assert_eq!(quote.deposit_amount, quote.final_total * DEPOSIT_RATE);
    }
}

#[test]
fn test_duration_examples() {
    assert_eq!(compute_hours("10:00", "13:00"), 3.0);
    assert_eq!(compute_hours("22:00", "02:00"), 4.0);
    assert_eq!(compute_hours("09:00", "09:00"), 24.0);
}

#[test]
fn test_overtime_boundary() {
    let rules = PricingRules::default();

    // exactly 3 hours is still free
    let at_limit = compute_quote(&rules, 65.0, 50, 3.0);
    assert_eq!(at_limit.overtime_charge, 0.0);

    let just_over = compute_quote(&rules, 65.0, 50, 3.01);
    assert_float_absolute_eq!(just_over.overtime_hours, 0.01, 1e-9);
    assert_float_absolute_eq!(just_over.overtime_charge, 5.0, 1e-6);
}

#[test]
fn test_overtime_is_flat_regardless_of_pax() {
    let rules = PricingRules::default();
    let small = compute_quote(&rules, 65.0, 30, 5.0);
    let large = compute_quote(&rules, 65.0, 200, 5.0);
    assert_eq!(small.overtime_charge, large.overtime_charge);
}

#[test]
fn test_custom_minimum_boundary() {
    let rules = PricingRules::default();

    let mut exact = CustomSelection::new();
    exact.toggle(MenuItem::new("Chef's Platter", 50.0));
    exact.toggle(MenuItem::new("Mint Lime", 5.0));
    let selection = build_selection(MenuChoice::Custom(&exact), &rules).unwrap();
    assert_eq!(selection.per_pax_price(), Some(55.0));

    // one fil short
    let mut short = CustomSelection::new();
    short.toggle(MenuItem::new("Chef's Platter", 50.0));
    short.toggle(MenuItem::new("House Juice", 4.99));
    let err = build_selection(MenuChoice::Custom(&short), &rules);
    assert!(matches!(err, Err(BookingError::BelowMinimum { .. })));
}

#[test]
fn test_pax_boundaries() {
    let rules = PricingRules::default();

    assert!(matches!(
        validate_pax("29", &rules),
        Err(BookingError::BelowMinPax { .. })
    ));
    assert_eq!(validate_pax("30", &rules).unwrap(), 30);
    assert_eq!(validate_pax("200", &rules).unwrap(), 200);
    assert!(matches!(
        validate_pax("201", &rules),
        Err(BookingError::AboveMaxPax { .. })
    ));
    assert!(matches!(validate_pax("-5", &rules), Err(BookingError::InvalidPax)));

    // too many digits for i64 is still far above capacity
    assert!(matches!(
        validate_pax("99999999999999999999", &rules),
        Err(BookingError::AboveMaxPax { max: 200 })
    ));
}

#[test]
fn test_toggle_twice_restores_selection() {
    let mut custom = CustomSelection::new();
    custom.toggle(MenuItem::new("Biryani", 7.0));
    custom.toggle(MenuItem::new("Fattoush", 2.5));
    let before = custom.clone();
    let total_before = custom.total();

    custom.toggle(MenuItem::new("Gulab Jamun", 3.0));
    custom.toggle(MenuItem::new("Gulab Jamun", 3.0));

    assert!(!custom.contains("Gulab Jamun"));
    assert_eq!(custom, before);
    assert_eq!(custom.total(), total_before);
}
