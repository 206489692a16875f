pub mod constants;
pub mod duration;
pub mod quote;
pub mod rules;
pub mod selection;
pub mod validation;

pub use constants::*;
pub use duration::{compute_hours, parse_clock_time, time_slots};
pub use quote::{
    compute_quote, format_currency, format_hours, parse_pax, parse_pax_lenient, round_half_up,
};
pub use rules::PricingRules;
pub use selection::{build_selection, MenuChoice};
pub use validation::{validate_pax, validate_submission, ValidatedBooking};
