/// Free hours included with every booking.
pub const OVERTIME_LIMIT_HOURS: f64 = 3.0;

/// Flat surcharge per hour beyond the free hours, independent of pax.
pub const OVERTIME_RATE_PER_HOUR: f64 = 500.0;

/// Share of the final total required as a non-refundable deposit.
pub const DEPOSIT_RATE: f64 = 0.50;

/// Minimum per-pax price of a custom menu.
pub const MIN_CUSTOM_PRICE: f64 = 55.00;

/// Hall capacity limits.
pub const MIN_PAX: u32 = 30;
pub const MAX_PAX: u32 = 200;

pub const CURRENCY_CODE: &str = "AED";

// ─────────────────────────────────────────────────────────────────────────────
// Handoff and shell defaults
// ─────────────────────────────────────────────────────────────────────────────

/// WhatsApp number that receives booking requests.
pub const RECIPIENT_WHATSAPP: &str = "971509674475";

/// Where the in-progress booking form is kept between runs.
pub const DEFAULT_FORM_FILE: &str = "booking_form.json";

/// Granularity of the start/end time choices offered to users.
pub const TIME_SLOT_MINUTES: u32 = 30;
