pub mod formatter;
pub mod link;

pub use formatter::{format_booking_message, format_event_date};
pub use link::whatsapp_link;
