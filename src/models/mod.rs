pub mod booking;
pub mod menu;
pub mod quote;
pub mod selection;

pub use booking::{BookingFormState, ContactDetails, EventWindow, FormField};
pub use menu::{Category, MenuItem, Package, PackageId};
pub use quote::Quote;
pub use selection::{CustomSelection, FinalSelection};
