pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod message;
pub mod models;
pub mod pricing;
pub mod state;

pub use error::{BookingError, Result};
pub use models::{FinalSelection, MenuItem, Package, PackageId, Quote};
