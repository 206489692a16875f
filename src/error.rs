use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Please select at least one item to proceed with a custom menu")]
    EmptySelection,

    #[error("Minimum custom menu price must be {minimum:.2} AED to proceed (currently {total:.2} AED)")]
    BelowMinimum { total: f64, minimum: f64 },

    #[error("End time must be after start time (or after midnight)")]
    InvalidTimeWindow,

    #[error("Please enter a valid number of guests (Pax)")]
    InvalidPax,

    #[error("Minimum guests required is {min} Pax")]
    BelowMinPax { min: u32 },

    #[error("Maximum hall capacity is {max} Pax")]
    AboveMaxPax { max: u32 },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid event date: {0}")]
    InvalidDate(String),

    #[error("Please select a menu package or customize your menu first")]
    NoSelection,

    #[error("Unknown package: {0}")]
    UnknownPackage(u32),

    #[error("Menu item not found: {0}")]
    UnknownItem(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl BookingError {
    /// True for user-input problems the shell can recover from by re-prompting.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            BookingError::Io(_) | BookingError::Json(_) | BookingError::Prompt(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
