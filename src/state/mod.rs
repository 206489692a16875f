mod persistence;
mod session;

pub use persistence::{FormStore, JsonFileStore, MemoryStore};
pub use session::{Action, BookingSession, Step, Submission};
