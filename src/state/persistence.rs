use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::models::BookingFormState;

/// Storage for the in-progress booking form.
///
/// Saved on every field change and cleared once a booking is submitted.
pub trait FormStore {
    /// Load the saved form, or an empty form when nothing is stored.
    fn load(&self) -> Result<BookingFormState>;

    fn save(&mut self, form: &BookingFormState) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

/// Keeps the form as a single JSON record at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FormStore for JsonFileStore {
    fn load(&self) -> Result<BookingFormState> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BookingFormState::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, form: &BookingFormState) -> Result<()> {
        let json = serde_json::to_string_pretty(form)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "saved booking form");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "cleared booking form");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store, used when nothing should touch the disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    form: Option<BookingFormState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.form.is_none()
    }
}

impl FormStore for MemoryStore {
    fn load(&self) -> Result<BookingFormState> {
        Ok(self.form.clone().unwrap_or_default())
    }

    fn save(&mut self, form: &BookingFormState) -> Result<()> {
        self.form = Some(form.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.form = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("form.json"));

        let form = BookingFormState {
            name: "Asha".to_string(),
            pax: "45".to_string(),
            start_time: "18:00".to_string(),
            ..Default::default()
        };
        store.save(&form).unwrap();

        assert_eq!(store.load().unwrap(), form);
    }

    #[test]
    fn test_missing_file_loads_empty_form() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load().unwrap(), BookingFormState::default());
    }

    #[test]
    fn test_clear_removes_file_and_tolerates_absence() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("form.json"));
        store.save(&BookingFormState::default()).unwrap();
        assert!(store.path().exists());

        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }

    #[test]
    fn test_loads_legacy_record_with_numeric_pax() {
        let json = r#"{"date": "2025-03-15", "number": "0501234567", "pax": 80}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let form = JsonFileStore::new(file.path()).load().unwrap();
        assert_eq!(form.phone, "0501234567");
        assert_eq!(form.pax, "80");
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        let form = BookingFormState {
            email: "a@b.c".to_string(),
            ..Default::default()
        };
        store.save(&form).unwrap();
        assert_eq!(store.load().unwrap().email, "a@b.c");
        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
