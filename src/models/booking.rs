use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::pricing::duration::compute_hours;

/// Date and wall-clock window of an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventWindow {
    pub date: Option<NaiveDate>,
    pub start_time: String,
    pub end_time: String,
}

impl EventWindow {
    pub fn duration_hours(&self) -> f64 {
        compute_hours(&self.start_time, &self.end_time)
    }
}

/// Client contact block of a booking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub event_type: String,
}

/// In-progress booking form, stored exactly as typed.
///
/// Keys mirror the form field names so a saved record survives reloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingFormState {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub name: String,
    #[serde(rename = "number")]
    pub phone: String,
    pub email: String,
    pub event_type: String,
    #[serde(deserialize_with = "pax_as_string")]
    pub pax: String,
    pub queries: String,
}

/// Editable fields of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    StartTime,
    EndTime,
    Name,
    Phone,
    Email,
    EventType,
    Pax,
    Queries,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Date => "Event Date",
            FormField::StartTime => "Event Start Time (24H)",
            FormField::EndTime => "Event End Time (24H)",
            FormField::Name => "Full Name",
            FormField::Phone => "Phone Number",
            FormField::Email => "Email Address",
            FormField::EventType => "Event Type",
            FormField::Pax => "Total Pax",
            FormField::Queries => "Queries",
        }
    }
}

impl BookingFormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Date => &self.date,
            FormField::StartTime => &self.start_time,
            FormField::EndTime => &self.end_time,
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::EventType => &self.event_type,
            FormField::Pax => &self.pax,
            FormField::Queries => &self.queries,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Date => &mut self.date,
            FormField::StartTime => &mut self.start_time,
            FormField::EndTime => &mut self.end_time,
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::Email => &mut self.email,
            FormField::EventType => &mut self.event_type,
            FormField::Pax => &mut self.pax,
            FormField::Queries => &mut self.queries,
        };
        *slot = value;
    }

    /// Event window with the date parsed leniently (unparseable dates become `None`).
    pub fn window(&self) -> EventWindow {
        EventWindow {
            date: NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }

    pub fn contact(&self) -> ContactDetails {
        ContactDetails {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            event_type: self.event_type.clone(),
        }
    }
}

/// Older saved forms may carry pax as a JSON number or null.
fn pax_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PaxValue {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<PaxValue>::deserialize(deserializer)? {
        Some(PaxValue::Text(s)) => s,
        Some(PaxValue::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_keys_match_form_fields() {
        let form = BookingFormState {
            phone: "0501234567".to_string(),
            event_type: "Wedding".to_string(),
            start_time: "18:00".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["number"], "0501234567");
        assert_eq!(value["eventType"], "Wedding");
        assert_eq!(value["startTime"], "18:00");
    }

    #[test]
    fn test_pax_accepts_number_and_null() {
        let form: BookingFormState = serde_json::from_str(r#"{"pax": 45}"#).unwrap();
        assert_eq!(form.pax, "45");

        let form: BookingFormState = serde_json::from_str(r#"{"pax": null, "name": "Asha"}"#).unwrap();
        assert_eq!(form.pax, "");
        assert_eq!(form.name, "Asha");
    }

    #[test]
    fn test_set_and_get_field() {
        let mut form = BookingFormState::default();
        form.set(FormField::Queries, "Need a stage".to_string());
        assert_eq!(form.get(FormField::Queries), "Need a stage");
    }

    #[test]
    fn test_contact_block() {
        let form = BookingFormState {
            name: "Asha Menon".to_string(),
            phone: "0501234567".to_string(),
            event_type: "Birthday".to_string(),
            ..Default::default()
        };
        let contact = form.contact();
        assert_eq!(contact.name, "Asha Menon");
        assert_eq!(contact.phone, "0501234567");
        assert_eq!(contact.email, "");
        assert_eq!(contact.event_type, "Birthday");
    }

    #[test]
    fn test_window_parses_iso_date() {
        let form = BookingFormState {
            date: "2025-03-15".to_string(),
            start_time: "10:00".to_string(),
            end_time: "13:00".to_string(),
            ..Default::default()
        };
        let window = form.window();
        assert_eq!(window.date, NaiveDate::from_ymd_opt(2025, 3, 15));
        assert_eq!(window.duration_hours(), 3.0);
    }
}
