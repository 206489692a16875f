use chrono::NaiveDate;

use crate::error::{BookingError, Result};
use crate::models::{BookingFormState, FinalSelection, Quote};
use crate::pricing::{format_currency, format_hours};
use crate::pricing::rules::PricingRules;

const HEADER: &str = "*⭐ NEW BOOKING: DHE SWAGAT RESTAURANT ⭐*";
const NO_QUERIES: &str = "None";

/// Long-form date and weekday, e.g. ("Saturday, March 15, 2025", "Saturday").
pub fn format_event_date(date: NaiveDate) -> (String, String) {
    let full = date.format("%A, %B %-d, %Y").to_string();
    let day = date.format("%A").to_string();
    (full, day)
}

/// Render the booking summary sent to the restaurant.
///
/// Sections are fixed: client details, event timing, menu selection, final
/// quote and queries. The overtime line appears only when overtime is charged.
pub fn format_booking_message(
    selection: &FinalSelection,
    form: &BookingFormState,
    pax: u32,
    quote: &Quote,
    rules: &PricingRules,
) -> Result<String> {
    let (title, per_pax_price) = match selection {
        FinalSelection::None => return Err(BookingError::NoSelection),
        FinalSelection::Package {
            title,
            per_pax_price,
            ..
        } => (title.as_str(), *per_pax_price),
        FinalSelection::Custom { per_pax_price, .. } => {
            (FinalSelection::CUSTOM_TITLE, *per_pax_price)
        }
    };
    let items = selection.items();

    let contact = form.contact();
    let window = form.window();
    let full_date = match window.date {
        Some(date) => format_event_date(date).0,
        None => form.date.clone(),
    };

    let mut lines = vec![HEADER.to_string(), String::new()];

    lines.push("*--- 👤 CLIENT DETAILS ---*".to_string());
    lines.push(format!("*Name:* {}", contact.name));
    lines.push(format!("*Phone:* {}", contact.phone));
    lines.push(format!("*Email:* {}", contact.email));
    lines.push(format!("*Event Type:* {}", contact.event_type));
    lines.push(String::new());

    lines.push("*--- 🗓️ EVENT TIMING ---*".to_string());
    lines.push(format!("*Date:* {}", full_date));
    lines.push(format!(
        "*Duration:* {} hours (Start: {} | End: {})",
        format_hours(quote.duration_hours),
        form.start_time,
        form.end_time
    ));
    lines.push(String::new());

    lines.push("*--- 🍽️ MENU SELECTION ---*".to_string());
    lines.push(format!("*Menu:* {}", title));
    lines.push(format!("*Guests (Pax):* {}", pax));
    lines.push(format!("*Price Per Pax:* {}", format_currency(per_pax_price)));
    lines.push(format!("*Items Selected ({}):*", items.len()));
    lines.extend(
        items
            .iter()
            .map(|item| format!("- {} ({})", item.name, format_currency(item.price))),
    );
    lines.push(String::new());

    lines.push("*--- 💰 FINAL QUOTE ---*".to_string());
    lines.push(format!("*Menu Subtotal:* {}", format_currency(quote.menu_subtotal)));
    if quote.has_overtime() {
        lines.push(format!(
            "*Extratime Charge ({}h):* +{}",
            format_hours(quote.overtime_hours),
            format_currency(quote.overtime_charge)
        ));
    }
    lines.push(format!(
        "*Required Deposit ({}%):* {}",
        rules.deposit_percent(),
        format_currency(quote.deposit_amount)
    ));
    lines.push(format!("*TOTAL ESTIMATE:* {}", format_currency(quote.final_total)));
    lines.push(String::new());

    lines.push("*--- ❓ QUERIES ---*".to_string());
    let queries = form.queries.trim();
    lines.push(if queries.is_empty() { NO_QUERIES } else { queries }.to_string());

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    #[test]
    fn test_format_event_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let (full, day) = format_event_date(date);
        assert_eq!(full, "Wednesday, March 5, 2025");
        assert_eq!(day, "Wednesday");
    }

    #[test]
    fn test_none_selection_is_rejected() {
        let result = format_booking_message(
            &FinalSelection::None,
            &BookingFormState::default(),
            40,
            &Quote::default(),
            &PricingRules::default(),
        );
        assert!(matches!(result, Err(BookingError::NoSelection)));
    }

    #[test]
    fn test_custom_menu_lists_items_and_placeholder_queries() {
        let selection = FinalSelection::Custom {
            per_pax_price: 60.0,
            items: vec![MenuItem::new("Biryani", 7.0), MenuItem::new("Ice Cream", 3.0)],
        };
        let form = BookingFormState {
            date: "2025-03-15".to_string(),
            start_time: "12:00".to_string(),
            end_time: "14:00".to_string(),
            ..Default::default()
        };
        let msg = format_booking_message(
            &selection,
            &form,
            40,
            &Quote {
                duration_hours: 2.0,
                menu_subtotal: 2400.0,
                final_total: 2400.0,
                deposit_amount: 1200.0,
                ..Default::default()
            },
            &PricingRules::default(),
        )
        .unwrap();

        assert!(msg.contains("*Menu:* Custom Menu"));
        assert!(msg.contains("*Items Selected (2):*\n- Biryani (7.00 AED)\n- Ice Cream (3.00 AED)\n"));
        assert!(msg.contains("*Date:* Saturday, March 15, 2025"));
        assert!(msg.contains("*Duration:* 2.0 hours (Start: 12:00 | End: 14:00)"));
        assert!(!msg.contains("Extratime"));
        assert!(msg.ends_with("*--- ❓ QUERIES ---*\nNone"));
    }

    #[test]
    fn test_half_cent_and_quarter_hour_round_up() {
        use crate::pricing::{compute_hours, compute_quote};

        let rules = PricingRules::default();
        let selection = FinalSelection::Custom {
            per_pax_price: 55.25,
            items: vec![MenuItem::new("Chef's Platter", 55.25)],
        };
        let form = BookingFormState {
            date: "2025-03-15".to_string(),
            start_time: "18:00".to_string(),
            end_time: "21:15".to_string(),
            name: "Asha Menon".to_string(),
            ..Default::default()
        };
        // deposit is exactly 974.125, overtime exactly 0.25h
        let quote = compute_quote(&rules, 55.25, 33, compute_hours("18:00", "21:15"));
        let msg = format_booking_message(&selection, &form, 33, &quote, &rules).unwrap();

        assert!(msg.contains("*Name:* Asha Menon\n"));
        assert!(msg.contains("*Duration:* 3.3 hours (Start: 18:00 | End: 21:15)"));
        assert!(msg.contains("*Extratime Charge (0.3h):* +125.00 AED"));
        assert!(msg.contains("*Required Deposit (50%):* 974.13 AED"));
        assert!(msg.contains("*TOTAL ESTIMATE:* 1948.25 AED"));
    }
}
