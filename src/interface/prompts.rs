use chrono::NaiveDate;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::catalog;
use crate::error::Result;
use crate::models::{CustomSelection, FormField, MenuItem, PackageId};
use crate::pricing::{format_currency, parse_clock_time, time_slots};
use crate::state::Step;

/// Ask whether to pick a fixed package or build a custom menu.
pub fn prompt_menu_mode() -> Result<Step> {
    let selection = Select::new()
        .with_prompt("How would you like to choose your menu?")
        .items(&["Menu Packages", "Customize Menu"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        Step::Packages
    } else {
        Step::Customize
    })
}

/// Prompt for one of the fixed packages.
pub fn prompt_package(current: PackageId) -> Result<PackageId> {
    let options: Vec<String> = catalog::packages()
        .iter()
        .map(|p| format!("{} - {}", p.title, p.description))
        .collect();
    let default = PackageId::ALL
        .iter()
        .position(|id| *id == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Select your menu package")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(PackageId::ALL[selection.min(PackageId::ALL.len() - 1)])
}

/// Let the user tick master menu items.
///
/// Returns the items whose selection changed, so they can be toggled in order:
/// removals first, then new picks in menu order.
pub fn prompt_custom_items(custom: &CustomSelection) -> Result<Vec<MenuItem>> {
    let items: Vec<&MenuItem> = catalog::all_items().collect();
    let labels: Vec<String> = items
        .iter()
        .map(|i| format!("{} ({})", i.name, format_currency(i.price)))
        .collect();
    let checked: Vec<bool> = items.iter().map(|i| custom.contains(&i.name)).collect();

    let picked = MultiSelect::new()
        .with_prompt("Select items (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&checked)
        .interact()?;

    let mut changes: Vec<MenuItem> = custom
        .items()
        .iter()
        .filter(|selected| {
            !picked
                .iter()
                .any(|&idx| items[idx].name == selected.name)
        })
        .cloned()
        .collect();

    changes.extend(
        picked
            .into_iter()
            .filter(|&idx| !checked[idx])
            .map(|idx| items[idx].clone()),
    );

    Ok(changes)
}

fn prompt_time(field: FormField, current: &str) -> Result<String> {
    let slots = time_slots();
    let default = slots.iter().position(|s| s == current.trim()).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(field.label())
        .items(&slots)
        .default(default)
        .interact()?;

    Ok(slots[selection].clone())
}

fn prompt_text(field: FormField, current: &str) -> Result<String> {
    let optional = field == FormField::Queries;
    let mut input = Input::<String>::new()
        .with_prompt(field.label())
        .allow_empty(optional);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }

    let value = match field {
        FormField::Date => input
            .validate_with(|s: &String| -> std::result::Result<(), String> {
                NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                    .map(|_| ())
                    .map_err(|_| "Use the format YYYY-MM-DD".to_string())
            })
            .interact_text()?,
        FormField::StartTime | FormField::EndTime => input
            .validate_with(|s: &String| -> std::result::Result<(), String> {
                parse_clock_time(s)
                    .map(|_| ())
                    .ok_or_else(|| "Use the format HH:MM (24h)".to_string())
            })
            .interact_text()?,
        _ => input.interact_text()?,
    };

    Ok(value.trim().to_string())
}

/// Prompt for one booking form field, offering the saved value as default.
pub fn prompt_form_field(field: FormField, current: &str) -> Result<String> {
    match field {
        // Offer half-hour slots, but keep a saved off-grid time editable.
        FormField::StartTime | FormField::EndTime
            if current.is_empty() || time_slots().iter().any(|s| s == current.trim()) =>
        {
            prompt_time(field, current)
        }
        _ => prompt_text(field, current),
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
