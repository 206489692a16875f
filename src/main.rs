use clap::Parser;

use hall_booking_rs::catalog;
use hall_booking_rs::cli::{Cli, Command};
use hall_booking_rs::config::AppConfig;
use hall_booking_rs::error::{BookingError, Result};
use hall_booking_rs::interface::{
    display_custom_summary, display_event_day, display_master_menu, display_package,
    display_package_list, display_quote, display_request, prompt_custom_items, prompt_form_field,
    prompt_menu_mode, prompt_package, prompt_yes_no,
};
use hall_booking_rs::logging;
use hall_booking_rs::message::whatsapp_link;
use hall_booking_rs::models::{CustomSelection, FormField, MenuItem, PackageId};
use hall_booking_rs::pricing::{
    build_selection, compute_hours, compute_quote, parse_pax_lenient, validate_pax, MenuChoice,
    PricingRules,
};
use hall_booking_rs::state::{Action, BookingSession, FormStore, JsonFileStore, Step};

/// Order in which the booking form is filled.
const FORM_ORDER: [FormField; 9] = [
    FormField::Date,
    FormField::StartTime,
    FormField::EndTime,
    FormField::Pax,
    FormField::Name,
    FormField::Phone,
    FormField::Email,
    FormField::EventType,
    FormField::Queries,
];

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Book => cmd_book(&cli.form_file, &config),
        Command::Packages { id } => cmd_packages(id),
        Command::Menu => cmd_menu(&config.pricing),
        Command::Quote {
            package,
            item,
            pax,
            start,
            end,
            json,
        } => cmd_quote(&config.pricing, package, &item, &pax, &start, &end, json),
        Command::Reset => cmd_reset(&cli.form_file),
    }
}

/// List packages or show one package in detail.
fn cmd_packages(id: Option<u32>) -> Result<()> {
    match id {
        Some(value) => display_package(catalog::package(PackageId::try_from(value)?)),
        None => display_package_list(catalog::packages()),
    }
    Ok(())
}

/// Show the master menu.
fn cmd_menu(rules: &PricingRules) -> Result<()> {
    display_master_menu(catalog::master_menu(), &CustomSelection::new(), rules);
    Ok(())
}

/// Resolve a typed item name against the master menu, suggesting close matches.
fn resolve_item(name: &str) -> Result<&'static MenuItem> {
    if let Some(item) = catalog::find_item(name) {
        return Ok(item);
    }

    let suggestions = catalog::suggest_items(name, 3);
    if !suggestions.is_empty() {
        let names: Vec<&str> = suggestions.iter().map(|i| i.name.as_str()).collect();
        eprintln!("Did you mean: {}?", names.join(", "));
    }
    Err(BookingError::UnknownItem(name.to_string()))
}

/// Quote an event non-interactively.
fn cmd_quote(
    rules: &PricingRules,
    package: Option<u32>,
    items: &[String],
    pax: &str,
    start: &str,
    end: &str,
    json: bool,
) -> Result<()> {
    let selection = match package {
        Some(value) => build_selection(MenuChoice::Package(PackageId::try_from(value)?), rules)?,
        None => {
            let mut custom = CustomSelection::new();
            for name in items {
                let item = resolve_item(name)?;
                if !custom.contains(&item.name) {
                    custom.toggle(item.clone());
                }
            }
            build_selection(MenuChoice::Custom(&custom), rules)?
        }
    };

    let pax_count = parse_pax_lenient(pax);
    let duration = compute_hours(start, end);
    let per_pax_price = selection.per_pax_price().unwrap_or(0.0);
    let quote = compute_quote(rules, per_pax_price, pax_count, duration);

    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        display_quote(&selection, &quote, pax_count, rules);
    }

    if let Err(e) = validate_pax(pax, rules) {
        eprintln!("Note: {}", e);
    }

    Ok(())
}

/// Pick a package or build a custom menu until the selection is accepted.
fn choose_menu(session: &mut BookingSession, rules: &PricingRules) -> Result<()> {
    loop {
        let step = prompt_menu_mode()?;
        session.apply(Action::GoTo(step), rules)?;

        match step {
            Step::Packages => {
                let id = prompt_package(session.selected_package())?;
                session.apply(Action::SelectPackage(id), rules)?;
                display_package(catalog::package(id));
                if !prompt_yes_no("Continue with this package?", true)? {
                    continue;
                }
            }
            Step::Customize => {
                display_master_menu(catalog::master_menu(), session.custom(), rules);
                for item in prompt_custom_items(session.custom())? {
                    session.apply(Action::ToggleItem(item), rules)?;
                }
                display_custom_summary(session.custom());
            }
            Step::Booking => {}
        }

        match session.apply(Action::ContinueToBooking, rules) {
            Ok(()) => return Ok(()),
            Err(e) if e.is_validation() => eprintln!("{}", e),
            Err(e) => return Err(e),
        }
    }
}

/// Prompt every form field, saving after each change.
fn fill_form(
    session: &mut BookingSession,
    store: &mut impl FormStore,
    rules: &PricingRules,
) -> Result<()> {
    for field in FORM_ORDER {
        let value = prompt_form_field(field, session.form().get(field))?;
        session.apply(Action::UpdateForm(field, value), rules)?;
        store.save(session.form())?;

        if field == FormField::Date {
            display_event_day(&session.form().date);
        }
    }
    Ok(())
}

/// Interactive booking flow.
fn cmd_book(form_file: &str, config: &AppConfig) -> Result<()> {
    let rules = &config.pricing;
    let mut store = JsonFileStore::new(form_file);
    let mut session = BookingSession::new(store.load()?);

    if !session.form().name.is_empty() || !session.form().date.is_empty() {
        println!("Resuming saved booking form from {}", form_file);
    }

    choose_menu(&mut session, rules)?;

    loop {
        fill_form(&mut session, &mut store, rules)?;

        let quote = session.quote(rules);
        let pax = parse_pax_lenient(&session.form().pax);
        display_quote(session.final_selection(), &quote, pax, rules);

        if !prompt_yes_no("Submit booking request?", true)? {
            println!("Form saved to {}. Run `hall_booking book` to continue.", form_file);
            return Ok(());
        }

        match session.submit(rules) {
            Ok(submission) => {
                let link = whatsapp_link(&config.recipient, &submission.message);
                display_request(&submission.message, &link, submission.quote.final_total);
                store.clear()?;
                session.apply(Action::StartNewBooking, rules)?;
                return Ok(());
            }
            Err(e) if e.is_validation() => {
                eprintln!("{}", e);
                println!("Please review the form.");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Discard the saved booking form.
fn cmd_reset(form_file: &str) -> Result<()> {
    JsonFileStore::new(form_file).clear()?;
    println!("Booking form cleared.");
    Ok(())
}
