use crate::message::format_event_date;
use crate::models::{Category, CustomSelection, FinalSelection, Package, Quote};
use crate::pricing::{format_currency, format_hours, PricingRules};

/// Display the package overview.
pub fn display_package_list(packages: &[Package]) {
    println!();
    println!("=== Menu Packages ===");
    println!();

    for pkg in packages {
        println!(
            "  {:<14} {:>12} / pax  - {}",
            pkg.title,
            format_currency(pkg.per_pax_price),
            pkg.description
        );
    }

    println!();
}

fn display_categories(categories: &[Category], marker: impl Fn(&str) -> &'static str) {
    let width = categories
        .iter()
        .flat_map(|c| c.items.iter())
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    for category in categories {
        println!();
        println!("--- {} ---", category.name);
        for item in &category.items {
            println!(
                "  {}{:<width$}  {:>10}",
                marker(&item.name),
                item.name,
                format_currency(item.price),
                width = width
            );
        }
    }
}

/// Display one package with its items grouped by category.
pub fn display_package(pkg: &Package) {
    println!();
    println!("=== {} ({}) ===", pkg.title, pkg.description);
    display_categories(&pkg.categories, |_| "");
    println!();
}

/// Display the master menu, marking items already in the custom selection.
pub fn display_master_menu(menu: &[Category], custom: &CustomSelection, rules: &PricingRules) {
    println!();
    println!("=== Customize Your Menu ===");
    println!(
        "Minimum price to proceed: {} / pax",
        format_currency(rules.min_custom_price)
    );
    display_categories(menu, |name| if custom.contains(name) { "[x] " } else { "[ ] " });
    println!();
}

/// Display the running total of a custom menu.
pub fn display_custom_summary(custom: &CustomSelection) {
    println!(
        "Running total (per pax): {} items, {}",
        custom.len(),
        format_currency(custom.total())
    );
}

/// Display the selected menu and the current price breakdown.
pub fn display_quote(selection: &FinalSelection, quote: &Quote, pax: u32, rules: &PricingRules) {
    println!();
    println!("--- Menu Summary ---");
    if let (Some(title), Some(price)) = (selection.title(), selection.per_pax_price()) {
        println!("Selected menu: {}", title);
        println!("Price per pax: {}", format_currency(price));
        println!("Items included: {}", selection.items().len());
    } else {
        println!("No menu selected.");
    }

    println!();
    println!("--- Price ---");
    if quote.duration_hours > 0.0 {
        println!(
            "Total duration: {} hrs (first {}h free)",
            format_hours(quote.duration_hours),
            rules.overtime_limit_hours
        );
    } else {
        println!("Total duration: N/A");
    }
    println!(
        "Menu total ({} pax): {}",
        pax,
        format_currency(quote.menu_subtotal)
    );
    if quote.has_overtime() {
        println!(
            "Extratime charge ({}h): +{}",
            format_hours(quote.overtime_hours),
            format_currency(quote.overtime_charge)
        );
    }
    println!(
        "Required booking deposit ({}%): {}",
        rules.deposit_percent(),
        format_currency(quote.deposit_amount)
    );
    println!("FINAL ESTIMATED PRICE: {}", format_currency(quote.final_total));
    println!();
}

/// Display a date with its weekday, e.g. for confirming the event date.
pub fn display_event_day(date: &str) {
    if let Ok(parsed) = chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        println!("  -> {}", format_event_date(parsed).1);
    }
}

/// Display the generated request and the link that sends it.
pub fn display_request(message: &str, link: &str, total: f64) {
    println!();
    println!("=== Request Generated ===");
    println!();
    println!("{}", message);
    println!();
    println!("Estimated total: {}", format_currency(total));
    println!();
    println!("Open this link to send the request via WhatsApp:");
    println!("{}", link);
    println!();
    println!("Your booking is only submitted once the WhatsApp message is sent.");
    println!();
}
