//! Static menu data: the master item list and the fixed packages.

mod master;
mod packages;

use strsim::jaro_winkler;

use crate::models::{Category, MenuItem, Package, PackageId};

pub use master::MASTER_MENU;
pub use packages::PACKAGES;

/// Minimum similarity for a fuzzy item-name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

pub fn master_menu() -> &'static [Category] {
    &MASTER_MENU
}

pub fn packages() -> &'static [Package] {
    &PACKAGES
}

pub fn package(id: PackageId) -> &'static Package {
    // PACKAGES is ordered like PackageId::ALL.
    &PACKAGES[id as usize]
}

/// Every master menu item in category order.
pub fn all_items() -> impl Iterator<Item = &'static MenuItem> {
    MASTER_MENU.iter().flat_map(|c| c.items.iter())
}

/// Find a master menu item by name (case-insensitive).
pub fn find_item(name: &str) -> Option<&'static MenuItem> {
    let key = name.trim().to_lowercase();
    all_items().find(|item| item.key() == key)
}

/// Closest master menu items to a mistyped name, best match first.
pub fn suggest_items(name: &str, limit: usize) -> Vec<&'static MenuItem> {
    let needle = name.trim().to_lowercase();
    let mut candidates: Vec<(&MenuItem, f64)> = all_items()
        .map(|item| (item, jaro_winkler(&item.key(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().take(limit).map(|(item, _)| item).collect()
}
