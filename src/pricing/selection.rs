use tracing::{debug, warn};

use crate::catalog;
use crate::error::{BookingError, Result};
use crate::models::{CustomSelection, FinalSelection, PackageId};
use crate::pricing::rules::PricingRules;

/// What the user is confirming when leaving the menu steps.
#[derive(Debug, Clone, Copy)]
pub enum MenuChoice<'a> {
    Package(PackageId),
    Custom(&'a CustomSelection),
}

/// Normalize a package or custom choice into the selection a quote is built on.
///
/// Packages are always valid. Custom menus need at least one item and a per-pax
/// total of at least the configured minimum (inclusive).
pub fn build_selection(choice: MenuChoice<'_>, rules: &PricingRules) -> Result<FinalSelection> {
    match choice {
        MenuChoice::Package(id) => {
            let pkg = catalog::package(id);
            debug!(package = %id, items = pkg.item_count(), "package selected");
            Ok(FinalSelection::Package {
                id,
                title: pkg.title.clone(),
                per_pax_price: pkg.per_pax_price,
                items: pkg.items(),
            })
        }
        MenuChoice::Custom(custom) => {
            if custom.is_empty() {
                warn!("custom menu rejected: no items selected");
                return Err(BookingError::EmptySelection);
            }

            // Minimum is inclusive
            let total = custom.total();
            if total < rules.min_custom_price {
                warn!(total, minimum = rules.min_custom_price, "custom menu below minimum");
                return Err(BookingError::BelowMinimum {
                    total,
                    minimum: rules.min_custom_price,
                });
            }

            debug!(total, items = custom.len(), "custom menu selected");
            Ok(FinalSelection::Custom {
                per_pax_price: total,
                items: custom.items().to_vec(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    #[test]
    fn test_package_selection_carries_all_items() {
        let sel = build_selection(MenuChoice::Package(PackageId::Aed75), &PricingRules::default())
            .unwrap();
        assert_eq!(sel.title(), Some("AED 75 Menu"));
        assert_eq!(sel.per_pax_price(), Some(75.0));
        assert_eq!(sel.items().len(), 21);
        assert_eq!(sel.items()[0].name, "Honey Grape");
    }

    #[test]
    fn test_empty_custom_rejected() {
        let custom = CustomSelection::new();
        let err = build_selection(MenuChoice::Custom(&custom), &PricingRules::default());
        assert!(matches!(err, Err(BookingError::EmptySelection)));
    }

    #[test]
    fn test_custom_minimum_is_configurable() {
        let mut custom = CustomSelection::new();
        custom.toggle(MenuItem::new("Biryani", 7.0));
        let rules = PricingRules {
            min_custom_price: 5.0,
            ..Default::default()
        };
        let sel = build_selection(MenuChoice::Custom(&custom), &rules).unwrap();
        assert_eq!(sel.title(), Some("Custom Menu"));
        assert_eq!(sel.per_pax_price(), Some(7.0));
    }
}
