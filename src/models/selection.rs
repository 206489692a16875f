use serde::{Deserialize, Serialize};

use crate::models::{MenuItem, PackageId};

/// User-assembled menu: unique item names, kept in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomSelection {
    items: Vec<MenuItem>,
}

impl CustomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the item if absent, remove it if already selected.
    ///
    /// Returns true when the item is selected after the call.
    pub fn toggle(&mut self, item: MenuItem) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i.name == item.name) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(item);
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    /// Per-pax price of the selection.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.price).sum()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The confirmed menu a booking is quoted against.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FinalSelection {
    #[default]
    None,
    Package {
        id: PackageId,
        title: String,
        per_pax_price: f64,
        items: Vec<MenuItem>,
    },
    Custom {
        per_pax_price: f64,
        items: Vec<MenuItem>,
    },
}

impl FinalSelection {
    pub const CUSTOM_TITLE: &'static str = "Custom Menu";

    pub fn is_none(&self) -> bool {
        matches!(self, FinalSelection::None)
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            FinalSelection::None => None,
            FinalSelection::Package { title, .. } => Some(title),
            FinalSelection::Custom { .. } => Some(Self::CUSTOM_TITLE),
        }
    }

    pub fn per_pax_price(&self) -> Option<f64> {
        match self {
            FinalSelection::None => None,
            FinalSelection::Package { per_pax_price, .. }
            | FinalSelection::Custom { per_pax_price, .. } => Some(*per_pax_price),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        match self {
            FinalSelection::None => &[],
            FinalSelection::Package { items, .. } | FinalSelection::Custom { items, .. } => items,
        }
    }
}
