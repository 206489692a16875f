use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

/// A single dish or drink with its per-pax price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Display grouping of menu items. Not used for pricing.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: &'static str,
    pub items: Vec<MenuItem>,
}

impl Category {
    pub fn new(name: &'static str, items: &[(&str, f64)]) -> Self {
        Self {
            name,
            items: items
                .iter()
                .map(|(item, price)| MenuItem::new(*item, *price))
                .collect(),
        }
    }
}

/// Identifier of one of the four fixed packages, named after its per-pax price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PackageId {
    Aed65,
    Aed75,
    Aed85,
    Aed100,
}

impl PackageId {
    pub const ALL: [PackageId; 4] = [
        PackageId::Aed65,
        PackageId::Aed75,
        PackageId::Aed85,
        PackageId::Aed100,
    ];

    pub fn value(self) -> u32 {
        match self {
            PackageId::Aed65 => 65,
            PackageId::Aed75 => 75,
            PackageId::Aed85 => 85,
            PackageId::Aed100 => 100,
        }
    }
}

impl TryFrom<u32> for PackageId {
    type Error = BookingError;

    fn try_from(value: u32) -> Result<Self> {
        PackageId::ALL
            .into_iter()
            .find(|id| id.value() == value)
            .ok_or(BookingError::UnknownPackage(value))
    }
}

impl From<PackageId> for u32 {
    fn from(id: PackageId) -> Self {
        id.value()
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A fixed-price, fixed-item menu offering.
#[derive(Debug, Clone)]
pub struct Package {
    pub id: PackageId,
    pub title: String,
    pub description: &'static str,
    pub per_pax_price: f64,
    pub categories: Vec<Category>,
}

impl Package {
    /// All items flattened in category order.
    pub fn items(&self) -> Vec<MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().cloned())
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}
