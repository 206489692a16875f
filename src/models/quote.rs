use serde::Serialize;

/// Price breakdown derived from a selection, guest count and event duration.
///
/// Never stored; recomputed whenever one of its inputs changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Quote {
    pub duration_hours: f64,
    pub menu_subtotal: f64,
    pub overtime_hours: f64,
    pub overtime_charge: f64,
    pub final_total: f64,
    pub deposit_amount: f64,
}

impl Quote {
    pub fn has_overtime(&self) -> bool {
        self.overtime_charge > 0.0
    }
}
