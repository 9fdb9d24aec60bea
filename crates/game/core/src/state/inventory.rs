//! Inventory occupancy and item quantities.

use std::collections::BTreeMap;

/// Inventory snapshot: total capacity plus a quantity per item code.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub capacity: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: BTreeMap<String, u32>,
}

impl Inventory {
    /// Fill ratio at which the inventory counts as nearly full.
    pub const NEAR_FULL_RATIO: f64 = 0.9;

    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            items: BTreeMap::new(),
        }
    }

    pub fn with_item(mut self, code: impl Into<String>, quantity: u32) -> Self {
        self.add(code, quantity);
        self
    }

    pub fn add(&mut self, code: impl Into<String>, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let held = self.items.entry(code.into()).or_insert(0);
        *held = held.saturating_add(quantity);
    }

    pub fn quantity(&self, code: &str) -> u32 {
        self.items.get(code).copied().unwrap_or(0)
    }

    /// Total number of units held.
    pub fn used(&self) -> u32 {
        self.items.values().fold(0, |total, quantity| total.saturating_add(*quantity))
    }

    pub fn free(&self) -> u32 {
        self.capacity.saturating_sub(self.used())
    }

    /// Occupancy in `[0, 1]`. An inventory without capacity reads as full.
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 1.0;
        }
        (self.used() as f64 / self.capacity as f64).clamp(0.0, 1.0)
    }

    pub fn is_near_full(&self) -> bool {
        self.fill_ratio() >= Self::NEAR_FULL_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_tracks_quantities() {
        let inventory = Inventory::new(100)
            .with_item("copper_ore", 30)
            .with_item("copper_ore", 10)
            .with_item("feather", 5);

        assert_eq!(inventory.quantity("copper_ore"), 40);
        assert_eq!(inventory.used(), 45);
        assert_eq!(inventory.free(), 55);
        assert!(!inventory.is_near_full());
    }

    #[test]
    fn quantities_saturate_instead_of_overflowing() {
        let inventory = Inventory::new(10)
            .with_item("copper_ore", u32::MAX)
            .with_item("copper_ore", 5)
            .with_item("feather", 5);

        assert_eq!(inventory.quantity("copper_ore"), u32::MAX);
        assert_eq!(inventory.used(), u32::MAX);
        assert_eq!(inventory.free(), 0);
    }

    #[test]
    fn zero_capacity_is_full() {
        assert_eq!(Inventory::new(0).fill_ratio(), 1.0);
    }
}
