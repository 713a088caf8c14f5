//! Resource levels held by the machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three consumable resources.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Water,
    Coffee,
    Milk,
}

impl Ingredient {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Coffee => "coffee",
            Self::Milk => "milk",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the water, coffee and milk levels.
///
/// Levels are unsigned. Adding saturates at `u32::MAX` and drawing
/// saturates at zero; both report whether they had to clamp.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Levels {
    pub water: u32,
    pub coffee: u32,
    pub milk: u32,
}

impl Levels {
    pub fn new(water: u32, coffee: u32, milk: u32) -> Self {
        Self {
            water,
            coffee,
            milk,
        }
    }

    pub fn get(&self, ingredient: Ingredient) -> u32 {
        match ingredient {
            Ingredient::Water => self.water,
            Ingredient::Coffee => self.coffee,
            Ingredient::Milk => self.milk,
        }
    }

    fn slot(&mut self, ingredient: Ingredient) -> &mut u32 {
        match ingredient {
            Ingredient::Water => &mut self.water,
            Ingredient::Coffee => &mut self.coffee,
            Ingredient::Milk => &mut self.milk,
        }
    }

    /// Add `amount`. Returns `false` if the level clamped at the maximum.
    pub fn add(&mut self, ingredient: Ingredient, amount: u32) -> bool {
        let slot = self.slot(ingredient);
        match slot.checked_add(amount) {
            Some(total) => {
                *slot = total;
                true
            }
            None => {
                *slot = u32::MAX;
                false
            }
        }
    }

    /// Draw `amount`. Returns `false` if less than `amount` was available.
    pub fn draw(&mut self, ingredient: Ingredient, amount: u32) -> bool {
        let slot = self.slot(ingredient);
        match slot.checked_sub(amount) {
            Some(rest) => {
                *slot = rest;
                true
            }
            None => {
                *slot = 0;
                false
            }
        }
    }
}

impl fmt::Display for Levels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "water={} coffee={} milk={}",
            self.water, self.coffee, self.milk
        )
    }
}
