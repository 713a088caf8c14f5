//! Supported drinks and their fixed recipes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BrewError;

/// A drink the machine knows how to prepare.
///
/// Names match exactly: `"coffee"` or `"café"` for coffee, `"cappuccino"`
/// for cappuccino. Any other name, including other casings or padded
/// names, yields [`BrewError::UnsupportedDrink`].
///
/// # Example
///
/// ```rust
/// use barista::core::Drink;
///
/// assert_eq!("café".parse::<Drink>().unwrap(), Drink::Coffee);
/// assert!("Coffee".parse::<Drink>().is_err());
/// assert_eq!("cappuccino".parse::<Drink>().unwrap(), Drink::Cappuccino);
/// assert!("tea".parse::<Drink>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drink {
    Coffee,
    Cappuccino,
}

/// Resources one serving consumes, plus whether milk gets steamed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Recipe {
    pub water: u32,
    pub coffee: u32,
    pub milk: u32,
}

impl Recipe {
    pub fn needs_milk(&self) -> bool {
        self.milk > 0
    }
}

/// Water drawn through the grounds by a single extraction.
pub const WATER_PER_SHOT: u32 = 50;
/// Coffee ground for a single extraction.
pub const COFFEE_PER_SHOT: u32 = 10;
/// Milk steamed for a single cappuccino.
pub const MILK_PER_FOAM: u32 = 20;

impl Drink {
    pub const ALL: [Drink; 2] = [Drink::Coffee, Drink::Cappuccino];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Cappuccino => "cappuccino",
        }
    }

    pub fn recipe(&self) -> Recipe {
        match self {
            Self::Coffee => Recipe {
                water: WATER_PER_SHOT,
                coffee: COFFEE_PER_SHOT,
                milk: 0,
            },
            Self::Cappuccino => Recipe {
                water: WATER_PER_SHOT,
                coffee: COFFEE_PER_SHOT,
                milk: MILK_PER_FOAM,
            },
        }
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Drink {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coffee" | "café" => Ok(Self::Coffee),
            "cappuccino" => Ok(Self::Cappuccino),
            _ => Err(BrewError::UnsupportedDrink {
                name: s.to_string(),
            }),
        }
    }
}
