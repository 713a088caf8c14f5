//! Error kinds raised while checking or preparing a drink.

use crate::core::{Drink, Ingredient};
use std::path::PathBuf;
use thiserror::Error;

/// A single missing ingredient, with how much was needed and found.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Shortage {
    #[error("not enough water ({available}/{required})")]
    InsufficientWater { required: u32, available: u32 },

    #[error("not enough coffee ({available}/{required})")]
    InsufficientCoffee { required: u32, available: u32 },

    #[error("not enough milk ({available}/{required})")]
    InsufficientMilk { required: u32, available: u32 },
}

impl Shortage {
    pub fn new(ingredient: Ingredient, required: u32, available: u32) -> Self {
        match ingredient {
            Ingredient::Water => Self::InsufficientWater {
                required,
                available,
            },
            Ingredient::Coffee => Self::InsufficientCoffee {
                required,
                available,
            },
            Ingredient::Milk => Self::InsufficientMilk {
                required,
                available,
            },
        }
    }

    pub fn ingredient(&self) -> Ingredient {
        match self {
            Self::InsufficientWater { .. } => Ingredient::Water,
            Self::InsufficientCoffee { .. } => Ingredient::Coffee,
            Self::InsufficientMilk { .. } => Ingredient::Milk,
        }
    }
}

/// Errors that stop a drink from being prepared.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BrewError {
    #[error("cannot prepare {drink}: {}", render(.shortages))]
    CannotPrepare {
        drink: Drink,
        shortages: Vec<Shortage>,
    },

    #[error("unsupported drink \"{name}\"")]
    UnsupportedDrink { name: String },

    #[error("please fill the water tank")]
    TankEmpty,
}

impl BrewError {
    /// True if the machine would need refilling before it could succeed.
    pub fn needs_refill(&self) -> bool {
        matches!(self, Self::CannotPrepare { .. } | Self::TankEmpty)
    }
}

fn render(shortages: &[Shortage]) -> String {
    shortages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors loading the demo configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cannot_prepare_lists_every_shortage() {
        let err = BrewError::CannotPrepare {
            drink: Drink::Cappuccino,
            shortages: vec![
                Shortage::new(Ingredient::Water, 50, 0),
                Shortage::new(Ingredient::Milk, 20, 5),
            ],
        };
        assert_eq!(
            err.to_string(),
            "cannot prepare cappuccino: not enough water (0/50), not enough milk (5/20)"
        );
    }

    #[test]
    fn unsupported_drink_names_the_drink() {
        let err = BrewError::UnsupportedDrink {
            name: "tea".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported drink \"tea\"");
        assert!(!err.needs_refill());
    }

    #[test]
    fn tank_empty_needs_refill() {
        assert_eq!(BrewError::TankEmpty.to_string(), "please fill the water tank");
        assert!(BrewError::TankEmpty.needs_refill());
    }

    #[test]
    fn shortage_knows_its_ingredient() {
        assert_eq!(
            Shortage::new(Ingredient::Coffee, 10, 3).ingredient(),
            Ingredient::Coffee
        );
    }
}
